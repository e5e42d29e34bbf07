use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::schemes::{NumberingScheme, RegionDefinition, RegionEnd, SchemeKind};
use crate::core::sequence::Sequence;
use crate::core::types::RegionKind;

/// A labeled half-open span `[start, end)` of an annotated sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    /// Region name from the scheme, e.g. `CDR2`
    pub name: String,
    pub kind: RegionKind,
}

impl Span {
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Why a region was left out of an annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DegenerateReason {
    /// The sequence ends before the region starts
    Collapsed {
        declared_start: usize,
        sequence_length: usize,
    },
    /// Another region earlier in the scheme declares the same start
    DuplicateStart { start: usize, kept: String },
    /// Fully covered by the preceding region
    Overlapped { start: usize, end: usize },
}

/// Non-fatal condition reported when a scheme region is omitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegenerateRegionWarning {
    pub region: String,
    #[serde(flatten)]
    pub reason: DegenerateReason,
}

impl std::fmt::Display for DegenerateRegionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            DegenerateReason::Collapsed {
                declared_start,
                sequence_length,
            } => write!(
                f,
                "{} omitted: starts at {declared_start} but sequence has {sequence_length} residues",
                self.region
            ),
            DegenerateReason::DuplicateStart { start, kept } => write!(
                f,
                "{} omitted: start {start} already used by {kept}",
                self.region
            ),
            DegenerateReason::Overlapped { start, end } => write!(
                f,
                "{} omitted: [{start}, {end}) lies inside the preceding region",
                self.region
            ),
        }
    }
}

/// A sequence partitioned into labeled spans
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedSequence {
    pub sequence: Sequence,
    pub scheme: SchemeKind,
    pub spans: Vec<Span>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<DegenerateRegionWarning>,
}

impl AnnotatedSequence {
    /// Residues covered by a span
    #[must_use]
    pub fn span_residues(&self, span: &Span) -> String {
        self.sequence
            .residues
            .chars()
            .skip(span.start)
            .take(span.len())
            .collect()
    }
}

/// Maps a scheme's region table onto concrete sequence lengths
#[derive(Debug, Clone)]
pub struct RegionAnnotator<'a> {
    scheme: SchemeKind,
    regions: &'a [RegionDefinition],
}

impl RegionAnnotator<'static> {
    #[must_use]
    pub fn new(scheme: &NumberingScheme) -> Self {
        Self {
            scheme: scheme.kind,
            regions: scheme.regions,
        }
    }
}

impl<'a> RegionAnnotator<'a> {
    /// Annotator over an arbitrary region table, in canonical order
    #[must_use]
    pub fn with_regions(scheme: SchemeKind, regions: &'a [RegionDefinition]) -> Self {
        Self { scheme, regions }
    }

    /// Annotate a sequence, producing spans that cover it exactly
    #[must_use]
    pub fn annotate(&self, sequence: &Sequence) -> AnnotatedSequence {
        let (spans, warnings) = self.spans_for_length(sequence.len());

        for warning in &warnings {
            warn!("{}: {warning}", sequence.name);
        }
        debug!(
            "Annotated '{}' ({} residues) with {}: {} spans",
            sequence.name,
            sequence.len(),
            self.scheme,
            spans.len()
        );

        AnnotatedSequence {
            sequence: sequence.clone(),
            scheme: self.scheme,
            spans,
            warnings,
        }
    }

    /// Compute spans for a sequence of the given length.
    ///
    /// Regions are taken in ascending start order; for equal starts the one
    /// earlier in the table wins. Every end is clamped to `length` and the last
    /// surviving span is extended to `length`. Regions left empty are omitted
    /// and reported. Any gap between spans is given to the span before it.
    #[must_use]
    pub fn spans_for_length(&self, length: usize) -> (Vec<Span>, Vec<DegenerateRegionWarning>) {
        let mut warnings = Vec::new();
        if length == 0 {
            return (Vec::new(), warnings);
        }

        // Stable sort keeps canonical order among equal starts
        let mut ordered: Vec<&RegionDefinition> = self.regions.iter().collect();
        ordered.sort_by_key(|r| r.start);

        let mut spans: Vec<Span> = Vec::with_capacity(ordered.len());
        let mut previous_start: Option<(usize, &str)> = None;

        for region in ordered {
            if let Some((start, kept)) = previous_start {
                if start == region.start {
                    warnings.push(DegenerateRegionWarning {
                        region: region.name.to_string(),
                        reason: DegenerateReason::DuplicateStart {
                            start,
                            kept: kept.to_string(),
                        },
                    });
                    continue;
                }
            }
            previous_start = Some((region.start, region.name));

            if region.start >= length {
                warnings.push(DegenerateRegionWarning {
                    region: region.name.to_string(),
                    reason: DegenerateReason::Collapsed {
                        declared_start: region.start,
                        sequence_length: length,
                    },
                });
                continue;
            }

            let declared_end = match region.end {
                RegionEnd::Fixed(end) => end,
                RegionEnd::SequenceEnd => length,
            };
            let end = declared_end.min(length);

            // Clip against the span already emitted
            let cursor = spans.last().map_or(0, |s| s.end);
            let start = region.start.max(cursor);
            if start >= end {
                warnings.push(DegenerateRegionWarning {
                    region: region.name.to_string(),
                    reason: DegenerateReason::Overlapped {
                        start: region.start,
                        end: declared_end,
                    },
                });
                continue;
            }

            let span_start = match spans.last_mut() {
                // Uncovered residues before this region go to the preceding span
                Some(last) => {
                    last.end = last.end.max(start);
                    start
                }
                // Leading residues go to the first span
                None => 0,
            };
            spans.push(make_span(span_start, end, region.name));
        }

        if let Some(last) = spans.last_mut() {
            last.end = length;
        }

        (spans, warnings)
    }
}

fn make_span(start: usize, end: usize, name: &str) -> Span {
    Span {
        start,
        end,
        name: name.to_string(),
        kind: RegionKind::from_region_name(name),
    }
}
