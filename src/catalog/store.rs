use serde::Serialize;

use crate::catalog::schemes::{NumberingScheme, RegionDefinition, RegionEnd, SchemeError, SchemeKind};

/// Serializable view of one scheme, used for `schemes show` and JSON export
#[derive(Debug, Clone, Serialize)]
pub struct SchemeSummary {
    pub scheme: SchemeKind,
    pub reference_length: usize,
    pub regions: Vec<RegionSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionSummary {
    pub name: &'static str,
    pub kind: crate::core::types::RegionKind,
    pub start: usize,
    /// `None` when the region runs to the end of the sequence
    pub end: Option<usize>,
}

impl From<&RegionDefinition> for RegionSummary {
    fn from(region: &RegionDefinition) -> Self {
        Self {
            name: region.name,
            kind: region.kind(),
            start: region.start,
            end: match region.end {
                RegionEnd::Fixed(end) => Some(end),
                RegionEnd::SequenceEnd => None,
            },
        }
    }
}

/// Catalog of the built-in numbering schemes
#[derive(Debug, Clone)]
pub struct SchemeRegistry {
    pub schemes: Vec<NumberingScheme>,
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SchemeRegistry {
    /// Registry holding every scheme compiled into the crate
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            schemes: SchemeKind::ALL.iter().map(|k| k.scheme()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Look up a scheme by its selector string (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `SchemeError::UnknownScheme` if the selector is not one of the
    /// supported schemes.
    pub fn get(&self, selector: &str) -> Result<NumberingScheme, SchemeError> {
        let kind: SchemeKind = selector.parse()?;
        Ok(self.get_kind(kind))
    }

    #[must_use]
    pub fn get_kind(&self, kind: SchemeKind) -> NumberingScheme {
        self.schemes
            .iter()
            .copied()
            .find(|s| s.kind == kind)
            .unwrap_or_else(|| kind.scheme())
    }

    #[must_use]
    pub fn summary(&self, kind: SchemeKind) -> SchemeSummary {
        let scheme = self.get_kind(kind);
        SchemeSummary {
            scheme: kind,
            reference_length: scheme.reference_length(),
            regions: scheme.regions.iter().map(RegionSummary::from).collect(),
        }
    }

    /// Export every scheme's boundary table as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if JSON encoding fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let summaries: Vec<SchemeSummary> =
            self.schemes.iter().map(|s| self.summary(s.kind)).collect();
        serde_json::to_string_pretty(&summaries)
    }
}
