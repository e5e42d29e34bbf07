//! Plain-text layout of alignments.
//!
//! Produces the classic three-line block: sequence A, a match line (`|` for a
//! match, `.` for a mismatch, blank for a gap), then sequence B. Each row is
//! prefixed by the sequence name and the 1-based number of its first residue,
//! and followed by the number of its last residue.

use crate::core::types::GAP;
use crate::matching::engine::AlignmentReport;

/// Longest name shown in the left margin
const MAX_NAME_WIDTH: usize = 16;

/// Render an alignment as wrapped three-line blocks.
///
/// A `width` of zero disables wrapping.
#[must_use]
pub fn render_alignment(report: &AlignmentReport, width: usize) -> String {
    if report.columns.is_empty() {
        return String::new();
    }

    let name_a = clip_name(&report.name_a);
    let name_b = clip_name(&report.name_b);
    let name_width = name_a.chars().count().max(name_b.chars().count());
    let width = if width == 0 { report.columns.len() } else { width };

    let mut pos_a = report.alignment.start_a;
    let mut pos_b = report.alignment.start_b;
    let mut blocks = Vec::new();

    for chunk in report.columns.chunks(width) {
        let row_a: String = chunk.iter().map(|c| c.residue_a).collect();
        let row_b: String = chunk.iter().map(|c| c.residue_b).collect();
        let marks: String = chunk.iter().map(|c| c.kind.symbol()).collect();

        let (first_a, last_a) = advance(&mut pos_a, &row_a);
        let (first_b, last_b) = advance(&mut pos_b, &row_b);

        blocks.push(format!(
            "{name_a:<name_width$} {first_a:>6} {row_a} {last_a}\n\
             {blank:<name_width$} {blank:>6} {marks}\n\
             {name_b:<name_width$} {first_b:>6} {row_b} {last_b}",
            blank = "",
        ));
    }

    blocks.join("\n\n")
}

/// Move a residue cursor over one row, returning the 1-based numbers of the
/// first and last residues in it.
fn advance(position: &mut usize, row: &str) -> (usize, usize) {
    let residues = row.chars().filter(|&c| c != GAP).count();
    let first = *position + 1;
    *position += residues;
    if residues == 0 {
        (*position, *position)
    } else {
        (first, *position)
    }
}

fn clip_name(name: &str) -> String {
    name.chars().take(MAX_NAME_WIDTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::SequenceValidator;
    use crate::matching::engine::AlignmentEngine;

    fn report(a: &str, b: &str) -> AlignmentReport {
        let validator = SequenceValidator::new();
        let a = validator.validate("a", a).unwrap();
        let b = validator.validate("b", b).unwrap();
        let alignment = AlignmentEngine::new().align(&a, &b).unwrap();
        AlignmentReport::new(&a, &b, alignment)
    }

    #[test]
    fn test_single_block() {
        let text = render_alignment(&report("ACDEFG", "ACXEFG"), 60);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "a      1 ACDEFG 6");
        assert_eq!(lines[1], "         ||.|||");
        assert_eq!(lines[2], "b      1 ACXEFG 6");
    }

    #[test]
    fn test_wrapped_blocks_track_positions() {
        let text = render_alignment(&report("ACDEFG", "ACDEFG"), 4);
        let blocks: Vec<&str> = text.split("\n\n").collect();

        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("a      1 ACDE 4"));
        assert!(blocks[1].starts_with("a      5 FG 6"));
    }

    #[test]
    fn test_gap_rendered_as_blank_mark() {
        let text = render_alignment(&report("ACGT", "AGT"), 0);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "a      1 ACGT 4");
        assert_eq!(lines[1], "         | ||");
        assert_eq!(lines[2], "b      1 A-GT 3");
    }

    #[test]
    fn test_empty_alignment_renders_nothing() {
        assert!(render_alignment(&report("AAAA", "CCCC"), 60).is_empty());
    }

    #[test]
    fn test_advance_over_gap_only_row() {
        let mut position = 3;
        assert_eq!(advance(&mut position, "---"), (3, 3));
        assert_eq!(advance(&mut position, "A-C"), (4, 5));
    }
}
