use crate::core::types::GAP;
use crate::matching::engine::Alignment;

/// Safely convert usize to f64 for percentage calculations
///
/// Residue counts are bounded by the sequence length limit, well within the
/// exact integer range of an f64 mantissa.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Percent identity of an alignment.
///
/// Gap characters are stripped from both aligned strings independently; the
/// two ungapped strings are then compared position by position and the number
/// of equal pairs is divided by the longer ungapped length.
///
/// Returns 0.0 when both ungapped strings are empty (no alignment found).
#[must_use]
pub fn percent_identity(alignment: &Alignment) -> f64 {
    ungapped_identity(&alignment.aligned_a, &alignment.aligned_b)
}

/// Percent identity of two gapped strings (see [`percent_identity`])
#[must_use]
pub fn ungapped_identity(aligned_a: &str, aligned_b: &str) -> f64 {
    let ungapped_a: Vec<char> = aligned_a.chars().filter(|&c| c != GAP).collect();
    let ungapped_b: Vec<char> = aligned_b.chars().filter(|&c| c != GAP).collect();

    let total = ungapped_a.len().max(ungapped_b.len());
    if total == 0 {
        return 0.0;
    }

    let matches = ungapped_a
        .iter()
        .zip(&ungapped_b)
        .filter(|(a, b)| a == b)
        .count();

    count_to_f64(matches) / count_to_f64(total) * 100.0
}
