//! Competition ranking over rounded scores.

use crate::domain::foundation::Score;

/// Assigns standard competition ranks ("1224") to scores.
///
/// Rank 1 is the highest score. Equal scores share the lowest rank of their
/// group and the next distinct score skips past the group. The returned
/// vector is parallel to `scores`.
pub fn competition_ranks(scores: &[Score]) -> Vec<u32> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].cmp_desc(&scores[b]));

    let mut ranks = vec![0u32; scores.len()];
    let mut previous: Option<(Score, u32)> = None;

    for (position, &index) in order.iter().enumerate() {
        let score = scores[index];
        let rank = match previous {
            Some((prev_score, prev_rank)) if prev_score == score => prev_rank,
            _ => position as u32 + 1,
        };
        ranks[index] = rank;
        previous = Some((score, rank));
    }

    ranks
}
