//! Ranking - Descending fractional ranks over closeness scores.

/// Ranks scores in descending order, 1 = highest.
///
/// Tied scores share the mean of the ordinal positions they occupy, so two
/// alternatives tied for first both get `1.5` and the next one gets `3.0`.
/// Ties are exact `f64` equality.
///
/// # Edge Cases
/// - Empty input: Returns empty Vec
/// - All equal: Every rank is `(n + 1) / 2`
pub fn fractional_ranks(scores: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut ranks = vec![0.0; scores.len()];
    let mut start = 0;

    while start < order.len() {
        let leader = scores[order[start]];
        let mut end = start + 1;
        while end < order.len() && scores[order[end]] == leader {
            end += 1;
        }

        // Ordinal positions start+1 ..= end
        let rank = (start + 1 + end) as f64 / 2.0;
        for &index in &order[start..end] {
            ranks[index] = rank;
        }

        start = end;
    }

    ranks
}

/// Finds the index of the single highest score.
/// Returns None if empty or if there's a tie for best.
pub fn best_alternative(scores: &[f64]) -> Option<usize> {
    let max = scores.iter().copied().reduce(f64::max)?;
    let mut leaders = scores
        .iter()
        .enumerate()
        .filter(|(_, &score)| score == max)
        .map(|(index, _)| index);

    let first = leaders.next()?;
    if leaders.next().is_some() {
        None
    } else {
        Some(first)
    }
}
