//! TOPSIS Engine - Closeness scores and ranks from a decision matrix.
//!
//! The pipeline runs in a fixed order:
//! 1. Column-wise Euclidean normalization
//! 2. Weighting
//! 3. Ideal best / ideal worst per criterion
//! 4. Separation from both ideal points
//! 5. Closeness score `d_worst / (d_best + d_worst)`
//! 6. Descending fractional ranking
//!
//! Every stage is a public associated function so it can be inspected or
//! tested on its own. All input validation happens before step 1.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ranking::{best_alternative, fractional_ranks};
use super::{AnalysisError, DecisionMatrix};
use crate::domain::foundation::Impact;

/// Scores and ranks, indexed like the matrix rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisResult {
    /// Closeness to the ideal solution, in `[0, 1]`.
    pub scores: Vec<f64>,
    /// 1 = best. Tied scores share a fractional rank.
    pub ranks: Vec<f64>,
}

impl TopsisResult {
    /// Returns the number of ranked alternatives.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns true if nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Index of the unique best alternative, None on a tie for first.
    pub fn best(&self) -> Option<usize> {
        best_alternative(&self.scores)
    }
}

/// Per-criterion reference points of the weighted matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealPoints {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// Euclidean distance of every alternative to each ideal point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Separations {
    pub to_best: Vec<f64>,
    pub to_worst: Vec<f64>,
}

/// Full pipeline output including every intermediate stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisAnalysis {
    pub normalized: DecisionMatrix,
    pub weighted: DecisionMatrix,
    pub ideal: IdealPoints,
    pub separations: Separations,
    pub result: TopsisResult,
}

/// Stateless TOPSIS computation.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Computes closeness scores and ranks.
    ///
    /// # Errors
    /// Checked in order, before any numeric work:
    /// - `DimensionMismatch`: weights or impacts length differs from column count
    /// - `NonFiniteWeight`: a NaN or infinite weight
    /// - `DegenerateColumn`: a criterion whose values are all zero
    pub fn compute(
        matrix: &DecisionMatrix,
        weights: &[f64],
        impacts: &[Impact],
    ) -> Result<TopsisResult, AnalysisError> {
        Self::analyze(matrix, weights, impacts).map(|analysis| analysis.result)
    }

    /// Computes from raw `+`/`-` impact markers.
    ///
    /// Dimensions are checked first, then every marker, so a wrong-length
    /// impact list reports `DimensionMismatch` even if it also holds an
    /// unknown marker.
    pub fn compute_with_symbols<S: AsRef<str>>(
        matrix: &DecisionMatrix,
        weights: &[f64],
        symbols: &[S],
    ) -> Result<TopsisResult, AnalysisError> {
        Self::check_dimensions(matrix, weights.len(), symbols.len())?;

        let impacts = symbols
            .iter()
            .enumerate()
            .map(|(position, symbol)| {
                let symbol = symbol.as_ref();
                Impact::try_from_symbol(symbol)
                    .map_err(|_| AnalysisError::invalid_impact(position, symbol))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::compute(matrix, weights, &impacts)
    }

    /// Runs the full pipeline and keeps the intermediate stages.
    pub fn analyze(
        matrix: &DecisionMatrix,
        weights: &[f64],
        impacts: &[Impact],
    ) -> Result<TopsisAnalysis, AnalysisError> {
        Self::validate(matrix, weights, impacts)?;

        let normalized = Self::normalize(matrix)?;
        let weighted = Self::apply_weights(&normalized, weights);
        let ideal = Self::ideal_points(&weighted, impacts);
        let separations = Self::separations(&weighted, &ideal);
        let scores = Self::closeness(&separations);
        let ranks = fractional_ranks(&scores);

        debug!(
            alternatives = matrix.row_count(),
            criteria = matrix.column_count(),
            "Computed TOPSIS scores"
        );

        Ok(TopsisAnalysis {
            normalized,
            weighted,
            ideal,
            separations,
            result: TopsisResult { scores, ranks },
        })
    }

    /// Validates weights and impacts against the matrix.
    pub fn validate(
        matrix: &DecisionMatrix,
        weights: &[f64],
        impacts: &[Impact],
    ) -> Result<(), AnalysisError> {
        Self::check_dimensions(matrix, weights.len(), impacts.len())?;

        if let Some(position) = weights.iter().position(|w| !w.is_finite()) {
            return Err(AnalysisError::NonFiniteWeight { position });
        }

        Self::check_degenerate_columns(matrix)
    }

    fn check_dimensions(
        matrix: &DecisionMatrix,
        weight_count: usize,
        impact_count: usize,
    ) -> Result<(), AnalysisError> {
        let columns = matrix.column_count();
        if weight_count != columns {
            return Err(AnalysisError::dimension_mismatch("weights", columns, weight_count));
        }
        if impact_count != columns {
            return Err(AnalysisError::dimension_mismatch("impacts", columns, impact_count));
        }
        Ok(())
    }

    fn check_degenerate_columns(matrix: &DecisionMatrix) -> Result<(), AnalysisError> {
        match (0..matrix.column_count()).find(|&j| matrix.column_norm(j) == 0.0) {
            Some(column) => Err(AnalysisError::DegenerateColumn { column }),
            None => Ok(()),
        }
    }

    /// Divides every value by its column's Euclidean norm.
    ///
    /// Each resulting column has unit norm. The norm is applied in its
    /// scaled form, so columns of very large or very small magnitude
    /// normalize like any other.
    pub fn normalize(matrix: &DecisionMatrix) -> Result<DecisionMatrix, AnalysisError> {
        Self::check_degenerate_columns(matrix)?;

        let norms: Vec<(f64, f64)> = (0..matrix.column_count())
            .map(|j| matrix.scaled_column_norm(j))
            .collect();

        Ok(matrix.map_cells(|_, j, value| {
            let (scale, root) = norms[j];
            value / scale / root
        }))
    }

    /// Multiplies each column by its weight.
    ///
    /// Expects `weights.len() == normalized.column_count()`.
    pub fn apply_weights(normalized: &DecisionMatrix, weights: &[f64]) -> DecisionMatrix {
        normalized.map_cells(|_, j, value| value * weights.get(j).copied().unwrap_or(0.0))
    }

    /// Picks the best and worst value of every weighted column by direction.
    ///
    /// Benefit: best = max, worst = min. Cost: best = min, worst = max.
    pub fn ideal_points(weighted: &DecisionMatrix, impacts: &[Impact]) -> IdealPoints {
        let (best, worst) = impacts
            .iter()
            .enumerate()
            .map(|(j, impact)| {
                let max = weighted.column(j).fold(f64::NEG_INFINITY, f64::max);
                let min = weighted.column(j).fold(f64::INFINITY, f64::min);
                match impact {
                    Impact::Benefit => (max, min),
                    Impact::Cost => (min, max),
                }
            })
            .unzip();

        IdealPoints { best, worst }
    }

    /// Euclidean distance of each weighted row to both ideal points.
    pub fn separations(weighted: &DecisionMatrix, ideal: &IdealPoints) -> Separations {
        let distance = |row: &[f64], point: &[f64]| -> f64 {
            row.iter()
                .zip(point)
                .map(|(value, reference)| (value - reference).powi(2))
                .sum::<f64>()
                .sqrt()
        };

        let (to_best, to_worst) = weighted
            .rows()
            .iter()
            .map(|row| (distance(row, &ideal.best), distance(row, &ideal.worst)))
            .unzip();

        Separations { to_best, to_worst }
    }

    /// Relative closeness `d_worst / (d_best + d_worst)`.
    ///
    /// An alternative sitting on both ideal points (zero total distance)
    /// scores 0.
    pub fn closeness(separations: &Separations) -> Vec<f64> {
        separations
            .to_best
            .iter()
            .zip(&separations.to_worst)
            .map(|(&d_best, &d_worst)| {
                let total = d_best + d_worst;
                if total == 0.0 {
                    0.0
                } else {
                    d_worst / total
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn textbook_matrix() -> DecisionMatrix {
        DecisionMatrix::try_new(vec![
            vec![250.0, 16.0, 12.0, 5.0],
            vec![200.0, 16.0, 8.0, 3.0],
            vec![300.0, 32.0, 16.0, 4.0],
            vec![275.0, 32.0, 8.0, 4.0],
            vec![225.0, 16.0, 16.0, 2.0],
        ])
        .unwrap()
    }

    fn textbook_impacts() -> Vec<Impact> {
        vec![Impact::Benefit, Impact::Benefit, Impact::Benefit, Impact::Cost]
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    // Pipeline Tests

    #[test]
    fn textbook_example_scores() {
        let result =
            TopsisEngine::compute(&textbook_matrix(), &[0.25; 4], &textbook_impacts()).unwrap();

        let expected = [
            0.252_447_043_658_510_7,
            0.338_512_771_682_459_5,
            0.661_487_228_317_540_6,
            0.483_007_793_971_592_9,
            0.582_987_135_083_537_8,
        ];
        for (actual, expected) in result.scores.iter().zip(expected) {
            assert_close(*actual, expected);
        }
    }

    #[test]
    fn textbook_example_ranks() {
        let result =
            TopsisEngine::compute(&textbook_matrix(), &[0.25; 4], &textbook_impacts()).unwrap();

        assert_eq!(result.ranks, vec![5.0, 4.0, 1.0, 3.0, 2.0]);
        assert_eq!(result.best(), Some(2));
    }

    #[test]
    fn textbook_example_score_total() {
        let result =
            TopsisEngine::compute(&textbook_matrix(), &[0.25; 4], &textbook_impacts()).unwrap();
        let total: f64 = result.scores.iter().sum();
        assert!((total - 2.318_441_972_713_641).abs() < 1e-9);
    }

    #[test]
    fn unnormalized_weights_give_same_ranks_as_normalized() {
        let quarter =
            TopsisEngine::compute(&textbook_matrix(), &[0.25; 4], &textbook_impacts()).unwrap();
        let ones = TopsisEngine::compute(&textbook_matrix(), &[1.0; 4], &textbook_impacts()).unwrap();

        assert_eq!(quarter.ranks, ones.ranks);
        for (a, b) in quarter.scores.iter().zip(&ones.scores) {
            assert_close(*a, *b);
        }
    }

    #[test]
    fn compute_with_symbols_matches_typed_impacts() {
        let typed =
            TopsisEngine::compute(&textbook_matrix(), &[0.25; 4], &textbook_impacts()).unwrap();
        let raw =
            TopsisEngine::compute_with_symbols(&textbook_matrix(), &[0.25; 4], &["+", "+", "+", "-"])
                .unwrap();
        assert_eq!(typed, raw);
    }

    #[test]
    fn single_alternative_scores_zero() {
        // One row is both the ideal best and the ideal worst.
        let matrix = DecisionMatrix::try_new(vec![vec![3.0, 7.0]]).unwrap();
        let result =
            TopsisEngine::compute(&matrix, &[1.0, 1.0], &[Impact::Benefit, Impact::Cost]).unwrap();
        assert_eq!(result.scores, vec![0.0]);
        assert_eq!(result.ranks, vec![1.0]);
    }

    #[test]
    fn identical_rows_score_zero_and_tie() {
        let matrix = DecisionMatrix::try_new(vec![vec![2.0, 5.0]; 3]).unwrap();
        let result =
            TopsisEngine::compute(&matrix, &[1.0, 2.0], &[Impact::Benefit, Impact::Benefit])
                .unwrap();
        assert_eq!(result.scores, vec![0.0; 3]);
        assert_eq!(result.ranks, vec![2.0; 3]);
        assert_eq!(result.best(), None);
    }

    #[test]
    fn zero_weight_nullifies_criterion() {
        let matrix =
            DecisionMatrix::try_new(vec![vec![1.0, 100.0], vec![2.0, 1.0], vec![3.0, 50.0]])
                .unwrap();
        let impacts = [Impact::Benefit, Impact::Benefit];

        let with_zero = TopsisEngine::compute(&matrix, &[1.0, 0.0], &impacts).unwrap();
        let first_only = TopsisEngine::compute(
            &DecisionMatrix::try_new(vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap(),
            &[1.0],
            &[Impact::Benefit],
        )
        .unwrap();

        assert_eq!(with_zero.ranks, first_only.ranks);
        for (a, b) in with_zero.scores.iter().zip(&first_only.scores) {
            assert_close(*a, *b);
        }
    }

    #[test]
    fn cost_criterion_prefers_lower_values() {
        let matrix = DecisionMatrix::try_new(vec![vec![10.0], vec![20.0], vec![30.0]]).unwrap();
        let result = TopsisEngine::compute(&matrix, &[1.0], &[Impact::Cost]).unwrap();
        assert_eq!(result.ranks, vec![1.0, 2.0, 3.0]);
        assert_close(result.scores[0], 1.0);
        assert_close(result.scores[2], 0.0);
    }

    #[test]
    fn symmetric_alternatives_tie() {
        let matrix =
            DecisionMatrix::try_new(vec![vec![1.0, 2.0], vec![2.0, 1.0], vec![1.5, 1.5]]).unwrap();
        let result =
            TopsisEngine::compute(&matrix, &[1.0, 1.0], &[Impact::Benefit, Impact::Benefit])
                .unwrap();
        assert_eq!(result.scores[0], result.scores[1]);
        assert_eq!(result.ranks[0], result.ranks[1]);
    }

    #[test]
    fn compute_is_deterministic() {
        let first =
            TopsisEngine::compute(&textbook_matrix(), &[0.1, 0.4, 0.3, 0.2], &textbook_impacts())
                .unwrap();
        let second =
            TopsisEngine::compute(&textbook_matrix(), &[0.1, 0.4, 0.3, 0.2], &textbook_impacts())
                .unwrap();
        let bits = |r: &TopsisResult| r.scores.iter().map(|s| s.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first), bits(&second));
        assert_eq!(first.ranks, second.ranks);
    }

    // Stage Tests

    #[test]
    fn normalize_produces_unit_columns() {
        let normalized = TopsisEngine::normalize(&textbook_matrix()).unwrap();
        for j in 0..normalized.column_count() {
            assert_close(normalized.column_norm(j), 1.0);
        }
    }

    #[test]
    fn huge_column_ranks_like_rescaled_column() {
        let huge = DecisionMatrix::try_new(vec![
            vec![1e200, 1.0],
            vec![3e200, 2.0],
            vec![2e200, 3.0],
        ])
        .unwrap();
        let plain =
            DecisionMatrix::try_new(vec![vec![1.0, 1.0], vec![3.0, 2.0], vec![2.0, 3.0]]).unwrap();
        let impacts = [Impact::Benefit, Impact::Benefit];

        let analysis = TopsisEngine::analyze(&huge, &[1.0, 1.0], &impacts).unwrap();
        let expected = TopsisEngine::compute(&plain, &[1.0, 1.0], &impacts).unwrap();

        assert_close(analysis.normalized.column_norm(0), 1.0);
        for (actual, expected) in analysis.result.scores.iter().zip(&expected.scores) {
            assert_close(*actual, *expected);
        }
        assert_close(analysis.result.scores[0], 0.0);
        assert_close(analysis.result.scores[1], analysis.result.scores[2]);
    }

    #[test]
    fn tiny_column_is_not_degenerate() {
        let tiny = DecisionMatrix::try_new(vec![vec![1e-200, 1.0], vec![3e-200, 2.0]]).unwrap();
        let plain = DecisionMatrix::try_new(vec![vec![1.0, 1.0], vec![3.0, 2.0]]).unwrap();
        let impacts = [Impact::Benefit, Impact::Cost];

        let result = TopsisEngine::compute(&tiny, &[1.0, 1.0], &impacts).unwrap();
        let expected = TopsisEngine::compute(&plain, &[1.0, 1.0], &impacts).unwrap();

        for (actual, expected) in result.scores.iter().zip(&expected.scores) {
            assert_close(*actual, *expected);
        }
        assert_eq!(result.ranks, expected.ranks);
    }

    #[test]
    fn near_max_values_normalize_to_unit_column() {
        let matrix = DecisionMatrix::try_new(vec![vec![f64::MAX, 1.0], vec![f64::MAX, 2.0]]).unwrap();
        let normalized = TopsisEngine::normalize(&matrix).unwrap();
        assert_close(normalized.value(0, 0).unwrap(), 0.5_f64.sqrt());
        assert_close(normalized.column_norm(0), 1.0);
    }

    #[test]
    fn normalize_handles_negative_values() {
        let matrix = DecisionMatrix::try_new(vec![vec![-3.0], vec![4.0]]).unwrap();
        let normalized = TopsisEngine::normalize(&matrix).unwrap();
        assert_close(normalized.value(0, 0).unwrap(), -0.6);
        assert_close(normalized.value(1, 0).unwrap(), 0.8);
    }

    #[test]
    fn apply_weights_scales_columns() {
        let matrix = DecisionMatrix::try_new(vec![vec![1.0, 1.0], vec![2.0, 3.0]]).unwrap();
        let weighted = TopsisEngine::apply_weights(&matrix, &[2.0, 0.5]);
        assert_eq!(weighted.row(1), Some(&[4.0, 1.5][..]));
    }

    #[test]
    fn ideal_points_follow_impact_direction() {
        let weighted =
            DecisionMatrix::try_new(vec![vec![0.1, 0.9], vec![0.5, 0.2], vec![0.3, 0.4]]).unwrap();
        let ideal = TopsisEngine::ideal_points(&weighted, &[Impact::Benefit, Impact::Cost]);
        assert_eq!(ideal.best, vec![0.5, 0.2]);
        assert_eq!(ideal.worst, vec![0.1, 0.9]);
    }

    #[test]
    fn separations_are_euclidean() {
        let weighted = DecisionMatrix::try_new(vec![vec![0.0, 0.0], vec![3.0, 4.0]]).unwrap();
        let ideal = IdealPoints {
            best: vec![3.0, 4.0],
            worst: vec![0.0, 0.0],
        };
        let separations = TopsisEngine::separations(&weighted, &ideal);
        assert_eq!(separations.to_best, vec![5.0, 0.0]);
        assert_eq!(separations.to_worst, vec![0.0, 5.0]);
    }

    #[test]
    fn closeness_handles_zero_total_distance() {
        let separations = Separations {
            to_best: vec![0.0, 1.0, 3.0],
            to_worst: vec![0.0, 1.0, 1.0],
        };
        assert_eq!(TopsisEngine::closeness(&separations), vec![0.0, 0.5, 0.25]);
    }

    #[test]
    fn analyze_exposes_intermediate_stages() {
        let analysis =
            TopsisEngine::analyze(&textbook_matrix(), &[0.25; 4], &textbook_impacts()).unwrap();
        assert_eq!(analysis.ideal.best.len(), 4);
        assert_eq!(analysis.separations.to_best.len(), 5);
        // Alternative 3 has the largest first criterion.
        assert_eq!(analysis.ideal.best[0], analysis.weighted.value(2, 0).unwrap());
        // Alternative 5 has the smallest cost criterion.
        assert_eq!(analysis.ideal.best[3], analysis.weighted.value(4, 3).unwrap());
    }

    // Validation Tests

    #[test]
    fn rejects_short_weight_vector() {
        let result = TopsisEngine::compute(&textbook_matrix(), &[0.25; 3], &textbook_impacts());
        assert_eq!(
            result,
            Err(AnalysisError::dimension_mismatch("weights", 4, 3))
        );
    }

    #[test]
    fn rejects_long_impact_vector() {
        let mut impacts = textbook_impacts();
        impacts.push(Impact::Cost);
        let result = TopsisEngine::compute(&textbook_matrix(), &[0.25; 4], &impacts);
        assert_eq!(
            result,
            Err(AnalysisError::dimension_mismatch("impacts", 4, 5))
        );
    }

    #[test]
    fn rejects_unknown_impact_symbol() {
        let result =
            TopsisEngine::compute_with_symbols(&textbook_matrix(), &[0.25; 4], &["+", "+", "x", "+"]);
        assert_eq!(result, Err(AnalysisError::invalid_impact(2, "x")));
    }

    #[test]
    fn dimension_check_precedes_impact_check() {
        let result =
            TopsisEngine::compute_with_symbols(&textbook_matrix(), &[0.25; 3], &["+", "+", "x", "+"]);
        assert!(matches!(result, Err(AnalysisError::DimensionMismatch { .. })));
    }

    #[test]
    fn impact_check_precedes_degenerate_check() {
        let matrix = DecisionMatrix::try_new(vec![vec![0.0, 1.0], vec![0.0, 2.0]]).unwrap();
        let result = TopsisEngine::compute_with_symbols(&matrix, &[1.0, 1.0], &["+", "?"]);
        assert!(matches!(result, Err(AnalysisError::InvalidImpact { .. })));
    }

    #[test]
    fn rejects_all_zero_column() {
        let matrix =
            DecisionMatrix::try_new(vec![vec![1.0, 0.0, 2.0], vec![3.0, 0.0, 4.0]]).unwrap();
        let result = TopsisEngine::compute(
            &matrix,
            &[1.0, 1.0, 1.0],
            &[Impact::Benefit, Impact::Benefit, Impact::Cost],
        );
        assert_eq!(result, Err(AnalysisError::DegenerateColumn { column: 1 }));
    }

    #[test]
    fn rejects_non_finite_weight() {
        let result = TopsisEngine::compute(
            &textbook_matrix(),
            &[0.25, f64::NAN, 0.25, 0.25],
            &textbook_impacts(),
        );
        assert_eq!(result, Err(AnalysisError::NonFiniteWeight { position: 1 }));
    }
}
