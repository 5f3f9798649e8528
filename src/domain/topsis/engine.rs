//! TOPSIS Engine - Normalization, weighting, ideal solutions, separation, closeness.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ranking::competition_ranks;
use super::{DecisionMatrix, DecisionProblem, ImpactVector, ResultProjector, ResultTable, WeightVector};
use crate::domain::foundation::{Impact, Score};

/// Ideal-best and ideal-worst value per criterion, in weighted space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealSolution {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// Euclidean distances of one alternative to both ideals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Separation {
    pub to_best: f64,
    pub to_worst: f64,
}

impl Separation {
    /// Relative closeness `to_worst / (to_best + to_worst)`, rounded.
    ///
    /// An alternative sitting on both ideals at once (single alternative,
    /// or all alternatives identical) gets [`Score::TIE_SENTINEL`].
    /// Both distances are divided by the larger one first so the sum
    /// cannot overflow.
    pub fn closeness(&self) -> Score {
        let scale = self.to_best.max(self.to_worst);
        if scale == 0.0 {
            return Score::TIE_SENTINEL;
        }
        let (to_best, to_worst) = (self.to_best / scale, self.to_worst / scale);
        Score::from_raw(to_worst / (to_best + to_worst))
    }
}

/// Stateless TOPSIS computation.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Scores and ranks every alternative of a validated problem.
    ///
    /// Never fails: zero columns and coincident ideals are resolved by
    /// policy (zero column, 0.5 sentinel).
    pub fn compute(problem: &DecisionProblem) -> ResultTable {
        let matrix = problem.matrix();
        let normalized = Self::normalize(matrix);
        let weighted = Self::apply_weights(&normalized, &problem.weights().relative());
        let ideal = Self::ideal_solution(&weighted, problem.impacts());

        let scores: Vec<Score> = weighted
            .iter()
            .map(|row| Self::separation(row, &ideal).closeness())
            .collect();
        let ranks = competition_ranks(&scores);

        debug!(
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            "Computed TOPSIS scores"
        );

        ResultProjector::project(matrix, &scores, &ranks)
    }

    /// Vector normalization: divides each value by its column's Euclidean norm.
    ///
    /// A column whose norm is zero (all zeros) normalizes to all zeros.
    pub fn normalize(matrix: &DecisionMatrix) -> Vec<Vec<f64>> {
        let norms: Vec<f64> = (0..matrix.criterion_count())
            .map(|j| matrix.column(j).fold(0.0, f64::hypot))
            .collect();

        matrix
            .alternatives()
            .iter()
            .map(|alternative| {
                alternative
                    .values
                    .iter()
                    .zip(&norms)
                    .map(|(&value, &norm)| if norm == 0.0 { 0.0 } else { value / norm })
                    .collect()
            })
            .collect()
    }

    /// Multiplies every normalized value by its criterion weight.
    pub fn apply_weights(normalized: &[Vec<f64>], weights: &WeightVector) -> Vec<Vec<f64>> {
        normalized
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights.as_slice())
                    .map(|(value, weight)| value * weight)
                    .collect()
            })
            .collect()
    }

    /// Derives ideal-best and ideal-worst per column.
    ///
    /// For `+` criteria best is the column maximum; for `-` it is the minimum.
    pub fn ideal_solution(weighted: &[Vec<f64>], impacts: &ImpactVector) -> IdealSolution {
        let mut best = Vec::with_capacity(impacts.len());
        let mut worst = Vec::with_capacity(impacts.len());

        for (j, impact) in impacts.as_slice().iter().enumerate() {
            let max = weighted.iter().map(|row| row[j]).fold(f64::NEG_INFINITY, f64::max);
            let min = weighted.iter().map(|row| row[j]).fold(f64::INFINITY, f64::min);

            match impact {
                Impact::Maximize => {
                    best.push(max);
                    worst.push(min);
                }
                Impact::Minimize => {
                    best.push(min);
                    worst.push(max);
                }
            }
        }

        IdealSolution { best, worst }
    }

    /// Euclidean distances of one weighted row to both ideals.
    pub fn separation(row: &[f64], ideal: &IdealSolution) -> Separation {
        Separation {
            to_best: euclidean(row, &ideal.best),
            to_worst: euclidean(row, &ideal.worst),
        }
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x - y).fold(0.0, f64::hypot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::Alternative;

    const EPS: f64 = 1e-9;

    fn matrix(rows: &[(&str, &[f64])]) -> DecisionMatrix {
        let width = rows[0].1.len();
        DecisionMatrix::try_new(
            "Id",
            (1..=width).map(|i| format!("C{}", i)).collect(),
            rows.iter()
                .map(|(id, values)| Alternative::new(*id, values.to_vec()))
                .collect(),
        )
        .unwrap()
    }

    fn problem(rows: &[(&str, &[f64])], weights: &str, impacts: &str) -> DecisionProblem {
        DecisionProblem::try_new(
            matrix(rows),
            WeightVector::parse(weights).unwrap(),
            ImpactVector::parse(impacts).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn normalize_divides_by_column_norm() {
        let m = matrix(&[("A", &[3.0, 1.0]), ("B", &[4.0, 0.0])]);
        let normalized = TopsisEngine::normalize(&m);

        assert!((normalized[0][0] - 0.6).abs() < EPS);
        assert!((normalized[1][0] - 0.8).abs() < EPS);
        assert!((normalized[0][1] - 1.0).abs() < EPS);
        assert!(normalized[1][1].abs() < EPS);
    }

    #[test]
    fn normalize_zero_column_stays_zero() {
        let m = matrix(&[("A", &[0.0, 1.0]), ("B", &[0.0, 2.0])]);
        let normalized = TopsisEngine::normalize(&m);

        assert_eq!(normalized[0][0], 0.0);
        assert_eq!(normalized[1][0], 0.0);
        assert!(normalized.iter().flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn apply_weights_scales_columns() {
        let weights = WeightVector::parse("2,0.5").unwrap();
        let weighted = TopsisEngine::apply_weights(&[vec![0.5, 0.5]], &weights);
        assert_eq!(weighted, vec![vec![1.0, 0.25]]);
    }

    #[test]
    fn ideal_solution_follows_impacts() {
        let weighted = vec![vec![0.1, 0.7], vec![0.4, 0.2]];
        let ideal = TopsisEngine::ideal_solution(&weighted, &ImpactVector::parse("+,-").unwrap());

        assert_eq!(ideal.best, vec![0.4, 0.2]);
        assert_eq!(ideal.worst, vec![0.1, 0.7]);
    }

    #[test]
    fn separation_is_euclidean() {
        let ideal = IdealSolution {
            best: vec![3.0, 4.0],
            worst: vec![0.0, 0.0],
        };
        let sep = TopsisEngine::separation(&[0.0, 0.0], &ideal);
        assert!((sep.to_best - 5.0).abs() < EPS);
        assert_eq!(sep.to_worst, 0.0);
        assert_eq!(sep.closeness(), Score::MIN);
    }

    #[test]
    fn closeness_uses_sentinel_when_both_distances_zero() {
        let sep = Separation {
            to_best: 0.0,
            to_worst: 0.0,
        };
        assert_eq!(sep.closeness(), Score::TIE_SENTINEL);
    }

    #[test]
    fn closeness_does_not_overflow_on_huge_distances() {
        let sep = Separation {
            to_best: f64::MAX,
            to_worst: f64::MAX,
        };
        assert_eq!(sep.closeness().value(), 0.5);

        let sep = Separation {
            to_best: 0.0,
            to_worst: f64::MAX,
        };
        assert_eq!(sep.closeness(), Score::MAX);
    }

    #[test]
    fn separation_handles_values_near_f64_max() {
        let ideal = IdealSolution {
            best: vec![1e300, 1e300],
            worst: vec![0.0, 0.0],
        };
        let sep = TopsisEngine::separation(&[0.0, 0.0], &ideal);
        assert!(sep.to_best.is_finite());
        assert!((sep.to_best / 1e300 - 2f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn compute_is_unchanged_by_huge_uniform_weights() {
        let rows: &[(&str, &[f64])] = &[("A", &[1.0, 4.0]), ("B", &[2.0, 2.0]), ("C", &[3.0, 1.0])];
        let base = TopsisEngine::compute(&problem(rows, "1,2", "+,-"));
        let huge = TopsisEngine::compute(&problem(rows, "1e200,2e200", "+,-"));

        for row in base.rows() {
            let other = huge.row(&row.identifier).unwrap();
            assert!((row.score.value() - other.score.value()).abs() <= 1e-6);
            assert_eq!(row.rank, other.rank);
        }
        let ids: Vec<_> = huge.rows().iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, vec!["C", "B", "A"]);
    }

    #[test]
    fn compute_orders_by_rank() {
        let result = TopsisEngine::compute(&problem(
            &[("A", &[1.0, 1.0]), ("B", &[2.0, 2.0]), ("C", &[3.0, 3.0])],
            "1,1",
            "+,+",
        ));

        let ids: Vec<_> = result.rows().iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, vec!["C", "B", "A"]);
        assert_eq!(result.rows()[0].score, Score::MAX);
        assert_eq!(result.rows()[2].score, Score::MIN);
        assert_eq!(result.rows()[1].score.value(), 0.5);
    }

    #[test]
    fn compute_known_phone_example() {
        // Cost criterion first, two benefit criteria.
        let result = TopsisEngine::compute(&problem(
            &[
                ("P1", &[250.0, 16.0, 12.0]),
                ("P2", &[200.0, 16.0, 8.0]),
                ("P3", &[300.0, 32.0, 16.0]),
                ("P4", &[275.0, 32.0, 8.0]),
            ],
            "0.25,0.25,0.5",
            "-,+,+",
        ));

        assert_eq!(result.row("P3").unwrap().rank, 1);
        assert_eq!(result.row("P2").unwrap().rank, 4);
        assert!(result.rows().iter().all(|r| (0.0..=1.0).contains(&r.score.value())));
    }

    #[test]
    fn compute_single_alternative_gets_sentinel() {
        let result = TopsisEngine::compute(&problem(&[("Only", &[5.0, 7.0])], "1,1", "+,-"));
        assert_eq!(result.rows()[0].score, Score::TIE_SENTINEL);
        assert_eq!(result.rows()[0].rank, 1);
    }

    #[test]
    fn compute_identical_rows_tie_at_rank_one() {
        let result = TopsisEngine::compute(&problem(
            &[("A", &[2.0, 3.0]), ("B", &[2.0, 3.0])],
            "1,1",
            "+,+",
        ));

        assert!(result.rows().iter().all(|r| r.rank == 1));
        assert!(result.rows().iter().all(|r| r.score == Score::TIE_SENTINEL));
        assert_eq!(result.rows()[0].identifier, "A");
    }

    #[test]
    fn compute_zero_weights_ignore_criterion() {
        let result = TopsisEngine::compute(&problem(
            &[("A", &[1.0, 9.0]), ("B", &[2.0, 1.0])],
            "1,0",
            "+,+",
        ));
        assert_eq!(result.row("B").unwrap().rank, 1);
        assert_eq!(result.row("B").unwrap().score, Score::MAX);
    }
}
