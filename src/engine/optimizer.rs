//! Sequential black-box minimization with a Gaussian-process surrogate
//!
//! # Algorithm
//!
//! 1. Evaluate `initial_points` configurations drawn uniformly from the search space
//! 2. Fit a Gaussian process (RBF kernel) to every observation so far
//! 3. Evaluate the random candidate with the highest expected improvement
//! 4. Repeat 2-3 until `n_calls` evaluations are spent
//!
//! The surrogate works on coordinates scaled to `[0, 1]`; observed values are
//! standardized before fitting. When every observation is identical, expected
//! improvement reduces to picking the most uncertain candidate.
//!
//! The result is the best observed point, not the surrogate's predicted optimum.

use crate::error::{EngineError, Result};
use log::debug;
use rand::Rng;

/// One axis of the search space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Whole numbers in `low..=high`
    Integer { low: i64, high: i64 },
    /// Real numbers in `low..=high`
    Real { low: f64, high: f64 },
}

impl Dimension {
    fn bounds(self) -> (f64, f64) {
        match self {
            Self::Integer { low, high } => (low as f64, high as f64),
            Self::Real { low, high } => (low, high),
        }
    }

    /// Map a value from this dimension into `[0, 1]`
    fn normalize(self, value: f64) -> f64 {
        let (low, high) = self.bounds();
        if high > low {
            (value - low) / (high - low)
        } else {
            0.0
        }
    }

    /// Map a unit coordinate back into this dimension, rounding integers
    fn denormalize(self, unit: f64) -> f64 {
        let (low, high) = self.bounds();
        let value = low + unit.clamp(0.0, 1.0) * (high - low);
        match self {
            Self::Integer { .. } => value.round().clamp(low, high),
            Self::Real { .. } => value,
        }
    }

    fn validate(self) -> Result<()> {
        let (low, high) = self.bounds();
        if low.is_finite() && high.is_finite() && low <= high {
            Ok(())
        } else {
            Err(EngineError::InvalidInput(format!(
                "search dimension has invalid bounds [{low}, {high}]"
            )))
        }
    }
}

/// A single objective evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub x: Vec<f64>,
    pub value: f64,
}

/// Outcome of a minimization run
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeResult {
    /// Best observed point, in search-space units
    pub x: Vec<f64>,
    /// Objective value at `x`
    pub fun: f64,
    /// Every evaluation in call order
    pub evaluations: Vec<Evaluation>,
}

/// Gaussian-process Bayesian optimizer
#[derive(Debug, Clone)]
pub struct BayesianOptimizer {
    space: Vec<Dimension>,
    n_calls: usize,
    initial_points: usize,
    candidates: usize,
    length_scale: f64,
    noise: f64,
    xi: f64,
}

impl BayesianOptimizer {
    /// Create an optimizer over `space` with a budget of `n_calls` evaluations
    #[must_use]
    pub fn new(space: Vec<Dimension>, n_calls: usize) -> Self {
        Self {
            space,
            n_calls,
            initial_points: 5,
            candidates: 1000,
            length_scale: 0.3,
            noise: 1e-6,
            xi: 0.01,
        }
    }

    /// Number of purely random evaluations before the surrogate is used
    #[must_use]
    pub const fn with_initial_points(mut self, initial_points: usize) -> Self {
        self.initial_points = initial_points;
        self
    }

    /// Number of random candidates scored by the acquisition function per step
    #[must_use]
    pub const fn with_candidates(mut self, candidates: usize) -> Self {
        self.candidates = candidates;
        self
    }

    /// Minimize `objective` over the search space
    ///
    /// Evaluations run one at a time, in order. The objective receives the same
    /// generator the optimizer samples from. Errors from the objective are
    /// returned unchanged.
    ///
    /// # Errors
    /// Returns `EngineError::OptimizerFailure` if the budget is zero, the space is
    /// empty, no evaluation produced a finite value, or the surrogate cannot be fitted.
    /// Returns `EngineError::InvalidInput` for a dimension with invalid bounds.
    pub fn minimize<F, R>(&self, mut objective: F, rng: &mut R) -> Result<OptimizeResult>
    where
        F: FnMut(&[f64], &mut R) -> Result<f64>,
        R: Rng + ?Sized,
    {
        if self.space.is_empty() {
            return Err(EngineError::OptimizerFailure(
                "search space has no dimensions".to_string(),
            ));
        }
        for dimension in &self.space {
            dimension.validate()?;
        }

        let mut evaluations: Vec<Evaluation> = Vec::with_capacity(self.n_calls);
        let mut units: Vec<Vec<f64>> = Vec::with_capacity(self.n_calls);

        for call in 0..self.n_calls {
            let unit = if call < self.initial_points.max(1) {
                self.random_unit(rng)
            } else {
                self.next_by_acquisition(&units, &evaluations, rng)?
            };

            let x: Vec<f64> = self
                .space
                .iter()
                .zip(&unit)
                .map(|(dimension, &u)| dimension.denormalize(u))
                .collect();
            // Rounded integer coordinates are what was actually evaluated
            let unit: Vec<f64> = self
                .space
                .iter()
                .zip(&x)
                .map(|(dimension, &v)| dimension.normalize(v))
                .collect();

            let value = objective(&x, rng)?;
            debug!("optimizer call {}/{}: x={x:?} value={value}", call + 1, self.n_calls);

            units.push(unit);
            evaluations.push(Evaluation { x, value });
        }

        let best = evaluations
            .iter()
            .filter(|evaluation| evaluation.value.is_finite())
            .fold(None::<&Evaluation>, |best, evaluation| match best {
                Some(current) if current.value <= evaluation.value => Some(current),
                _ => Some(evaluation),
            })
            .ok_or_else(|| {
                EngineError::OptimizerFailure(format!(
                    "no finite objective value in {} evaluations",
                    evaluations.len()
                ))
            })?;
        let (x, fun) = (best.x.clone(), best.value);

        Ok(OptimizeResult {
            x,
            fun,
            evaluations,
        })
    }

    fn random_unit<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        (0..self.space.len()).map(|_| rng.random::<f64>()).collect()
    }

    fn next_by_acquisition<R: Rng + ?Sized>(
        &self,
        units: &[Vec<f64>],
        evaluations: &[Evaluation],
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        let observed: Vec<(&Vec<f64>, f64)> = units
            .iter()
            .zip(evaluations)
            .filter(|(_, evaluation)| evaluation.value.is_finite())
            .map(|(unit, evaluation)| (unit, evaluation.value))
            .collect();
        if observed.is_empty() {
            return Ok(self.random_unit(rng));
        }

        let points: Vec<&[f64]> = observed.iter().map(|(unit, _)| unit.as_slice()).collect();
        let values: Vec<f64> = observed.iter().map(|(_, value)| *value).collect();
        let process = GaussianProcess::fit(&points, &values, self.length_scale, self.noise)?;
        let best = process.best_standardized();

        let mut chosen = self.random_unit(rng);
        let mut chosen_score = f64::NEG_INFINITY;
        for _ in 0..self.candidates {
            let candidate = self.random_unit(rng);
            let (mean, std) = process.predict(&candidate);
            let score = expected_improvement(mean, std, best, self.xi);
            if score > chosen_score {
                chosen_score = score;
                chosen = candidate;
            }
        }
        Ok(chosen)
    }
}

/// Gaussian-process regression with a squared-exponential kernel
struct GaussianProcess {
    points: Vec<Vec<f64>>,
    /// Lower-triangular Cholesky factor of the kernel matrix
    cholesky: Vec<Vec<f64>>,
    /// `K^-1 y` for the standardized observations
    alpha: Vec<f64>,
    standardized: Vec<f64>,
    length_scale: f64,
}

impl GaussianProcess {
    fn fit(points: &[&[f64]], values: &[f64], length_scale: f64, noise: f64) -> Result<Self> {
        let n = values.len();
        let mean = values.iter().sum::<f64>() / n as f64;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
        let scale = if variance > 1e-24 { variance.sqrt() } else { 1.0 };
        let standardized: Vec<f64> = values.iter().map(|v| (v - mean) / scale).collect();

        let mut kernel = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in 0..n {
                kernel[i][j] = rbf(points[i], points[j], length_scale);
            }
            kernel[i][i] += noise;
        }

        let cholesky = cholesky(&kernel).ok_or_else(|| {
            EngineError::OptimizerFailure("kernel matrix is not positive definite".to_string())
        })?;
        let alpha = backward_substitute(&cholesky, &forward_substitute(&cholesky, &standardized));

        Ok(Self {
            points: points.iter().map(|p| p.to_vec()).collect(),
            cholesky,
            alpha,
            standardized,
            length_scale,
        })
    }

    fn best_standardized(&self) -> f64 {
        self.standardized
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }

    /// Posterior mean and standard deviation at `x`, in standardized units
    fn predict(&self, x: &[f64]) -> (f64, f64) {
        let k: Vec<f64> = self
            .points
            .iter()
            .map(|p| rbf(p, x, self.length_scale))
            .collect();
        let mean = k.iter().zip(&self.alpha).map(|(a, b)| a * b).sum();
        let v = forward_substitute(&self.cholesky, &k);
        let variance = 1.0 - v.iter().map(|x| x * x).sum::<f64>();
        (mean, variance.max(0.0).sqrt())
    }
}

fn rbf(a: &[f64], b: &[f64], length_scale: f64) -> f64 {
    let squared: f64 = a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum();
    (-squared / (2.0 * length_scale * length_scale)).exp()
}

fn cholesky(matrix: &[Vec<f64>]) -> Option<Vec<Vec<f64>>> {
    let n = matrix.len();
    let mut lower = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..=i {
            let dot: f64 = (0..j).map(|k| lower[i][k] * lower[j][k]).sum();
            if i == j {
                let diagonal = matrix[i][i] - dot;
                if diagonal <= 0.0 || !diagonal.is_finite() {
                    return None;
                }
                lower[i][j] = diagonal.sqrt();
            } else {
                lower[i][j] = (matrix[i][j] - dot) / lower[j][j];
            }
        }
    }
    Some(lower)
}

/// Solve `L y = b` for lower-triangular `L`
fn forward_substitute(lower: &[Vec<f64>], b: &[f64]) -> Vec<f64> {
    let mut y = vec![0.0; b.len()];
    for i in 0..b.len() {
        let dot: f64 = (0..i).map(|k| lower[i][k] * y[k]).sum();
        y[i] = (b[i] - dot) / lower[i][i];
    }
    y
}

/// Solve `L^T x = y` for lower-triangular `L`
fn backward_substitute(lower: &[Vec<f64>], y: &[f64]) -> Vec<f64> {
    let n = y.len();
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let dot: f64 = (i + 1..n).map(|k| lower[k][i] * x[k]).sum();
        x[i] = (y[i] - dot) / lower[i][i];
    }
    x
}

/// Expected improvement below `best` (minimization)
fn expected_improvement(mean: f64, std: f64, best: f64, xi: f64) -> f64 {
    let improvement = best - mean - xi;
    if std <= 0.0 {
        return improvement.max(0.0);
    }
    let z = improvement / std;
    improvement * normal_cdf(z) + std * normal_pdf(z)
}

fn normal_pdf(z: f64) -> f64 {
    (-0.5 * z * z).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}

/// Abramowitz-Stegun 7.1.26, absolute error below 1.5e-7
fn erf(x: f64) -> f64 {
    let sign = x.signum();
    let x = x.abs();
    let t = 1.0 / (1.0 + 0.327_591_1 * x);
    let poly = t
        * (0.254_829_592
            + t * (-0.284_496_736 + t * (1.421_413_741 + t * (-1.453_152_027 + t * 1.061_405_429))));
    sign * (1.0 - poly * (-x * x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn space() -> Vec<Dimension> {
        vec![
            Dimension::Integer { low: 50, high: 200 },
            Dimension::Real {
                low: 0.01,
                high: 0.1,
            },
        ]
    }

    #[test]
    fn evaluates_exactly_the_budget() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut calls = 0;
        let result = BayesianOptimizer::new(space(), 10)
            .minimize(
                |_, _| {
                    calls += 1;
                    Ok(0.0)
                },
                &mut rng,
            )
            .unwrap();
        assert_eq!(calls, 10);
        assert_eq!(result.evaluations.len(), 10);
    }

    #[test]
    fn single_candidate_still_spends_budget() {
        let mut rng = StdRng::seed_from_u64(9);
        let result = BayesianOptimizer::new(space(), 8)
            .with_initial_points(2)
            .with_candidates(1)
            .minimize(|x, _| Ok(x[1]), &mut rng)
            .unwrap();
        assert_eq!(result.evaluations.len(), 8);
        let lowest = result
            .evaluations
            .iter()
            .map(|e| e.value)
            .fold(f64::INFINITY, f64::min);
        assert!((result.fun - lowest).abs() < f64::EPSILON);
    }

    #[test]
    fn points_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        let result = BayesianOptimizer::new(space(), 12)
            .minimize(|x, _| Ok(x[0] * x[1]), &mut rng)
            .unwrap();
        for evaluation in &result.evaluations {
            assert!((50.0..=200.0).contains(&evaluation.x[0]));
            assert!((evaluation.x[0] - evaluation.x[0].round()).abs() < f64::EPSILON);
            assert!((0.01..=0.1).contains(&evaluation.x[1]));
        }
    }

    #[test]
    fn constant_objective_returns_first_point() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = BayesianOptimizer::new(space(), 10)
            .minimize(|_, _| Ok(0.0), &mut rng)
            .unwrap();
        assert_eq!(result.x, result.evaluations[0].x);
        assert!(result.fun.abs() < f64::EPSILON);
    }

    #[test]
    fn finds_low_region_of_simple_bowl() {
        let mut rng = StdRng::seed_from_u64(4);
        let bowl = |x: &[f64], _: &mut StdRng| Ok((x[0] - 0.2).powi(2) + (x[1] - 0.7).powi(2));
        let result = BayesianOptimizer::new(
            vec![
                Dimension::Real { low: 0.0, high: 1.0 },
                Dimension::Real { low: 0.0, high: 1.0 },
            ],
            30,
        )
        .minimize(bowl, &mut rng)
        .unwrap();
        let min_random = result.evaluations[..5]
            .iter()
            .map(|e| e.value)
            .fold(f64::INFINITY, f64::min);
        assert!(result.fun <= min_random);
        assert!(result.fun < 0.05, "best value {}", result.fun);
    }

    #[test]
    fn zero_budget_fails() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = BayesianOptimizer::new(space(), 0).minimize(|_, _| Ok(0.0), &mut rng);
        assert!(matches!(result, Err(EngineError::OptimizerFailure(_))));
    }

    #[test]
    fn non_finite_objective_fails() {
        let mut rng = StdRng::seed_from_u64(6);
        let result = BayesianOptimizer::new(space(), 4).minimize(|_, _| Ok(f64::NAN), &mut rng);
        assert!(matches!(result, Err(EngineError::OptimizerFailure(_))));
    }

    #[test]
    fn objective_errors_propagate() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = BayesianOptimizer::new(space(), 4)
            .minimize(|_, _| Err(EngineError::EmptyAlphabet), &mut rng);
        assert_eq!(result, Err(EngineError::EmptyAlphabet));
    }

    #[test]
    fn invalid_bounds_rejected() {
        let mut rng = StdRng::seed_from_u64(8);
        let result = BayesianOptimizer::new(
            vec![Dimension::Real {
                low: 1.0,
                high: 0.0,
            }],
            3,
        )
        .minimize(|_, _| Ok(0.0), &mut rng);
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn erf_reference_values() {
        assert!(erf(0.0).abs() < 1e-7);
        assert!((erf(1.0) - 0.842_700_79).abs() < 1e-6);
        assert!((erf(-1.0) + 0.842_700_79).abs() < 1e-6);
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-7);
    }

    #[test]
    fn expected_improvement_grows_with_uncertainty() {
        let low = expected_improvement(0.0, 0.1, 0.0, 0.01);
        let high = expected_improvement(0.0, 1.0, 0.0, 0.01);
        assert!(high > low);
        assert!(low > 0.0);
    }

    #[test]
    fn gaussian_process_interpolates_observations() {
        let a = [0.1, 0.1];
        let b = [0.9, 0.9];
        let process = GaussianProcess::fit(&[&a, &b], &[1.0, -1.0], 0.3, 1e-8).unwrap();
        let (mean_a, std_a) = process.predict(&a);
        let (mean_b, _) = process.predict(&b);
        assert!(mean_a > 0.9);
        assert!(mean_b < -0.9);
        assert!(std_a < 1e-3);
    }
}
