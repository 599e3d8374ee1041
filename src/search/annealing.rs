//! Simulated annealing over permutations.
//!
//! The optimizer only ever swaps two positions of an owned buffer, so the
//! multiset of values is conserved no matter what the score or predicate do.
//! `best` starts as a copy of the initial sequence and is replaced only on a
//! strict improvement, so the returned score never exceeds the initial one.
//!
//! Each iteration:
//! 1. picks two distinct positions uniformly from the swap domain;
//! 2. if the legality predicate rejects them, moves on without cooling;
//! 3. otherwise swaps, re-scores the whole sequence, and keeps the swap if
//!    the score fell or with Metropolis probability `exp(-delta / T)`;
//! 4. multiplies the temperature by the cooling rate.

use rand::Rng;
use tracing::debug;

/// Iteration budget and cooling parameters for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnealingSchedule {
    pub iterations: usize,
    pub initial_temperature: f64,
    pub cooling_rate: f64,
}

impl AnnealingSchedule {
    /// Schedule used for terrain placement.
    pub const TERRAIN: AnnealingSchedule = AnnealingSchedule {
        iterations: 3000,
        initial_temperature: 1.0,
        cooling_rate: 0.995,
    };

    /// Schedule used for number-token placement.
    pub const NUMBERS: AnnealingSchedule = AnnealingSchedule {
        iterations: 4000,
        initial_temperature: 1.0,
        cooling_rate: 0.995,
    };

    pub const fn with_iterations(self, iterations: usize) -> Self {
        AnnealingSchedule { iterations, ..self }
    }
}

/// Outcome and counters of one annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<T> {
    /// Best sequence seen.
    pub best: Vec<T>,
    pub best_score: f64,
    pub initial_score: f64,
    /// Swaps kept by the acceptance test.
    pub accepted: usize,
    /// Swaps reverted by the acceptance test.
    pub rejected: usize,
    /// Iterations the legality predicate vetoed.
    pub skipped: usize,
    pub final_temperature: f64,
}

/// Anneals `initial`, swapping only positions listed in `domain`.
///
/// `score` evaluates a whole sequence (lower is better). `can_swap(i, j,
/// current)` decides whether positions `i` and `j` may be exchanged. A domain
/// with fewer than two positions leaves the sequence untouched.
pub fn anneal<T, S, C, R>(
    initial: Vec<T>,
    domain: &[usize],
    schedule: &AnnealingSchedule,
    mut score: S,
    mut can_swap: C,
    rng: &mut R,
) -> AnnealResult<T>
where
    T: Clone,
    S: FnMut(&[T]) -> f64,
    C: FnMut(usize, usize, &[T]) -> bool,
    R: Rng + ?Sized,
{
    let initial_score = score(&initial);
    let mut result = AnnealResult {
        best: initial.clone(),
        best_score: initial_score,
        initial_score,
        accepted: 0,
        rejected: 0,
        skipped: 0,
        final_temperature: schedule.initial_temperature,
    };
    if domain.len() < 2 {
        return result;
    }

    let mut current = initial;
    let mut current_score = initial_score;
    let mut temperature = schedule.initial_temperature;

    for _ in 0..schedule.iterations {
        let a = rng.gen_range(0..domain.len());
        let mut b = rng.gen_range(0..domain.len() - 1);
        if b >= a {
            b += 1;
        }
        let (i, j) = (domain[a], domain[b]);

        if !can_swap(i, j, &current) {
            result.skipped += 1;
            continue;
        }

        current.swap(i, j);
        let new_score = score(&current);
        let delta = new_score - current_score;

        if delta < 0.0 || rng.gen::<f64>() < (-delta / temperature).exp() {
            current_score = new_score;
            result.accepted += 1;
            if current_score < result.best_score {
                result.best_score = current_score;
                result.best.clone_from(&current);
            }
        } else {
            current.swap(i, j);
            result.rejected += 1;
        }

        temperature *= schedule.cooling_rate;
    }

    result.final_temperature = temperature;
    debug!(
        initial = result.initial_score,
        best = result.best_score,
        accepted = result.accepted,
        rejected = result.rejected,
        skipped = result.skipped,
        "annealing finished"
    );
    result
}

/// Anneals over every position of the sequence.
pub fn anneal_all<T, S, C, R>(
    initial: Vec<T>,
    schedule: &AnnealingSchedule,
    score: S,
    can_swap: C,
    rng: &mut R,
) -> AnnealResult<T>
where
    T: Clone,
    S: FnMut(&[T]) -> f64,
    C: FnMut(usize, usize, &[T]) -> bool,
    R: Rng + ?Sized,
{
    let domain: Vec<usize> = (0..initial.len()).collect();
    anneal(initial, &domain, schedule, score, can_swap, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// Number of positions where the value differs from its index.
    fn displacement(v: &[usize]) -> f64 {
        v.iter().enumerate().filter(|(i, x)| *i != **x).count() as f64
    }

    fn sorted(mut v: Vec<usize>) -> Vec<usize> {
        v.sort();
        v
    }

    #[test]
    fn never_returns_worse_than_initial() {
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let initial: Vec<usize> = vec![3, 1, 4, 0, 2, 7, 6, 5];
            let start = displacement(&initial);
            let result = anneal_all(
                initial,
                &AnnealingSchedule::TERRAIN.with_iterations(200),
                |v: &[usize]| displacement(v),
                |_, _, _| true,
                &mut rng,
            );
            assert!(result.best_score <= start);
            assert_eq!(result.best_score, displacement(&result.best));
        }
    }

    #[test]
    fn conserves_multiset() {
        let mut rng = SmallRng::seed_from_u64(7);
        let initial: Vec<usize> = vec![5, 5, 1, 2, 2, 2, 9, 0];
        let result = anneal_all(
            initial.clone(),
            &AnnealingSchedule::NUMBERS,
            |v: &[usize]| v[0] as f64,
            |_, _, _| true,
            &mut rng,
        );
        assert_eq!(sorted(result.best.clone()), sorted(initial));
        assert_eq!(result.best[0], 0, "minimum value should reach the front");
    }

    #[test]
    fn sorts_small_permutation() {
        let mut rng = SmallRng::seed_from_u64(42);
        let initial: Vec<usize> = vec![4, 3, 2, 1, 0];
        let result = anneal_all(
            initial,
            &AnnealingSchedule::TERRAIN,
            |v: &[usize]| displacement(v),
            |_, _, _| true,
            &mut rng,
        );
        assert_eq!(result.best, vec![0, 1, 2, 3, 4]);
        assert_eq!(result.best_score, 0.0);
    }

    #[test]
    fn vetoed_pairs_are_never_swapped() {
        let mut rng = SmallRng::seed_from_u64(3);
        let initial: Vec<usize> = vec![9, 3, 1, 2, 0];
        let result = anneal_all(
            initial,
            &AnnealingSchedule::TERRAIN.with_iterations(500),
            |v: &[usize]| displacement(v),
            |i, j, _| i != 0 && j != 0,
            &mut rng,
        );
        assert_eq!(result.best[0], 9);
        assert!(result.skipped > 0);
        assert_eq!(result.accepted + result.rejected + result.skipped, 500);
    }

    #[test]
    fn skipped_iterations_do_not_cool() {
        let mut rng = SmallRng::seed_from_u64(1);
        let result = anneal_all(
            vec![1, 2, 3],
            &AnnealingSchedule::TERRAIN.with_iterations(100),
            |_: &[usize]| 0.0,
            |_, _, _| false,
            &mut rng,
        );
        assert_eq!(result.skipped, 100);
        assert_eq!(result.final_temperature, 1.0);
        assert_eq!(result.best, vec![1, 2, 3]);
    }

    #[test]
    fn temperature_cools_once_per_decision() {
        let mut rng = SmallRng::seed_from_u64(1);
        let schedule = AnnealingSchedule::TERRAIN.with_iterations(10);
        let result = anneal_all(
            vec![1, 2, 3],
            &schedule,
            |_: &[usize]| 0.0,
            |_, _, _| true,
            &mut rng,
        );
        let expected = schedule.cooling_rate.powi(10);
        assert!((result.final_temperature - expected).abs() < 1e-12);
    }

    #[test]
    fn restricted_domain_leaves_other_positions() {
        let mut rng = SmallRng::seed_from_u64(11);
        let initial: Vec<usize> = vec![100, 4, 3, 200, 2, 1];
        let domain = [1, 2, 4, 5];
        let result = anneal(
            initial,
            &domain,
            &AnnealingSchedule::NUMBERS.with_iterations(1000),
            |v: &[usize]| {
                // Reward ascending order among the domain positions.
                let picked: Vec<usize> = domain.iter().map(|&i| v[i]).collect();
                picked.windows(2).filter(|w| w[0] > w[1]).count() as f64
            },
            |_, _, _| true,
            &mut rng,
        );
        assert_eq!(result.best[0], 100);
        assert_eq!(result.best[3], 200);
        assert_eq!(result.best_score, 0.0);
    }

    #[test]
    fn cold_start_rejects_every_uphill_swap() {
        let mut rng = SmallRng::seed_from_u64(8);
        let schedule = AnnealingSchedule {
            iterations: 300,
            initial_temperature: 1e-9,
            cooling_rate: 0.995,
        };
        // Already sorted: every swap of two distinct values costs 2.
        let result = anneal_all(
            vec![0, 1, 2, 3, 4, 5],
            &schedule,
            |v: &[usize]| displacement(v),
            |_, _, _| true,
            &mut rng,
        );
        assert_eq!(result.accepted, 0);
        assert_eq!(result.rejected, 300);
        assert_eq!(result.best, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn warm_start_accepts_small_uphill_swaps() {
        let mut rng = SmallRng::seed_from_u64(8);
        let schedule = AnnealingSchedule {
            iterations: 300,
            initial_temperature: 1.0,
            cooling_rate: 1.0,
        };
        // Displacing two values costs 0.25, accepted with probability ~0.78.
        let result = anneal_all(
            vec![0, 1, 2, 3, 4, 5],
            &schedule,
            |v: &[usize]| displacement(v) / 8.0,
            |_, _, _| true,
            &mut rng,
        );
        assert!(result.accepted > 0);
        assert!(result.accepted > result.rejected / 4);
        assert_eq!(result.best_score, 0.0);
    }

    #[test]
    fn acceptance_falls_as_temperature_drops() {
        let run = |temperature: f64| {
            let mut rng = SmallRng::seed_from_u64(21);
            let schedule = AnnealingSchedule {
                iterations: 500,
                initial_temperature: temperature,
                cooling_rate: 1.0,
            };
            anneal_all(
                vec![0, 1, 2, 3, 4, 5, 6, 7],
                &schedule,
                |v: &[usize]| displacement(v),
                |_, _, _| true,
                &mut rng,
            )
            .accepted
        };
        let hot = run(10.0);
        let warm = run(1.0);
        let cold = run(0.05);
        assert!(hot > warm, "hot {} warm {}", hot, warm);
        assert!(warm > cold, "warm {} cold {}", warm, cold);
    }

    #[test]
    fn tiny_domain_is_returned_unchanged() {
        let mut rng = SmallRng::seed_from_u64(5);
        let result = anneal(
            vec![2, 1],
            &[1],
            &AnnealingSchedule::TERRAIN,
            |v: &[usize]| v[0] as f64,
            |_, _, _| true,
            &mut rng,
        );
        assert_eq!(result.best, vec![2, 1]);
        assert_eq!(result.accepted + result.rejected + result.skipped, 0);
    }
}
