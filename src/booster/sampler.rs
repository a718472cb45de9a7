//! Provides the seeded sampler that draws training rows.
use rand::SeedableRng;
use rand::distributions::Distribution;
use rand::rngs::StdRng;

use crate::booster::SamplingDist;

/// Generates multisets of row indices drawn from a sampling
/// distribution.
///
/// The engine is seeded from a caller-provided value, so two samplers
/// built from the same seed emit identical index sequences for the
/// same sequence of queries within a build.
#[derive(Debug, Clone)]
pub struct EmpiricalSampler {
    rng: StdRng,
}

impl EmpiricalSampler {
    /// Creates a new sampler with the specified random seed.
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Draws `n_rows` row indices independently, with replacement,
    /// from `dist`.
    ///
    /// Every index lies in `[0, dist.len())`; a row with zero
    /// probability is never drawn.
    pub fn gen_samples(
        &mut self,
        n_rows: usize,
        dist: &SamplingDist,
    ) -> Vec<usize>
    {
        let empirical = dist.empirical_dist();
        (0..n_rows)
            .map(|_| empirical.sample(&mut self.rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_samples() {
        let dist = SamplingDist::new(10);
        let mut a = EmpiricalSampler::new(1480561820);
        let mut b = EmpiricalSampler::new(1480561820);

        for _ in 0..5 {
            assert_eq!(a.gen_samples(10, &dist), b.gen_samples(10, &dist));
        }
    }

    #[test]
    fn test_different_seed_different_samples() {
        let dist = SamplingDist::new(100);
        let mut a = EmpiricalSampler::new(0);
        let mut b = EmpiricalSampler::new(1);

        // one collision over 100 draws on 100 rows would be surprising;
        // a full match would be a seeding bug
        assert_ne!(a.gen_samples(100, &dist), b.gen_samples(100, &dist));
    }

    #[test]
    fn test_samples_in_range() {
        let dist = SamplingDist::new(7);
        let mut sampler = EmpiricalSampler::new(42);
        let samples = sampler.gen_samples(1_000, &dist);

        assert_eq!(samples.len(), 1_000);
        assert!(samples.iter().all(|&row| row < 7));
    }

    #[test]
    fn test_zero_probability_row_never_drawn() {
        let dist = SamplingDist::from_pmf(
            vec![0f32, 0.5f32, 0.25f32, 0.25f32],
        );

        let mut sampler = EmpiricalSampler::new(7);
        let samples = sampler.gen_samples(10_000, &dist);
        assert!(
            samples.iter().all(|&row| row != 0),
            "a zero-probability row must never be drawn",
        );
    }

    #[test]
    fn test_draw_frequencies_follow_the_pmf() {
        let dist = SamplingDist::from_pmf(
            vec![0.4f32, 0.25f32, 0.15f32, 0.2f32],
        );

        let mut sampler = EmpiricalSampler::new(123);
        let n_draws = 100_000;
        let mut counts = vec![0usize; 4];
        for row in sampler.gen_samples(n_draws, &dist) {
            counts[row] += 1;
        }

        for (k, &count) in counts.iter().enumerate() {
            let observed = count as f64 / n_draws as f64;
            let expected = dist.pmf()[k] as f64;
            assert!(
                (observed - expected).abs() < 1e-2,
                "row {k}: expected rate {expected}, observed {observed}",
            );
        }
    }
}
