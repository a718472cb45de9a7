use outboost::prelude::*;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

const SEED: u64 = 1480561820;

fn argmax(values: &[f32]) -> usize {
    values.iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .map(|(row, _)| row)
        .unwrap()
}

/// Builds the 50-row, two-feature mixture used by the outlier
/// scenarios.
///
/// Features are drawn row-major from `N(5, 1)` up to `x_threshold`
/// and from `N(4000.3, 90)` after it (with `same_regime` the second
/// distribution is never used). Responses follow
/// `y = 0.75 + 2 x0 + 5.8 x1` on the noiseless features; every 5th
/// row below `perturb_below` is then exaggerated by `1000 * (row+1)`,
/// and unit Gaussian noise lands on the features afterwards so the
/// regression is not boringly exact.
fn mixture_dataset(seed: u64, same_regime: bool) -> (Dataset<f32>, Vec<usize>) {
    let n_rows = 50;
    let n_cols = 2;
    let mut rng = StdRng::seed_from_u64(seed);

    let low = Normal::new(5f64, 1f64).unwrap();
    let high = Normal::new(4000.3f64, 90f64).unwrap();
    let noise = Normal::new(0f64, 1f64).unwrap();

    let threshold = 7 * n_rows / 10;
    let x_threshold = 2 * threshold;

    let flat_row_major = (0..n_rows * n_cols)
        .map(|k| {
            if same_regime || k < x_threshold {
                low.sample(&mut rng)
            } else {
                high.sample(&mut rng)
            }
        })
        .collect::<Vec<_>>();

    let mut ys = (0..n_rows)
        .map(|row| {
            let x0 = flat_row_major[n_cols * row];
            let x1 = flat_row_major[n_cols * row + 1];
            0.75 + 2f64 * x0 + 5.8 * x1
        })
        .collect::<Vec<_>>();

    let perturb_below = if same_regime { n_rows } else { threshold };
    let perturbed = (0..perturb_below).step_by(5).collect::<Vec<_>>();
    for &row in &perturbed {
        ys[row] *= 1_000f64 * (row + 1) as f64;
    }

    let mut xs_flat = Vec::with_capacity(n_rows * n_cols);
    for col in 0..n_cols {
        for row in 0..n_rows {
            let x = flat_row_major[n_cols * row + col] + noise.sample(&mut rng);
            xs_flat.push(x as f32);
        }
    }

    let xs = FloatMatrix::from_flat(n_cols, xs_flat).unwrap();
    let ys = ys.into_iter().map(|y| y as f32).collect::<Vec<_>>();
    let data = Dataset::new(xs, ys).unwrap();

    (data, perturbed)
}

// two feature regimes, two response regimes, exaggerated rows in the
// first regime only; the most-exaggerated row is row 30
#[test]
fn most_exaggerated_row_dominates_the_scores() {
    let (data, perturbed) = mixture_dataset(SEED, false);
    let weak_learner = RegressionTree::init(6);

    let scores = OutlierBoost::init(&data)
        .n_rounds(5_000)
        .seed(SEED)
        .run(&weak_learner)
        .unwrap();

    assert_eq!(scores.len(), data.nrow());
    assert_eq!(
        argmax(&scores), 30,
        "the row with the largest perturbation factor must be \
         sampled most",
    );

    let perturbed_mean = perturbed.iter()
        .map(|&row| scores[row] as f64)
        .sum::<f64>() / perturbed.len() as f64;
    let rest = (0..data.nrow())
        .filter(|row| !perturbed.contains(row))
        .collect::<Vec<_>>();
    let rest_mean = rest.iter()
        .map(|&row| scores[row] as f64)
        .sum::<f64>() / rest.len() as f64;

    assert!(
        perturbed_mean > rest_mean,
        "exaggerated rows must be drawn disproportionately often: \
         perturbed {perturbed_mean}, rest {rest_mean}",
    );
}

// a single feature regime with exaggerated rows throughout; the
// most-exaggerated row is row 45
#[test]
fn single_regime_mixture_flags_its_largest_perturbation() {
    let (data, perturbed) = mixture_dataset(SEED, true);
    assert_eq!(*perturbed.last().unwrap(), 45);

    let weak_learner = RegressionTree::init(6);
    let scores = OutlierBoost::init(&data)
        .n_rounds(5_000)
        .seed(SEED)
        .run(&weak_learner)
        .unwrap();

    assert_eq!(argmax(&scores), 45);
}

#[test]
fn identical_runs_produce_identical_scores() {
    let (data, _) = mixture_dataset(SEED, false);
    let weak_learner = RegressionTree::init(6);

    let run = |seed: u64| {
        OutlierBoost::init(&data)
            .n_rounds(300)
            .seed(seed)
            .run(&weak_learner)
            .unwrap()
    };

    let first = run(42);
    let second = run(42);
    assert_eq!(first, second, "same seed, same dataset, same scores");

    let other = run(43);
    assert_ne!(first, other, "a different seed must change the draws");
}

#[test]
fn scores_recover_the_total_draw_count() {
    let n_rows = 20;
    let xs_flat = (0..n_rows).map(|k| k as f32).collect::<Vec<_>>();
    let ys = (0..n_rows)
        .map(|k| if k == 13 { 900f32 } else { 2f32 * k as f32 })
        .collect::<Vec<_>>();
    let xs = FloatMatrix::from_flat(1, xs_flat).unwrap();

    let n_rounds = 50;
    let scores = fit_counts(xs, ys, n_rounds, 5).unwrap();

    // every round draws one sample per row, so the counts behind the
    // scores must total n_rounds * n_rows
    let total = scores.iter()
        .map(|&score| score as f64)
        .sum::<f64>() * (n_rounds + 1) as f64;
    let expected = (n_rounds * n_rows) as f64;
    assert!(
        (total - expected).abs() < 0.1,
        "expected {expected}, got {total}",
    );
}

#[test]
fn fit_counts_validates_its_input_shape() {
    let result = FloatMatrix::from_flat(2, vec![1f32, 2f32, 3f32]);
    assert_eq!(result.err(), Some(Error::InvalidShape { len: 3, ncol: 2 }));

    let xs = FloatMatrix::from_flat(2, vec![1f32, 2f32, 3f32, 4f32]).unwrap();
    let result = fit_counts(xs, vec![1f32], 10, 0);
    assert_eq!(result.err(), Some(Error::MismatchedRows { xs: 2, ys: 1 }));
}
