use pyo3::prelude::*;

use crate::baselines::{clamp_seed, BaselineRow};
use crate::constants::{CREDIBILITY, ROUND_LABELS};

/// Adjusted advancement probabilities for one team, in round order.
///
/// Guaranteed non-increasing: a team is never more likely to reach a later
/// round than an earlier one.
#[pyclass]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundProbabilities {
    #[pyo3(get)]
    pub r32: f64,

    #[pyo3(get)]
    pub s16: f64,

    #[pyo3(get)]
    pub e8: f64,

    #[pyo3(get)]
    pub f4: f64,

    #[pyo3(get)]
    pub champ: f64,
}

#[pymethods]
impl RoundProbabilities {
    /// Probabilities as a list in round order
    pub fn as_list(&self) -> Vec<f64> {
        vec![self.r32, self.s16, self.e8, self.f4, self.champ]
    }

    /// Probabilities as display percentages, rounded to 2 decimals
    pub fn as_percentages(&self) -> Vec<f64> {
        self.as_list()
            .into_iter()
            .map(|p| (p * 10_000.0).round() / 100.0)
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "RoundProbabilities(r32={:.4}, s16={:.4}, e8={:.4}, f4={:.4}, champ={:.4})",
            self.r32, self.s16, self.e8, self.f4, self.champ
        )
    }
}

/// Adjust a seed's baseline probabilities toward the team's power score.
///
/// The multiplicative shift is centered at a neutral 0.5 power score,
/// limited by the credibility factor, and scaled down for weaker seed
/// lines. A final forward pass with a running minimum restores the
/// non-increasing round ordering wherever the raw shift broke it.
///
/// # Arguments
/// * `power_score` - Composite strength in [0, 1]
/// * `seed` - Tournament seed; clamped into the baseline domain
/// * `base` - Baseline row for the clamped seed
///
/// # Returns
/// Adjusted probabilities, each in [0, 1], non-increasing in round order
pub fn adjust_probabilities(power_score: f64, seed: u32, base: BaselineRow) -> RoundProbabilities {
    let seed = clamp_seed(seed);
    let seed_strength_factor = (17 - seed) as f64 / 16.0;
    let adjustment = CREDIBILITY * (power_score - 0.5) * seed_strength_factor;

    let mut probs = base.as_array();
    for p in probs.iter_mut() {
        *p = (*p * (1.0 + adjustment)).clamp(0.0, 1.0);
    }

    // Running minimum keeps each round at or below the one before it
    let mut floor = probs[0];
    for p in probs.iter_mut().skip(1) {
        *p = p.min(floor);
        floor = *p;
    }

    RoundProbabilities {
        r32: probs[0],
        s16: probs[1],
        e8: probs[2],
        f4: probs[3],
        champ: probs[4],
    }
}

/// One "<round>: <pct>%" line per round, for the host's results panel.
pub fn probability_lines(probs: &RoundProbabilities) -> Vec<String> {
    ROUND_LABELS
        .iter()
        .zip(probs.as_percentages())
        .map(|(label, pct)| format!("{}: {:.2}%", label, pct))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baselines::baseline_for_seed;
    use proptest::prelude::*;

    #[test]
    fn test_neutral_power_returns_baseline() {
        for seed in 1..=8 {
            let base = baseline_for_seed(seed);
            let probs = adjust_probabilities(0.5, seed, base);
            assert_eq!(
                probs.as_list(),
                base.as_array().to_vec(),
                "0.5 power is a zero adjustment for seed {}",
                seed
            );
        }
    }

    #[test]
    fn test_strong_team_shifts_up() {
        let base = baseline_for_seed(3);
        let probs = adjust_probabilities(0.9, 3, base);
        for (adjusted, baseline) in probs.as_list().iter().zip(base.as_array()) {
            assert!(*adjusted > baseline);
        }
    }

    #[test]
    fn test_weak_team_shifts_down() {
        let base = baseline_for_seed(3);
        let probs = adjust_probabilities(0.1, 3, base);
        for (adjusted, baseline) in probs.as_list().iter().zip(base.as_array()) {
            assert!(*adjusted < baseline);
        }
    }

    #[test]
    fn test_weaker_seeds_shift_less() {
        // Same power score, but the seed-strength factor shrinks the
        // relative shift as the seed worsens. Compared on the champ column,
        // which never hits the [0, 1] clamp.
        let base_one = baseline_for_seed(1);
        let one = adjust_probabilities(0.9, 1, base_one);
        let relative_one = (one.champ - base_one.champ) / base_one.champ;

        let base_eight = baseline_for_seed(8);
        let eight = adjust_probabilities(0.9, 8, base_eight);
        let relative_eight = (eight.champ - base_eight.champ) / base_eight.champ;

        assert!(relative_eight < relative_one);
    }

    #[test]
    fn test_clamped_seed_matches_eight() {
        let twelve = adjust_probabilities(0.8, 12, baseline_for_seed(12));
        let eight = adjust_probabilities(0.8, 8, baseline_for_seed(8));
        assert_eq!(twelve, eight, "seed 12 evaluates exactly as seed 8");
    }

    #[test]
    fn test_idempotent_bitwise() {
        let base = baseline_for_seed(5);
        let a = adjust_probabilities(0.7331, 5, base);
        let b = adjust_probabilities(0.7331, 5, base);
        for (x, y) in a.as_list().iter().zip(b.as_list()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn test_percentages_rounded() {
        let probs = RoundProbabilities {
            r32: 0.88123,
            s16: 0.55,
            e8: 0.30,
            f4: 0.14,
            champ: 0.041107,
        };
        let pcts = probs.as_percentages();
        assert_eq!(pcts[0], 88.12);
        assert_eq!(pcts[4], 4.11);
    }

    #[test]
    fn test_probability_lines_format() {
        let probs = adjust_probabilities(0.5, 1, baseline_for_seed(1));
        let lines = probability_lines(&probs);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Round of 32: 99.00%");
        assert_eq!(lines[4], "National Champion: 14.00%");
    }

    proptest! {
        #[test]
        fn prop_rounds_non_increasing(seed in 1u32..=16, power in 0.0f64..=1.0) {
            let probs = adjust_probabilities(power, seed, baseline_for_seed(seed));
            let list = probs.as_list();
            for pair in list.windows(2) {
                prop_assert!(pair[1] <= pair[0]);
            }
            for p in list {
                prop_assert!((0.0..=1.0).contains(&p));
            }
        }
    }
}
