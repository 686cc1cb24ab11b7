use pyo3::prelude::*;

use crate::adjust::{adjust_probabilities, probability_lines, RoundProbabilities};
use crate::baselines::baseline_for_seed;
use crate::classify::chance_statement;
use crate::power::calculate_power_score;
use crate::team::TeamStats;

/// Complete evaluation for one team: power score, adjusted round
/// probabilities, and the chance statement for the results panel.
#[pyclass]
#[derive(Clone, Debug)]
pub struct TeamForecast {
    #[pyo3(get)]
    pub power_score: f64,

    #[pyo3(get)]
    pub probabilities: RoundProbabilities,

    #[pyo3(get)]
    pub statement: String,
}

#[pymethods]
impl TeamForecast {
    /// Power score rounded to 3 decimals for display
    pub fn power_score_display(&self) -> f64 {
        (self.power_score * 1_000.0).round() / 1_000.0
    }

    /// One "<round>: <pct>%" line per round
    pub fn summary_lines(&self) -> Vec<String> {
        probability_lines(&self.probabilities)
    }

    fn __str__(&self) -> String {
        let mut out = format!("Power Score: {:.3}\n", self.power_score);
        for line in self.summary_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(&format!("Your team: {}", self.statement));
        out
    }

    fn __repr__(&self) -> String {
        format!(
            "TeamForecast(power_score={:.4}, champ={:.4}, statement={:?})",
            self.power_score, self.probabilities.champ, self.statement
        )
    }
}

/// Run the full evaluation for one team.
///
/// Composes the power score, the seed baseline lookup, the actuarial
/// adjustment, and the chance statement into a single call. Pure and
/// deterministic: identical stats always produce a bit-identical forecast.
pub fn forecast_team(stats: &TeamStats) -> TeamForecast {
    let power_score = calculate_power_score(stats);
    let base = baseline_for_seed(stats.seed);
    let probabilities = adjust_probabilities(power_score, stats.seed, base);
    let statement = chance_statement(probabilities.champ).to_string();

    TeamForecast {
        power_score,
        probabilities,
        statement,
    }
}
