//! Madness Core - NCAA tournament advancement probability engine.
//!
//! Turns one team's season statistics and tournament seed into estimated
//! advancement probabilities for each round, with Python bindings via PyO3.
//! The pipeline is a sequence of pure functions: a composite power score,
//! a historical seed-baseline lookup, a credibility-limited actuarial
//! adjustment with monotonicity enforcement, and a chance statement.

use pyo3::prelude::*;

pub mod adjust;
pub mod baselines;
pub mod classify;
pub mod constants;
pub mod forecast;
pub mod power;
pub mod team;

pub use adjust::{adjust_probabilities, probability_lines, RoundProbabilities};
pub use baselines::{baseline_for_seed, clamp_seed, BaselineRow, SEED_BASELINES};
pub use classify::{chance_statement, STATEMENTS};
pub use constants::{CREDIBILITY, MAX_BASELINE_SEED, ROUND_LABELS};
pub use forecast::{forecast_team, TeamForecast};
pub use power::calculate_power_score;
pub use team::TeamStats;

/// Calculate a team's composite power score.
///
/// Python-friendly wrapper around the core power score function.
#[pyfunction]
fn py_calculate_power_score(stats: &TeamStats) -> f64 {
    calculate_power_score(stats)
}

/// Run the full evaluation for one team.
#[pyfunction]
fn py_forecast_team(stats: &TeamStats) -> TeamForecast {
    forecast_team(stats)
}

/// Map a championship probability to its chance statement.
#[pyfunction]
fn py_chance_statement(champ_prob: f64) -> &'static str {
    chance_statement(champ_prob)
}

/// Python module definition
#[pymodule]
fn madness_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<TeamStats>()?;
    m.add_class::<RoundProbabilities>()?;
    m.add_class::<TeamForecast>()?;

    // Core functions
    m.add_function(wrap_pyfunction!(py_calculate_power_score, m)?)?;
    m.add_function(wrap_pyfunction!(py_forecast_team, m)?)?;
    m.add_function(wrap_pyfunction!(py_chance_statement, m)?)?;

    // Constants
    m.add("CREDIBILITY", CREDIBILITY)?;
    m.add("MAX_BASELINE_SEED", MAX_BASELINE_SEED)?;
    m.add("ROUND_LABELS", ROUND_LABELS.to_vec())?;
    m.add(
        "SEED_BASELINES",
        SEED_BASELINES
            .iter()
            .map(|row| row.as_array().to_vec())
            .collect::<Vec<_>>(),
    )?;

    Ok(())
}
