use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Season box-score statistics for a single tournament team.
///
/// Shooting percentages are fractions in [0, 1] by convention. Per-game
/// values are season averages as reported by the host form; they are not
/// re-validated beyond finiteness.
#[pyclass]
#[derive(Clone, Debug)]
pub struct TeamStats {
    /// Tournament seed, 1 (strongest) through 16
    #[pyo3(get, set)]
    pub seed: u32,

    #[pyo3(get, set)]
    pub wins: u32,

    #[pyo3(get, set)]
    pub losses: u32,

    /// Points scored per game
    #[pyo3(get, set)]
    pub ppg: f64,

    /// Points allowed per game
    #[pyo3(get, set)]
    pub opp_ppg: f64,

    #[pyo3(get, set)]
    pub fg_pct: f64,

    #[pyo3(get, set)]
    pub three_pct: f64,

    #[pyo3(get, set)]
    pub ft_pct: f64,

    #[pyo3(get, set)]
    pub rebounds_per_game: f64,

    /// Rebound margin versus opponents; negative for out-rebounded teams
    #[pyo3(get, set)]
    pub rebound_margin: f64,

    #[pyo3(get, set)]
    pub assists: f64,

    #[pyo3(get, set)]
    pub turnovers: f64,

    #[pyo3(get, set)]
    pub steals: f64,

    #[pyo3(get, set)]
    pub blocks: f64,
}

#[pymethods]
impl TeamStats {
    /// Create a new TeamStats record.
    ///
    /// Rejects seed 0 (seeds start at 1) and any non-finite statistic;
    /// everything past that gate is handled by the engine's documented
    /// fallbacks, so the calculation itself never fails.
    #[new]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        seed: u32,
        wins: u32,
        losses: u32,
        ppg: f64,
        opp_ppg: f64,
        fg_pct: f64,
        three_pct: f64,
        ft_pct: f64,
        rebounds_per_game: f64,
        rebound_margin: f64,
        assists: f64,
        turnovers: f64,
        steals: f64,
        blocks: f64,
    ) -> PyResult<Self> {
        if seed < 1 {
            return Err(PyValueError::new_err("seed must be at least 1"));
        }

        for (name, value) in [
            ("ppg", ppg),
            ("opp_ppg", opp_ppg),
            ("fg_pct", fg_pct),
            ("three_pct", three_pct),
            ("ft_pct", ft_pct),
            ("rebounds_per_game", rebounds_per_game),
            ("rebound_margin", rebound_margin),
            ("assists", assists),
            ("turnovers", turnovers),
            ("steals", steals),
            ("blocks", blocks),
        ] {
            if !value.is_finite() {
                return Err(PyValueError::new_err(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        Ok(TeamStats {
            seed,
            wins,
            losses,
            ppg,
            opp_ppg,
            fg_pct,
            three_pct,
            ft_pct,
            rebounds_per_game,
            rebound_margin,
            assists,
            turnovers,
            steals,
            blocks,
        })
    }

    /// Season win percentage, 0.0 for a team with no games played.
    pub fn win_pct(&self) -> f64 {
        let games = self.wins + self.losses;
        if games > 0 {
            self.wins as f64 / games as f64
        } else {
            0.0
        }
    }

    /// Average scoring margin per game.
    pub fn scoring_margin(&self) -> f64 {
        self.ppg - self.opp_ppg
    }

    /// Create a copy of this record
    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn __str__(&self) -> String {
        format!(
            "seed {}: {}-{} | {:.1}/{:.1} ppg | {:+.1} reb margin",
            self.seed, self.wins, self.losses, self.ppg, self.opp_ppg, self.rebound_margin
        )
    }

    fn __repr__(&self) -> String {
        format!(
            "TeamStats(seed={}, wins={}, losses={}, ppg={}, opp_ppg={})",
            self.seed, self.wins, self.losses, self.ppg, self.opp_ppg
        )
    }
}
