use crate::constants::{
    ASSISTS_SCALE, BLOCKS_SCALE, MARGIN_SCALE, PPG_SCALE, REBOUND_MARGIN_SCALE, STEALS_SCALE,
};
use crate::team::TeamStats;

/// Calculate a team's composite power score.
///
/// Blends offensive output, defensive disruption, ball security,
/// rebounding, and season record into a single strength rating. Each
/// component is scaled against an elite benchmark before weighting.
///
/// # Arguments
/// * `stats` - Season statistics for the team
///
/// # Returns
/// Power score clamped to [0.0, 1.0]
pub fn calculate_power_score(stats: &TeamStats) -> f64 {
    let win_pct = stats.win_pct();
    let scoring_margin = stats.scoring_margin();

    // Equal-weight proxy for true shooting
    let shooting_proxy = (stats.fg_pct + stats.three_pct + stats.ft_pct) / 3.0;

    let offensive_index = 0.4 * (stats.ppg / PPG_SCALE)
        + 0.3 * shooting_proxy
        + 0.3 * (stats.assists / ASSISTS_SCALE);

    let defensive_index = 0.4 * (scoring_margin / MARGIN_SCALE)
        + 0.3 * (stats.steals / STEALS_SCALE)
        + 0.3 * (stats.blocks / BLOCKS_SCALE);

    // Assist-to-turnover ratio; a turnover-free season reads as 0, not infinity
    let ball_security = if stats.turnovers > 0.0 {
        stats.assists / stats.turnovers
    } else {
        0.0
    };

    let rebounding_index = stats.rebound_margin / REBOUND_MARGIN_SCALE;

    // Ball security enters at half its stated weight (effective 0.075);
    // the halving is intentional, not a typo.
    let raw_power = 0.30 * offensive_index
        + 0.30 * defensive_index
        + 0.15 * ball_security / 2.0
        + 0.15 * rebounding_index
        + 0.10 * win_pct;

    raw_power.clamp(0.0, 1.0)
}
