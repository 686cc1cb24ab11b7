/// Points-per-game scale for an elite offense
pub const PPG_SCALE: f64 = 90.0;

/// Assists-per-game scale for an elite passing team
pub const ASSISTS_SCALE: f64 = 20.0;

/// Scoring-margin scale for a dominant team
pub const MARGIN_SCALE: f64 = 25.0;

/// Steals-per-game scale for an elite pressure defense
pub const STEALS_SCALE: f64 = 10.0;

/// Blocks-per-game scale for an elite rim defense
pub const BLOCKS_SCALE: f64 = 6.0;

/// Rebound-margin scale for a dominant rebounding team
pub const REBOUND_MARGIN_SCALE: f64 = 15.0;

/// Credibility factor limiting how far the power score can move
/// probabilities away from the historical seed baselines
pub const CREDIBILITY: f64 = 0.12;

/// Seeds above this share the weakest baseline row (history is too
/// sparse below the 8 line to split them out)
pub const MAX_BASELINE_SEED: u32 = 8;

/// Display labels for the five advancement rounds, in round order
pub const ROUND_LABELS: [&str; 5] = [
    "Round of 32",
    "Sweet 16",
    "Elite 8",
    "Final Four",
    "National Champion",
];
