//! Pattern scores for line evaluation
//!
//! Only the ordering between tiers matters; the magnitudes are tuning values.
//! Each row of the table is keyed by run length, each column by how many ends
//! of the run are still open.

/// Score type shared by the evaluator and the search
pub type Score = f64;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row. Returned immediately, never summed.
    pub const FIVE: Score = 1e9;
    /// Sentinel for placing on an occupied cell
    pub const ILLEGAL: Score = -1e18;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: Score = 2e6;
    /// Four with one open end: XOOOO_
    pub const CLOSED_FOUR: Score = 2e5;
    /// Four with both ends blocked
    pub const DEAD_FOUR: Score = 2e5;

    /// Open three: _OOO_
    pub const OPEN_THREE: Score = 4e4;
    /// Closed three: XOOO_
    pub const CLOSED_THREE: Score = 6e3;
    pub const DEAD_THREE: Score = 160.0;

    /// Open two: _OO_
    pub const OPEN_TWO: Score = 600.0;
    pub const CLOSED_TWO: Score = 160.0;
    pub const DEAD_TWO: Score = 30.0;

    /// Lone stone with both sides free
    pub const OPEN_ONE: Score = 36.0;
    pub const CLOSED_ONE: Score = 30.0;
    pub const DEAD_ONE: Score = 6.0;

    /// Penalty per unit of Manhattan distance from the center
    pub const CENTER_PENALTY: Score = 0.5;
}

/// Score of one axis given the run length and the number of open ends.
///
/// Runs of five or more are handled by the caller.
#[inline]
pub fn line_score(count: usize, open_ends: u8) -> Score {
    match (count, open_ends) {
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (4, _) => PatternScore::DEAD_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (3, _) => PatternScore::DEAD_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (2, _) => PatternScore::DEAD_TWO,
        (_, 2) => PatternScore::OPEN_ONE,
        (_, 1) => PatternScore::CLOSED_ONE,
        _ => PatternScore::DEAD_ONE,
    }
}
