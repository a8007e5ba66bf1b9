/// All game entity types — pure data, no logic.

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// The player bird.  Coordinates are logical playfield units (400×600),
/// not terminal cells.
#[derive(Clone, Debug)]
pub struct Bird {
    /// Horizontal position — fixed for the whole round.
    pub x: f64,
    pub y: f64,
    /// Vertical velocity, positive = downward.
    pub velocity: f64,
    /// Collision radius — fixed for the whole round.
    pub radius: f64,
}

/// One pipe pair (top and bottom obstacle sharing a gap).
#[derive(Clone, Debug)]
pub struct Pipe {
    /// Left edge; decreases every frame.
    pub x: f64,
    /// Height of the top obstacle = top edge of the gap.  Drawn once at
    /// creation, never changes.
    pub gap_top: f64,
    /// Set the first frame the bird clears the trailing edge, so the
    /// pipe scores exactly once.
    pub passed: bool,
}

// ── Master round state ────────────────────────────────────────────────────────

/// The entire state of one round.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct RoundState {
    pub bird: Bird,
    /// Live pipes, nearest-to-farthest from the bird.
    pub pipes: Vec<Pipe>,
    pub score: u32,
    /// The best score seen across rounds (display only — persistence is
    /// the driver's job).
    pub high_score: u32,
    pub status: GameStatus,
}
