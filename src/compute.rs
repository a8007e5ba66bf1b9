/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `RoundState` (and, where needed, an RNG handle) and returns a brand-new
/// `RoundState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::entities::{Bird, GameStatus, Pipe, RoundState};

// ── Tuning constants (logical playfield units) ───────────────────────────────

pub const WIDTH: f64 = 400.0;
pub const HEIGHT: f64 = 600.0;

pub const GRAVITY: f64 = 0.5;
pub const FLAP_STRENGTH: f64 = -10.0;

pub const PIPE_WIDTH: f64 = 70.0;
pub const PIPE_GAP: f64 = 200.0;
pub const PIPE_SPEED: f64 = 3.0;
pub const PIPE_SPAWN_DISTANCE: f64 = 250.0;

pub const BIRD_RADIUS: f64 = 20.0;
pub const BIRD_START_X: f64 = 80.0;

/// Minimum obstacle height above and below the gap.
pub const GAP_TOP_MARGIN: f64 = 150.0;

/// Horizontal offset of the very first pipe past the right edge, giving the
/// player a moment before the first obstacle arrives.
pub const FIRST_PIPE_LEAD: f64 = 200.0;

// ── Geometry ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Axis-aligned overlap with strict inequalities: rectangles that merely
/// touch along an edge do not collide.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// The bird collides as the square bounding box of its circle.  The loose
/// box (corners included) is intentional — gameplay is tuned around it.
pub fn bird_rect(bird: &Bird) -> Rect {
    Rect {
        x: bird.x - bird.radius,
        y: bird.y - bird.radius,
        w: bird.radius * 2.0,
        h: bird.radius * 2.0,
    }
}

pub fn pipe_top_rect(pipe: &Pipe) -> Rect {
    Rect {
        x: pipe.x,
        y: 0.0,
        w: PIPE_WIDTH,
        h: pipe.gap_top,
    }
}

pub fn pipe_bottom_rect(pipe: &Pipe) -> Rect {
    Rect {
        x: pipe.x,
        y: pipe.gap_top + PIPE_GAP,
        w: PIPE_WIDTH,
        h: HEIGHT - pipe.gap_top - PIPE_GAP,
    }
}

pub fn pipe_collides(pipe: &Pipe, bird: &Bird) -> bool {
    let b = bird_rect(bird);
    rects_overlap(&b, &pipe_top_rect(pipe)) || rects_overlap(&b, &pipe_bottom_rect(pipe))
}

/// A pipe leaves the playfield once its trailing edge crosses the left edge.
pub fn pipe_off_screen(pipe: &Pipe) -> bool {
    pipe.x + PIPE_WIDTH < 0.0
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Spawn a pipe at horizontal position `x`, drawing the gap-top uniformly
/// (inclusive on both ends) from `[150, HEIGHT - 150 - PIPE_GAP]`.  The
/// inclusive range means a tuning where the bounds coincide still works and
/// simply yields the lower bound every time.
pub fn new_pipe(x: f64, rng: &mut impl Rng) -> Pipe {
    let lo = GAP_TOP_MARGIN as i32;
    let hi = (HEIGHT - GAP_TOP_MARGIN - PIPE_GAP) as i32;
    Pipe {
        x,
        gap_top: rng.gen_range(lo..=hi) as f64,
        passed: false,
    }
}

/// Build the initial state for a round: bird at rest mid-screen, one pipe
/// ahead of the right edge, score zero.
pub fn init_round(high_score: u32, rng: &mut impl Rng) -> RoundState {
    RoundState {
        bird: Bird {
            x: BIRD_START_X,
            y: HEIGHT / 2.0,
            velocity: 0.0,
            radius: BIRD_RADIUS,
        },
        pipes: vec![new_pipe(WIDTH + FIRST_PIPE_LEAD, rng)],
        score: 0,
        high_score,
        status: GameStatus::Playing,
    }
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

/// Apply the flap impulse: velocity is *set* to the flap constant, never
/// accumulated, so mashing the key cannot launch the bird.
pub fn flap(state: &RoundState) -> RoundState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }
    RoundState {
        bird: Bird {
            velocity: FLAP_STRENGTH,
            ..state.bird.clone()
        },
        ..state.clone()
    }
}

/// One step of bird physics: gravity is added to the velocity first, then
/// the *updated* velocity moves the bird.
pub fn step_bird(bird: &Bird) -> Bird {
    let velocity = bird.velocity + GRAVITY;
    Bird {
        y: bird.y + velocity,
        velocity,
        ..bird.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ───────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Once the round is over the state is frozen: no physics, scoring, or
/// spawning happens until the driver starts a fresh round.  The tick that
/// *causes* game-over still runs in full, so the frame renders the terminal
/// positions.
pub fn tick(state: &RoundState, rng: &mut impl Rng) -> RoundState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    // ── 1. Bird physics ──────────────────────────────────────────────────────
    let bird = step_bird(&state.bird);

    // ── 2. Ground / ceiling ──────────────────────────────────────────────────
    let mut dead = bird.y + bird.radius > HEIGHT || bird.y - bird.radius < 0.0;

    // ── 3. Advance pipes, collide, score ─────────────────────────────────────
    let mut score = state.score;
    let mut pipes: Vec<Pipe> = state
        .pipes
        .iter()
        .map(|p| Pipe {
            x: p.x - PIPE_SPEED,
            ..p.clone()
        })
        .collect();

    for pipe in &mut pipes {
        if pipe_collides(pipe, &bird) {
            dead = true;
        }
        // Score the first frame the trailing edge clears the bird's column.
        if !pipe.passed && pipe.x + PIPE_WIDTH < bird.x {
            pipe.passed = true;
            score += 1;
        }
    }

    // ── 4. Cull pipes fully past the left edge ───────────────────────────────
    pipes.retain(|p| !pipe_off_screen(p));

    // ── 5. Spawn once the newest pipe is far enough in ───────────────────────
    let should_spawn = match pipes.last() {
        None => true,
        Some(last) => last.x < WIDTH - PIPE_SPAWN_DISTANCE,
    };
    if should_spawn {
        pipes.push(new_pipe(WIDTH, rng));
    }

    RoundState {
        bird,
        pipes,
        score,
        status: if dead {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        },
        ..state.clone()
    }
}
