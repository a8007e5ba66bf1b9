mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use flappy_bird::compute::{flap, init_round, tick};
use flappy_bird::entities::{GameStatus, RoundState};
use flappy_bird::score::{default_path, load_high_score, save_high_score};

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run one round to completion.
///
/// Returns `true` → quit program,  `false` → round over, start a fresh one.
///
/// While playing, Space (or ↑ / Enter) flaps.  Once the round has ended the
/// same key acknowledges the game-over screen and requests a restart; the
/// simulation itself is frozen from the death frame onward, so the terminal
/// positions stay on screen until then.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut RoundState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    let mut rng = thread_rng();
    let (mut cols, mut rows) = terminal::size()?;

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    modifiers,
                    ..
                }) => match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Ok(true);
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(true);
                    }
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
                        if state.status == GameStatus::GameOver {
                            return Ok(false);
                        }
                        *state = flap(state);
                    }
                    _ => {}
                },
                Event::Resize(c, r) => {
                    cols = c;
                    rows = r;
                }
                _ => {}
            }
        }

        if state.status == GameStatus::Playing {
            *state = tick(state, &mut rng);
        }

        display::render(out, state, cols, rows)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let score_file = default_path();
    let mut high_score = load_high_score(&score_file);
    let mut rng = thread_rng();

    loop {
        let mut state = init_round(high_score, &mut rng);
        let quit = game_loop(out, &mut state, rx)?;

        if quit {
            // Nothing is persisted on quit beyond prior round-ends.
            break;
        }

        // Round over and acknowledged: persist the new maximum, then restart.
        high_score = state.score.max(high_score);
        save_high_score(&score_file, high_score);
    }
    Ok(())
}
