/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// round state.  No game logic is performed; this module only translates
/// state into terminal commands.  The simulation's logical 400×600
/// playfield is scaled onto whatever cell grid the terminal provides.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use flappy_bird::compute::{HEIGHT, PIPE_GAP, PIPE_WIDTH, WIDTH};
use flappy_bird::entities::{GameStatus, Pipe, RoundState};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::Rgb { r: 135, g: 206, b: 235 };
const C_PIPE: Color = Color::Green;
const C_PIPE_EDGE: Color = Color::DarkGreen;
const C_BIRD: Color = Color::Yellow;
const C_HUD_SCORE: Color = Color::White;
const C_HUD_BEST: Color = Color::Grey;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame onto a `cols` × `rows` terminal.
pub fn render<W: Write>(
    out: &mut W,
    state: &RoundState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    // Clearing with the sky colour set paints the background fill.
    out.queue(style::SetBackgroundColor(C_SKY))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for pipe in &state.pipes {
        draw_pipe(out, pipe, cols, rows)?;
    }
    draw_bird(out, state, cols, rows)?;
    draw_hud(out, state, cols)?;
    draw_controls_hint(out, rows)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, cols, rows)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Coordinate mapping ────────────────────────────────────────────────────────

fn to_col(x: f64, cols: u16) -> i32 {
    (x * cols as f64 / WIDTH).round() as i32
}

fn to_row(y: f64, rows: u16) -> i32 {
    (y * rows as f64 / HEIGHT).round() as i32
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_pipe<W: Write>(out: &mut W, pipe: &Pipe, cols: u16, rows: u16) -> std::io::Result<()> {
    let first = to_col(pipe.x, cols);
    let last = to_col(pipe.x + PIPE_WIDTH, cols) - 1;
    let gap_top_row = to_row(pipe.gap_top, rows);
    let gap_bot_row = to_row(pipe.gap_top + PIPE_GAP, rows);

    for col in first.max(0)..=last.min(cols as i32 - 1) {
        // Edge columns get the darker shade, standing in for the
        // original's outlined border.
        let shade = if col == first || col == last {
            C_PIPE_EDGE
        } else {
            C_PIPE
        };
        out.queue(style::SetForegroundColor(shade))?;

        for row in 0..gap_top_row.min(rows as i32) {
            out.queue(cursor::MoveTo(col as u16, row as u16))?;
            out.queue(Print("█"))?;
        }
        for row in gap_bot_row.max(0)..rows as i32 {
            out.queue(cursor::MoveTo(col as u16, row as u16))?;
            out.queue(Print("█"))?;
        }
    }
    Ok(())
}

fn draw_bird<W: Write>(out: &mut W, state: &RoundState, cols: u16, rows: u16) -> std::io::Result<()> {
    let col = to_col(state.bird.x, cols).clamp(0, cols as i32 - 1);
    let row = to_row(state.bird.y, rows).clamp(0, rows as i32 - 1);

    out.queue(cursor::MoveTo(col as u16, row as u16))?;
    out.queue(style::SetForegroundColor(C_BIRD))?;
    // Filled circle with an off-centre dot for the eye.
    out.queue(Print("◉"))?;
    Ok(())
}

// ── HUD (top rows) ────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &RoundState, cols: u16) -> std::io::Result<()> {
    let score_str = state.score.to_string();
    let cx = cols / 2;

    out.queue(cursor::MoveTo(
        cx.saturating_sub(score_str.chars().count() as u16 / 2),
        0,
    ))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&score_str))?;

    let best_str = format!("Best: {}", state.high_score);
    out.queue(cursor::MoveTo(
        cx.saturating_sub(best_str.chars().count() as u16 / 2),
        1,
    ))?;
    out.queue(style::SetForegroundColor(C_HUD_BEST))?;
    out.queue(Print(&best_str))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE : Flap   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &RoundState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let score_line = format!("Score: {:>5}", state.score);
    let best_score = state.high_score.max(state.score);
    let best_line = if state.score >= state.high_score && state.score > 0 {
        format!("★ NEW BEST: {:>5} ★", best_score)
    } else {
        format!("Best:  {:>5}", best_score)
    };

    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
    ];
    let best_color = if state.score >= state.high_score && state.score > 0 {
        Color::Yellow
    } else {
        C_HUD_BEST
    };

    let cx = cols / 2;
    let total_rows = lines.len() + 3; // 3 box lines + score + best + hint
    let start_row = (rows / 2).saturating_sub(total_rows as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let best_row = score_row + 1;
    let col = cx.saturating_sub(best_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, best_row))?;
    out.queue(style::SetForegroundColor(best_color))?;
    out.queue(Print(&best_line))?;

    let hint = "SPACE - Play Again  Q - Quit";
    let hint_row = best_row + 1;
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, hint_row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;

    Ok(())
}
