use std::io::{self, Write};

use rollcraft_core::*;
use serde::Serialize;

const CELL_WIDTH: usize = 7;

/// One machine-readable update: the notifications since the last frame and the state after them.
#[derive(Serialize)]
struct Frame<'a> {
    events: &'a [RoundEvent],
    snapshot: &'a RoundSnapshot,
}

pub fn write_json_frame(
    out: &mut impl Write,
    events: &[RoundEvent],
    snapshot: &RoundSnapshot,
) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, &Frame { events, snapshot })?;
    writeln!(out)?;
    Ok(())
}

/// One-line narration of a notification, `None` for those the board view already shows.
pub fn describe_event(event: &RoundEvent) -> Option<String> {
    match *event {
        RoundEvent::RoundStarted { round } => Some(format!("-- round {} --", round)),
        RoundEvent::CashCollected { amount, .. } => {
            Some(format!("+{} collected", format_value(amount)))
        }
        RoundEvent::MultiplierApplied { multiplier } => Some(format!(
            "multiplier now {}",
            format_multiplier(multiplier)
        )),
        RoundEvent::Resolved(ResolutionCause::Bomb) => Some("BOOM!".to_string()),
        RoundEvent::Resolved(ResolutionCause::Stop) => Some("STOP".to_string()),
        RoundEvent::Resolved(ResolutionCause::AllCleared) => Some("board cleared".to_string()),
        RoundEvent::CellRevealed { .. } => None,
    }
}

fn cell_face(position: usize, cell: &Cell) -> String {
    let label = if cell.is_revealed() {
        face_label(cell.kind())
    } else {
        format!("[{}]", position)
    };
    if cell.is_highlighted() {
        format!("*{}*", label)
    } else {
        label
    }
}

pub fn write_board(out: &mut impl Write, snapshot: &RoundSnapshot) -> io::Result<()> {
    let balance = format_value(snapshot.payout);
    if snapshot.multiplier > 1 {
        writeln!(
            out,
            "round {}    balance {} ({})",
            snapshot.round,
            balance,
            format_multiplier(snapshot.multiplier)
        )?;
    } else {
        writeln!(out, "round {}    balance {}", snapshot.round, balance)?;
    }

    let side = BOARD_SIDE as usize;
    let separator = format!("+{}", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(side));
    writeln!(out, "{}", separator)?;
    for row in 0..BOARD_SIDE {
        write!(out, "|")?;
        for col in 0..BOARD_SIDE {
            let position = index_of_coords((row, col)).map_or(0, |index| index + 1);
            let face = cell_face(position, &snapshot.board[(row, col)]);
            write!(out, "{:^width$}|", face, width = CELL_WIDTH)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", separator)?;
    }

    write_stats(out, &snapshot.stats)
}

fn write_stats(out: &mut impl Write, stats: &RoundStats) -> io::Result<()> {
    writeln!(
        out,
        "cash {}  x2 {}  zero {}  stop {}  bomb {}",
        stats.cash, stats.multipliers, stats.zeros, stats.stops, stats.bombs
    )
}

pub fn write_summary(out: &mut impl Write, snapshot: &RoundSnapshot) -> io::Result<()> {
    let (title, message, total_label) = match snapshot.phase {
        RoundPhase::Resolved(ResolutionCause::Bomb) => (
            "Danger ahead!",
            Some("You hit a bomb and lose all rewards from this field."),
            "Total lost",
        ),
        RoundPhase::Resolved(ResolutionCause::Stop) => (
            "Game over!",
            Some("You've reached the end of this run..."),
            "Total winnings",
        ),
        RoundPhase::Resolved(ResolutionCause::AllCleared) => {
            ("Results", Some("Every safe cell found!"), "Total winnings")
        }
        RoundPhase::Active => ("Results", None, "Total winnings"),
    };

    writeln!(out, "==== {} ====", title)?;
    if let Some(message) = message {
        writeln!(out, "{}", message)?;
    }
    writeln!(out, "{}: {}", total_label, format_value(snapshot.payout))?;
    if snapshot.multiplier > 1 {
        writeln!(out, "Multiplier: {}", format_multiplier(snapshot.multiplier))?;
    }
    write_stats(out, &snapshot.stats)?;
    if snapshot.is_bomb_exploded() {
        writeln!(out, "type `ok` to take the hit and deal a new board")
    } else if snapshot.phase.is_resolved() {
        writeln!(out, "type `ok` to claim, `new` for another board")
    } else {
        writeln!(out, "type `ok` to keep playing")
    }
}
