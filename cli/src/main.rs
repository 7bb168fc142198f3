use std::io::{self, BufRead, Write};

use clap::Parser;
use rollcraft_core::{
    BoardGenerator, DismissOutcome, RandomBoardGenerator, RevealOutcome, RoundConfig,
    RoundEngine, RoundEvent,
};

mod command;
mod render;

use command::{Command, HELP};

#[derive(Parser, Debug)]
#[command(version, about = "Reveal tiles, collect cash, avoid the bomb", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print one JSON frame per update instead of drawing the board
    #[arg(long)]
    json: bool,

    /// Accept reveals without waiting for the previous one to be drawn
    #[arg(long)]
    no_hold: bool,
}

/// Terminal stand-in for the animated front-end: it narrates notifications, pauses for the
/// summary the way the animations would, and reports every frame as fully drawn.
struct Presenter<W> {
    out: W,
    json: bool,
    pace: bool,
}

impl<W: Write> Presenter<W> {
    fn new(out: W, json: bool) -> Self {
        Self {
            out,
            json,
            pace: !json,
        }
    }

    fn present<G: BoardGenerator>(&mut self, engine: &mut RoundEngine<G>) -> anyhow::Result<()> {
        let events: Vec<RoundEvent> = engine.drain_events().collect();

        for event in &events {
            match *event {
                RoundEvent::CellRevealed { id, .. } => {
                    engine.clear_highlights();
                    engine.set_highlighted(id, true);
                }
                RoundEvent::Resolved(cause) if self.pace => {
                    log::debug!("Holding summary for {:?}", cause.summary_delay());
                    std::thread::sleep(cause.summary_delay());
                }
                _ => {}
            }
        }

        let snapshot = engine.snapshot();
        if self.json {
            render::write_json_frame(&mut self.out, &events, &snapshot)?;
        } else {
            for line in events.iter().filter_map(render::describe_event) {
                writeln!(self.out, "{}", line)?;
            }
            render::write_board(&mut self.out, &snapshot)?;
            if snapshot.summary_open {
                render::write_summary(&mut self.out, &snapshot)?;
            }
        }
        self.out.flush()?;

        if engine.animation_complete() {
            log::trace!("Frame drawn, accepting input again");
        }
        Ok(())
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        if self.json {
            log::info!("{}", text);
            Ok(())
        } else {
            writeln!(self.out, "{}", text)?;
            self.out.flush()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let config = RoundConfig {
        hold_for_animation: !args.no_hold,
    };
    let mut engine = RoundEngine::with_config(RandomBoardGenerator::from_seed(seed), config);
    let mut presenter = Presenter::new(io::stdout().lock(), args.json);

    presenter.present(&mut engine)?;
    if !args.json {
        presenter.message("type `help` for commands")?;
    }

    for line in io::stdin().lock().lines() {
        let command = match Command::parse(&line?) {
            Ok(command) => command,
            Err(err) => {
                presenter.message(&err.to_string())?;
                continue;
            }
        };

        match command {
            Command::Reveal(coords) => {
                let Some(id) = engine.state().board().cell_at(coords).map(|cell| cell.id())
                else {
                    continue;
                };
                if engine.reveal(id) == RevealOutcome::NoChange {
                    presenter.message("nothing to reveal there")?;
                    continue;
                }
            }
            Command::Claim => {
                if !engine.claim() {
                    presenter.message("reveal a cell first")?;
                    continue;
                }
            }
            Command::Dismiss => match engine.summary_dismissed() {
                DismissOutcome::NotOpen => {
                    presenter.message("no summary to close")?;
                    continue;
                }
                DismissOutcome::Closed | DismissOutcome::NewRound => {}
            },
            Command::NewRound => {
                engine.start_new_round();
            }
            Command::Help => {
                presenter.message(HELP)?;
                continue;
            }
            Command::Redraw => {}
            Command::Quit => break,
        }

        presenter.present(&mut engine)?;
    }

    log::debug!("Leaving after round {}", engine.round());
    Ok(())
}
