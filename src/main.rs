use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{
    EdgePolicy, GridSize, RoundConfig, COUNTDOWN_SECONDS, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
    DEFAULT_TICK_INTERVAL_MS, THEMES,
};
use grid_snake::game::{Round, RoundPhase};
use grid_snake::input::{poll_input, DirectionLatch, GameInput};
use grid_snake::renderer::{render, Overlay};
use grid_snake::terminal_runtime::{install_panic_hook, TerminalSession};
use grid_snake::ui::hud::HudInfo;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Grid snake in the terminal")]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH, value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT, value_parser = clap::value_parser!(u16).range(1..))]
    height: u16,

    /// Wrap around the grid edges instead of ending the round.
    #[arg(long)]
    wrap: bool,

    /// Snake length to grow to at round start.
    #[arg(long = "initial-length", default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    initial_length: u64,

    /// Score the round starts from.
    #[arg(long = "initial-score", default_value_t = 0)]
    initial_score: u32,

    /// Fixed RNG seed for reproducible rounds.
    #[arg(long)]
    seed: Option<u64>,

    /// Gameplay tick interval in milliseconds.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Color theme.
    #[arg(long, default_value = "classic", value_parser = parse_theme_index)]
    theme: usize,
}

fn parse_theme_index(name: &str) -> Result<usize, String> {
    THEMES
        .iter()
        .position(|theme| theme.name == name)
        .ok_or_else(|| {
            let names: Vec<&str> = THEMES.iter().map(|theme| theme.name).collect();
            format!("unknown theme '{name}' (available: {})", names.join(", "))
        })
}

/// Application screens layered around the round lifecycle.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Screen {
    StartMenu,
    Countdown { started_at: Instant },
    Playing,
    Paused,
    RoundOver,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    run(&cli, &mut session)
}

fn run(cli: &Cli, session: &mut TerminalSession) -> io::Result<()> {
    let config = RoundConfig {
        grid: GridSize {
            width: cli.width,
            height: cli.height,
        },
        edge_policy: if cli.wrap {
            EdgePolicy::Toroidal
        } else {
            EdgePolicy::Bounded
        },
        initial_length: usize::try_from(cli.initial_length).unwrap_or(1),
        initial_score: cli.initial_score,
        random_seed: cli.seed,
    };
    let tick_interval = Duration::from_millis(cli.tick_ms);

    let mut round = Round::new(config);
    let mut screen = Screen::StartMenu;
    let mut theme_index = cli.theme;
    let mut session_best = config.initial_score;
    let mut latch = DirectionLatch::default();
    let mut last_tick = Instant::now();

    loop {
        session.terminal_mut().draw(|frame| {
            render(
                frame,
                &round,
                HudInfo {
                    session_best,
                    theme: &THEMES[theme_index],
                },
                overlay_for(screen),
            )
        })?;

        let input = poll_input(INPUT_POLL_INTERVAL)?;
        if input == Some(GameInput::Quit) {
            return Ok(());
        }

        match screen {
            Screen::StartMenu => match input {
                Some(GameInput::Confirm) => {
                    screen = Screen::Countdown {
                        started_at: Instant::now(),
                    };
                }
                Some(GameInput::CycleTheme) => {
                    theme_index = (theme_index + 1) % THEMES.len();
                }
                _ => {}
            },
            Screen::Countdown { started_at } => {
                if started_at.elapsed().as_secs() >= COUNTDOWN_SECONDS {
                    round
                        .start()
                        .expect("countdown only runs over a pending round");
                    latch = DirectionLatch::default();
                    last_tick = Instant::now();
                    screen = next_screen_for_phase(round.phase());
                }
            }
            Screen::Playing => {
                match input {
                    Some(GameInput::Direction(direction)) => latch.offer(direction),
                    Some(GameInput::Pause) => {
                        screen = Screen::Paused;
                        continue;
                    }
                    _ => {}
                }

                if last_tick.elapsed() >= tick_interval {
                    round
                        .tick(latch.take())
                        .expect("playing screen only ticks a running round");
                    last_tick = Instant::now();

                    if round.phase() != RoundPhase::Running {
                        session_best = session_best.max(round.score);
                        screen = Screen::RoundOver;
                    }
                }
            }
            Screen::Paused => {
                if input == Some(GameInput::Pause) {
                    last_tick = Instant::now();
                    screen = Screen::Playing;
                }
            }
            Screen::RoundOver => {
                if input == Some(GameInput::Confirm) {
                    round
                        .reset()
                        .expect("round-over screen always holds an ended round");
                    screen = Screen::Countdown {
                        started_at: Instant::now(),
                    };
                }
            }
        }
    }
}

fn overlay_for(screen: Screen) -> Overlay {
    match screen {
        Screen::StartMenu => Overlay::StartMenu,
        Screen::Countdown { started_at } => Overlay::Countdown {
            seconds_left: COUNTDOWN_SECONDS.saturating_sub(started_at.elapsed().as_secs()),
        },
        Screen::Playing => Overlay::None,
        Screen::Paused => Overlay::Paused,
        Screen::RoundOver => Overlay::RoundOver,
    }
}

/// Start normally lands in `Running`; a degenerate one-cell grid is already
/// won at start and skips straight to the round-over screen.
fn next_screen_for_phase(phase: RoundPhase) -> Screen {
    if phase == RoundPhase::Running {
        Screen::Playing
    } else {
        Screen::RoundOver
    }
}
