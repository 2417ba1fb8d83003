use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use mathdash_core::Clock;
use mathdash_core::model::GameType;
use services::{DEFAULT_GAME_SECS, GameLoopService};
use tracing::info;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidGameType { raw: String },
    InvalidSeconds { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidGameType { raw } => write!(f, "invalid --game-type value: {raw}"),
            ArgsError::InvalidSeconds { raw } => write!(f, "invalid --seconds value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    default_game_type: GameType,
    game_loop: Arc<GameLoopService>,
}

impl UiApp for DesktopApp {
    fn default_game_type(&self) -> GameType {
        self.default_game_type
    }

    fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }
}

struct Args {
    game_type: GameType,
    game_secs: u32,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--game-type <slug>] [--seconds <n>]");
    eprintln!();
    eprintln!("Game type slugs:");
    for game_type in GameType::ALL {
        eprintln!("  {game_type}");
    }
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --game-type addition-1-5");
    eprintln!("  --seconds {DEFAULT_GAME_SECS}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MATHDASH_GAME_TYPE, MATHDASH_GAME_SECS");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut game_type = std::env::var("MATHDASH_GAME_TYPE")
            .ok()
            .and_then(|value| value.parse::<GameType>().ok())
            .unwrap_or(GameType::Addition1To5);
        let mut game_secs = std::env::var("MATHDASH_GAME_SECS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(DEFAULT_GAME_SECS);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--game-type" => {
                    let value = require_value(args, "--game-type")?;
                    game_type = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidGameType { raw: value.clone() })?;
                }
                "--seconds" => {
                    let value = require_value(args, "--seconds")?;
                    game_secs = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeconds { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            game_type,
            game_secs,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let clock = Clock::default_clock();
    let game_loop = Arc::new(GameLoopService::new(clock).with_duration_secs(parsed.game_secs));
    info!(game_type = %parsed.game_type, secs = parsed.game_secs, "launching");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        default_game_type: parsed.game_type,
        game_loop,
    });
    let context = build_app_context(&app);

    // tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Math Dash")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
