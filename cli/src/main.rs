mod commands;
mod config;
mod game_mode;
mod render;
mod session;

use std::time::Duration;
use clap::Parser;
use tictactoe_engine::tictactoe::{Difficulty, GameEngine, GridSize};
use tictactoe_engine::{SessionRng, log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};

use config::{CONFIG_FILE, Overrides, get_config_manager};
use game_mode::GameMode;
use session::GameSession;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe on 3x3, 4x4 and 5x5 boards")]
struct Args {
    /// Config file, created on --save-config
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Grid size: 3, 4 or 5
    #[arg(long)]
    size: Option<u8>,

    /// two-player or vs-bot
    #[arg(long)]
    mode: Option<GameMode>,

    /// easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Bot thinking time in milliseconds
    #[arg(long)]
    bot_delay_ms: Option<u64>,

    #[arg(long)]
    player_x: Option<String>,

    #[arg(long)]
    player_o: Option<String>,

    /// Seed for reproducible bot moves
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let size = args.size.map(GridSize::try_from).transpose()?;
    let config_manager = get_config_manager(&args.config);
    let config = config_manager.get_config()?.apply(Overrides {
        size,
        mode: args.mode,
        difficulty: args.difficulty,
        bot_delay_ms: args.bot_delay_ms,
        x_name: args.player_x,
        o_name: args.player_o,
        seed: args.seed,
    })?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved config to {}", args.config);
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let engine = GameEngine::new(&config.engine, rng);
    log!(
        "Starting {} game on {} (difficulty {}, seed {})",
        config.game.mode,
        config.engine.grid_size,
        config.game.difficulty,
        engine.rng_seed()
    );

    let mut session = GameSession::new(
        engine,
        config.game.mode,
        config.game.difficulty,
        config.players.to_names(),
        Duration::from_millis(config.game.bot_delay_ms),
    );

    println!("Type 'help' for commands.");
    for line in session.screen() {
        println!("{}", line);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let result = session.handle_line(&line).await;
                for output in &result.output {
                    println!("{}", output);
                }
                if result.quit {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                log!("Interrupted, exiting");
                break;
            }
        }
    }

    log!("Session finished: {:?}", session.engine().scoreboard());
    Ok(())
}
