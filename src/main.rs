use anyhow::Context;
use clap::Parser;
use cubey::{
    CubeBot, Difficulty, Game, GameConfig, GameMode, MoveOutcome, Player, RandomBot, Rules,
    SearchMode,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Plays the minimax engine against a random opponent and reports results.
#[derive(Parser, Debug)]
#[command(name = "cubey", version, about)]
struct Cli {
    /// Engine difficulty: 1 (depth 2), 2 (depth 4) or 3 (depth 6) [default: 1]
    #[arg(short, long)]
    difficulty: Option<u8>,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Seed for both the engine jitter and the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// How the search depth is used [default: first-completed-depth]
    #[arg(long, value_enum)]
    search: Option<SearchMode>,

    /// Which lines count as a win [default: classic]
    #[arg(long, value_enum)]
    rules: Option<Rules>,

    /// Jitter added to root move scores
    #[arg(long)]
    jitter: Option<i32>,

    /// JSON config file; command line flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    games: u32,
    computer_wins: u32,
    human_wins: u32,
    ties: u32,
    moves: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli)?;
    let mut opponent = match config.seed {
        Some(seed) => RandomBot::with_seed(seed.wrapping_add(1)),
        None => RandomBot::new(),
    };

    let mut game = Game::with_config(config).context("invalid configuration")?;
    let mut summary = Summary::default();

    for round in 1..=cli.games {
        if round > 1 {
            game.reset();
        }
        let (winner, moves) = play_one(&mut game, &mut opponent)?;
        tracing::info!(round, winner = ?winner, moves, "game finished");

        summary.games += 1;
        summary.moves += moves;
        match winner {
            Some(Player::Computer) => summary.computer_wins += 1,
            Some(Player::Human) => summary.human_wins += 1,
            None => summary.ties += 1,
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} games: computer ({}) {} / {} ({}) {} / ties {} ({} moves)",
            summary.games,
            Player::Computer.symbol(),
            summary.computer_wins,
            opponent.name(),
            Player::Human.symbol(),
            summary.human_wins,
            summary.ties,
            summary.moves
        );
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> anyhow::Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    config.mode = GameMode::SinglePlayer;
    if let Some(level) = cli.difficulty {
        config.difficulty = Difficulty::from_level_or_default(level);
    }
    if let Some(search_mode) = cli.search {
        config.search_mode = search_mode;
    }
    if let Some(rules) = cli.rules {
        config.rules = rules;
    }
    if let Some(jitter) = cli.jitter {
        config.jitter = jitter;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    Ok(config)
}

/// Plays until the game ends. The random bot takes the human side.
fn play_one(game: &mut Game, opponent: &mut RandomBot) -> anyhow::Result<(Option<Player>, u64)> {
    let mut moves = 0;
    loop {
        let outcome = match game.current_player() {
            Player::Human => {
                let coords = opponent
                    .choose_move(game.board())
                    .context("opponent found no empty cell")?;
                let (x, y, z) = coords.to_one_based();
                game.apply_human_move(x.into(), y.into(), z.into())?
            }
            Player::Computer => game.apply_computer_move()?,
        };
        moves += 1;

        match outcome {
            MoveOutcome::Continue { .. } => {}
            MoveOutcome::GameOver { winner, .. } => return Ok((winner, moves)),
            MoveOutcome::AlreadyEnded => anyhow::bail!("game ended without a final move"),
        }
    }
}
