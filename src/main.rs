//! CLI driver: trains a search tree once, then replays it against a batch
//! of fresh random secrets and reports the guess-count statistics.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use mastermind::logging::setup_logging;
use mastermind::recording::csv_writer::{default_report_path, write_report};
use mastermind::recording::trial::{summarize, TrialRecord};
use mastermind::{
    play_game, run_search, GameParameters, Mastermind, MastermindError, SearchTree,
};

#[derive(Parser, Debug)]
#[command(name = "mastermind", about = "Monte Carlo Tree Search solver for Mastermind")]
struct Config {
    /// Number of pegs in a code
    #[arg(long, default_value_t = 4)]
    code_length: usize,

    /// Number of peg colors
    #[arg(long, default_value_t = 6)]
    num_colors: u8,

    /// Search iterations for the initial training run
    #[arg(short = 'i', long, default_value_t = 1000)]
    iterations: usize,

    /// Search iterations when an unexplored branch is retrained
    #[arg(long, default_value_t = 200)]
    retrain_iterations: usize,

    /// Number of trial games to replay with the trained tree
    #[arg(short = 'g', long, default_value_t = 100)]
    games: usize,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Directory for CSV trial reports (no report is written when absent)
    #[arg(long)]
    report_dir: Option<String>,
}

fn main() -> mastermind::Result<()> {
    setup_logging();
    let config = Config::parse();

    let params = GameParameters::new(config.code_length, config.num_colors);
    if !params.is_valid() {
        return Err(MastermindError::InvalidParameters {
            code_length: params.code_length,
            num_colors: params.num_colors,
        });
    }
    if params.universe_size() > 100_000 {
        log::warn!(
            "candidate universe has {} codes; expect long expansion times",
            params.universe_size()
        );
    }

    let mut rng = StdRng::seed_from_u64(config.seed);

    log::info!(
        "training: {} iterations over a universe of {} codes",
        config.iterations,
        params.universe_size()
    );
    let mut tree = SearchTree::new(params);
    run_search(&mut tree, SearchTree::ROOT, config.iterations, &mut rng)?;
    log::info!("training done: tree holds {} nodes", tree.len());

    let mut records = Vec::with_capacity(config.games);
    for game_index in 0..config.games {
        let mut game = Mastermind::random(params, &mut rng);
        let secret = game.secret().to_string();
        let attempts = play_game(&mut tree, &mut game, config.retrain_iterations, &mut rng)?;
        log::info!("game {game_index}: secret {secret} solved in {attempts} guesses");
        records.push(TrialRecord {
            game: game_index,
            secret,
            attempts,
        });
    }

    let summary = summarize(&records);
    println!(
        "{} games: mean {:.2} guesses, std {:.2}, worst {}",
        summary.games, summary.mean_attempts, summary.std_attempts, summary.max_attempts
    );

    if let Some(report_dir) = &config.report_dir {
        let path = default_report_path(report_dir);
        write_report(&path, &records)?;
        println!("report written to {}", path.display());
    }

    Ok(())
}
