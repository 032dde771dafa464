use clap::Parser;
use log::{info, warn};

use game2048::game::{
    Direction, GameSession, RandomSource, SeededRandom, ThreadRandom, DEFAULT_SIZE, TARGET_TILE,
};
use game2048::logging::setup_logging;

#[derive(Parser, Debug)]
#[command(name = "game2048")]
struct Config {
    /// Number of games to play
    #[arg(short = 'g', long, default_value_t = 10)]
    num_games: usize,

    /// Board side length
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Seed for reproducible runs (thread RNG when omitted)
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Safety cap on moves per game
    #[arg(long, default_value_t = 100_000)]
    max_moves: usize,

    /// Print the final board of every game
    #[arg(long, default_value_t = false)]
    show_boards: bool,
}

fn main() {
    setup_logging();
    let config = Config::parse();

    let mut total_score: u64 = 0;
    let mut best_tile = 0;
    let mut reached_target = 0;

    for game_idx in 0..config.num_games {
        let mut session = match config.seed {
            Some(seed) => GameSession::seeded(config.size, seed.wrapping_add(game_idx as u64)),
            None => GameSession::with_random_source(config.size, Box::new(ThreadRandom)),
        };
        let mut policy: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(SeededRandom::new(!seed.wrapping_add(game_idx as u64))),
            None => Box::new(ThreadRandom),
        };

        let mut moves_tried = 0;
        let mut won = false;
        while !session.is_over() && moves_tried < config.max_moves {
            let direction = Direction::ALL[policy.uniform_int(Direction::ALL.len())];
            match session.apply_move(direction) {
                Ok(outcome) => won |= outcome.reached_target,
                Err(err) => {
                    warn!("game {game_idx}: {err}");
                    break;
                }
            }
            moves_tried += 1;
        }

        let record = session.record();
        info!(
            "game {game_idx} finished: {}",
            serde_json::to_string(&record).unwrap_or_default()
        );
        if config.show_boards {
            println!("game {game_idx}:\n{}", session.board());
        }
        println!("game {game_idx}: {record}");

        total_score += u64::from(record.score);
        best_tile = best_tile.max(record.largest_tile);
        if won {
            reached_target += 1;
        }
    }

    let games = config.num_games.max(1) as u64;
    println!(
        "{} games, average score {}, best tile {}, reached {} in {} games",
        config.num_games,
        total_score / games,
        best_tile,
        TARGET_TILE,
        reached_target
    );
}
