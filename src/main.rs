use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use damson_chess::engines::engine_alpha_beta::{AlphaBetaEngine, MAX_DEPTH};
use damson_chess::game_state::game_state::GameState;
use damson_chess::search::alpha_beta::SearchConfig;
use damson_chess::tables::opening_book::load_book;
use damson_chess::uci::uci_top::run_stdio_loop;

#[derive(Parser, Debug)]
#[command(author, version, about = "Alpha-beta chess engine speaking a UCI subset on stdin/stdout", long_about = None)]
struct Args {
    /// Search depth in plies
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_DEPTH)))]
    depth: u8,

    /// Seed for shuffling root moves and weighted book picks
    #[arg(long)]
    seed: Option<u64>,

    /// Opening book TSV (defaults to the built-in repertoire)
    #[arg(long)]
    book: Option<PathBuf>,

    /// Play book moves when the position is in the book
    #[arg(long)]
    own_book: bool,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = match &args.fen {
        Some(fen) => GameState::from_fen(fen).with_context(|| format!("bad --fen '{fen}'"))?,
        None => GameState::new_game(),
    };
    let book = load_book(args.book.as_deref()).context("loading opening book")?;

    let config = SearchConfig {
        depth: args.depth,
        shuffle_seed: args.seed,
    };
    info!("starting: depth {} seed {:?} own book {}", config.depth, config.shuffle_seed, args.own_book);

    let engine = AlphaBetaEngine::new(config, book, args.own_book);
    run_stdio_loop(Box::new(engine), start)?;
    Ok(())
}
