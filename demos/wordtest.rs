use anyhow::Result;
use boggle_solver::{points, Board, Dictionary, Path, ScoredWords};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::time::Instant;

const WORDFILE: &str = "wordlists/words.txt";
const SEED: u64 = 2021;

/// Usage: `wordtest [WORDFILE] [TILE ...]`
///
/// Loads the dictionary, deals a board and reveals all words on it.
/// The tile indices, if any, are tapped in order as a player would.
fn run() -> Result<()> {
    env_logger::init();
    let mut args = env::args().skip(1);
    let wordfile = args.next().unwrap_or_else(|| String::from(WORDFILE));
    let taps = args
        .map(|arg| arg.parse::<usize>())
        .collect::<Result<Vec<usize>, _>>()?;

    let t0 = Instant::now();
    let dictionary = Dictionary::from_file_or_empty(&wordfile);
    println!("Create {} took {:?}", dictionary, t0.elapsed());

    let mut board = Board::default().with_dictionary(dictionary);
    board.randomize(&mut StdRng::seed_from_u64(SEED));
    println!("{}\n", board);

    let mut path = Path::new();
    let mut scored = ScoredWords::new();
    for index in taps {
        match board.tap(&mut path, index, &mut scored) {
            Ok(step) => println!("tap {:>2}: {:?}", index, step),
            Err(err) => println!("tap {:>2}: rejected, {}", index, err),
        }
    }
    println!("Score: {} {:?}\n", scored.score(), scored.words());

    let t0 = Instant::now();
    let words = board.enumerate_all();
    let dt = t0.elapsed();
    let total: u32 = words.iter().map(|word| points(word.chars().count())).sum();
    println!("Found {} words worth {} points in {:?}", words.len(), total, dt);
    for word in words.iter().take(20) {
        println!("{:<16} {}", word, points(word.chars().count()));
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
