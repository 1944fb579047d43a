use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use std::env;
use std::time::Instant;
use tracing::info;
use wordfeud_movegen::{Board, Language, Letters, Move, TileBag, Wordlist, BINGO_TILES};

const TEST_STATE: &[&str] = &[
    "    t     c   f",
    "    e    he   o",
    "    r   bis g k",
    "    u  bol te v",
    "    gepof dimme",
    "      la vree e",
    "    qua   ene  ",
    "      Spoelen  ",
    "     s a   n   ",
    "     c d we    ",
    "     hadden    ",
    "    nu o   y   ",
    "  wrat siJzen  ",
    "    k     os   ",
    "   zerk   g    ",
];

const SAMPLES: usize = 5;

/// Usage: opponent [WORDFILE] [RACK]
///
/// Plays a best move of RACK, then shows what the opponent could answer with
/// a few racks drawn from the tiles we have not seen.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let mut args = env::args().skip(1);
    let wordfile = args
        .next()
        .unwrap_or_else(|| String::from("tests/data/dutch.txt"));
    let rack = args.next().unwrap_or_else(|| String::from("abelst*"));

    let mut board = Board::new(Language::NL).with_state_from_strings(TEST_STATE)?;
    let mut wordlist = Wordlist::new(board.codec());
    let variant = wordlist.read_wordlist(&wordfile)?;
    let letters: Letters = board.encode(&rack)?;
    // seeded to get reproducible results
    let mut rng = StdRng::seed_from_u64(123);

    let t0 = Instant::now();
    let best = board
        .moves(&rack, &wordlist, variant)?
        .max_by_key(|m| m.score);
    let best = match best {
        Some(m) => m,
        None => {
            println!("no moves with {}", rack);
            return Ok(());
        }
    };
    // before our move: the rack tiles are ours, played or not
    let unseen = TileBag::unseen(&board, &letters);
    println!("we play {}", describe(&board, &best));
    board.play_move(&best)?;
    println!("{}\n", board);

    info!(unseen = unseen.len(), "tiles in the bag or on the opponent's rack");
    println!("unseen: {}", board.codec().decode(&unseen.codes()).concat());
    for _ in 0..SAMPLES {
        let theirs = board.decode(unseen.draw(BINGO_TILES, &mut rng)?);
        let answer = board
            .moves(&theirs, &wordlist, variant)?
            .max_by_key(|m| m.score);
        match answer {
            Some(m) => println!("{}: {}", theirs, describe(&board, &m)),
            None => println!("{}: no moves", theirs),
        }
    }
    println!("took {:?}", t0.elapsed());
    Ok(())
}

fn describe(board: &Board, m: &Move) -> String {
    format!(
        "({}, {}, {}, \"{}\", {})",
        m.x,
        m.y,
        m.horizontal,
        board.decode(m.word),
        m.score
    )
}
