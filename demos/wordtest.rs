use anyhow::Result;
use std::env;
use std::time::Instant;
use wordfeud_movegen::{Board, Language, Wordlist};
#[cfg(feature = "bincode")]
use wordfeud_movegen::Variant;

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

/// Usage: wordtest [WORDFILE] [RACK]...
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let mut args = env::args().skip(1);
    let wordfile = args
        .next()
        .unwrap_or_else(|| String::from("tests/data/dutch.txt"));
    let mut racks: Vec<String> = args.collect();
    if racks.is_empty() {
        racks = vec![String::from("koetsje"), String::from("mdjenj*")];
    }

    let t0 = Instant::now();
    let board = Board::new(Language::NL).with_state_from_strings(TEST_STATE)?;
    let mut wordlist = Wordlist::new(board.codec());
    #[cfg(feature = "bincode")]
    let variant = if wordfile.ends_with(".bin") {
        // a serialized wordlist: search all of its lists
        wordlist = Wordlist::deserialize_from(&wordfile)?;
        Variant::MAX
    } else {
        wordlist.read_wordlist(&wordfile)?
    };
    #[cfg(not(feature = "bincode"))]
    let variant = wordlist.read_wordlist(&wordfile)?;
    println!("{} took {:?}", wordlist, t0.elapsed());
    println!("{}\n", board);

    for rack in &racks {
        let t0 = Instant::now();
        let mut results = board.calc_all_word_scores(rack, &wordlist, variant)?;
        let dt = t0.elapsed();
        println!(
            "Calc all word scores with {}: {} results in {:?}",
            rack,
            results.len(),
            dt
        );
        // find the best 20 results
        results.sort_by(|a, b| b.score.cmp(&a.score));
        for m in results.iter().take(20) {
            println!(
                "({}, {}, {}, \"{}\", {})",
                m.x,
                m.y,
                m.horizontal,
                board.decode(m.word),
                m.score
            );
        }
    }
    Ok(())
}
