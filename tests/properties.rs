use anyhow::Result;
use std::collections::HashSet;
use std::convert::TryFrom;
use wordfeud_movegen::{
    Board, Item, Language, List, Move, Tile, Variant, Word, Wordlist, BINGO_BONUS, BINGO_TILES,
};

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

const RACKS: &[&str] = &["abelst*", "aelnst", "eehjnot"];

fn data_file(name: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn dutch_game() -> Result<(Board, Wordlist, Variant)> {
    let board = Board::new(Language::NL).with_state_from_strings(TEST_STATE)?;
    let mut wordlist = Wordlist::new(board.codec());
    let variant = wordlist.read_wordlist(&data_file("dutch.txt"))?;
    Ok((board, wordlist, variant))
}

fn index(m: &Move) -> (usize, usize) {
    if m.horizontal {
        (m.y, m.x)
    } else {
        (m.x, m.y)
    }
}

fn summary(board: &Board, moves: &[Move]) -> HashSet<(String, u32)> {
    moves
        .iter()
        .map(|m| (board.decode(m.word), m.score))
        .collect()
}

#[test]
fn new_tiles_go_on_empty_squares() -> Result<()> {
    let (board, wordlist, variant) = dutch_game()?;
    let mut total = 0;
    for rack in RACKS {
        for m in board.moves(rack, &wordlist, variant)? {
            let placements = board.placements(&m.word, m.x, m.y, m.horizontal)?;
            assert!(!placements.is_empty(), "{:?}", m);
            assert!(placements.len() <= rack.chars().count());
            for p in placements {
                assert!(!board.is_occupied(p.x, p.y));
            }
            total += 1;
        }
    }
    assert_eq!(total, 176 + 41 + 16);
    Ok(())
}

#[test]
fn played_moves_read_back() -> Result<()> {
    let (board, wordlist, variant) = dutch_game()?;
    let n = board.dim();
    for m in board.calc_all_word_scores("abelst*", &wordlist, variant)? {
        let mut after = board.clone();
        let placements = after.play_move(&m)?;
        let (i, pos) = index(&m);
        let line = after.line(m.horizontal, i);
        let len = m.word.len();
        let tiles: Vec<Option<Tile>> = line[pos..pos + len].iter().map(|c| c.tile()).collect();
        let expected: Vec<Option<Tile>> = m.word.iter().map(|&t| Some(t)).collect();
        assert_eq!(tiles, expected);
        // the word can not be extended on either side
        assert!(pos == 0 || line[pos - 1].is_empty());
        assert!(pos + len == n || line[pos + len].is_empty());
        assert!(wordlist.is_word(m.word.codes(), variant));

        // every crossing word that was made is a word too
        for p in placements {
            let (cross, ci) = if m.horizontal { (p.x, p.y) } else { (p.y, p.x) };
            let crossing = after.line(!m.horizontal, cross);
            let (s, e) = crossing.start_end(ci);
            if e - s > 1 {
                let codes: Vec<u8> = crossing[s..e].iter().map(|c| c.code()).collect();
                assert!(wordlist.is_word(&codes, variant), "{:?}", codes);
            }
        }
    }
    Ok(())
}

#[test]
fn scores_do_not_depend_on_case_of_occupied_squares() -> Result<()> {
    let (board, wordlist, variant) = dutch_game()?;
    for rack in RACKS {
        for m in board.moves(rack, &wordlist, variant)? {
            let score = board.calc_word_points(&m.word, m.x, m.y, m.horizontal, true)?;
            assert_eq!(score, m.score);
            let (i, pos) = index(&m);
            let line = board.line(m.horizontal, i);
            // flip the wildcard flag of every tile that is already on the board
            let flipped: Word = m
                .word
                .iter()
                .enumerate()
                .map(|(k, &tile)| {
                    if line[pos + k].is_empty() {
                        tile
                    } else if tile.is_wildcard() {
                        Tile::try_from(tile.label()).unwrap()
                    } else {
                        Tile::wildcard_from_letter(tile.label())
                    }
                })
                .collect();
            let again = board.calc_word_points(&flipped, m.x, m.y, m.horizontal, true)?;
            assert_eq!(again, m.score);
        }
    }
    Ok(())
}

#[test]
fn bingo_for_seven_new_tiles() -> Result<()> {
    // a board without bonus squares
    let board = Board::new(Language::NL).with_quarter_board(&[
        "-- -- -- -- --",
        "-- -- -- -- --",
        "-- -- -- -- --",
        "-- -- -- -- --",
        "-- -- -- -- ss",
    ])?;
    let mut wordlist = Wordlist::new(board.codec());
    let variant = wordlist.read_wordlist(&data_file("dutch.txt"))?;
    let moves = board.calc_all_word_scores("eehjnot", &wordlist, variant)?;
    assert_eq!(moves.len(), 30);
    let tileset = board.tileset();
    for m in &moves {
        let points: u32 = m.word.iter().map(|t| tileset.points(t.code())).sum();
        let bonus = if m.word.len() >= BINGO_TILES {
            BINGO_BONUS
        } else {
            0
        };
        assert_eq!(m.score, points + bonus);
    }
    let hoentje = moves
        .iter()
        .find(|m| board.decode(m.word) == "hoentje")
        .map(|m| m.score);
    assert_eq!(hoentje, Some(54));
    Ok(())
}

#[test]
fn moves_connect_to_tiles() -> Result<()> {
    let (board, wordlist, variant) = dutch_game()?;
    let occupied = |x: usize, y: usize| board.is_occupied(x, y);
    for m in board.moves("abelst*", &wordlist, variant)? {
        let placements = board.placements(&m.word, m.x, m.y, m.horizontal)?;
        let uses_board_tile = placements.len() < m.word.len();
        let touches = placements.iter().any(|p| {
            occupied(p.x + 1, p.y)
                || occupied(p.x, p.y + 1)
                || (p.x > 0 && occupied(p.x - 1, p.y))
                || (p.y > 0 && occupied(p.x, p.y - 1))
        });
        assert!(uses_board_tile || touches, "{:?}", m);
    }
    Ok(())
}

#[test]
fn first_move_covers_the_centre() -> Result<()> {
    let board = Board::default();
    let mut wordlist = Wordlist::new(board.codec());
    let variant = wordlist.read_wordlist(&data_file("english.txt"))?;
    let moves = board.calc_all_word_scores("beasts", &wordlist, variant)?;
    assert!(!moves.is_empty());
    for m in &moves {
        let placements = board.placements(&m.word, m.x, m.y, m.horizontal)?;
        assert!(placements.iter().any(|p| p.x == 7 && p.y == 7), "{:?}", m);
    }
    Ok(())
}

#[test]
fn cat_on_an_empty_board() -> Result<()> {
    let board = Board::default();
    let wordlist = Wordlist::from_words(&["cat"], board.codec())?;
    let moves = board.calc_all_word_scores("cat", &wordlist, 1)?;
    // three offsets through the centre, in both directions
    assert_eq!(moves.len(), 6);
    let expected: HashSet<(String, u32)> = [(String::from("cat"), 6)].iter().cloned().collect();
    assert_eq!(summary(&board, &moves), expected);
    Ok(())
}

#[test]
fn wildcards_score_nothing() -> Result<()> {
    let board = Board::default();
    let mut wordlist = Wordlist::new(board.codec());
    let variant = wordlist.read_wordlist(&data_file("english.txt"))?;
    let moves = board.calc_all_word_scores("c*t", &wordlist, variant)?;
    assert_eq!(moves.len(), 20);
    let expected: HashSet<(String, u32)> = [("tA", 1), ("At", 1), ("Act", 5), ("cAt", 5)]
        .iter()
        .map(|&(w, s)| (String::from(w), s))
        .collect();
    assert_eq!(summary(&board, &moves), expected);
    Ok(())
}

#[test]
fn word_lists_are_kept_apart() -> Result<()> {
    let board = Board::default();
    let mut wordlist = Wordlist::new(board.codec());
    let english = wordlist.read_wordlist(&data_file("english.txt"))?;
    let dutch = wordlist.read_wordlist(&data_file("dutch.txt"))?;
    assert_eq!((english, dutch), (1, 2));
    // loading a list twice changes nothing
    assert_eq!(wordlist.read_wordlist(&data_file("english.txt"))?, english);

    let count = |rack: &str, variant: Variant| -> Result<usize> {
        Ok(board.moves(rack, &wordlist, variant)?.count())
    };
    assert_eq!(count("cat", english)?, 20);
    assert_eq!(count("cat", dutch)?, 0);
    assert_eq!(count("cat", english | dutch)?, 20);
    assert_eq!(count("bestla", english)?, 132);
    assert_eq!(count("bestla", dutch)?, 146);
    assert_eq!(count("bestla", english | dutch)?, 264);
    Ok(())
}

#[test]
fn swedish_letters() -> Result<()> {
    let board = Board::new(Language::SE);
    let mut wordlist = Wordlist::new(board.codec());
    let variant = wordlist.read_wordlist(&data_file("svenska.txt"))?;
    let moves = board.calc_all_word_scores("öläå", &wordlist, variant)?;
    assert_eq!(moves.len(), 4);
    let expected: HashSet<(String, u32)> = [(String::from("öl"), 6)].iter().cloned().collect();
    assert_eq!(summary(&board, &moves), expected);
    Ok(())
}

#[test]
fn enumeration_is_lazy() -> Result<()> {
    let (board, wordlist, variant) = dutch_game()?;
    let first: Vec<Move> = board.moves("abelst*", &wordlist, variant)?.take(3).collect();
    assert_eq!(first.len(), 3);
    let all: Vec<Move> = board.moves("abelst*", &wordlist, variant)?.collect();
    assert_eq!(&all[..3], &first[..]);
    Ok(())
}
