use crate::board::Board;
use crate::tiles::{Letters, List, Row, Word};
use crate::wordlist::{LetterSet, RowData, Variant, Words, Wordlist};
use crate::Error;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// A word that can be played, with its score.
///
/// `x`, `y` is the square of the first letter. Letters of `word` that are already on the
/// board are included, wildcard tiles keep their wildcard flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub x: usize,
    pub y: usize,
    pub horizontal: bool,
    pub word: Word,
    pub score: u32,
}

/// Memo of the legal letters for each crossing word fragment.
///
/// The same fragments show up on many lines of a board, most of them a single
/// empty square.
#[derive(Debug)]
pub struct CrossChecks<'a> {
    wordlist: &'a Wordlist,
    variant: Variant,
    cache: HashMap<Row, LetterSet>,
}

impl<'a> CrossChecks<'a> {
    pub fn new(wordlist: &'a Wordlist, variant: Variant) -> CrossChecks<'a> {
        CrossChecks {
            wordlist,
            variant,
            cache: HashMap::new(),
        }
    }

    /// The letters that can fill the empty square of `fragment`.
    pub fn legal_characters(&mut self, fragment: Row) -> LetterSet {
        let (wordlist, variant) = (self.wordlist, self.variant);
        *self
            .cache
            .entry(fragment)
            .or_insert_with(|| wordlist.get_legal_characters(&fragment, variant))
    }

    /// Legal letters and connected flag for every square of row (or column) `i`.
    ///
    /// A square is connected if the crossing line has a tile next to it. On an empty
    /// board only the centre square is connected.
    pub fn rowdata(&mut self, board: &Board, horizontal: bool, i: usize) -> RowData {
        let center = board.center();
        // the first move must cover the centre square
        let first_move = i == center && board.is_empty();
        let line = board.line(horizontal, i);
        board
            .surrounding_words(horizontal, i)
            .into_iter()
            .enumerate()
            .map(|(j, fragment)| {
                if !line[j].is_empty() {
                    return (LetterSet::new(), true);
                }
                let connected = !fragment.is_empty_cell() || (first_move && j == center);
                (self.legal_characters(fragment), connected)
            })
            .collect()
    }

    /// The number of distinct fragments seen
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Lazy iterator over all moves for a rack: every row from top to bottom, then every
/// column from left to right.
#[derive(Debug)]
pub struct MoveEnumerator<'a> {
    board: &'a Board,
    wordlist: &'a Wordlist,
    variant: Variant,
    letters: Letters,
    cross_checks: CrossChecks<'a>,
    /// next line: rows are 0..N, columns N..2N
    line: usize,
    current: Option<(bool, usize, Words<'a>)>,
}

impl<'a> MoveEnumerator<'a> {
    pub fn new(
        board: &'a Board,
        wordlist: &'a Wordlist,
        variant: Variant,
        letters: Letters,
    ) -> MoveEnumerator<'a> {
        MoveEnumerator {
            board,
            wordlist,
            variant,
            letters,
            cross_checks: CrossChecks::new(wordlist, variant),
            line: 0,
            current: None,
        }
    }

    fn line_words(
        board: &Board,
        wordlist: &'a Wordlist,
        cross_checks: &mut CrossChecks,
        letters: &Letters,
        variant: Variant,
        line: usize,
    ) -> (bool, usize, Words<'a>) {
        let n = board.dim();
        let (horizontal, i) = (line < n, line % n);
        let rowdata = cross_checks.rowdata(board, horizontal, i);
        let row = board.line(horizontal, i);
        let words = wordlist.words(&row, &rowdata, letters, variant, None);
        (horizontal, i, words)
    }

    fn scored(board: &Board, horizontal: bool, i: usize, pos: usize, word: Word) -> Move {
        let (x, y) = if horizontal { (pos, i) } else { (i, pos) };
        let score = board.calc_word_points_unchecked(&word, x, y, horizontal, true);
        Move {
            x,
            y,
            horizontal,
            word,
            score,
        }
    }

    /// All moves on one line, with a cross check memo owned by the caller.
    fn line_moves(
        board: &Board,
        wordlist: &'a Wordlist,
        cross_checks: &mut CrossChecks,
        letters: &Letters,
        variant: Variant,
        line: usize,
    ) -> Vec<Move> {
        let (horizontal, i, words) =
            Self::line_words(board, wordlist, cross_checks, letters, variant, line);
        words
            .map(|(pos, word)| Self::scored(board, horizontal, i, pos, word))
            .collect()
    }
}

impl<'a> Iterator for MoveEnumerator<'a> {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((horizontal, i, words)) = self.current.as_mut() {
                if let Some((pos, word)) = words.next() {
                    return Some(Self::scored(self.board, *horizontal, *i, pos, word));
                }
            }
            if self.line >= 2 * self.board.dim() {
                self.current = None;
                return None;
            }
            self.current = Some(Self::line_words(
                self.board,
                self.wordlist,
                &mut self.cross_checks,
                &self.letters,
                self.variant,
                self.line,
            ));
            self.line += 1;
        }
    }
}

impl Board {
    fn rack(&self, letters: &str) -> Result<Letters, Error> {
        self.encode(&letters.to_lowercase())
    }

    /// Return a lazy iterator over every move that can be played with `letters`, using
    /// the words of `variant`. A `*` in `letters` is a blank tile.
    /// ## Errors
    /// If `letters` can not be encoded.
    /// ## Example
    /// ```
    /// use wordfeud_movegen::{Board, Wordlist};
    /// let board = Board::default();
    /// let wordlist = Wordlist::from_words(&["the", "quick", "brown", "fox"], board.codec())?;
    /// let moves = board.moves("befnrowx", &wordlist, 1)?;
    /// // "brown" and "fox" both cover the centre square in 5 + 3 ways, in two directions
    /// assert_eq!(moves.count(), 16);
    /// # Ok::<(), wordfeud_movegen::Error>(())
    /// ```
    pub fn moves<'a>(
        &'a self,
        letters: &str,
        wordlist: &'a Wordlist,
        variant: Variant,
    ) -> Result<MoveEnumerator<'a>, Error> {
        let letters = self.rack(letters)?;
        Ok(MoveEnumerator::new(self, wordlist, variant, letters))
    }

    /// Calculate the score for each word that can be played on the board with `letters`.
    /// The moves are returned in no particular order.
    /// ## Errors
    /// If `letters` can not be encoded.
    /// ## Examples
    /// ```
    /// # use wordfeud_movegen::{Board, Error, Wordlist};
    /// let board = Board::default();
    /// let wordlist = Wordlist::from_words(&["rust", "rest"], board.codec())?;
    /// let moves = board.calc_all_word_scores("rusta", &wordlist, 1)?;
    /// assert_eq!(moves.len(), 8);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn calc_all_word_scores(
        &self,
        letters: &str,
        wordlist: &Wordlist,
        variant: Variant,
    ) -> Result<Vec<Move>, Error> {
        let letters = self.rack(letters)?;
        let lines = 0..2 * self.dim();
        #[cfg(feature = "rayon")]
        let moves: Vec<Move> = lines
            .into_par_iter()
            .map_init(
                || CrossChecks::new(wordlist, variant),
                |cross_checks, line| {
                    MoveEnumerator::line_moves(self, wordlist, cross_checks, &letters, variant, line)
                },
            )
            .flatten()
            .collect();
        #[cfg(not(feature = "rayon"))]
        let moves: Vec<Move> = {
            let mut cross_checks = CrossChecks::new(wordlist, variant);
            lines
                .flat_map(|line| {
                    MoveEnumerator::line_moves(
                        self,
                        wordlist,
                        &mut cross_checks,
                        &letters,
                        variant,
                        line,
                    )
                })
                .collect()
        };
        debug!(rack = letters.len(), moves = moves.len(), "calculated word scores");
        Ok(moves)
    }
}
