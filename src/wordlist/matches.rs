use crate::labelset::LabelSet;
use crate::tiles::{Letters, List, Row, Tile, Word};
use crate::wordlist::{RowData, Variant, Wordlist};
use std::iter::Iterator;

/// Iterator over the words that can be formed from one start position in a row.
///
/// The search walks the trie depth first with an explicit work stack. Squares that
/// hold a tile must be followed, empty squares are filled from the rack, and a word
/// is produced when the trie has a word for `variant`, at least one new tile was placed,
/// the word touches a connected square or a tile, and the next square is empty.
#[derive(Debug)]
pub struct Matches<'a> {
    wordlist: &'a Wordlist,
    row: Row,
    rowdata: RowData,
    variant: Variant,
    stack: Vec<Args>,
}

#[derive(Debug, Clone, Copy)]
struct Args {
    node: usize,
    pos: usize,
    letters: Letters,
    word: Word,
    connecting: bool,
    extending: bool,
}

impl<'a> Iterator for Matches<'a> {
    type Item = Word;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(args) = self.stack.pop() {
            let (node, pos) = (args.node, args.pos);
            if pos >= self.row.len() || !self.wordlist.has_variant(node, self.variant) {
                continue;
            }
            if let Some(tile) = self.row[pos].tile() {
                if let Some(child) = self.wordlist.get(node, tile.label()) {
                    let mut word = args.word;
                    word.push(tile);
                    self.stack.push(Args {
                        node: child,
                        pos: pos + 1,
                        word,
                        connecting: true,
                        ..args
                    });
                }
                continue;
            }
            // empty square at row[pos]
            if pos < self.row.len() - 1 {
                self.extend(&args);
            }
            if self.wordlist.is_terminal(node, self.variant)
                && args.connecting
                && args.extending
                && args.word.len() > 1
            {
                return Some(args.word);
            }
        }
        None
    }
}

impl<'a> Matches<'a> {
    fn new(
        wordlist: &'a Wordlist,
        row: Row,
        rowdata: RowData,
        variant: Variant,
        args: Args,
    ) -> Matches<'a> {
        let mut stack = Vec::with_capacity(16);
        stack.push(args);
        Matches {
            wordlist,
            row,
            rowdata,
            variant,
            stack,
        }
    }

    /// Push a work item for every rack letter that fits the empty square at `args.pos`.
    fn extend(&mut self, args: &Args) {
        let pos = args.pos;
        let (valid_chars, connected) = self.rowdata[pos];
        let connecting = args.connecting || connected;
        for (i, &letter) in args.letters.iter().enumerate() {
            if !letter.is_blank() && !valid_chars.contains(letter.label()) {
                continue;
            }
            // the same letter twice in the rack gives the same words
            if args.letters[0..i].contains(&letter) {
                continue;
            }
            let letters = args.letters.remove(i);
            if letter.is_blank() {
                for (label, child) in self.wordlist.iter_children(args.node) {
                    if valid_chars.contains(label) {
                        let mut word = args.word;
                        word.push(Tile::wildcard_from_letter(label));
                        self.stack.push(Args {
                            node: child,
                            pos: pos + 1,
                            letters,
                            word,
                            connecting,
                            extending: true,
                        });
                    }
                }
            } else if let Some(child) = self.wordlist.get(args.node, letter.label()) {
                let mut word = args.word;
                word.push(Tile::from_letter(letter));
                self.stack.push(Args {
                    node: child,
                    pos: pos + 1,
                    letters,
                    word,
                    connecting,
                    extending: true,
                });
            }
        }
    }
}

/// Iterator over (start position, word) pairs for all start positions of a row.
#[derive(Debug)]
pub struct Words<'a> {
    wordlist: &'a Wordlist,
    row: Row,
    rowdata: RowData,
    letters: Letters,
    variant: Variant,
    starts: std::vec::IntoIter<usize>,
    current: Option<(usize, Matches<'a>)>,
}

impl<'a> Iterator for Words<'a> {
    type Item = (usize, Word);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((pos, matches)) = self.current.as_mut() {
                if let Some(word) = matches.next() {
                    return Some((*pos, word));
                }
            }
            let pos = self.starts.next()?;
            let wordlist: &'a Wordlist = self.wordlist;
            let matches = wordlist.matches(
                0,
                self.row,
                self.rowdata,
                pos,
                &self.letters,
                self.variant,
            );
            self.current = Some((pos, matches));
        }
    }
}

impl Wordlist {
    /// Return the words of `variant` that can be formed on `row` from `pos`, using trie node
    /// `node` as the root.
    ///
    /// `row` must end with an empty square, `rowdata` holds the legal letters and the
    /// connected flag of every other square.
    pub fn matches(
        &self,
        node: usize,
        row: Row,
        rowdata: RowData,
        pos: usize,
        letters: &Letters,
        variant: Variant,
    ) -> Matches<'_> {
        let args = Args {
            node,
            pos,
            letters: *letters,
            word: Word::new(),
            connecting: false,
            extending: false,
        };
        Matches::new(self, row, rowdata, variant, args)
    }

    /// Returns the indices in `row` where a word can start, given the connection data in `rowdata`.
    /// `maxdist` is the maximum distance for connecting, typically the number of letters we have.
    pub fn start_indices(&self, row: Row, rowdata: &RowData, maxdist: usize) -> Vec<usize> {
        // For each square, the number of letters needed to reach the nearest tile or
        // connected square at or after it. A word can not start next to a tile.
        let n = rowdata.len().min(row.len());
        let mut d = usize::MAX;
        let mut dist = vec![usize::MAX; n];
        for i in (0..n).rev() {
            if !row[i].is_empty() {
                d = 0;
            } else if rowdata[i].1 {
                d = 1;
            }
            dist[i] = if i > 0 && !row[i - 1].is_empty() {
                usize::MAX
            } else {
                d
            };
            d = d.saturating_add(1);
        }
        dist.iter()
            .enumerate()
            .filter_map(|(i, &d)| if d <= maxdist { Some(i) } else { None })
            .collect()
    }

    /// Return an iterator over (start position, word) for all words of `variant` that can
    /// be played on `row` with `letters`.
    ///
    /// Start positions are only tried when a connection point is reachable with at most
    /// `maxdist` letters, the default is the number of letters.
    /// ## Example
    /// ```
    /// use wordfeud_movegen::{Codec, Letters, List, Row, Wordlist};
    /// let wordlist = Wordlist::from_words(&["ab", "ba"], &Codec::default())?;
    /// let row: Row = wordlist.encode("  a")?;
    /// let rowdata = wordlist.connected_row(row.len());
    /// let letters: Letters = wordlist.encode("b")?;
    /// let words: Vec<_> = wordlist.words(&row, &rowdata, &letters, 1, None).collect();
    /// assert_eq!(words.len(), 1);
    /// assert_eq!(words[0].0, 1);
    /// assert_eq!(wordlist.decode(words[0].1), "ba");
    /// # Ok::<(), wordfeud_movegen::Error>(())
    /// ```
    pub fn words(
        &self,
        row: &Row,
        rowdata: &RowData,
        letters: &Letters,
        variant: Variant,
        maxdist: Option<usize>,
    ) -> Words<'_> {
        debug_assert_eq!(row.len(), rowdata.len());
        let row = row.with_sentinel();
        let maxdist = maxdist.unwrap_or_else(|| letters.len());
        let starts = self.start_indices(row, rowdata, maxdist).into_iter();
        Words {
            wordlist: self,
            row,
            rowdata: *rowdata,
            letters: *letters,
            variant,
            starts,
            current: None,
        }
    }

    /// Return the set of letters that can go in the single empty square of `fragment`,
    /// such that the filled fragment is a word of `variant`.
    /// A fragment that is just an empty square allows every letter.
    pub fn get_legal_characters(&self, fragment: &Row, variant: Variant) -> LabelSet {
        if fragment.is_empty_cell() {
            return self.all_labels();
        }
        let mut chars = LabelSet::new();
        if let Some(i) = fragment.iter().position(|cell| cell.is_empty()) {
            let rowdata = self.connected_row(fragment.len() + 1);
            let row = fragment.with_sentinel();
            let letters = Letters::blank();
            for word in self.matches(0, row, rowdata, 0, &letters, variant) {
                chars.insert(word[i].label());
            }
        }
        chars
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tiles::DIM;
    use crate::wordlist::LetterSet;
    use crate::Codec;
    use std::collections::HashSet;
    use std::convert::TryFrom;

    type Result<T> = std::result::Result<T, crate::Error>;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
    ];

    fn test_wordlist() -> Wordlist {
        Wordlist::from_words(WORDS, &Codec::default()).unwrap()
    }

    fn test_match_helper(letters: &str, row: &str, pos: usize, expected: &[&str]) -> Result<()> {
        let wordlist = test_wordlist();
        let row: Row = wordlist.encode(row)?;
        let rowdata = wordlist.connected_row(row.len());
        let letters: Letters = wordlist.encode(letters)?;
        let words: HashSet<String> = wordlist
            .matches(0, row, rowdata, pos, &letters, 1)
            .map(|w| wordlist.decode(w))
            .collect();
        let expected: HashSet<String> = expected.iter().map(|&s| String::from(s)).collect();
        assert_eq!(words, expected);
        Ok(())
    }

    #[test]
    fn test_matches_1() -> Result<()> {
        test_match_helper("abel", "    ", 0, &["al", "bel"])
    }

    #[test]
    fn test_matches_2() -> Result<()> {
        test_match_helper("ab*", "    ", 0, &["aF", "aH", "aL", "bI", "bO", "baR"])
    }

    #[test]
    fn test_matches_3() -> Result<()> {
        test_match_helper("*", "a  ", 0, &["aF", "aH", "aL"])
    }

    #[test]
    fn test_matches_4() -> Result<()> {
        test_match_helper("ab*", "    t     c   f ", 13, &["af", "Af"])
    }

    #[test]
    fn test_matches_duplicate_letters() -> Result<()> {
        // a repeated rack letter does not repeat words
        test_match_helper("aal", "    ", 0, &["al"])
    }

    #[test]
    fn test_matches_wrong_variant() -> Result<()> {
        let wordlist = test_wordlist();
        let row: Row = wordlist.encode("    ")?;
        let rowdata = wordlist.connected_row(row.len());
        let letters: Letters = wordlist.encode("abel")?;
        assert_eq!(wordlist.matches(0, row, rowdata, 0, &letters, 2).count(), 0);
        Ok(())
    }

    #[test]
    fn test_words() -> Result<()> {
        let wordlist = test_wordlist();
        let row: Row = wordlist.encode("    t     c   f")?;
        let rowdata = wordlist.connected_row(row.len());
        let letters: Letters = wordlist.encode("ab*")?;

        let words = wordlist
            .words(&row, &rowdata, &letters, 1, None)
            .map(|(pos, word)| (pos, wordlist.decode(word)))
            .collect::<Vec<_>>();

        let expected = vec![
            (0_usize, "aF"),
            (0, "aH"),
            (0, "aL"),
            (0, "baR"),
            (0, "bI"),
            (0, "bO"),
            (1, "aF"),
            (1, "aH"),
            (1, "aL"),
            (1, "bI"),
            (1, "bO"),
            (6, "aF"),
            (6, "aH"),
            (6, "aL"),
            (6, "baR"),
            (6, "bI"),
            (6, "bO"),
            (7, "aF"),
            (7, "aH"),
            (7, "aL"),
            (7, "bI"),
            (7, "bO"),
            (13, "af"),
            (13, "Af"),
        ];
        assert_eq!(words.len(), expected.len());
        let expected = expected
            .into_iter()
            .map(|(pos, s)| (pos, String::from(s)))
            .collect::<HashSet<_>>();
        let words = words.into_iter().collect::<HashSet<_>>();
        assert_eq!(words, expected);
        Ok(())
    }

    #[test]
    fn test_words_stop_before_tiles() -> Result<()> {
        // "al" is not a word when the next square holds a tile
        let wordlist = test_wordlist();
        let row: Row = wordlist.encode("  b")?;
        let rowdata = wordlist.connected_row(row.len());
        let letters: Letters = wordlist.encode("al")?;
        let words = wordlist
            .words(&row, &rowdata, &letters, 1, None)
            .map(|(pos, word)| (pos, wordlist.decode(word)))
            .collect::<Vec<_>>();
        assert!(words.is_empty(), "{:?}", words);
        Ok(())
    }

    #[test]
    fn test_get_legal_characters() -> Result<()> {
        let wordlist = test_wordlist();
        let single: Row = wordlist.encode(" ")?;
        let lc = wordlist.get_legal_characters(&single, 1);
        let word = Word::try_from(Vec::from(lc))?;
        assert_eq!(wordlist.decode(word), "abefhilorst");

        let fragment: Row = wordlist.encode("be ")?;
        let lc: Vec<u8> = wordlist.get_legal_characters(&fragment, 1).into();
        // bel, bes
        assert_eq!(lc, vec![12, 19]);

        let fragment: Row = wordlist.encode(" l")?;
        let lc: Vec<u8> = wordlist.get_legal_characters(&fragment, 1).into();
        assert_eq!(lc, vec![1]);

        let fragment: Row = wordlist.encode("x ")?;
        assert!(wordlist.get_legal_characters(&fragment, 1).is_empty());
        assert!(wordlist.get_legal_characters(&fragment, 2).is_empty());
        Ok(())
    }

    #[test]
    fn test_start_indices() {
        let row: Row = Row::try_from(vec![0u8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 26, 0, 0, 0]).unwrap();
        let rowdata: RowData = (0..row.len()).map(|i| (LetterSet::new(), i == 12)).collect();
        let wordlist = test_wordlist();
        let indices = wordlist.start_indices(row, &rowdata, 7);
        assert_eq!(indices, vec![5, 6, 7, 8, 9, 10, 11, 12]);
        let indices = wordlist.start_indices(row, &rowdata, DIM);
        assert_eq!(indices, (0..=12).collect::<Vec<_>>());
    }
}
