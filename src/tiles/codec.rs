use super::{
    codes::{Code, BLANK, EMPTY, IS_WILDCARD},
    DIM,
};
use crate::error::Error;
use std::collections::HashMap;
use std::iter::IntoIterator;

/// String corresponding to a tile code
pub type Token = String;

/// A list of `Token`'s
pub type Tokens = Vec<Token>;

const NCODE: usize = 128;
const NOCODE: [Option<char>; 2] = [None; 2];

const ASCII_LC: &str = "abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct CodeSet {
    encoder: HashMap<String, Code>,
    decoder: Vec<[Option<char>; 2]>,
}

impl CodeSet {
    fn new(extend: &[&str]) -> CodeSet {
        let mut encoder = HashMap::new();
        let letters = ASCII_LC
            .chars()
            .map(String::from)
            .chain(extend.iter().map(|&s| String::from(s)));
        for (i, token) in letters.enumerate() {
            let code = i as Code + 1;
            encoder.insert(token.to_uppercase(), code | IS_WILDCARD);
            encoder.insert(token, code);
        }
        encoder.insert(String::from("."), EMPTY);
        encoder.insert(String::from("*"), BLANK);

        let mut decoder = vec![NOCODE; NCODE];
        for (k, &v) in &encoder {
            let mut it = k.chars();
            decoder[v as usize] = [it.next(), it.next()];
        }
        // encode both '.' and ' ' to EMPTY, but always decode to '.'
        encoder.insert(String::from(" "), EMPTY);
        CodeSet { encoder, decoder }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Translate from string to tile codes and vice versa.
/// - 0: No tile (empty square), written as `.` or ` `
/// - 1 .. 26: `a` .. `z`
/// - 27 .. 31: Non-ascii letters, depending on codec
/// - 64: Blank tile `*` (unassigned)
/// - 65 .. 90: `A` .. `Z` (blank tile assigned to `a`..`z`)
/// - 91 .. 95: Blank tile assigned to a non-ascii letter
///
pub struct Codec {
    codeset: CodeSet,
}

impl Default for Codec {
    fn default() -> Codec {
        Codec::new(&[])
    }
}

impl Codec {
    /// Return a new `Codec` for "a".."z", "*", " ", extended with the non-ascii letters from `extend`.
    /// ## Examples
    /// ```
    /// use wordfeud_movegen::Codec;
    /// let codec = Codec::new(&["å", "ä", "ö"]);
    /// ```
    pub fn new(extend: &[&str]) -> Codec {
        assert!(extend.len() <= 5, "at most 5 letters past 'z' fit in a label");
        Codec {
            codeset: CodeSet::new(extend),
        }
    }

    /// A simple tokenizer for single char tiles
    fn tokenize(&self, word: &str) -> Tokens {
        word.chars().map(String::from).collect::<Vec<_>>()
    }

    /// Encode string, and return a list of codes.
    /// ## Errors
    /// An error is returned if the string is too long or can not be encoded with the codec.
    /// ## Examples
    /// ```
    /// use wordfeud_movegen::{Codec, Error};
    /// let codec = Codec::new(&["å", "ä", "ö"]);
    /// let codes = codec.encode("azAZå *")?;
    /// assert_eq!(codes, vec![1, 26, 65, 90, 27, 0, 64]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn encode(&self, word: &str) -> Result<Vec<Code>, Error> {
        let tokens = self.tokenize(word);
        if tokens.len() > DIM {
            return Err(Error::EncodeStringTooLong(String::from(word)));
        }
        tokens
            .into_iter()
            .map(|token| {
                self.codeset
                    .encoder
                    .get(&token)
                    .copied()
                    .ok_or(Error::EncodeInvalidToken(token))
            })
            .collect()
    }

    /// Decode codes, and return a list of strings.
    /// Codes unknown to the codec decode to `?`.
    /// ## Examples
    /// ```
    /// use wordfeud_movegen::Codec;
    /// let codec = Codec::new(&["å", "ä", "ö"]);
    /// let decoded = codec.decode(&[1, 26, 65, 90, 27, 0, 64]);
    /// assert_eq!(decoded, &["a", "z", "A", "Z", "å", ".", "*"]);
    /// ```
    pub fn decode(&self, codes: &[Code]) -> Vec<String> {
        codes
            .iter()
            .map(|&code| match self.codeset.decoder.get(code as usize) {
                Some([Some(first), second]) => {
                    let mut s = String::new();
                    s.push(*first);
                    if let Some(ch) = second {
                        s.push(*ch);
                    }
                    s
                }
                _ => String::from("?"),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_tokenize() {
        let codec = Codec::default();
        let tokens = codec.tokenize("wordfeud");
        assert_eq!(tokens, vec!["w", "o", "r", "d", "f", "e", "u", "d"]);
    }

    #[test]
    fn test_encode() {
        let codec = Codec::default();
        let codes = codec.encode("azAZ* .").unwrap();
        assert_eq!(codes, vec![1, 26, 65, 90, 64, 0, 0]);
    }

    #[test]
    fn test_extended() -> Result<(), Error> {
        let codec = Codec::new(&["å", "ä", "ö"]);
        assert_eq!(codec.encode("åäöÅÄÖ")?, vec![27, 28, 29, 91, 92, 93]);
        assert_eq!(codec.decode(&[29, 93]), vec!["ö", "Ö"]);
        Ok(())
    }

    #[test]
    fn test_encode_too_long() {
        let codec = Codec::default();
        let word = "a".repeat(DIM + 1);
        assert!(matches!(
            codec.encode(&word),
            Err(Error::EncodeStringTooLong(_))
        ));
    }

    #[test]
    #[should_panic(expected = "EncodeInvalidToken")]
    fn test_encode_error() {
        let codec = Codec::default();
        codec.encode("Illegal!").unwrap();
    }
}
