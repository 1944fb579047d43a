use crate::tiles::{Code, Codec, Label, BLANK, LETTER_MASK};

mod en;
mod nl;
mod se;

/// These languages are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// English
    EN,
    /// Dutch
    NL,
    /// Swedish
    SE,
}

/// label, count, points
pub(crate) type TileInfo = (&'static str, u32, u32);

/// Number of blank tiles in a full bag
pub const BLANK_COUNT: u32 = 2;

/// A tileset for `wordfeud`. It contains the tile distribution for a supported language,
/// and a codec to translate between words and tiles. The tile distributions are specified on the
/// [Wordfeud.com website](https://wordfeud.com/wf/help/).
///
/// The table is indexed by label: entry 0 is the empty square, 1..=26 are `a`..`z`,
/// and the entries past `z` are the extra letters of the language.
#[derive(Debug, Clone)]
pub struct TileSet {
    language: Language,
    tiles: &'static [TileInfo],
    codec: Codec,
}

impl TileSet {
    /// Return a new `TileSet` for language.
    pub fn new(language: Language) -> TileSet {
        let tiles = match language {
            Language::EN => en::TILESET,
            Language::NL => nl::TILESET,
            Language::SE => se::TILESET,
        };
        // additional labels past a..z
        let extended: Vec<&str> = tiles[27..].iter().map(|&tile| tile.0).collect();
        let codec = Codec::new(&extended);
        TileSet {
            language,
            tiles,
            codec,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Return the points for a tile code, or 0 if not found.
    /// Wildcard tiles and blanks are worth nothing.
    /// ## Example
    /// ```
    /// use wordfeud_movegen::{Language, TileSet};
    /// let tileset = TileSet::new(Language::EN);
    /// assert_eq!(tileset.points(3), 4); // 'c'
    /// assert_eq!(tileset.points(3 | 0x40), 0); // blank played as 'c'
    /// ```
    pub fn points(&self, code: Code) -> u32 {
        match self.tiles.get(code as usize) {
            Some(&(_, _, points)) => points,
            None => 0,
        }
    }

    /// Return the number of tiles with this code in a full bag, or 0 if not found
    pub fn count(&self, code: Code) -> u32 {
        if code == BLANK {
            return BLANK_COUNT;
        }
        match self.tiles.get(code as usize) {
            Some(&(_, count, _)) => count,
            None => 0,
        }
    }

    /// Return the string for label, or " " if not found
    pub fn label(&self, label: Label) -> &'static str {
        match self.tiles.get((label & LETTER_MASK) as usize) {
            Some(&(s, _, _)) => s,
            None => " ",
        }
    }

    /// Iterate over (label, count, points) of all letters in the tileset
    pub fn tiles(&self) -> impl Iterator<Item = (Label, u32, u32)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .skip(1)
            .map(|(label, &(_, count, points))| (label as Label, count, points))
    }

    /// Return the codec for this language
    pub fn codec(&self) -> &Codec {
        &self.codec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_tileset() {
        let tileset = TileSet::new(Language::NL);
        assert_eq!(tileset.points(0), 0);
        assert_eq!(tileset.points(26), 5);
        assert_eq!(tileset.count(5), 18);
        assert_eq!(tileset.label(5), "e");
    }

    #[test]
    fn test_bag_sizes() {
        for &(language, size) in &[(Language::EN, 104), (Language::NL, 104), (Language::SE, 104)] {
            let tileset = TileSet::new(language);
            let letters: u32 = tileset.tiles().map(|(_, count, _)| count).sum();
            assert_eq!(letters + BLANK_COUNT, size, "{:?}", language);
        }
    }

    #[test]
    fn test_swedish_points() {
        let tileset = TileSet::new(Language::SE);
        let codec = tileset.codec();
        let points: Vec<u32> = codec
            .encode("cåäöqw")
            .unwrap()
            .into_iter()
            .map(|code| tileset.points(code))
            .collect();
        assert_eq!(points, vec![8, 4, 4, 4, 0, 0]);
    }

    #[test]
    fn test_codec() -> Result<(), Error> {
        let tileset = TileSet::new(Language::SE);
        let codec = tileset.codec();
        assert_eq!(codec.encode("azåAZ*")?, &[1, 26, 27, 65, 90, 64]);
        assert_eq!(
            codec.decode(&[1, 26, 27, 28, 29, 65, 90, 91, 92, 93, 64]),
            &["a", "z", "å", "ä", "ö", "A", "Z", "Å", "Ä", "Ö", "*"]
        );
        Ok(())
    }
}
