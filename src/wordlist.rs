mod matches;

pub use self::matches::{Matches, Words};
use crate::labelset::{Label, LabelSet};
use crate::tiles::{Code, Codec, Item, ItemList, LETTER_MASK, DIM};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::fs::read_to_string;
use tinyvec::ArrayVec;
use tracing::{debug, info, warn};

/// A set of letters
pub type LetterSet = LabelSet;

/// Bitmask identifying loaded word lists. Every list gets its own bit.
pub type Variant = u32;

/// The number of word lists one `Wordlist` can hold.
pub const MAX_VARIANTS: usize = Variant::BITS as usize;

/// A list of (possible letters, connected) tuples, one for each square of a row.
pub type RowData = ArrayVec<[(LetterSet, bool); DIM]>;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Node {
    /// labels of the child nodes
    labels: LabelSet,
    /// node index of each child, in label order
    children: Vec<u32>,
    /// word lists with at least one word through this node
    variants: Variant,
    /// word lists with a word ending at this node
    word: Variant,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A trie that holds the words of one or more word lists.
///
/// Each loaded list is tagged with a distinct bit (its [`Variant`]). Every node
/// records which lists pass through it and which lists end a word in it, so the lists
/// share one trie and a search for one variant skips subtrees the list never reaches.
pub struct Wordlist {
    /// Arena of trie nodes, node 0 is the root.
    nodes: Vec<Node>,
    /// Names of the loaded word lists, the index is the variant bit.
    wordfiles: Vec<String>,
    /// The set of all letters used in the wordlist.
    all_labels: LabelSet,
    /// Number of (word, variant) pairs
    word_count: usize,
    /// Encode words to/from labels
    codec: Codec,
}

impl Default for Wordlist {
    fn default() -> Self {
        Wordlist::new(&Codec::default())
    }
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Wordlist: {} words, {} nodes from \"{}\">",
            self.word_count,
            self.nodes.len(),
            self.wordfiles.join("\", \"")
        )
    }
}

impl Wordlist {
    /// Create an empty wordlist for the alphabet of `codec`.
    pub fn new(codec: &Codec) -> Wordlist {
        Wordlist {
            nodes: vec![Node::default()],
            wordfiles: Vec::new(),
            all_labels: LabelSet::new(),
            word_count: 0,
            codec: codec.clone(),
        }
    }

    /// Build a wordlist from a list of words. The words get variant `1`.
    /// ## Errors
    /// If a word can not be encoded with the given `codec`.
    /// ## Example
    /// ```
    /// use wordfeud_movegen::{Codec, Wordlist};
    /// let wordlist = Wordlist::from_words(&["aardvark", "zebra"], &Codec::default())?;
    /// assert!(wordlist.contains("zebra", 1));
    /// # Ok::<(), wordfeud_movegen::Error>(())
    /// ```
    pub fn from_words(words: &[&str], codec: &Codec) -> Result<Wordlist, Error> {
        let mut wordlist = Wordlist::new(codec);
        wordlist.add_words("<words>", words)?;
        Ok(wordlist)
    }

    /// Read a word list from a file and return its variant.
    ///
    /// The file must be encoded in utf-8 and have one word per line. Words are
    /// lower-cased, lines starting with `#` are comments. Words with letters outside
    /// the codec's alphabet can never be played and are skipped.
    /// Reading a file that is already loaded does nothing and returns its variant.
    /// ## Errors
    /// Fails if the file can not be read, or all variant bits are in use.
    pub fn read_wordlist(&mut self, wordfile: &str) -> Result<Variant, Error> {
        if let Some(variant) = self.variant_of(wordfile) {
            info!(wordfile, variant, "wordlist already loaded");
            return Ok(variant);
        }
        let variant = self.next_variant()?;
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let (mut added, mut skipped) = (0, 0);
        for line in contents.lines() {
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if let Some(comment) = word.strip_prefix('#') {
                debug!(comment, "wordlist comment");
                continue;
            }
            match self.encode_word(word) {
                Ok(labels) => {
                    if self.insert(&labels, variant) {
                        added += 1;
                    }
                }
                Err(err) => {
                    debug!(word, %err, "skipping word");
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            warn!(wordfile, skipped, "skipped words that can not be encoded");
        }
        self.wordfiles.push(String::from(wordfile));
        info!(wordfile, variant, added, "wordlist loaded");
        Ok(variant)
    }

    /// Add an in-memory word list called `name` and return its variant.
    /// Adding a name that is already loaded does nothing and returns its variant.
    /// ## Errors
    /// If a word can not be encoded, or all variant bits are in use.
    /// Nothing is added when an error is returned.
    pub fn add_words(&mut self, name: &str, words: &[&str]) -> Result<Variant, Error> {
        if let Some(variant) = self.variant_of(name) {
            info!(name, variant, "wordlist already loaded");
            return Ok(variant);
        }
        let variant = self.next_variant()?;
        let encoded = words
            .iter()
            .map(|word| self.encode_word(word))
            .collect::<Result<Vec<_>, Error>>()?;
        for labels in &encoded {
            self.insert(labels, variant);
        }
        self.wordfiles.push(String::from(name));
        Ok(variant)
    }

    /// Add `word` to the lists in `variant`. Returns true if the word was new for `variant`.
    /// ## Errors
    /// If the word can not be encoded.
    pub fn add(&mut self, word: &str, variant: Variant) -> Result<bool, Error> {
        let labels = self.encode_word(word)?;
        Ok(self.insert(&labels, variant))
    }

    fn next_variant(&self) -> Result<Variant, Error> {
        let n = self.wordfiles.len();
        if n >= MAX_VARIANTS {
            return Err(Error::TooManyWordlists(MAX_VARIANTS));
        }
        Ok(1 << n)
    }

    /// Case fold and encode a dictionary word. Only letters are allowed.
    fn encode_word(&self, word: &str) -> Result<Vec<Label>, Error> {
        let word = word.trim().to_lowercase();
        let codes = self.codec.encode(&word)?;
        if codes.is_empty() || codes.iter().any(|&code| code == 0 || code > LETTER_MASK) {
            return Err(Error::EncodeInvalidToken(word));
        }
        Ok(codes)
    }

    fn insert(&mut self, labels: &[Label], variant: Variant) -> bool {
        let mut i = 0;
        for &label in labels {
            self.nodes[i].variants |= variant;
            i = self.child_or_insert(i, label);
        }
        let node = &mut self.nodes[i];
        node.variants |= variant;
        if node.word & variant == variant {
            return false;
        }
        node.word |= variant;
        self.word_count += 1;
        true
    }

    fn child_or_insert(&mut self, i: usize, label: Label) -> usize {
        if let Some(child) = self.get(i, label) {
            return child;
        }
        let child = self.nodes.len();
        self.nodes.push(Node::default());
        let node = &mut self.nodes[i];
        let pos = node.labels.rank(label);
        node.labels.insert(label);
        node.children.insert(pos, child as u32);
        self.all_labels.insert(label);
        child
    }

    #[cfg(feature = "bincode")]
    /// Serialize the compiled wordlist to a bincoded file.
    /// ## Errors
    /// If the file can not be written.
    pub fn serialize_into(&self, path: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::WordlistSerializeError(String::from(path)))
    }

    #[cfg(feature = "bincode")]
    /// Deserialize a wordlist from a bincoded file.
    /// ## Errors
    /// - If the wordlist can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(path: &str) -> Result<Wordlist, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        bincode::deserialize_from(BufReader::new(file))
            .map_err(|_| Error::WordlistDeserializeError(String::from(path)))
    }

    /// Return the variant of a loaded word list.
    pub fn variant_of(&self, wordfile: &str) -> Option<Variant> {
        self.wordfiles
            .iter()
            .position(|name| name == wordfile)
            .map(|i| 1 << i)
    }

    /// Names of the loaded word lists, in variant order.
    pub fn wordfiles(&self) -> &[String] {
        &self.wordfiles
    }

    /// The number of words over all variants.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes in the trie.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The set of all letters used in the wordlist.
    pub fn all_labels(&self) -> LabelSet {
        self.all_labels
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Encode a word with our `codec`.
    /// ## Errors
    /// If the word can not be encoded.
    pub fn encode<T: Item>(&self, word: &str) -> Result<ItemList<T>, Error> {
        ItemList::<T>::try_from(self.codec.encode(word)?)
    }

    /// Decode `items` with our `codec`, and return the result as `String`.
    pub fn decode<T: Item>(&self, items: ItemList<T>) -> String {
        self.codec.decode(&items.codes()).join("")
    }

    /// Get the index of child with `label` for node `i` if present.
    pub fn get(&self, i: usize, label: Label) -> Option<usize> {
        let node = &self.nodes[i];
        node.labels
            .index_of(label)
            .map(|pos| node.children[pos] as usize)
    }

    /// Iterate over the (label, node index) pairs of the children of node `i`.
    pub fn iter_children(&self, i: usize) -> impl Iterator<Item = (Label, usize)> + '_ {
        let node = &self.nodes[i];
        node.labels
            .iter()
            .zip(node.children.iter())
            .map(|(label, &child)| (label, child as usize))
    }

    /// Returns true if a word of `variant` goes through node `i`.
    pub fn has_variant(&self, i: usize, variant: Variant) -> bool {
        self.nodes[i].variants & variant != 0
    }

    /// Returns true if a word of `variant` ends at node `i`.
    pub fn is_terminal(&self, i: usize, variant: Variant) -> bool {
        self.nodes[i].word & variant != 0
    }

    /// Returns true if `word` is in the word list(s) of `variant`.
    /// Wildcard flags in the codes are ignored.
    pub fn is_word<K: AsRef<[Code]>>(&self, word: K, variant: Variant) -> bool {
        let mut i = 0;
        for &code in word.as_ref() {
            match self.get(i, code & LETTER_MASK) {
                Some(child) if self.has_variant(child, variant) => i = child,
                _ => return false,
            }
        }
        self.is_terminal(i, variant)
    }

    /// Returns true if the string `word` is in the word list(s) of `variant`.
    pub fn contains(&self, word: &str, variant: Variant) -> bool {
        self.encode_word(word)
            .map(|labels| self.is_word(labels, variant))
            .unwrap_or(false)
    }

    /// Row data for a row of `len` squares that are all connected, and allow any letter.
    pub fn connected_row(&self, len: usize) -> RowData {
        RowData::from_array_len([(self.all_labels, true); DIM], len)
    }
}
