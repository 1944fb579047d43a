use super::DIM;
use super::{Code, Item};
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt::Debug;
use std::iter::{FromIterator, IntoIterator};
use std::ops::{Index, IndexMut, Range};
use std::slice::Iter;
use tinyvec::{ArrayVec, ArrayVecIterator};

/// The operations the board and the search need from a row, a word or a rack.
pub trait List:
    Debug
    + Default
    + Clone
    + Copy
    + Index<usize>
    + IndexMut<usize>
    + Index<Range<usize>>
    + PartialEq
    + Eq
{
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, item: Self::Item);

    fn iter(&self) -> Iter<'_, Self::Item>;
}

pub(super) type Items<T> = ArrayVec<[T; DIM]>;

/// At most [`DIM`] items, stored inline so rows and words are `Copy`.
/// [`Row`](crate::Row), [`Word`](crate::Word) and [`Letters`](crate::Letters) are all an `ItemList`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ItemList<T: Item>(pub Items<T>);

impl<T: Item> ItemList<T> {
    pub fn new() -> ItemList<T> {
        Self::default()
    }

    /// The raw codes of the items, in order
    pub fn codes(&self) -> Vec<Code> {
        self.0.iter().map(Item::code).collect()
    }
}

impl<T: Item> List for ItemList<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.0.len()
    }

    fn push(&mut self, item: T) {
        self.0.push(item);
    }

    fn iter(&self) -> Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Item> Index<usize> for ItemList<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T: Item> IndexMut<usize> for ItemList<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T: Item> Index<Range<usize>> for ItemList<T> {
    type Output = [T];
    fn index(&self, range: Range<usize>) -> &[T] {
        &self.0[range]
    }
}

impl<T: Item> FromIterator<T> for ItemList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Item> IntoIterator for ItemList<T> {
    type Item = T;
    type IntoIter = ArrayVecIterator<[T; DIM]>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Checks every code, and the length against [`DIM`].
impl<T: Item> TryFrom<Vec<Code>> for ItemList<T> {
    type Error = Error;
    fn try_from(codes: Vec<Code>) -> Result<Self, Error> {
        if codes.len() > DIM {
            return Err(Error::EncodeStringTooLong(format!("{:?}", codes)));
        }
        codes.into_iter().map(T::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{Cell, Letters, Row, Word};

    #[test]
    fn test_try_from_codes() -> Result<(), Error> {
        let word = Word::try_from(vec![3, 65, 20])?;
        assert_eq!(word.len(), 3);
        assert_eq!(word.codes(), vec![3, 65, 20]);
        assert!(word[1].is_wildcard());

        let row = Row::try_from(vec![0, 1, 0])?;
        assert_eq!(row[0], Cell::default());
        assert_eq!(row[1..3].len(), 2);

        assert!(Word::try_from(vec![0]).is_err());
        assert!(Letters::try_from(vec![1; DIM + 1]).is_err());
        Ok(())
    }

    #[test]
    fn test_push() {
        let mut letters = Letters::new();
        assert!(letters.is_empty());
        letters.push(crate::tiles::Letter::blank());
        assert_eq!(letters.len(), 1);
        assert_eq!(letters.iter().count(), 1);
    }
}
