//! A fixed-capacity bitset over line indices.
//!
//! [`LineSet`] stores one bit per board line (a column or a diagonal). The
//! capacity is chosen at construction and never changes, so membership tests,
//! insertions, and removals are constant time regardless of board size.
//!
//! # Examples
//!
//! ```
//! use nqueens_core::LineSet;
//!
//! let mut set = LineSet::new(100);
//! assert!(set.insert(3));
//! assert!(set.insert(70));
//! assert!(!set.insert(3)); // already present
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(70));
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 70]);
//! ```

const WORD_BITS: usize = u64::BITS as usize;

/// A set of line indices in `0..capacity`, stored as packed bits.
///
/// # Panics
///
/// Methods taking an index panic if the index is not less than the capacity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineSet {
    words: Box<[u64]>,
    capacity: usize,
}

impl LineSet {
    /// Creates an empty set able to hold indices `0..capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let words = vec![0; capacity.div_ceil(WORD_BITS)].into_boxed_slice();
        Self { words, capacity }
    }

    /// Returns the number of representable indices.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of indices in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if the set contains no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns `true` if `index` is in the set.
    #[inline]
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        self.words[word] & mask != 0
    }

    /// Adds `index` to the set.
    ///
    /// Returns `true` if the index was not already present.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        let was_absent = self.words[word] & mask == 0;
        self.words[word] |= mask;
        was_absent
    }

    /// Removes `index` from the set.
    ///
    /// Returns `true` if the index was present.
    #[inline]
    pub fn remove(&mut self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        let was_present = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        was_present
    }

    /// Removes every index from the set.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Iterates over the indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let offset = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(i * WORD_BITS + offset)
            })
        })
    }

    #[inline]
    fn locate(&self, index: usize) -> (usize, u64) {
        assert!(
            index < self.capacity,
            "Line index must be less than {}, got {index}",
            self.capacity
        );
        (index / WORD_BITS, 1 << (index % WORD_BITS))
    }
}
