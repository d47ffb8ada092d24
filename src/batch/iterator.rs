//! Shuffle-and-slice batching over a normalized corpus.
//!
//! Illustrative rather than production-grade: wraparound reshuffles the
//! whole corpus and resets the cursor, so a record can repeat across the
//! epoch boundary and there are no windowing guarantees. The wrap rule is
//! the clean `cursor + n > len` - the count, not the last valid index.

use crate::error::{Error, Result};

use super::rng::CorpusRng;

/// Cursor-based batch iterator with an epoch counter.
///
/// ## Example
///
/// ```
/// use card_corpus::batch::BatchIterator;
///
/// let mut batches = BatchIterator::new(vec![1, 2, 3, 4], 42);
/// assert_eq!(batches.next_batch(2).unwrap().len(), 2);
/// assert_eq!(batches.next_batch(2).unwrap().len(), 2);
/// assert_eq!(batches.epochs(), 0);
///
/// // The next request wraps: reshuffle, bump the epoch, restart.
/// assert_eq!(batches.next_batch(3).unwrap().len(), 3);
/// assert_eq!(batches.epochs(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct BatchIterator<T> {
    items: Vec<T>,
    rng: CorpusRng,
    cursor: usize,
    epochs: usize,
}

impl<T> BatchIterator<T> {
    /// Wrap a corpus, shuffling it once up front.
    #[must_use]
    pub fn new(items: Vec<T>, seed: u64) -> Self {
        let mut iterator = Self {
            items,
            rng: CorpusRng::new(seed),
            cursor: 0,
            epochs: 0,
        };
        iterator.reshuffle();
        iterator
    }

    /// Produce the next `n` records.
    ///
    /// Wraps (reshuffle, epoch bump, cursor reset) when fewer than `n`
    /// records remain. `n == 0` yields an empty batch; `n` larger than
    /// the corpus is [`Error::BatchTooLarge`].
    pub fn next_batch(&mut self, n: usize) -> Result<&[T]> {
        if n > self.items.len() {
            return Err(Error::BatchTooLarge {
                requested: n,
                len: self.items.len(),
            });
        }

        if self.cursor + n > self.items.len() {
            self.epochs += 1;
            self.reshuffle();
        }

        let start = self.cursor;
        self.cursor += n;
        Ok(&self.items[start..self.cursor])
    }

    /// Completed epochs (wraparounds so far).
    #[must_use]
    pub fn epochs(&self) -> usize {
        self.epochs
    }

    /// Position of the next unread record.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of wrapped records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the iterator wraps nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn reshuffle(&mut self) {
        self.rng.shuffle(&mut self.items);
        self.cursor = 0;
    }
}
