//! Ordered content sequences and the wrap-around cursor over them.
use std::rc::Rc;

use crate::content::ContentItem;

/// Ordered, stable list of items queried by index.
pub trait ContentSequence {
    fn len(&self) -> usize;

    fn item(&self, index: usize) -> Option<ContentItem>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecSequence {
    items: Vec<ContentItem>,
}

impl VecSequence {
    #[must_use]
    pub const fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }
}

impl From<Vec<ContentItem>> for VecSequence {
    fn from(items: Vec<ContentItem>) -> Self {
        Self::new(items)
    }
}

impl ContentSequence for VecSequence {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn item(&self, index: usize) -> Option<ContentItem> {
        self.items.get(index).cloned()
    }
}

/// Position inside a non-empty sequence.
#[derive(Clone)]
pub struct GalleryCursor {
    sequence: Rc<dyn ContentSequence>,
    index: usize,
}

impl GalleryCursor {
    /// Returns `None` for an empty sequence. `start` wraps modulo the length.
    #[must_use]
    pub fn new(sequence: Rc<dyn ContentSequence>, start: usize) -> Option<Self> {
        let len = sequence.len();
        if len == 0 {
            return None;
        }
        Some(Self {
            sequence,
            index: start % len,
        })
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> Option<ContentItem> {
        self.sequence.item(self.index)
    }

    /// Move by `delta` with wrap-around at both ends and return the new index.
    pub fn step(&mut self, delta: isize) -> usize {
        // The provider may have shrunk since the last step.
        let len = self.sequence.len().max(1);
        let len_signed = isize::try_from(len).unwrap_or(isize::MAX);
        let current = isize::try_from(self.index % len).unwrap_or(0);
        let next = (current + delta.rem_euclid(len_signed)).rem_euclid(len_signed);
        self.index = usize::try_from(next).unwrap_or(0);
        self.index
    }
}

impl std::fmt::Debug for GalleryCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryCursor")
            .field("index", &self.index)
            .field("len", &self.sequence.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Media;

    fn sequence(len: usize) -> Rc<dyn ContentSequence> {
        let items = (0..len)
            .map(|i| {
                ContentItem::new(Media::Image {
                    src: format!("img-{i}.jpg"),
                    alt: None,
                })
                .titled(format!("Item {i}"))
            })
            .collect::<Vec<_>>();
        Rc::new(VecSequence::new(items))
    }

    #[test]
    fn empty_sequence_has_no_cursor() {
        assert!(GalleryCursor::new(sequence(0), 0).is_none());
    }

    #[test]
    fn start_wraps_modulo_length() {
        let cursor = GalleryCursor::new(sequence(3), 7).expect("non-empty");
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn steps_wrap_at_both_ends() {
        let mut cursor = GalleryCursor::new(sequence(3), 0).expect("non-empty");
        assert_eq!(cursor.step(-1), 2);
        assert_eq!(cursor.step(1), 0);
        assert_eq!(cursor.step(1), 1);
        assert_eq!(cursor.step(1), 2);
        assert_eq!(cursor.step(1), 0);
    }

    #[test]
    fn single_item_stays_put() {
        let mut cursor = GalleryCursor::new(sequence(1), 0).expect("non-empty");
        assert_eq!(cursor.step(1), 0);
        assert_eq!(cursor.step(-1), 0);
        assert_eq!(
            cursor.current().and_then(|item| item.title),
            Some("Item 0".to_string())
        );
    }

    #[test]
    fn large_deltas_reduce_first() {
        let mut cursor = GalleryCursor::new(sequence(4), 1).expect("non-empty");
        assert_eq!(cursor.step(isize::MAX), (1 + (isize::MAX % 4) as usize) % 4);
        let mut cursor = GalleryCursor::new(sequence(4), 1).expect("non-empty");
        assert_eq!(cursor.step(-9), 0);
    }
}
