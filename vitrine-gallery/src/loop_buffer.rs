//! Clone-padded sequence for seamless circular scrolling.
//!
//! The real cards are duplicated at both ends, `tail(real, P) ++ real ++
//! head(real, P)`, so a forward or backward scroll never renders a
//! discontinuous jump. The index reset that relocates the visible position
//! back into the real run happens elsewhere ([`crate::track`]); this module is
//! a pure, deterministic transformation.

use crate::display::DisplayCard;

/// The padded card sequence the strip renders.
#[derive(Debug, Clone, Default)]
pub struct LoopBuffer {
    slots: Vec<DisplayCard>,
    real_len: usize,
    per_page: usize,
}

impl LoopBuffer {
    /// Build the padded sequence for `real` with `per_page` clones per side.
    ///
    /// An empty input yields an empty buffer with no padding. When
    /// `real.len() < per_page`, the clone regions wrap modularly and may
    /// repeat elements; no index ever exceeds bounds.
    pub fn build(real: &[DisplayCard], per_page: usize) -> Self {
        if real.is_empty() {
            return Self {
                slots: Vec::new(),
                real_len: 0,
                per_page,
            };
        }

        let n = real.len();
        let mut slots = Vec::with_capacity(n + 2 * per_page);
        // tail(real, P): the last P elements, wrapping when P > N
        for i in 0..per_page {
            let offset = (n as isize - per_page as isize + i as isize).rem_euclid(n as isize);
            slots.push(real[offset as usize].clone());
        }
        slots.extend_from_slice(real);
        // head(real, P)
        for i in 0..per_page {
            slots.push(real[i % n].clone());
        }

        Self {
            slots,
            real_len: n,
            per_page,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total padded length: `real_len + 2 * per_page`, or zero when empty.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn real_len(&self) -> usize {
        self.real_len
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn slots(&self) -> &[DisplayCard] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&DisplayCard> {
        self.slots.get(index)
    }

    /// Whether a slot belongs to one of the clone regions.
    pub fn is_clone(&self, index: usize) -> bool {
        index < self.per_page || index >= self.per_page + self.real_len
    }

    /// The real-collection index a slot renders, for any in-bounds slot.
    pub fn real_index_of(&self, slot: usize) -> Option<usize> {
        if self.real_len == 0 || slot >= self.len() {
            return None;
        }
        let real = (slot as isize - self.per_page as isize).rem_euclid(self.real_len as isize);
        Some(real as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::decorate;
    use vitrine_model::{MediaItem, MediaItemId};

    fn cards(n: usize) -> Vec<DisplayCard> {
        let items: Vec<MediaItem> = (0..n)
            .map(|i| {
                MediaItem::new(
                    MediaItemId::from(format!("m{i}").as_str()),
                    format!("https://cdn/{i}.jpg"),
                )
            })
            .collect();
        decorate(&items, 8)
    }

    fn ids(buffer: &LoopBuffer) -> Vec<&str> {
        buffer.slots().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn padded_length_is_n_plus_two_p() {
        for n in 1..12 {
            for p in 0..6 {
                let buffer = LoopBuffer::build(&cards(n), p);
                assert_eq!(buffer.len(), n + 2 * p, "n={n} p={p}");
            }
        }
    }

    #[test]
    fn empty_input_yields_empty_buffer() {
        let buffer = LoopBuffer::build(&[], 4);
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn clone_regions_mirror_real_run() {
        let buffer = LoopBuffer::build(&cards(8), 4);
        assert_eq!(
            ids(&buffer),
            vec![
                "m4", "m5", "m6", "m7", // tail clones
                "m0", "m1", "m2", "m3", "m4", "m5", "m6", "m7", // real
                "m0", "m1", "m2", "m3", // head clones
            ]
        );
    }

    #[test]
    fn short_collections_wrap_modularly() {
        // N < P: the clone regions repeat elements rather than run out
        let buffer = LoopBuffer::build(&cards(2), 4);
        assert_eq!(buffer.len(), 2 + 2 * 4);
        assert_eq!(
            ids(&buffer),
            vec!["m0", "m1", "m0", "m1", "m0", "m1", "m0", "m1", "m0", "m1"]
        );
    }

    #[test]
    fn clone_flags_and_real_indices() {
        let buffer = LoopBuffer::build(&cards(3), 2);
        // layout: m1 m2 | m0 m1 m2 | m0 m1
        assert!(buffer.is_clone(0));
        assert!(buffer.is_clone(1));
        assert!(!buffer.is_clone(2));
        assert!(!buffer.is_clone(4));
        assert!(buffer.is_clone(5));
        assert_eq!(buffer.real_index_of(0), Some(1));
        assert_eq!(buffer.real_index_of(2), Some(0));
        assert_eq!(buffer.real_index_of(5), Some(0));
        assert_eq!(buffer.real_index_of(7), None);
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let real = cards(5);
        let a = LoopBuffer::build(&real, 3);
        let b = LoopBuffer::build(&real, 3);
        assert_eq!(a.slots(), b.slots());
    }
}
