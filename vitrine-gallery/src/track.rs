//! Carousel position controller.
//!
//! The track is a continuous index into the padded sequence with two modes:
//! `Animating` (positional changes glide) and `Snapping` (a single instant
//! jump used to relocate the visible position from a clone region back into
//! the real run). The snap is invisible because both positions render the
//! same cards and no animation plays while it happens.
//!
//! Boundary checks run only after the glide for the previous advance has
//! visually completed; the caller drives that ordering by invoking
//! [`TrackState::settle`] from its animation-completion signal.

/// Position and mode of the carousel strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackState {
    current_index: usize,
    cards_per_page: usize,
    padded_len: usize,
    real_len: usize,
    transition_enabled: bool,
}

/// Outcome of a boundary check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snap {
    pub from: usize,
    pub to: usize,
}

impl Default for TrackState {
    fn default() -> Self {
        Self::empty()
    }
}

impl TrackState {
    /// A track over nothing; renders nothing and never advances.
    pub fn empty() -> Self {
        Self {
            current_index: 0,
            cards_per_page: 0,
            padded_len: 0,
            real_len: 0,
            transition_enabled: true,
        }
    }

    /// Fresh track for a rebuilt padded sequence, positioned at the first
    /// real (non-clone) slot.
    pub fn rebuild(real_len: usize, cards_per_page: usize) -> Self {
        let padded_len = if real_len == 0 {
            0
        } else {
            real_len + 2 * cards_per_page
        };
        Self {
            current_index: if padded_len == 0 { 0 } else { cards_per_page },
            cards_per_page,
            padded_len,
            real_len,
            transition_enabled: true,
        }
    }

    /// Rebuild while keeping a previously visible real item in view.
    ///
    /// `anchor` is the real-collection index that was visible before the
    /// rebuild; it is clamped to the new collection so the nearest valid item
    /// stays visible when the collection shrank.
    pub fn rebuild_anchored(
        real_len: usize,
        cards_per_page: usize,
        anchor: Option<usize>,
    ) -> Self {
        let mut track = Self::rebuild(real_len, cards_per_page);
        if let Some(anchor) = anchor {
            if real_len > 0 {
                track.current_index = cards_per_page + anchor.min(real_len - 1);
            }
        }
        track
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn cards_per_page(&self) -> usize {
        self.cards_per_page
    }

    pub fn padded_len(&self) -> usize {
        self.padded_len
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    pub fn is_empty(&self) -> bool {
        self.padded_len == 0
    }

    /// Whether advance requests have any effect at all.
    pub fn can_advance(&self) -> bool {
        self.padded_len > 0 && self.cards_per_page > 0
    }

    /// Move one card forward. Autoplay ticks and manual "next" both land
    /// here; there is no separate code path.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() || self.current_index + 1 >= self.padded_len {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Move one card backward (manual "previous").
    pub fn retreat(&mut self) -> bool {
        if !self.can_advance() || self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Boundary check, to be called once the glide for the latest move has
    /// visually completed.
    ///
    /// Crossing into a clone region switches the track to `Snapping`
    /// (`transition_enabled = false`) and relocates the index to the visually
    /// identical position inside the real run. The caller re-enables
    /// animation via [`TrackState::finish_snap`] after the renderer has
    /// applied the un-animated position.
    pub fn settle(&mut self) -> Option<Snap> {
        if self.padded_len == 0 {
            return None;
        }
        let p = self.cards_per_page;
        let from = self.current_index;
        let to = if self.current_index >= self.padded_len - p {
            p
        } else if self.current_index < p {
            self.padded_len - 2 * p
        } else {
            return None;
        };
        self.transition_enabled = false;
        self.current_index = to;
        Some(Snap { from, to })
    }

    /// Return to `Animating` after the snap has been applied un-animated.
    pub fn finish_snap(&mut self) {
        self.transition_enabled = true;
    }

    /// The real-collection index currently at the leading edge of the
    /// visible window, if anything is visible.
    pub fn visible_real_index(&self) -> Option<usize> {
        if self.real_len == 0 {
            return None;
        }
        let real = (self.current_index as isize - self.cards_per_page as isize)
            .rem_euclid(self.real_len as isize);
        Some(real as usize)
    }

    /// Strip offset in card widths; the rendered translation is the negation
    /// of this times one card width.
    pub fn offset_cards(&self) -> f32 {
        self.current_index as f32
    }
}
