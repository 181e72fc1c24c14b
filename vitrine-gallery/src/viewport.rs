//! Viewport responsiveness monitor.
//!
//! Derives the cards-per-page count from the window width and a single
//! breakpoint. Resize notifications arrive in bursts while the user drags, so
//! they are coalesced: each observation stamps a generation, a debounce timer
//! echoes the stamp back, and only the latest stamp settles.

/// Breakpoint policy for page sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub breakpoint_px: f32,
    pub mobile: usize,
    pub desktop: usize,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            breakpoint_px: 768.0,
            mobile: 1,
            desktop: 4,
        }
    }
}

impl Breakpoints {
    pub fn cards_per_page(&self, width: f32) -> usize {
        if width < self.breakpoint_px {
            self.mobile
        } else {
            self.desktop
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewportMonitor {
    breakpoints: Breakpoints,
    width: f32,
    pending_width: Option<f32>,
    generation: u64,
    cards_per_page: usize,
}

impl ViewportMonitor {
    pub fn new(initial_width: f32, breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            width: initial_width,
            pending_width: None,
            generation: 0,
            cards_per_page: breakpoints.cards_per_page(initial_width),
        }
    }

    /// Record a resize notification. Returns the generation stamp the caller
    /// hands to its debounce timer.
    pub fn observe(&mut self, width: f32) -> u64 {
        self.pending_width = Some(width);
        self.generation += 1;
        self.generation
    }

    /// Apply a debounced resize. Stale stamps (a newer observation exists)
    /// and no-op page sizes settle to `None`; `Some(new_cards_per_page)`
    /// means the padded sequence must be rebuilt and re-anchored.
    pub fn settle(&mut self, generation: u64) -> Option<usize> {
        if generation != self.generation {
            return None;
        }
        let width = self.pending_width.take()?;
        self.width = width;
        let derived = self.breakpoints.cards_per_page(width);
        if derived == self.cards_per_page {
            return None;
        }
        self.cards_per_page = derived;
        Some(derived)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn cards_per_page(&self) -> usize {
        self.cards_per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_selects_page_size() {
        let bp = Breakpoints::default();
        assert_eq!(bp.cards_per_page(1280.0), 4);
        assert_eq!(bp.cards_per_page(768.0), 4);
        assert_eq!(bp.cards_per_page(767.9), 1);
        assert_eq!(bp.cards_per_page(320.0), 1);
    }

    #[test]
    fn crossing_the_breakpoint_settles_once() {
        let mut monitor = ViewportMonitor::new(1280.0, Breakpoints::default());
        assert_eq!(monitor.cards_per_page(), 4);

        let generation = monitor.observe(600.0);
        assert_eq!(monitor.settle(generation), Some(1));
        assert_eq!(monitor.cards_per_page(), 1);
        // the same stamp cannot settle twice
        assert_eq!(monitor.settle(generation), None);
    }

    #[test]
    fn burst_of_resizes_coalesces_to_the_last() {
        let mut monitor = ViewportMonitor::new(1280.0, Breakpoints::default());
        let first = monitor.observe(700.0);
        let second = monitor.observe(500.0);
        let last = monitor.observe(1024.0);

        // stale stamps are dropped outright
        assert_eq!(monitor.settle(first), None);
        assert_eq!(monitor.settle(second), None);
        // the survivor lands back on the desktop page size: no rebuild
        assert_eq!(monitor.settle(last), None);
        assert_eq!(monitor.cards_per_page(), 4);
        assert_eq!(monitor.width(), 1024.0);
    }

    #[test]
    fn same_side_resize_is_a_no_op() {
        let mut monitor = ViewportMonitor::new(1280.0, Breakpoints::default());
        let generation = monitor.observe(1920.0);
        assert_eq!(monitor.settle(generation), None);
        assert_eq!(monitor.width(), 1920.0);
    }
}
