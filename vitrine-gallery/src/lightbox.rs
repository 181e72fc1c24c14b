//! Full-screen lightbox state machine and background scroll lock.
//!
//! The lightbox is independent of the carousel's scrolling state: `Closed ⇄
//! Open`, a single active url slot, and a scroll lock held for exactly the
//! open lifetime. Escape, backdrop click, and the close button all converge
//! on the same close transition.

/// Reference-counted background scroll lockout.
///
/// Modal consumers acquire on open and release on close; the host suppresses
/// its own scrolling while any hold is outstanding, so overlapping modals
/// cannot desynchronize the lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holds: usize,
}

impl ScrollLock {
    pub fn acquire(&mut self) {
        self.holds += 1;
    }

    pub fn release(&mut self) {
        if self.holds == 0 {
            log::warn!("scroll lock released more often than acquired");
            return;
        }
        self.holds -= 1;
    }

    pub fn is_locked(&self) -> bool {
        self.holds > 0
    }
}

/// Open/closed state of the full-screen viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightboxState {
    active_url: Option<String>,
}

impl LightboxState {
    /// Show `url` full screen. Opening while already open replaces the
    /// active url directly, with no intermediate close, and the scroll lock is
    /// not acquired a second time.
    pub fn open(&mut self, lock: &mut ScrollLock, url: String) {
        if self.active_url.is_none() {
            lock.acquire();
        }
        self.active_url = Some(url);
    }

    /// Close the viewer and release the scroll lock. Safe to call while
    /// already closed.
    pub fn close(&mut self, lock: &mut ScrollLock) -> bool {
        if self.active_url.take().is_some() {
            lock.release();
            true
        } else {
            false
        }
    }

    pub fn is_open(&self) -> bool {
        self.active_url.is_some()
    }

    pub fn active_url(&self) -> Option<&str> {
        self.active_url.as_deref()
    }
}
