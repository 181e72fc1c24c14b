//! Vitrine gallery widget
//!
//! This crate contains the seamless infinite media carousel and its attached
//! full-screen lightbox, plus the thin desktop shell used by the executable in
//! `src/main.rs`.
//!
//! The engine is split into pure state modules (`loop_buffer`, `track`,
//! `slide`, `autoplay`, `viewport`, `lightbox`) that carry all of the index
//! arithmetic and mode logic, and an Elm-style shell (`state`, `message`,
//! `update`, `subscriptions`, `views`) that wires them to the iced runtime.
//!
//! Notes
//! - Public items are subject to change while the widget API stabilizes.
//! - The library surface exists mainly to enable testing and embedding.

pub mod app;
pub mod autoplay;
pub mod config;
pub mod display;
pub mod error;
pub mod image_cache;
pub mod lightbox;
pub mod loop_buffer;
pub mod message;
pub mod slide;
pub mod source;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod track;
pub mod update;
pub mod viewport;
pub mod views;

pub use config::GalleryConfig;
pub use error::GalleryError;
pub use message::Message;
pub use source::MediaSource;
pub use state::GalleryState;
