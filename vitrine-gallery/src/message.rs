use iced::widget::image;
use vitrine_model::SourceEvent;

/// Everything that can happen to the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    // Media feed
    Source(SourceEvent),

    // Carousel motion
    AutoplayTick,
    NextRequested,
    PreviousRequested,
    /// Frame pulse while a glide is in flight; drives interpolation and,
    /// on completion, the boundary check.
    AnimationTick,
    /// The post-snap settle delay elapsed for the stamped generation.
    SnapSettled(u64),

    // Viewport
    WindowResized(iced::Size),
    /// The resize debounce elapsed for the stamped generation.
    ResizeSettled(u64),

    // Lightbox
    CardClicked(String),
    /// Escape, backdrop click, and the close button all converge here.
    LightboxDismissed,

    // Card images
    ImageFetched(String, Result<image::Handle, String>),
}
