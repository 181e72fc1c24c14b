use std::sync::Arc;

use env_logger::{Builder, Target};
use log::LevelFilter;

use vitrine_gallery::source::{MediaSource, RestSource, StaticSource};
use vitrine_gallery::{app, GalleryConfig};
use vitrine_model::{chrono, MediaItem, MediaItemId};

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("vitrine_gallery", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = GalleryConfig::load();

    let source: Arc<dyn MediaSource> = match std::env::var("VITRINE_FEED_URL") {
        Ok(endpoint) => {
            log::info!("polling media feed at {endpoint}");
            Arc::new(RestSource::new(endpoint, config.feed_poll_interval()))
        }
        Err(_) => Arc::new(StaticSource::new(demo_items())),
    };

    app::run(config, source)
}

/// Locally seeded collection shown when no feed endpoint is configured.
fn demo_items() -> Vec<MediaItem> {
    let seeds = [
        ("Skyline at Dusk", "Rooftop set over the harbor district"),
        ("Studio Session", "Behind the scenes of the spring shoot"),
        ("Coastal Drive", "Stills from the coastal campaign"),
        ("Neon Interiors", "Showroom lighting experiments"),
        ("Atrium Series", "Natural light through the north atrium"),
        ("Monochrome", "Black and white product detail work"),
        ("Festival Nights", "Crowd and stage coverage"),
        ("Workshop Floor", "Assembly and finishing close-ups"),
    ];

    seeds
        .iter()
        .enumerate()
        .map(|(i, (title, description))| {
            let id = MediaItemId::from(uuid::Uuid::new_v4().to_string().as_str());
            let mut item = MediaItem::new(
                id,
                format!("https://picsum.photos/seed/vitrine-{i}/600/800"),
            )
            .with_title(*title)
            .with_description(*description);
            // stagger timestamps so seed order survives newest-first sorting
            item.created_at = item.created_at - chrono::Duration::seconds(i as i64);
            item.updated_at = item.created_at;
            item
        })
        .collect()
}
