//! Shared utilities.

mod playback_url;

pub use playback_url::{PlaybackUrlError, validate_playback_url};
