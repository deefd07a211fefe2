pub mod types;
pub use types::{TrackFlag, TrackInfo};
pub mod extractor;
pub use extractor::extract_tracks;
pub mod patcher;
pub use patcher::{patch_default, patch_forced, FORCED_SAMPLE_FORMAT};
