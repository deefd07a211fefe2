pub mod bits;

pub mod mp4;
pub use mp4::{BoxHeader, BoxScanner};

pub mod tracks;
pub use tracks::{extract_tracks, TrackFlag, TrackInfo};

pub mod errors;
pub use errors::{Mp4Error, PatchError, TrackFlagsError, TrackFlagsResult};

use std::fs::{File, OpenOptions};
use std::path::Path;

/// Scan `path` and return the discovered tracks in file order.
pub fn list_tracks(path: impl AsRef<Path>) -> TrackFlagsResult<Vec<TrackInfo>> {
    let mut file = File::open(path)?;
    tracks::extract_tracks(&mut file)
}

/// Set or clear `flag` on every track with the given id.
///
/// The file is opened read-write once; the scan and the patches share the
/// same handle, and patch offsets come from that scan. Each matching track
/// is patched independently (no rollback across matches). Returns the
/// number of matching tracks; zero means no bytes were written.
pub fn set_track_flag(
    path: impl AsRef<Path>,
    track_id: u32,
    flag: TrackFlag,
    on: bool,
) -> TrackFlagsResult<usize> {
    let mut file = OpenOptions::new().read(true).write(true).open(path)?;
    let all = tracks::extract_tracks(&mut file)?;
    let mut patched = 0;
    for track in all.iter().filter(|t| t.track_id == track_id) {
        match flag {
            TrackFlag::Default => {
                let offset = track.tkhd_offset.ok_or_else(|| {
                    PatchError::new(format!("track {} has no tkhd box", track_id))
                })?;
                tracks::patch_default(&mut file, offset, on)?;
            }
            TrackFlag::Forced => {
                let offset = track.stsd_offset.ok_or_else(|| {
                    PatchError::new(format!("track {} has no stsd box", track_id))
                })?;
                tracks::patch_forced(&mut file, offset, on, track.sample_format)?;
            }
        }
        patched += 1;
    }
    Ok(patched)
}
