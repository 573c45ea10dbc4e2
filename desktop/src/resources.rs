//! Loading picture resources from the host filesystem.

use std::path::{Path, PathBuf};

use calanim_core::{
    frames::{CalendarFrames, NUM_FRAMES},
    pic::Pic,
};
use log::{debug, info};

use crate::error::{Result, ToolError};

/// File name of frame `index` inside a frame directory.
pub fn frame_file_name(index: usize) -> String {
    format!("frame{index}.pic")
}

/// Reads a single resource and checks it against its header.
pub fn load_pic(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)?;
    let pic = Pic::parse(&bytes)?;
    debug!(
        "Loaded {} ({}x{}, {} bytes)",
        path.display(),
        pic.width(),
        pic.height(),
        bytes.len()
    );
    Ok(bytes)
}

/// Reads `frame0.pic` up to `frame29.pic` from `dir`.
pub fn load_frames(dir: &Path) -> Result<Vec<Vec<u8>>> {
    info!("Loading calendar frames from {}", dir.display());
    (0..NUM_FRAMES)
        .map(|index| {
            let path: PathBuf = dir.join(frame_file_name(index));
            if !path.is_file() {
                return Err(ToolError::MissingFrame(path));
            }
            load_pic(&path)
        })
        .collect()
}

/// Borrows loaded frame data as a [`CalendarFrames`] table.
pub fn frame_table(frames: &[Vec<u8>]) -> Option<CalendarFrames<'_>> {
    let data: [&[u8]; NUM_FRAMES] = core::array::from_fn(|i| frames.get(i).map_or(&[][..], Vec::as_slice));
    (frames.len() == NUM_FRAMES).then(|| CalendarFrames::numbered(data))
}
