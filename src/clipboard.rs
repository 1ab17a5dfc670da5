//! Clipboard image access.
//!
//! The board screenshot arrives via the system clipboard; `arboard` hands
//! back raw RGBA bytes which are rewrapped as an `image::RgbaImage` for the
//! detector.

use anyhow::{anyhow, Context, Result};
use arboard::Clipboard;
use image::RgbaImage;

/// Grabs the current clipboard image.
pub fn grab_board_image() -> Result<RgbaImage> {
    let mut clipboard = Clipboard::new().context("Failed to open the system clipboard")?;

    let img = clipboard.get_image().map_err(grab_error)?;

    let (width, height) = (img.width as u32, img.height as u32);
    RgbaImage::from_raw(width, height, img.bytes.into_owned()).ok_or_else(|| {
        anyhow!(
            "Clipboard image data is inconsistent with its {}x{} dimensions",
            width,
            height
        )
    })
}

/// Maps an arboard failure to a user-facing error.
///
/// A clipboard without an image is an ordinary user mistake (no screenshot
/// copied yet) and gets a friendly status-line message. Every other fault
/// (denied access, conversion failure) keeps its own description so the
/// real cause reaches the log.
fn grab_error(e: arboard::Error) -> anyhow::Error {
    match e {
        arboard::Error::ContentNotAvailable => {
            anyhow!("No image on the clipboard. Copy a board screenshot first.")
        }
        other => anyhow::Error::new(other).context("Failed to read the clipboard image"),
    }
}
