use image::{imageops, DynamicImage, GrayImage, RgbaImage};

use crate::detect::PixelRect;

/// Crops one cell rectangle out of the board image as grayscale.
///
/// The rectangle is already inset past the grid strokes, so no further
/// cleanup is needed; Tesseract does its own binarization.
pub fn crop_cell(img: &RgbaImage, rect: &PixelRect) -> GrayImage {
    let view = imageops::crop_imm(img, rect.left, rect.top, rect.width(), rect.height());
    DynamicImage::ImageRgba8(view.to_image()).into_luma8()
}
