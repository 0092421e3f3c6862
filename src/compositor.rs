//! Row-major tiling of generated images onto a single canvas.

use crate::{
    error::{GridError, Result},
    styles::GridShape,
};
use image::{imageops, RgbImage};
use std::io::Cursor;

/// Tile the first `columns * rows` images onto a freshly allocated canvas,
/// left to right, top to bottom. No gaps, no overlap, no scaling.
///
/// Tiles are assumed equal-sized at `width x height`; an oversized tile is
/// clipped at the canvas edge, never rescaled. A `1x1` grid still copies
/// onto a fresh canvas so the result never aliases an input buffer.
pub fn compose_grid(
    images: &[RgbImage],
    width: u32,
    height: u32,
    grid: GridShape,
) -> Result<RgbImage> {
    let needed = grid.image_count() as usize;
    if images.len() < needed {
        return Err(GridError::InsufficientImages(format!(
            "{}x{} grid needs {} images, got {}",
            grid.columns,
            grid.rows,
            needed,
            images.len()
        )));
    }

    let mut canvas = RgbImage::new(width * grid.columns, height * grid.rows);
    for (index, tile) in images.iter().take(needed).enumerate() {
        let index = index as u32;
        let x = (index % grid.columns) * width;
        let y = (index / grid.columns) * height;
        imageops::replace(&mut canvas, tile, i64::from(x), i64::from(y));
    }

    Ok(canvas)
}

/// Encode a composed image as PNG bytes.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, image::ImageFormat::Png)
        .map_err(|e| GridError::SerializationError(e.to_string()))?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb(color))
    }

    #[test]
    fn test_two_by_two_placement_is_row_major() {
        let tiles = vec![
            solid(100, 100, [255, 0, 0]),
            solid(100, 100, [0, 255, 0]),
            solid(100, 100, [0, 0, 255]),
            solid(100, 100, [255, 255, 0]),
        ];

        let canvas = compose_grid(&tiles, 100, 100, GridShape::new(2, 2)).unwrap();

        assert_eq!(canvas.dimensions(), (200, 200));
        // Interior corners of each quadrant, per the placement contract:
        // 0 at (0,0)-(100,100), 1 at (100,0)-(200,100),
        // 2 at (0,100)-(100,200), 3 at (100,100)-(200,200).
        assert_eq!(canvas.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(canvas.get_pixel(99, 99), &Rgb([255, 0, 0]));
        assert_eq!(canvas.get_pixel(100, 0), &Rgb([0, 255, 0]));
        assert_eq!(canvas.get_pixel(199, 99), &Rgb([0, 255, 0]));
        assert_eq!(canvas.get_pixel(0, 100), &Rgb([0, 0, 255]));
        assert_eq!(canvas.get_pixel(99, 199), &Rgb([0, 0, 255]));
        assert_eq!(canvas.get_pixel(100, 100), &Rgb([255, 255, 0]));
        assert_eq!(canvas.get_pixel(199, 199), &Rgb([255, 255, 0]));
    }

    #[test]
    fn test_wide_grid_places_tiles_across_then_down() {
        let tiles = vec![
            solid(10, 10, [1, 1, 1]),
            solid(10, 10, [2, 2, 2]),
            solid(10, 10, [3, 3, 3]),
            solid(10, 10, [4, 4, 4]),
            solid(10, 10, [5, 5, 5]),
            solid(10, 10, [6, 6, 6]),
        ];

        let canvas = compose_grid(&tiles, 10, 10, GridShape::new(3, 2)).unwrap();

        assert_eq!(canvas.dimensions(), (30, 20));
        assert_eq!(canvas.get_pixel(5, 5), &Rgb([1, 1, 1]));
        assert_eq!(canvas.get_pixel(15, 5), &Rgb([2, 2, 2]));
        assert_eq!(canvas.get_pixel(25, 5), &Rgb([3, 3, 3]));
        assert_eq!(canvas.get_pixel(5, 15), &Rgb([4, 4, 4]));
        assert_eq!(canvas.get_pixel(15, 15), &Rgb([5, 5, 5]));
        assert_eq!(canvas.get_pixel(25, 15), &Rgb([6, 6, 6]));
    }

    #[test]
    fn test_single_tile_returns_fresh_equal_canvas() {
        let tile = solid(64, 64, [9, 8, 7]);
        let canvas = compose_grid(std::slice::from_ref(&tile), 64, 64, GridShape::new(1, 1)).unwrap();

        assert_eq!(canvas.dimensions(), tile.dimensions());
        assert_eq!(canvas.as_raw(), tile.as_raw());
    }

    #[test]
    fn test_extra_images_beyond_the_grid_are_ignored() {
        let tiles = vec![
            solid(10, 10, [1, 1, 1]),
            solid(10, 10, [2, 2, 2]),
            solid(10, 10, [3, 3, 3]),
        ];

        let canvas = compose_grid(&tiles, 10, 10, GridShape::new(2, 1)).unwrap();
        assert_eq!(canvas.dimensions(), (20, 10));
    }

    #[test]
    fn test_too_few_images_is_an_error() {
        let tiles = vec![solid(10, 10, [0, 0, 0]); 3];
        let err = compose_grid(&tiles, 10, 10, GridShape::new(2, 2)).unwrap_err();
        assert!(matches!(err, GridError::InsufficientImages(_)));
    }

    #[test]
    fn test_encode_png_produces_a_png_header() {
        let png = encode_png(&solid(8, 8, [10, 20, 30])).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }
}
