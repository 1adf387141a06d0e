use image::{DynamicImage, GenericImageView, Rgb, RgbImage};

use crate::graph::MazeError;
use crate::grid::{Grid, Point};

const ROUTE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Threshold an image into a passable grid: anything darker than mid-gray
/// on the red channel is a wall.
pub fn parse_img(img: &DynamicImage) -> Result<Grid, MazeError> {
    let width = img.width() as usize;
    let height = img.height() as usize;

    let mut cells = vec![vec![false; width]; height];

    for row in 0..height {
        for col in 0..width {
            let p = img.get_pixel(col as u32, row as u32);

            cells[row][col] = p.0[0] >= 128;
        }
    }

    Grid::from_cells(cells)
}

/// Paint the route onto an RGB copy of the input image.
///
/// Consecutive path points always share a row or a column, so each segment
/// is a straight pixel run.
pub fn draw_path(img: &DynamicImage, path: &[Point]) -> RgbImage {
    let mut out = img.to_rgb8();

    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);

        for row in a.row.min(b.row)..=a.row.max(b.row) {
            for col in a.col.min(b.col)..=a.col.max(b.col) {
                out.put_pixel(col as u32, row as u32, ROUTE_COLOR);
            }
        }
    }

    out
}
