use std::io::{self, Write};

use crate::math::RGB;

use super::Vec2D;

/// Writes `film` as a plain text `P3` image.
///
/// Header `P3`, `<width> <height>` and `255` on three lines, then one `R G B` line per
/// pixel, row by row. Channels are clamped to 0..=255 and truncated.
pub fn write_ppm<W: Write>(writer: &mut W, film: &Vec2D<RGB>) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", film.width, film.height)?;
    writeln!(writer, "255")?;
    for row in film.rows() {
        for pixel in row {
            writeln!(writer, "{}", pixel.clamp255().ppm())?;
        }
    }
    Ok(())
}
