//! Plain-text PPM (`P3`) image output.
//!
//! Header `P3`, then `width height`, then the max channel value `255`, followed by
//! one `r g b` line per pixel in row-major order starting at the top-left.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::SceneResult;

/// Largest channel value written to the header.
pub const MAX_CHANNEL: u8 = 255;

/// Write a P3 image.
///
/// `pixels` must yield exactly `width * height` entries; any other count is
/// reported as [`io::ErrorKind::InvalidInput`].
pub fn write_ppm<W, I>(writer: &mut W, width: u32, height: u32, pixels: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = [u8; 3]>,
{
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "{}", MAX_CHANNEL)?;

    let expected = width as usize * height as usize;
    let mut written = 0usize;
    for [r, g, b] in pixels {
        if written == expected {
            return Err(pixel_count_error(expected, written + 1));
        }
        writeln!(writer, "{} {} {}", r, g, b)?;
        written += 1;
    }

    if written != expected {
        return Err(pixel_count_error(expected, written));
    }
    writer.flush()
}

/// Write a P3 image to a file.
pub fn save_ppm<P, I>(path: P, width: u32, height: u32, pixels: I) -> SceneResult<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = [u8; 3]>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_ppm(&mut writer, width, height, pixels)?;
    info!("Image saved as {}", path.display());
    Ok(())
}

fn pixel_count_error(expected: usize, got: usize) -> io::Error {
    let got = if got > expected {
        format!("more than {}", expected)
    } else {
        got.to_string()
    };
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("expected {} pixels, got {}", expected, got),
    )
}
