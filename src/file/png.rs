//! Minimal PNG encoder for clipboard images.
//!
//! Clipboard images arrive as raw 8-bit RGBA pixels. They are written as a
//! single-IDAT, non-interlaced PNG with filter type 0 on every scanline,
//! compressed with zlib.

use anyhow::{ensure, Context, Result};
use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};
use std::io::Write;

/// The eight-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;

/// Encodes RGBA pixel data as a PNG image.
///
/// # Errors
///
/// Returns an error if `rgba` does not hold exactly `width * height * 4`
/// bytes, if a dimension is zero or does not fit in 32 bits, or if
/// compression fails.
///
/// # Example
///
/// ```
/// use cardquill::file::png::{encode_rgba, PNG_SIGNATURE};
///
/// let red_pixel = [255, 0, 0, 255];
/// let png = encode_rgba(1, 1, &red_pixel).unwrap();
/// assert_eq!(&png[..8], &PNG_SIGNATURE);
/// ```
pub fn encode_rgba(width: usize, height: usize, rgba: &[u8]) -> Result<Vec<u8>> {
    ensure!(width > 0 && height > 0, "image has no pixels");
    ensure!(
        rgba.len() == width * height * 4,
        "expected {} bytes of RGBA data, got {}",
        width * height * 4,
        rgba.len()
    );
    let w = u32::try_from(width).context("image too wide")?;
    let h = u32::try_from(height).context("image too tall")?;

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&w.to_be_bytes());
    ihdr.extend_from_slice(&h.to_be_bytes());
    // bit depth, colour type, compression, filter, interlace
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_RGBA, 0, 0, 0]);

    let stride = width * 4;
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    for row in rgba.chunks_exact(stride) {
        encoder.write_all(&[0]).context("Failed to compress image")?;
        encoder.write_all(row).context("Failed to compress image")?;
    }
    let idat = encoder.finish().context("Failed to finish compression")?;

    let mut png = Vec::with_capacity(PNG_SIGNATURE.len() + idat.len() + 3 * 12 + ihdr.len());
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr);
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

/// Appends one chunk: length, type, data, CRC over type and data.
fn write_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);

    let mut crc = Crc::new();
    crc.update(kind);
    crc.update(data);
    out.extend_from_slice(&crc.sum().to_be_bytes());
}
