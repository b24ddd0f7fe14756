//! Raw raster format shared by the renderer and the png converter.
//!
//! ```text
//! u16 width | u16 height | width * height samples
//! ```
//! Both header fields are little endian. There is no magic number and no format field,
//! samples are either one gray byte or three rgb bytes. Rows are stored in render order,
//! so row 0 is the *bottom* row of the picture.

use crate::shading::{Pixel, PixelFormat};

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

pub const HEADER_SIZE: usize = 4;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("file is {len} bytes, too short to hold the 4 byte header")]
    TruncatedHeader { len: usize },
    #[error("{width}x{height} image should be {expected} bytes, found {actual}; not an image or corrupt?")]
    LengthMismatch {
        width: u16,
        height: u16,
        expected: usize,
        actual: usize,
    },
    #[error("image has no pixels")]
    EmptyImage,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to encode png: {0}")]
    Png(#[from] png::EncodingError),
}

impl PixelFormat {
    /// Total size of a raw file holding a `width` x `height` image in this format.
    pub fn raw_len(self, width: u16, height: u16) -> usize {
        HEADER_SIZE + width as usize * height as usize * self.bytes_per_sample()
    }

    /// Guesses the sample format from the total file length.
    pub fn infer(width: u16, height: u16, len: usize) -> Option<PixelFormat> {
        [PixelFormat::Gray, PixelFormat::Rgb]
            .into_iter()
            .find(|format| format.raw_len(width, height) == len)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub width: u16,
    pub height: u16,
    pub format: PixelFormat,
    pub data: Vec<u8>,
}

impl Image {
    pub fn from_pixels(width: u16, height: u16, format: PixelFormat, pixels: &[Pixel]) -> Image {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        let mut data = Vec::with_capacity(pixels.len() * format.bytes_per_sample());
        for pixel in pixels {
            data.extend_from_slice(pixel.as_bytes());
        }
        Image {
            width,
            height,
            format,
            data,
        }
    }

    pub fn bytes_per_row(&self) -> usize {
        self.width as usize * self.format.bytes_per_sample()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE + self.data.len());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.data);
        out
    }

    /// Parses a raw file. Without an explicit `format` it is inferred from the length.
    pub fn decode(bytes: &[u8], format: Option<PixelFormat>) -> Result<Image, RasterError> {
        if bytes.len() < HEADER_SIZE {
            return Err(RasterError::TruncatedHeader { len: bytes.len() });
        }
        let width = u16::from_le_bytes([bytes[0], bytes[1]]);
        let height = u16::from_le_bytes([bytes[2], bytes[3]]);
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyImage);
        }

        let format = match format.or_else(|| PixelFormat::infer(width, height, bytes.len())) {
            Some(format) => format,
            // report against the gray layout, which is what a bare header implies
            None => PixelFormat::Gray,
        };
        let expected = format.raw_len(width, height);
        if bytes.len() != expected {
            return Err(RasterError::LengthMismatch {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }
        debug!("decoded {}x{} {:?} raster", width, height, format);
        Ok(Image {
            width,
            height,
            format,
            data: bytes[HEADER_SIZE..].to_vec(),
        })
    }

    pub fn write_raw<W: Write>(&self, mut writer: W) -> Result<(), RasterError> {
        writer.write_all(&self.encode())?;
        writer.flush()?;
        Ok(())
    }

    pub fn save_raw(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        let path = path.as_ref();
        info!("saving raw image to {}", path.display());
        self.write_raw(BufWriter::new(File::create(path)?))
    }

    pub fn load_raw(path: impl AsRef<Path>, format: Option<PixelFormat>) -> Result<Image, RasterError> {
        let path = path.as_ref();
        let mut bytes = Vec::new();
        let read_count = File::open(path)?.read_to_end(&mut bytes)?;
        info!("loaded {}, {} bytes", path.display(), read_count);
        Image::decode(&bytes, format)
    }

    /// Rows from the top of the picture down, i.e. the stored rows in reverse.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(self.bytes_per_row()).rev()
    }

    pub fn write_png<W: Write>(&self, writer: W) -> Result<(), RasterError> {
        let mut encoder = png::Encoder::new(writer, self.width as u32, self.height as u32);
        encoder.set_color(match self.format {
            PixelFormat::Gray => png::ColorType::Grayscale,
            PixelFormat::Rgb => png::ColorType::Rgb,
        });
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Best);

        let flipped: Vec<u8> = self.rows_top_down().flatten().copied().collect();
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&flipped)?;
        writer.finish()?;
        Ok(())
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        let path = path.as_ref();
        info!("saving png to {}", path.display());
        self.write_png(BufWriter::new(File::create(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u16, height: u16, format: PixelFormat) -> Image {
        let pixels: Vec<Pixel> = (0..width as usize * height as usize)
            .map(|i| match format {
                PixelFormat::Gray => Pixel::Gray(i as u8),
                PixelFormat::Rgb => Pixel::Rgb([i as u8, 0, 255 - i as u8]),
            })
            .collect();
        Image::from_pixels(width, height, format, &pixels)
    }

    #[test]
    fn test_header_layout() {
        let image = gradient(3, 2, PixelFormat::Gray);
        let bytes = image.encode();
        assert_eq!(&bytes[..4], &[3, 0, 2, 0]);
        assert_eq!(&bytes[4..], &[0, 1, 2, 3, 4, 5]);

        let rgb = gradient(300, 2, PixelFormat::Rgb).encode();
        assert_eq!(&rgb[..4], &[44, 1, 2, 0]);
        assert_eq!(rgb.len(), 4 + 300 * 2 * 3);
    }

    #[test]
    fn test_decode_infers_format() {
        for format in [PixelFormat::Gray, PixelFormat::Rgb] {
            let image = gradient(5, 4, format);
            let decoded = Image::decode(&image.encode(), None).unwrap();
            assert_eq!(decoded, image);
        }
    }

    #[test]
    fn test_decode_rejects_bad_lengths() {
        let mut bytes = gradient(5, 4, PixelFormat::Gray).encode();
        bytes.push(0);
        match Image::decode(&bytes, None) {
            Err(RasterError::LengthMismatch {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 24);
                assert_eq!(actual, 25);
            }
            other => panic!("expected a length mismatch, got {:?}", other),
        }
        // a gray sized payload is wrong for an explicit rgb read
        let gray = gradient(5, 4, PixelFormat::Gray).encode();
        assert!(matches!(
            Image::decode(&gray, Some(PixelFormat::Rgb)),
            Err(RasterError::LengthMismatch { expected: 64, .. })
        ));
        assert!(matches!(
            Image::decode(&[1, 0, 1], None),
            Err(RasterError::TruncatedHeader { len: 3 })
        ));
        assert!(matches!(
            Image::decode(&[0, 0, 7, 0], None),
            Err(RasterError::EmptyImage)
        ));
    }

    #[test]
    fn test_rows_top_down() {
        let image = gradient(2, 3, PixelFormat::Gray);
        let rows: Vec<&[u8]> = image.rows_top_down().collect();
        assert_eq!(rows, vec![&[4u8, 5][..], &[2, 3][..], &[0, 1][..]]);
    }

    #[test]
    fn test_png_is_flipped() {
        for format in [PixelFormat::Gray, PixelFormat::Rgb] {
            let image = gradient(4, 3, format);
            let mut encoded = Vec::new();
            image.write_png(&mut encoded).unwrap();

            let decoder = png::Decoder::new(std::io::Cursor::new(encoded));
            let mut reader = decoder.read_info().unwrap();
            let mut buf = vec![0; reader.output_buffer_size()];
            let info = reader.next_frame(&mut buf).unwrap();
            assert_eq!((info.width, info.height), (4, 3));

            let row = image.bytes_per_row();
            // top png row is the last stored row
            assert_eq!(&buf[..row], &image.data[2 * row..]);
            assert_eq!(&buf[2 * row..3 * row], &image.data[..row]);
        }
    }
}
