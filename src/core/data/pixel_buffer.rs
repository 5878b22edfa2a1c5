use crate::core::data::pixel_size::PixelSize;
use std::error::Error;
use std::fmt;

fn pixel_size_to_buffer_size(pixel_size: PixelSize) -> usize {
    pixel_size.sample_count() * 4
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    BoundsMismatch {
        pixel_size_bytes: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_size_bytes,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel size requires {} bytes but buffer holds {}",
                    pixel_size_bytes, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// One rendered frame: the pixel resolution plus its interleaved RGBA bytes,
/// row-major from the top-left pixel. Ownership moves to the host via
/// [`PixelBuffer::into_bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixel_size: PixelSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(
        pixel_size: PixelSize,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = pixel_size_to_buffer_size(pixel_size);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_size_bytes: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_size, buffer })
    }

    #[must_use]
    pub fn pixel_size(&self) -> PixelSize {
        self.pixel_size
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn into_bytes(self) -> PixelBufferData {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_valid() {
        let pixel_size = PixelSize::new(2, 2);
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // pixel (0,0) - red
            0, 255, 0, 255, // pixel (1,0) - green
            0, 0, 255, 255, // pixel (0,1) - blue
            255, 255, 0, 255, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(pixel_size, data.clone());

        assert!(buffer.is_ok());
        let buffer = buffer.unwrap();
        assert_eq!(buffer.pixel_size(), pixel_size);
        assert_eq!(buffer.bytes(), data.as_slice());
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let pixel_size = PixelSize::new(2, 2);
        let data: Vec<u8> = vec![255, 0, 0, 255]; // only 4 bytes, need 16

        let result = PixelBuffer::from_data(pixel_size, data);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_size_bytes: 16,
                buffer_size: 4
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let pixel_size = PixelSize::new(2, 2);
        let data: Vec<u8> = vec![0; 32]; // 32 bytes, need 16

        let result = PixelBuffer::from_data(pixel_size, data);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_size_bytes: 16,
                buffer_size: 32
            }
        );
    }

    #[test]
    fn test_from_data_empty_frame() {
        let pixel_size = PixelSize::new(0, 3);

        let buffer = PixelBuffer::from_data(pixel_size, vec![]).unwrap();

        assert_eq!(buffer.bytes().len(), 0);
    }

    #[test]
    fn test_into_bytes_transfers_ownership() {
        let pixel_size = PixelSize::new(1, 1);
        let data: Vec<u8> = vec![1, 2, 3, 4];
        let buffer = PixelBuffer::from_data(pixel_size, data.clone()).unwrap();

        assert_eq!(buffer.into_bytes(), data);
    }

    #[test]
    fn test_error_display_names_both_sizes() {
        let err = PixelBufferError::BoundsMismatch {
            pixel_size_bytes: 16,
            buffer_size: 4,
        };

        let message = err.to_string();

        assert!(message.contains("16"));
        assert!(message.contains('4'));
    }
}
