// Copyright 2025 Dustin McAfee
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Image descriptor and input validation.

use crate::consts::{QOI_HEADER_SIZE, QOI_LINEAR, QOI_PADDING, QOI_PIXELS_MAX, QOI_SRGB};
use crate::error::DescriptorError;

/// Describes the raw pixel buffer handed to an encoder.
///
/// Fields are kept as the raw header values so that a descriptor can be built
/// from untrusted input and checked with [`ImageDesc::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDesc {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bytes per pixel: 3 (RGB) or 4 (RGBA).
    pub channels: u8,
    /// 0 = sRGB with linear alpha, 1 = all channels linear.
    pub colorspace: u8,
}

impl ImageDesc {
    #[must_use]
    pub const fn new(width: u32, height: u32, channels: u8, colorspace: u8) -> Self {
        Self {
            width,
            height,
            channels,
            colorspace,
        }
    }

    /// Packed 8-bit RGB, sRGB colorspace.
    #[must_use]
    pub const fn rgb(width: u32, height: u32) -> Self {
        Self::new(width, height, 3, QOI_SRGB)
    }

    /// Packed 8-bit RGBA, sRGB colorspace.
    #[must_use]
    pub const fn rgba(width: u32, height: u32) -> Self {
        Self::new(width, height, 4, QOI_SRGB)
    }

    /// Returns a copy with the linear colorspace flag set.
    #[must_use]
    pub const fn linear(self) -> Self {
        Self {
            colorspace: QOI_LINEAR,
            ..self
        }
    }

    /// Checks the descriptor without looking at pixel data.
    ///
    /// # Errors
    ///
    /// Returns the first failed check: zero dimension, channel count outside
    /// `{3, 4}`, colorspace above 1, or a pixel count at or above
    /// [`QOI_PIXELS_MAX`].
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.width == 0 || self.height == 0 {
            return Err(DescriptorError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !(3..=4).contains(&self.channels) {
            return Err(DescriptorError::UnsupportedChannels(self.channels));
        }
        if self.colorspace > QOI_LINEAR {
            return Err(DescriptorError::UnsupportedColorspace(self.colorspace));
        }
        // Division instead of multiplication so the check itself cannot overflow
        if self.height >= QOI_PIXELS_MAX / self.width {
            return Err(DescriptorError::TooManyPixels {
                width: self.width,
                height: self.height,
                max: QOI_PIXELS_MAX,
            });
        }
        Ok(())
    }

    /// Validates the descriptor and checks that `data` holds every pixel.
    ///
    /// # Errors
    ///
    /// See [`ImageDesc::validate`]; additionally fails with
    /// [`DescriptorError::InputTooShort`] when `data` is smaller than
    /// `width * height * channels`.
    pub fn validate_input(&self, data: &[u8]) -> Result<(), DescriptorError> {
        self.validate()?;
        let expected = self.input_len();
        if data.len() < expected {
            return Err(DescriptorError::InputTooShort {
                expected,
                actual: data.len(),
            });
        }
        Ok(())
    }

    /// Number of pixels. Only meaningful for a validated descriptor.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bytes of raw input this descriptor covers.
    #[must_use]
    pub fn input_len(&self) -> usize {
        self.pixel_count() * usize::from(self.channels)
    }

    /// Worst-case encoded size when no literal is wider than the input pixel
    /// plus its tag byte, plus header and end marker.
    ///
    /// Strategies that always emit the 5-byte RGBA literal can exceed this for
    /// 3-channel input; see [`QoiEncoder::max_encoded_size`](crate::QoiEncoder::max_encoded_size).
    #[must_use]
    pub fn max_encoded_size(&self) -> usize {
        self.max_encoded_size_with_literal(usize::from(self.channels) + 1)
    }

    /// Worst-case encoded size when the widest literal takes `literal_len`
    /// bytes per pixel.
    #[must_use]
    pub(crate) fn max_encoded_size_with_literal(&self, literal_len: usize) -> usize {
        self.pixel_count() * literal_len + QOI_HEADER_SIZE + QOI_PADDING.len()
    }
}
