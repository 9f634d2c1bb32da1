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

//! Configurable QOI encoder core.
//!
//! Every strategy in this crate is the same per-pixel classifier with some
//! opcodes switched off. For each pixel, in scan order:
//!
//! 1. **Run** (`use_run`): a pixel equal to the previous one extends the run.
//!    The run is flushed at 62 pixels, at the last pixel, or when a different
//!    pixel arrives.
//! 2. **Cache** (`use_cache`): a pixel found in its hash slot becomes
//!    `QOI_OP_INDEX`; otherwise it is stored in that slot.
//! 3. **Delta** (`use_delta`): with unchanged alpha, small per-channel
//!    differences become `QOI_OP_DIFF` or `QOI_OP_LUMA`, anything else
//!    `QOI_OP_RGB`. A changed alpha becomes `QOI_OP_RGBA`.
//! 4. Without delta support every remaining pixel is written as `QOI_OP_RGBA`,
//!    whatever the channel count.
//!
//! The output buffer is reserved once at the worst-case size and never grows.

use std::fmt;

use bytes::BufMut;

use crate::cache::ColorCache;
use crate::consts::{
    QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_LUMA, QOI_OP_RGB, QOI_OP_RGBA, QOI_OP_RUN, QOI_RUN_MAX,
};
use crate::desc::ImageDesc;
use crate::error::EncodeError;
use crate::header::{write_footer, write_header};
use crate::pixel::Pixel;

/// Selects which opcodes the classifier may emit besides the literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EncoderFeatures {
    pub use_run: bool,
    pub use_delta: bool,
    pub use_cache: bool,
}

impl EncoderFeatures {
    /// Every opcode: the standard QOI encoder.
    pub const ALL: Self = Self {
        use_run: true,
        use_delta: true,
        use_cache: true,
    };
    pub const RUN_ONLY: Self = Self {
        use_run: true,
        use_delta: false,
        use_cache: false,
    };
    pub const DELTA_ONLY: Self = Self {
        use_run: false,
        use_delta: true,
        use_cache: false,
    };
    pub const CACHE_ONLY: Self = Self {
        use_run: false,
        use_delta: false,
        use_cache: true,
    };

    /// Widest opcode a single pixel can produce for `channels`.
    ///
    /// Without delta support the RGBA literal is used even for RGB input.
    /// With it, RGB input never changes alpha and so never needs more than
    /// the 4-byte RGB literal.
    fn max_pixel_len(self, channels: u8) -> usize {
        if self.use_delta {
            usize::from(channels) + 1
        } else {
            5
        }
    }
}

impl fmt::Display for EncoderFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (self.use_run, "run"),
            (self.use_delta, "delta"),
            (self.use_cache, "cache"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();
        if names.is_empty() {
            f.write_str("literal")
        } else {
            f.write_str(&names.join("+"))
        }
    }
}

/// Encoder configured with a fixed feature set. Holds no per-image state, so
/// one value can encode any number of images from any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QoiEncoder {
    features: EncoderFeatures,
}

impl QoiEncoder {
    #[must_use]
    pub const fn new(features: EncoderFeatures) -> Self {
        Self { features }
    }

    #[must_use]
    pub const fn features(&self) -> EncoderFeatures {
        self.features
    }

    /// Worst-case encoded size of `desc` under this feature set.
    ///
    /// Equals [`ImageDesc::max_encoded_size`] except for RGB input without
    /// delta support, where every literal is the 5-byte RGBA form.
    #[must_use]
    pub fn max_encoded_size(&self, desc: &ImageDesc) -> usize {
        desc.max_encoded_size_with_literal(self.features.max_pixel_len(desc.channels))
    }

    /// Encodes `data` (row-major, `desc.channels` bytes per pixel) into a QOI
    /// stream.
    ///
    /// The returned buffer's length is the exact encoded size; its capacity
    /// is the worst case reserved up front.
    ///
    /// # Errors
    ///
    /// [`EncodeError::InvalidDescriptor`] if `desc` fails validation or `data`
    /// is too short, [`EncodeError::AllocationFailure`] if the output buffer
    /// cannot be reserved.
    pub fn encode(&self, data: &[u8], desc: &ImageDesc) -> Result<Vec<u8>, EncodeError> {
        desc.validate_input(data)?;

        let max_size = self.max_encoded_size(desc);
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(max_size)
            .map_err(|_| EncodeError::AllocationFailure { size: max_size })?;

        write_header(&mut bytes, desc);

        let channels = usize::from(desc.channels);
        let last = desc.pixel_count() - 1;
        let mut classifier = Classifier::new(self.features);
        for (i, chunk) in data[..desc.input_len()].chunks_exact(channels).enumerate() {
            let px = Pixel::read(chunk, classifier.prev);
            classifier.push(&mut bytes, px, i == last);
        }

        write_footer(&mut bytes);
        debug_assert!(bytes.len() <= max_size);

        #[cfg(feature = "debug-logging")]
        log::debug!(
            "QOI[{}]: encoded {}->{} bytes ({}x{}, {} channels)",
            self.features,
            desc.input_len(),
            bytes.len(),
            desc.width,
            desc.height,
            desc.channels
        );

        Ok(bytes)
    }
}

/// Per-call classifier state. Dropped when the encode call returns.
struct Classifier {
    features: EncoderFeatures,
    prev: Pixel,
    run: u8,
    cache: ColorCache,
}

impl Classifier {
    fn new(features: EncoderFeatures) -> Self {
        Self {
            features,
            prev: Pixel::OPAQUE_BLACK,
            run: 0,
            cache: ColorCache::new(),
        }
    }

    /// Classifies one pixel and writes whatever opcodes it completes.
    fn push<B: BufMut>(&mut self, buf: &mut B, px: Pixel, is_last: bool) {
        if self.features.use_run && px == self.prev {
            self.run += 1;
            if self.run == QOI_RUN_MAX || is_last {
                self.flush_run(buf);
            }
        } else {
            self.flush_run(buf);
            self.put_pixel(buf, px);
        }
        self.prev = px;
    }

    fn flush_run<B: BufMut>(&mut self, buf: &mut B) {
        if self.run > 0 {
            buf.put_u8(QOI_OP_RUN | (self.run - 1));
            self.run = 0;
        }
    }

    fn put_pixel<B: BufMut>(&mut self, buf: &mut B, px: Pixel) {
        if self.features.use_cache {
            if let Some(slot) = self.cache.lookup_or_insert(px) {
                buf.put_u8(QOI_OP_INDEX | slot);
                return;
            }
        }
        if self.features.use_delta {
            put_delta(buf, px, self.prev);
        } else {
            put_rgba(buf, px);
        }
    }
}

/// Writes `px` relative to `prev` as DIFF, LUMA, RGB or, if alpha changed,
/// RGBA.
#[allow(clippy::cast_possible_wrap)] // channel differences are reinterpreted as wrapping i8
#[allow(clippy::cast_sign_loss)] // biased values are all non-negative
fn put_delta<B: BufMut>(buf: &mut B, px: Pixel, prev: Pixel) {
    if px.a != prev.a {
        put_rgba(buf, px);
        return;
    }

    let vr = px.r.wrapping_sub(prev.r) as i8;
    let vg = px.g.wrapping_sub(prev.g) as i8;
    let vb = px.b.wrapping_sub(prev.b) as i8;
    let vg_r = vr.wrapping_sub(vg);
    let vg_b = vb.wrapping_sub(vg);

    if (-2..=1).contains(&vr) && (-2..=1).contains(&vg) && (-2..=1).contains(&vb) {
        buf.put_u8(
            QOI_OP_DIFF | ((vr + 2) as u8) << 4 | ((vg + 2) as u8) << 2 | (vb + 2) as u8,
        );
    } else if (-8..=7).contains(&vg_r) && (-32..=31).contains(&vg) && (-8..=7).contains(&vg_b) {
        buf.put_u8(QOI_OP_LUMA | (vg + 32) as u8);
        buf.put_u8(((vg_r + 8) as u8) << 4 | (vg_b + 8) as u8);
    } else {
        buf.put_u8(QOI_OP_RGB);
        buf.put_slice(&[px.r, px.g, px.b]);
    }
}

fn put_rgba<B: BufMut>(buf: &mut B, px: Pixel) {
    buf.put_u8(QOI_OP_RGBA);
    buf.put_slice(&[px.r, px.g, px.b, px.a]);
}
