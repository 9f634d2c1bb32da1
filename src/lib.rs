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

//! QOI (Quite OK Image) encoders with isolated compression strategies.
//!
//! The QOI format codes each pixel with one of a handful of opcodes: run
//! length, color-cache index, small delta, luma delta, or a raw literal. This
//! crate provides the standard encoder plus three restricted strategies that
//! each enable a single technique, so the contribution of runs, deltas and
//! the color cache can be measured in isolation:
//!
//! | Strategy | Opcodes | Function |
//! |----------|---------|----------|
//! | [`Strategy::Qoi`] | all | [`encode_qoi`] |
//! | [`Strategy::Run`] | RUN, RGBA | [`encode_run`] |
//! | [`Strategy::DiffLuma`] | DIFF, LUMA, RGB, RGBA | [`encode_diff_luma`] |
//! | [`Strategy::Index`] | INDEX, RGBA | [`encode_index`] |
//!
//! Every output is a valid QOI stream that any QOI decoder can read.
//!
//! # Example
//!
//! ```
//! use qoi_encodings::{encode_run, ImageDesc};
//!
//! let pixels = vec![255u8; 16 * 16 * 4];
//! let encoded = encode_run(&pixels, &ImageDesc::rgba(16, 16)).unwrap();
//! assert_eq!(&encoded[..4], b"qoif");
//! ```
//!
//! Encoding is synchronous and keeps all state local to the call; encoders
//! are `Send + Sync` and can be shared between threads.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;

pub mod cache;
pub mod consts;
pub mod desc;
pub mod diff_luma;
pub mod encoder;
pub mod error;
pub mod full;
pub mod header;
pub mod index;
pub mod pixel;
pub mod run;

pub use cache::ColorCache;
pub use desc::ImageDesc;
pub use diff_luma::{encode_diff_luma, DiffLumaEncoding};
pub use encoder::{EncoderFeatures, QoiEncoder};
pub use error::{DescriptorError, EncodeError, UnknownStrategy};
pub use full::{encode_qoi, QoiEncoding};
pub use index::{encode_index, IndexEncoding};
pub use pixel::Pixel;
pub use run::{encode_run, RunEncoding};

/// Standard QOI, every opcode enabled.
pub const STRATEGY_QOI: i32 = 0;
/// Run-length opcodes only.
pub const STRATEGY_RUN: i32 = 1;
/// DIFF and LUMA opcodes only.
pub const STRATEGY_DIFF_LUMA: i32 = 2;
/// Color-cache INDEX opcodes only.
pub const STRATEGY_INDEX: i32 = 3;

/// A QOI encoding strategy.
pub trait Encoding: Send + Sync {
    /// Encodes `data` described by `desc` into a complete QOI stream.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidDescriptor`] for a bad descriptor or short
    /// input and [`EncodeError::AllocationFailure`] if the output buffer could
    /// not be reserved. No partial output is produced on error.
    fn encode(&self, data: &[u8], desc: &ImageDesc) -> Result<Bytes, EncodeError>;
}

/// Identifies one of the encoding strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Qoi,
    Run,
    DiffLuma,
    Index,
}

impl Strategy {
    /// All strategies, in id order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Qoi,
        Strategy::Run,
        Strategy::DiffLuma,
        Strategy::Index,
    ];

    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            Strategy::Qoi => STRATEGY_QOI,
            Strategy::Run => STRATEGY_RUN,
            Strategy::DiffLuma => STRATEGY_DIFF_LUMA,
            Strategy::Index => STRATEGY_INDEX,
        }
    }

    #[must_use]
    pub const fn from_id(id: i32) -> Option<Self> {
        match id {
            STRATEGY_QOI => Some(Strategy::Qoi),
            STRATEGY_RUN => Some(Strategy::Run),
            STRATEGY_DIFF_LUMA => Some(Strategy::DiffLuma),
            STRATEGY_INDEX => Some(Strategy::Index),
            _ => None,
        }
    }

    /// Short name used on the command line and in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Qoi => "qoi",
            Strategy::Run => "run",
            Strategy::DiffLuma => "diffluma",
            Strategy::Index => "index",
        }
    }

    /// File extension for streams produced by this strategy.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Strategy::Qoi => ".qoi",
            Strategy::Run => ".run.qoi",
            Strategy::DiffLuma => ".diffluma.qoi",
            Strategy::Index => ".index.qoi",
        }
    }

    #[must_use]
    pub const fn features(self) -> EncoderFeatures {
        match self {
            Strategy::Qoi => EncoderFeatures::ALL,
            Strategy::Run => EncoderFeatures::RUN_ONLY,
            Strategy::DiffLuma => EncoderFeatures::DELTA_ONLY,
            Strategy::Index => EncoderFeatures::CACHE_ONLY,
        }
    }

    #[must_use]
    pub fn encoder(self) -> Box<dyn Encoding> {
        match self {
            Strategy::Qoi => Box::new(QoiEncoding),
            Strategy::Run => Box::new(RunEncoding),
            Strategy::DiffLuma => Box::new(DiffLumaEncoding),
            Strategy::Index => Box::new(IndexEncoding),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Returns the encoder for a strategy id, or `None` for an unknown id.
#[must_use]
pub fn get_encoder(strategy_id: i32) -> Option<Box<dyn Encoding>> {
    Strategy::from_id(strategy_id).map(Strategy::encoder)
}
