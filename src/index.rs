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

//! Color-cache-only QOI strategy (INDEX opcode).
//!
//! Every pixel is looked up in a 64-slot cache addressed by
//! `(r*3 + g*5 + b*7 + a*11) % 64`. A hit costs one byte; a miss overwrites
//! the slot and costs a 5-byte `QOI_OP_RGBA` literal regardless of channel
//! count. Colliding colors evict each other, so two alternating colors that
//! share a slot never hit.
//!
//! The cache starts out filled with `{0, 0, 0, 0}`, so a leading transparent
//! black RGBA pixel is already a hit.

use bytes::Bytes;

use crate::encoder::{EncoderFeatures, QoiEncoder};
use crate::{EncodeError, Encoding, ImageDesc};

/// Encodes `data` using only INDEX and RGBA opcodes.
///
/// # Errors
///
/// Returns an error if `desc` is invalid, `data` is too short, or the output
/// buffer cannot be allocated.
pub fn encode_index(data: &[u8], desc: &ImageDesc) -> Result<Vec<u8>, EncodeError> {
    QoiEncoder::new(EncoderFeatures::CACHE_ONLY).encode(data, desc)
}

/// Implements the color-cache-only strategy.
pub struct IndexEncoding;

impl Encoding for IndexEncoding {
    fn encode(&self, data: &[u8], desc: &ImageDesc) -> Result<Bytes, EncodeError> {
        encode_index(data, desc).map(Bytes::from)
    }
}
