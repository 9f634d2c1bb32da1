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

//! Run-length-only QOI strategy.
//!
//! Consecutive identical pixels collapse into `QOI_OP_RUN` (up to 62 pixels
//! per opcode). Every other pixel is written as a 5-byte `QOI_OP_RGBA`
//! literal, even for RGB input and even when alpha did not change. There is
//! no delta or cache logic, so this measures what run-length coding alone
//! contributes.
//!
//! # Wire format
//!
//! ```text
//! run:     [0b11 | run-1 (6 bits)]
//! literal: [0xFF][R][G][B][A]
//! ```

use bytes::Bytes;

use crate::encoder::{EncoderFeatures, QoiEncoder};
use crate::{EncodeError, Encoding, ImageDesc};

/// Encodes `data` using only run-length and RGBA-literal opcodes.
///
/// # Errors
///
/// Returns an error if `desc` is invalid, `data` is too short, or the output
/// buffer cannot be allocated.
pub fn encode_run(data: &[u8], desc: &ImageDesc) -> Result<Vec<u8>, EncodeError> {
    QoiEncoder::new(EncoderFeatures::RUN_ONLY).encode(data, desc)
}

/// Implements the run-length-only strategy.
pub struct RunEncoding;

impl Encoding for RunEncoding {
    fn encode(&self, data: &[u8], desc: &ImageDesc) -> Result<Bytes, EncodeError> {
        encode_run(data, desc).map(Bytes::from)
    }
}
