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

//! Delta-only QOI strategy (DIFF and LUMA opcodes).
//!
//! Each pixel is coded relative to the previous one. Runs and the color cache
//! are disabled, so N identical pixels cost N one-byte `QOI_OP_DIFF` opcodes.
//!
//! # Decision order
//!
//! 1. Alpha changed: `[0xFF][R][G][B][A]`
//! 2. `dr, dg, db` all in `-2..=1`: `[0b01 | dr+2 | dg+2 | db+2]` (2 bits each)
//! 3. `dg` in `-32..=31`, `dr-dg` and `db-dg` in `-8..=7`:
//!    `[0b10 | dg+32 (6 bits)][dr-dg+8 (4 bits) | db-dg+8 (4 bits)]`
//! 4. Otherwise: `[0xFE][R][G][B]`
//!
//! Differences wrap, so 255 -> 0 is +1.

use bytes::Bytes;

use crate::encoder::{EncoderFeatures, QoiEncoder};
use crate::{EncodeError, Encoding, ImageDesc};

/// Encodes `data` using only DIFF, LUMA, RGB and RGBA opcodes.
///
/// # Errors
///
/// Returns an error if `desc` is invalid, `data` is too short, or the output
/// buffer cannot be allocated.
pub fn encode_diff_luma(data: &[u8], desc: &ImageDesc) -> Result<Vec<u8>, EncodeError> {
    QoiEncoder::new(EncoderFeatures::DELTA_ONLY).encode(data, desc)
}

/// Implements the delta-only strategy.
pub struct DiffLumaEncoding;

impl Encoding for DiffLumaEncoding {
    fn encode(&self, data: &[u8], desc: &ImageDesc) -> Result<Bytes, EncodeError> {
        encode_diff_luma(data, desc).map(Bytes::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{
        QOI_HEADER_SIZE, QOI_MASK_2, QOI_OP_DIFF, QOI_OP_LUMA, QOI_OP_RGB, QOI_OP_RGBA,
        QOI_PADDING,
    };

    fn body(encoded: &[u8]) -> &[u8] {
        &encoded[QOI_HEADER_SIZE..encoded.len() - QOI_PADDING.len()]
    }

    #[test]
    fn test_small_delta_packs_into_one_byte() {
        let desc = ImageDesc::rgb(2, 1);
        let data = [100, 100, 100, 101, 100, 99];

        let encoded = encode_diff_luma(&data, &desc).unwrap();
        // first pixel: dr = dg = db = 100 from black, too far for LUMA
        // second: (+1, 0, -1) -> (3 << 4) | (2 << 2) | 1
        assert_eq!(
            body(&encoded),
            [QOI_OP_RGB, 100, 100, 100, QOI_OP_DIFF | 0x39]
        );
    }

    #[test]
    fn test_identical_pixels_cost_one_byte_each() {
        let desc = ImageDesc::rgba(5, 1);
        let data = [0u8, 0, 0, 255].repeat(5);

        let encoded = encode_diff_luma(&data, &desc).unwrap();
        // zero delta is (2 << 4) | (2 << 2) | 2
        assert_eq!(body(&encoded), [QOI_OP_DIFF | 0x2a; 5]);
    }

    #[test]
    fn test_luma_from_seed_pixel() {
        let desc = ImageDesc::rgb(1, 1);
        // dg = 30, dr - dg = -3, db - dg = 4
        let data = [27, 30, 34];

        let encoded = encode_diff_luma(&data, &desc).unwrap();
        assert_eq!(body(&encoded), [QOI_OP_LUMA | 62, (5 << 4) | 12]);
    }

    #[test]
    fn test_alpha_change_uses_rgba_literal() {
        let desc = ImageDesc::rgba(2, 1);
        let data = [0, 0, 0, 255, 1, 0, 0, 254];

        let encoded = encode_diff_luma(&data, &desc).unwrap();
        assert_eq!(
            body(&encoded),
            [QOI_OP_DIFF | 0x2a, QOI_OP_RGBA, 1, 0, 0, 254]
        );
    }

    #[test]
    fn test_never_emits_run_or_index() {
        let desc = ImageDesc::rgb(32, 32);
        let data: Vec<u8> = (0..desc.input_len())
            .map(|i| if (i / 3) % 7 == 0 { 0 } else { (i % 5) as u8 })
            .collect();

        let encoded = encode_diff_luma(&data, &desc).unwrap();
        let mut rest = body(&encoded);
        while let Some(&tag) = rest.first() {
            let len = match tag {
                QOI_OP_RGBA => 5,
                QOI_OP_RGB => 4,
                _ if tag & QOI_MASK_2 == QOI_OP_LUMA => 2,
                _ if tag & QOI_MASK_2 == QOI_OP_DIFF => 1,
                _ => panic!("unexpected opcode {tag:#04x}"),
            };
            rest = &rest[len..];
        }
    }
}
