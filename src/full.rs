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

//! Standard QOI encoding with every opcode enabled.
//!
//! Per pixel: extend or flush a run, then try the color cache, then a DIFF or
//! LUMA delta, then fall back to an RGB or RGBA literal. This is the baseline
//! the restricted strategies are compared against.

use bytes::Bytes;

use crate::encoder::{EncoderFeatures, QoiEncoder};
use crate::{EncodeError, Encoding, ImageDesc};

/// Encodes `data` as a standard QOI stream.
///
/// # Errors
///
/// Returns an error if `desc` is invalid, `data` is too short, or the output
/// buffer cannot be allocated.
pub fn encode_qoi(data: &[u8], desc: &ImageDesc) -> Result<Vec<u8>, EncodeError> {
    QoiEncoder::new(EncoderFeatures::ALL).encode(data, desc)
}

/// Implements standard QOI encoding.
pub struct QoiEncoding;

impl Encoding for QoiEncoding {
    fn encode(&self, data: &[u8], desc: &ImageDesc) -> Result<Bytes, EncodeError> {
        encode_qoi(data, desc).map(Bytes::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::encode_run;

    #[test]
    fn test_every_opcode_in_one_stream() {
        let desc = ImageDesc::rgba(6, 1);
        let data: Vec<u8> = [
            [0, 0, 0, 255],
            [1, 1, 1, 255],
            [1, 1, 1, 255],
            [101, 100, 99, 255],
            [1, 1, 1, 255],
            [1, 1, 1, 128],
        ]
        .concat();

        let encoded = encode_qoi(&data, &desc).unwrap();
        assert_eq!(
            encoded,
            [
                &b"qoif"[..],
                &[0, 0, 0, 6, 0, 0, 0, 1, 4, 0],
                &[0xc0],                   // run of 1 (seed color)
                &[0x7f],                   // diff +1 +1 +1
                &[0xc0],                   // run of 1
                &[0xfe, 101, 100, 99],     // rgb
                &[0x04],                   // index slot 4
                &[0xff, 1, 1, 1, 128],     // rgba, alpha changed
                &[0, 0, 0, 0, 0, 0, 0, 1], // end marker
            ]
            .concat()
        );
    }

    #[test]
    fn test_solid_image_matches_run_only() {
        let desc = ImageDesc::rgba(40, 40);
        let data = [12u8, 34, 56, 255].repeat(40 * 40);
        let full = encode_qoi(&data, &desc).unwrap();
        let run = encode_run(&data, &desc).unwrap();
        // first pixel differs: RGB literal for full, RGBA for run-only
        assert_eq!(full.len() + 1, run.len());
        assert_eq!(full[18..], run[19..]);
    }
}
