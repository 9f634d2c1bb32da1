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

//! QOI wire-format constants.
//!
//! Tag values and sizes are fixed by the QOI format and must match any
//! conforming decoder byte for byte.

/// Stream magic, `"qoif"`.
pub const QOI_MAGIC: [u8; 4] = *b"qoif";

/// Header length: magic, width, height, channels, colorspace.
pub const QOI_HEADER_SIZE: usize = 14;

/// End-of-stream marker: seven zero bytes followed by `0x01`.
pub const QOI_PADDING: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];

/// Upper bound on `width * height`.
///
/// Chosen so that `width * height * (channels + 1)` plus header and padding
/// stays below 2^31.
pub const QOI_PIXELS_MAX: u32 = 400_000_000;

// 2-bit opcode tags (high bits of the first byte)
pub const QOI_OP_INDEX: u8 = 0x00;
pub const QOI_OP_DIFF: u8 = 0x40;
pub const QOI_OP_LUMA: u8 = 0x80;
pub const QOI_OP_RUN: u8 = 0xc0;

// 8-bit opcode tags
pub const QOI_OP_RGB: u8 = 0xfe;
pub const QOI_OP_RGBA: u8 = 0xff;

/// Mask selecting the 2-bit tag of a short opcode.
pub const QOI_MASK_2: u8 = 0xc0;

/// Longest run a single `QOI_OP_RUN` can carry. 63 and 64 would collide
/// with the RGB and RGBA tags.
pub const QOI_RUN_MAX: u8 = 62;

/// Number of slots in the running color cache.
pub const QOI_CACHE_SIZE: usize = 64;

/// Colorspace byte: sRGB with linear alpha.
pub const QOI_SRGB: u8 = 0;
/// Colorspace byte: all channels linear.
pub const QOI_LINEAR: u8 = 1;
