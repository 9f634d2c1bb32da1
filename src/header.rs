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

//! Stream header and end marker.
//!
//! Wire format:
//!
//! ```text
//! [q o i f][width u32 BE][height u32 BE][channels u8][colorspace u8]
//! ...opcodes...
//! [00 00 00 00 00 00 00 01]
//! ```

use bytes::BufMut;

use crate::consts::{QOI_MAGIC, QOI_PADDING};
use crate::desc::ImageDesc;

/// Writes the 14-byte header for `desc`.
pub fn write_header<B: BufMut>(buf: &mut B, desc: &ImageDesc) {
    buf.put_slice(&QOI_MAGIC);
    buf.put_u32(desc.width); // big-endian
    buf.put_u32(desc.height);
    buf.put_u8(desc.channels);
    buf.put_u8(desc.colorspace);
}

/// Writes the 8-byte end marker.
pub fn write_footer<B: BufMut>(buf: &mut B) {
    buf.put_slice(&QOI_PADDING);
}
