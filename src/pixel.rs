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

//! RGBA pixel value used by the classifier.

use crate::consts::QOI_CACHE_SIZE;

/// An RGBA pixel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// `{0, 0, 0, 0}`, the initial value of every cache slot.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// `{0, 0, 0, 255}`, the previous pixel before the first one is read.
    pub const OPAQUE_BLACK: Self = Self::rgba(0, 0, 0, 255);

    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// RGB pixel with alpha fixed at 255.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Reads one pixel from the start of `chunk`.
    ///
    /// Three-byte chunks keep alpha from `prev`: RGB input never changes alpha,
    /// so it stays at the 255 it was seeded with.
    #[inline]
    pub(crate) fn read(chunk: &[u8], prev: Self) -> Self {
        match *chunk {
            [r, g, b, a, ..] => Self::rgba(r, g, b, a),
            [r, g, b] => Self { r, g, b, a: prev.a },
            _ => unreachable!("pixel chunks hold 3 or 4 channels"),
        }
    }

    /// Cache slot for this pixel: `(r*3 + g*5 + b*7 + a*11) % 64`.
    #[inline]
    #[must_use]
    pub fn hash(self) -> usize {
        (usize::from(self.r) * 3
            + usize::from(self.g) * 5
            + usize::from(self.b) * 7
            + usize::from(self.a) * 11)
            % QOI_CACHE_SIZE
    }
}
