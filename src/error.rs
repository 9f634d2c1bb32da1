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

//! Error types returned by the encoders.

use thiserror::Error;

/// Errors that can occur while encoding an image.
///
/// Both variants mean no output was produced. There are no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The descriptor or input buffer failed validation. Nothing was allocated.
    #[error("invalid image descriptor: {0}")]
    InvalidDescriptor(#[from] DescriptorError),

    /// The worst-case output buffer could not be reserved.
    #[error("failed to allocate {size} bytes for encoded output")]
    AllocationFailure { size: usize },
}

/// The specific validation check an [`ImageDesc`](crate::ImageDesc) failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// Width or height is zero
    #[error("width ({width}) and height ({height}) must be non-zero")]
    ZeroDimension { width: u32, height: u32 },

    #[error("unsupported channel count {0} (expected 3 or 4)")]
    UnsupportedChannels(u8),

    #[error("unsupported colorspace {0} (expected 0 or 1)")]
    UnsupportedColorspace(u8),

    /// `width * height` reaches the pixel limit
    #[error("{width}x{height} exceeds the maximum of {max} pixels")]
    TooManyPixels { width: u32, height: u32, max: u32 },

    #[error("input buffer size mismatch: got {actual} bytes, expected {expected} bytes")]
    InputTooShort { expected: usize, actual: usize },
}

/// A strategy name that [`Strategy`](crate::Strategy) does not recognise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}' (expected one of: qoi, run, diffluma, index)")]
pub struct UnknownStrategy(pub String);
