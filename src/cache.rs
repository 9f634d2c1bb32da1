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

//! Direct-mapped running color cache.

use crate::consts::QOI_CACHE_SIZE;
use crate::pixel::Pixel;

/// 64 slots addressed by [`Pixel::hash`].
///
/// No chaining: storing a pixel silently evicts whatever occupied its slot.
/// Decoders rebuild the same table, so eviction order is part of the format.
#[derive(Debug, Clone)]
pub struct ColorCache {
    slots: [Pixel; QOI_CACHE_SIZE],
}

impl Default for ColorCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorCache {
    /// Creates a cache with every slot set to transparent black.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [Pixel::TRANSPARENT; QOI_CACHE_SIZE],
        }
    }

    /// Returns the slot index if `px` is already cached there. On a miss the
    /// slot is overwritten with `px` and `None` is returned.
    #[inline]
    pub fn lookup_or_insert(&mut self, px: Pixel) -> Option<u8> {
        let slot = px.hash();
        if self.slots[slot] == px {
            #[allow(clippy::cast_possible_truncation)] // slot < 64
            return Some(slot as u8);
        }
        self.slots[slot] = px;
        None
    }

    /// Returns the pixel stored in `slot`, as referenced by a `QOI_OP_INDEX`
    /// byte. `None` if `slot` is 64 or above.
    #[must_use]
    pub fn get(&self, slot: u8) -> Option<Pixel> {
        self.slots.get(usize::from(slot)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_cache_hits_transparent_black() {
        let mut cache = ColorCache::new();
        assert_eq!(cache.lookup_or_insert(Pixel::TRANSPARENT), Some(0));
    }

    #[test]
    fn test_miss_then_hit() {
        let mut cache = ColorCache::new();
        let px = Pixel::rgb(12, 34, 56);
        #[allow(clippy::cast_possible_truncation)]
        let slot = px.hash() as u8;
        assert_eq!(cache.lookup_or_insert(px), None);
        assert_eq!(cache.get(slot), Some(px));
        assert_eq!(cache.lookup_or_insert(px), Some(slot));
    }

    #[test]
    fn test_collision_evicts() {
        let mut cache = ColorCache::new();
        // b * 7 = 448 = 7 * 64, so both land in slot 53
        let first = Pixel::OPAQUE_BLACK;
        let second = Pixel::rgb(0, 0, 64);
        assert_eq!(first.hash(), second.hash());

        assert_eq!(cache.lookup_or_insert(first), None);
        assert_eq!(cache.lookup_or_insert(second), None);
        assert_eq!(cache.get(53), Some(second));
        // first was evicted, so it misses again
        assert_eq!(cache.lookup_or_insert(first), None);
    }

    #[test]
    fn test_get_out_of_range_slot() {
        let cache = ColorCache::new();
        assert_eq!(cache.get(63), Some(Pixel::TRANSPARENT));
        assert_eq!(cache.get(64), None);
        assert_eq!(cache.get(u8::MAX), None);
    }
}
