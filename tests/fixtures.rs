//! Deterministic test images shared by the integration tests.
//!
//! Everything is generated in memory with no randomness, so encoded output is
//! identical on every platform and across runs.

#![allow(dead_code)]

/// 64x64 RGBA image with 4 quadrants for testing different opcode mixes:
/// - Top-left: red horizontal gradient (DIFF/LUMA territory)
/// - Top-right: green vertical gradient (long runs along each row)
/// - Bottom-left: solid blue (runs)
/// - Bottom-right: checkerboard (cache hits, alternating literals otherwise)
pub fn frame_64x64_rgba() -> Vec<u8> {
    let mut pixels = Vec::with_capacity(64 * 64 * 4);

    for y in 0..64u32 {
        for x in 0..64u32 {
            let (r, g, b, a) = if x < 32 && y < 32 {
                ((x * 8) as u8, 0, 0, 255)
            } else if x >= 32 && y < 32 {
                (0, (y * 8) as u8, 0, 255)
            } else if x < 32 && y >= 32 {
                (0, 0, 200, 255)
            } else if (x + y) % 2 == 0 {
                (255, 255, 255, 255)
            } else {
                (0, 0, 0, 255)
            };
            pixels.extend_from_slice(&[r, g, b, a]);
        }
    }
    pixels
}

/// 100x75 RGB gradient. Dimensions are deliberately not powers of two.
pub fn frame_100x75_rgb() -> Vec<u8> {
    let mut pixels = Vec::with_capacity(100 * 75 * 3);
    for y in 0..75u32 {
        for x in 0..100u32 {
            let r = ((x * 255) / 100) as u8;
            let g = ((y * 255) / 75) as u8;
            pixels.extend_from_slice(&[r, g, 128]);
        }
    }
    pixels
}

/// 48x32 RGBA image with pseudo-random colors and varying alpha, a worst
/// case for every strategy.
pub fn frame_48x32_noise() -> Vec<u8> {
    // Fixed-seed LCG, same sequence on every run
    let mut state: u32 = 0x1234_5678;
    let mut next = move || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (state >> 24) as u8
    };
    (0..48 * 32 * 4).map(|_| next()).collect()
}

/// Single-color RGBA image.
pub fn solid_rgba(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    color.repeat((width * height) as usize)
}
