//! Cake flavours and the skin registry
//!
//! The simulation only carries a [`Skin`] token per block; the colours here
//! are looked up by the renderer.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;

/// Cake flavour of a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flavor {
    Strawberry,
    Blueberry,
    Lemon,
    Matcha,
    Chocolate,
    Watermelon,
    Vanilla,
}

/// Colours used to draw a flavour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlavorColors {
    /// Top of the body gradient
    pub main: [f32; 4],
    /// Bottom of the body gradient (also the outline)
    pub gradient: [f32; 4],
    pub frosting: [f32; 4],
    pub dot: [f32; 4],
}

/// `0xRRGGBB` to linear-ish RGBA
const fn rgb(hex: u32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
        1.0,
    ]
}

impl Flavor {
    pub const ALL: [Flavor; 7] = [
        Flavor::Strawberry,
        Flavor::Blueberry,
        Flavor::Lemon,
        Flavor::Matcha,
        Flavor::Chocolate,
        Flavor::Watermelon,
        Flavor::Vanilla,
    ];

    pub fn colors(&self) -> FlavorColors {
        let (main, gradient, frosting, dot) = match self {
            Flavor::Strawberry => (0xFF9AA2, 0xFF5A67, 0xFFFFFF, 0xFF0033),
            Flavor::Blueberry => (0xA0C4FF, 0x4A86E8, 0xE6F0FF, 0x0047AB),
            Flavor::Lemon => (0xFDFFB6, 0xFFEE58, 0xFFFDE7, 0xFFD700),
            Flavor::Matcha => (0xCAFFBF, 0x66BB6A, 0xF1F8E9, 0x2E7D32),
            Flavor::Chocolate => (0xA68064, 0x6D4C41, 0xD7CCC8, 0x3E2723),
            Flavor::Watermelon => (0xFFB7D5, 0xFF4081, 0xFCE4EC, 0x2E7D32),
            Flavor::Vanilla => (0xFFF5E1, 0xFFE0B2, 0xFFFFFF, 0xFFD54F),
        };
        FlavorColors {
            main: rgb(main),
            gradient: rgb(gradient),
            frosting: rgb(frosting),
            dot: rgb(dot),
        }
    }
}

/// Visual identity of a block or fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skin {
    /// Wooden serving plate under the tower
    Plate,
    Cake(Flavor),
}

/// Plate wood colours (light, dark, grain)
pub const PLATE_LIGHT: [f32; 4] = rgb(0xA0522D);
pub const PLATE_DARK: [f32; 4] = rgb(0x8B4513);
pub const PLATE_GRAIN: [f32; 4] = rgb(0x6B3E26);

/// Draw a cake flavour uniformly
pub fn pick_random_skin(rng: &mut impl RandomSource) -> Skin {
    Skin::Cake(Flavor::ALL[rng.index(Flavor::ALL.len())])
}
