//! Striped flag palettes used by the flag scroller.

use super::{Rgb, rgb_from_u32};

/// Create a band array from hex colors (0xRRGGBB format)
macro_rules! hex_bands {
    ($($color:expr),* $(,)?) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

const RAINBOW: [Rgb; 6] =
    hex_bands![0xE6_00_00, 0xFF_8E_00, 0xFF_EF_00, 0x00_82_1B, 0x00_4B_FF, 0x78_00_89];
const TRANS: [Rgb; 5] = hex_bands![0x47_CE_FA, 0xF3_94_A3, 0xFF_FF_FF, 0xF3_94_A3, 0x47_CE_FA];
const NON_BINARY: [Rgb; 4] = hex_bands![0xFF_F4_2F, 0xFF_FF_FF, 0x9C_59_D1, 0x29_29_29];
const AROMANTIC: [Rgb; 5] =
    hex_bands![0x3A_A7_40, 0xA8_D4_7A, 0xFF_FF_FF, 0x97_97_97, 0x29_29_29];
const ASEXUAL: [Rgb; 4] = hex_bands![0x29_29_29, 0x97_97_97, 0xFF_FF_FF, 0x81_00_81];
// Two-fifths magenta, one-fifth lavender, two-fifths blue
const BISEXUAL: [Rgb; 5] =
    hex_bands![0xD7_00_85, 0xD7_00_85, 0x9C_4E_97, 0x00_35_AA, 0x00_35_AA];
const PANSEXUAL: [Rgb; 3] = hex_bands![0xFF_1B_8D, 0xFF_D9_00, 0x1B_B3_FF];

/// A flag made of equally tall horizontal bands, laid out along the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub bands: &'static [Rgb],
}

impl Palette {
    pub const fn new(name: &'static str, bands: &'static [Rgb]) -> Self {
        Self { name, bands }
    }

    /// Number of bands, always at least one for catalog entries
    pub const fn bands_len(&self) -> usize {
        self.bands.len()
    }
}

/// Catalog of built-in flags. The index is the flag identity.
pub static PALETTES: [Palette; 7] = [
    Palette::new("rainbow", &RAINBOW),
    Palette::new("trans", &TRANS),
    Palette::new("non_binary", &NON_BINARY),
    Palette::new("aromantic", &AROMANTIC),
    Palette::new("asexual", &ASEXUAL),
    Palette::new("bisexual", &BISEXUAL),
    Palette::new("pansexual", &PANSEXUAL),
];

/// Look up a built-in palette by name
pub fn palette_by_name(name: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|palette| palette.name == name)
}
