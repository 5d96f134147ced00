//! Built-in palette data.

use lazy_static::lazy_static;
use rgb::RGB;

fn of_bytes(colors: &[[u8; 3]]) -> Vec<RGB<f64>> {
    colors.iter()
        .map(|&[r, g, b]| RGB { r: f64::from(r) / 255.,
                                g: f64::from(g) / 255.,
                                b: f64::from(b) / 255. })
        .collect()
}

lazy_static! {
    /// Solarized base03, base02, base01, base00, base0, base1, base2
    /// and base3.
    pub(crate) static ref SOLARIZED_BASE: Vec<RGB<f64>> = of_bytes(&[
        [0x00, 0x2b, 0x36],
        [0x07, 0x36, 0x42],
        [0x58, 0x6e, 0x75],
        [0x65, 0x7b, 0x83],
        [0x83, 0x94, 0x96],
        [0x93, 0xa1, 0xa1],
        [0xee, 0xe8, 0xd5],
        [0xfd, 0xf6, 0xe3]]);

    /// Solarized yellow, orange, red, magenta, violet, blue, cyan and
    /// green.
    pub(crate) static ref SOLARIZED_ACCENTS: Vec<RGB<f64>> = of_bytes(&[
        [0xb5, 0x89, 0x00],
        [0xcb, 0x4b, 0x16],
        [0xdc, 0x32, 0x2f],
        [0xd3, 0x36, 0x82],
        [0x6c, 0x71, 0xc4],
        [0x26, 0x8b, 0xd2],
        [0x2a, 0xa1, 0x98],
        [0x85, 0x99, 0x00]]);
}
