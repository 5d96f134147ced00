//! Textual color encodings: `#rrggbb` and `rgb(r,g,b)`.

use rgb::RGB;
use crate::Error;

/// Parse `s` as 6 hex digits (either case), with or without a
/// leading `#`.  Channels are normalized to \[0, 1\].
pub fn parse(s: &str) -> Result<RGB<f64>, Error> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    let bytes = digits.as_bytes();
    if bytes.len() != 6 || !bytes.iter().all(u8::is_ascii_hexdigit) {
        return Err(Error::InvalidFormat(s.to_string()));
    }
    let byte = |i: usize| f64::from(hex_pair(bytes[i], bytes[i + 1])) / 255.;
    Ok(RGB { r: byte(0), g: byte(2), b: byte(4) })
}

// Both arguments must be ASCII hex digits.
fn hex_pair(hi: u8, lo: u8) -> u8 {
    let nibble = |c: u8| match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    };
    nibble(hi) << 4 | nibble(lo)
}

/// Scale a channel in \[0, 1\] to a byte, rounding to nearest.
/// Out of range values are clamped and NaN gives 0.
#[inline]
pub fn channel_to_byte(v: f64) -> u8 {
    // `as` saturates and maps NaN to 0.
    (v * 255.).round().clamp(0., 255.) as u8
}

/// Format as `#rrggbb` (lowercase).
pub fn format(c: RGB<f64>) -> String {
    format!("#{:02x}{:02x}{:02x}",
            channel_to_byte(c.r), channel_to_byte(c.g), channel_to_byte(c.b))
}

/// Format as `rgb(r,g,b)` with channels in \[0, 255\].
pub fn format_rgb(c: RGB<f64>) -> String {
    format!("rgb({},{},{})",
            channel_to_byte(c.r), channel_to_byte(c.g), channel_to_byte(c.b))
}
