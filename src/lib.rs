//! Color palettes, gradients and contrast.
//!
//! - [`RGBColor`]: hex and `rgb()` conversions, luminance, contrast
//!   ratio and interpolation of colors.
//! - [`ColorRange`]: gradients, i.e. colors parametrized by reals in
//!   \[0, 1\], with sampling and a contrast-seeking search
//!   ([`ColorRange::traverse_until_contrast`]).
//! - [`Palette`]: non-empty lists of colors viewed as evenly spaced
//!   gradient stops.
//!
//! Named palettes: [`RGBColor::solarized_base`] and
//! [`RGBColor::solarized_accents`].
//!
//! # Example
//!
//! ```
//! use rgb::RGB;
//! use contrast_brewery::{ContrastMode, Palette, RGBColor};
//! let white = RGB::<f64>::from_hex("#ffffff")?;
//! let black = RGB::<f64>::from_hex("#000000")?;
//! let gray = RGB::<f64>::from_hex("#808080")?;
//! let p = Palette::new(vec![white, gray, black])?;
//! let text = p.traverse_until_contrast(4.5, ContrastMode::Both);
//! assert!(text.contrast_ratio(&white) >= 4.5);
//! # Ok::<(), contrast_brewery::Error>(())
//! ```

use std::marker::PhantomData;
use rgb::{RGB, RGB8};

pub mod contrast;
mod error;
pub mod hex;
mod palettes;

pub use contrast::{ContrastMode, TOLERANCE};
pub use error::Error;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }

    /// Return the palette of `n` colors sampled at `i / (n - 1)`,
    /// `i = 0,..., n - 1` (at `0.` only if `n == 1`).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `n == 0`.
    fn sample(&self, n: usize) -> Result<Palette<Color>, Error>
    where Color: RGBColor {
        if n == 0 {
            return Err(Error::InvalidArgument("cannot sample 0 colors"))
        }
        let colors = ColorRange::<Color>::range(self, 0., 1., n)
            .map(|(_, c)| c).collect();
        Palette::new(colors)
    }

    /// Move the color at `t0` along the range until its contrast
    /// ratio against the color at `0.` (the background) reaches
    /// `target`, and return the final parameter and color.
    ///
    /// Each allowed direction is walked in [`contrast::SCAN_STEPS`]
    /// steps to bracket its first crossing of `target`, which is then
    /// refined by bisection to within [`TOLERANCE`]; the smaller move
    /// wins.  The returned color always meets `target` when some
    /// explored position does.  When none does, the end with the
    /// greatest contrast is returned if it improves on the color at
    /// `t0` (best effort).  See [`ContrastMode`] for the allowed
    /// moves.
    ///
    /// The crossing found is the closest one when the contrast
    /// against the background is monotonic between `t0` and each end
    /// (e.g. when the range bleaches the color toward black or
    /// white), and the closest one up to the scan resolution
    /// otherwise.
    fn seek_contrast(&self, t0: f64, target: f64,
                     mode: ContrastMode) -> (f64, Color)
    where Color: RGBColor {
        contrast::seek(self, t0, target, mode)
    }

    /// [`ColorRange::seek_contrast`] starting from the middle of the
    /// range, e.g. the candidate of a palette
    /// `[background, candidate, opposite]`.
    fn traverse_until_contrast(&self, target: f64,
                               mode: ContrastMode) -> Color
    where Color: RGBColor {
        self.seek_contrast(0.5, target, mode).1
    }
}

impl<R, Color> ColorRange<Color> for &R
where R: ColorRange<Color> + ?Sized {
    #[inline]
    fn rgb(&self, t: f64) -> Color { R::rgb(*self, t) }
}

/// An iterator yielding `f64` in a given range together with colors.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and RGB color of the position `k` (assuming
    /// it is in the range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, R::rgb(&self.range, 0.))
        } else if k == self.last {
            (self.b, R::rgb(&self.range, 1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, R::rgb(&self.range, t))
        }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.j + 1).saturating_sub(self.i);
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Copy + Sized {
    /// Return the red, green and blue components of the color (in
    /// \[0, 1\]).
    fn to_rgb(&self) -> RGB<f64>;

    /// Create a color from its RGB components (in \[0, 1\]).  Values
    /// outside this range are kept if the encoding can represent
    /// them and clamped otherwise.
    fn from_rgb(rgb: RGB<f64>) -> Self;

    /// Parse a color written with 6 hexadecimal digits, with or
    /// without a leading `#`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB;
    /// use contrast_brewery::RGBColor;
    /// let c = RGB::<f64>::from_hex("#ffffff").unwrap();
    /// assert_eq!(c, RGB { r: 1., g: 1., b: 1. });
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFormat`] if `s` has another shape.
    fn from_hex(s: &str) -> Result<Self, Error> {
        hex::parse(s).map(Self::from_rgb)
    }

    /// Return the color as `#rrggbb` (lowercase digits).  Channels
    /// are rounded to the nearest byte and clamped to \[0, 255\].
    fn to_hex(&self) -> String { hex::format(self.to_rgb()) }

    /// Return the color as `rgb(r,g,b)` with channels rounded to the
    /// nearest integer in \[0, 255\].
    fn to_rgb_string(&self) -> String { hex::format_rgb(self.to_rgb()) }

    /// WCAG relative luminance, in \[0, 1\].
    fn luminance(&self) -> f64 {
        contrast::relative_luminance(self.to_rgb())
    }

    /// WCAG contrast ratio between `self` and `other`, in \[1, 21\].
    /// Symmetric in its arguments.
    fn contrast_ratio<C: RGBColor>(&self, other: &C) -> f64 {
        contrast::contrast_ratio(self.to_rgb(), other.to_rgb())
    }

    /// Linear interpolation from `self` (`t == 0.`) to `c1` (`t ==
    /// 1.`).  `t` is not clamped: values outside \[0, 1\] extrapolate
    /// and may give channels outside \[0, 1\].  The hex and `rgb()`
    /// formatting clamp them.
    fn lerp(&self, c1: &Self, t: f64) -> Self {
        Self::from_rgb(lerp(self.to_rgb(), c1.to_rgb(), t))
    }

    /// Return a gradient from color `c0` to color `c1`, linear in RGB.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use contrast_brewery::{RGBColor, ColorRange};
    /// let red = RGB8::new(255, 0, 0);
    /// let blue = RGB8::new(0, 0, 255);
    /// let grad = red.gradient(&blue);
    /// assert_eq!(grad.rgb(0.5), RGB8::new(128, 0, 128));
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        Gradient { c0: self.to_rgb(), c1: c1.to_rgb(), color: PhantomData }
    }

    /// Solarized base tones, from the darkest background (base03) to
    /// the lightest (base3).
    fn solarized_base() -> Palette<Self> {
        Palette::of_static(&palettes::SOLARIZED_BASE)
    }

    /// Solarized accent colors: yellow, orange, red, magenta, violet,
    /// blue, cyan and green.
    fn solarized_accents() -> Palette<Self> {
        Palette::of_static(&palettes::SOLARIZED_ACCENTS)
    }
}

#[inline]
fn lerp(c0: RGB<f64>, c1: RGB<f64>, t: f64) -> RGB<f64> {
    // Exact at `t == 0.` and `t == 1.`
    let s = 1. - t;
    RGB { r: s * c0.r + t * c1.r,
          g: s * c0.g + t * c1.g,
          b: s * c0.b + t * c1.b }
}

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { *self }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: f64::from(self.r) / 255.,
              g: f64::from(self.g) / 255.,
              b: f64::from(self.b) / 255. }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGB8 { r: hex::channel_to_byte(c.r),
               g: hex::channel_to_byte(c.g),
               b: hex::channel_to_byte(c.b) }
    }
}


/// Gradient between two colors.
///
/// Created by [`RGBColor::gradient`].  See the [`ColorRange`] trait
/// for methods.
#[derive(Clone, Copy, Debug)]
pub struct Gradient<Color> {
    c0: RGB<f64>, // first color
    c1: RGB<f64>, // last color
    color: PhantomData<Color>,
}

impl<Color> Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` without clamping it to
    /// \[0., 1.\].
    #[inline]
    fn rgb_unclamped(&self, t: f64) -> Color {
        Color::from_rgb(lerp(self.c0, self.c1, t))
    }
}

impl<Color> ColorRange<Color> for Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn rgb(&self, t: f64) -> Color { self.rgb_unclamped(t.clamp(0., 1.)) }
}


/// A non-empty list of colors, seen as the evenly spaced stops of a
/// piecewise linear gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette<Color> {
    colors: Vec<Color>, // Invariant: length ≥ 1
}

impl<Color: RGBColor> Palette<Color> {
    /// Create a palette from its colors, in gradient order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Result<Self, Error> {
        if colors.is_empty() {
            return Err(Error::InvalidArgument("a palette needs at least one color"))
        }
        Ok(Self { colors })
    }

    /// Create a palette from hex colors (see [`RGBColor::from_hex`]).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFormat`] on the first malformed color, and
    /// [`Error::InvalidArgument`] if `hex` is empty.
    pub fn from_hex(hex: &[&str]) -> Result<Self, Error> {
        let colors = hex.iter().map(|s| Color::from_hex(s))
            .collect::<Result<_, _>>()?;
        Self::new(colors)
    }

    fn of_static(rgb: &'static [RGB<f64>]) -> Self {
        Self { colors: rgb.iter().map(|&c| Color::from_rgb(c)).collect() }
    }

    /// Returns the number of colors in the palette (at least 1).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.colors.len() }

    /// Returns the colors of the palette.
    pub fn colors(&self) -> &[Color] { &self.colors }

    /// Consumes the palette, returning its colors.
    pub fn into_colors(self) -> Vec<Color> { self.colors }

    /// Returns a gradient constructed from the palette: the `i`th
    /// color sits at `i / (len - 1)`.  A palette with a single color
    /// gives a constant gradient.
    pub fn gradient(&self) -> PaletteGradient<Color> {
        let gradients = if self.colors.len() == 1 {
            vec![self.colors[0].gradient(&self.colors[0])]
        } else {
            self.colors.windows(2).map(|c| c[0].gradient(&c[1])).collect()
        };
        PaletteGradient { gradients }
    }

    /// Returns `n` colors uniformly sampled from [`Self::gradient`].
    /// `resample(len)` gives back the palette (up to rounding).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `n == 0`.
    pub fn resample(&self, n: usize) -> Result<Self, Error> {
        self.gradient().sample(n)
    }

    /// Position of the middle color, `(len - 1) / 2`, on
    /// [`Self::gradient`].  For even lengths this is the lower of the
    /// two middle colors.
    pub fn middle(&self) -> f64 {
        let last = self.colors.len() - 1;
        if last == 0 { 0. } else { (last / 2) as f64 / last as f64 }
    }

    /// Adjust the middle color of the palette (see [`Self::middle`])
    /// until its contrast against the first color reaches `target`.
    /// For a palette `[background, candidate, opposite]`, the
    /// candidate is moved toward `opposite` (or back toward
    /// `background`) as described in [`ColorRange::seek_contrast`].
    pub fn traverse_until_contrast(&self, target: f64,
                                   mode: ContrastMode) -> Color {
        self.gradient().seek_contrast(self.middle(), target, mode).1
    }
}

/// A gradient based on a [`Palette`].
#[derive(Clone, Debug)]
pub struct PaletteGradient<Color> {
    gradients: Vec<Gradient<Color>>, // Invariant: non-empty
}

impl<Color> ColorRange<Color> for PaletteGradient<Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let n = self.gradients.len();
        let mut tn = t.clamp(0., 1.) * n as f64;
        // `k / n * n` may miss `k` by an ulp; land exactly on the stop.
        if (tn - tn.round()).abs() < 1e-9 { tn = tn.round() }
        let i = tn.trunc() as usize;
        if i < n { self.gradients[i].rgb_unclamped(tn.fract()) }
        else { self.gradients[n-1].rgb_unclamped(1.) }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: RGB<f64> = RGB { r: 1., g: 1., b: 1. };
    const BLACK: RGB<f64> = RGB { r: 0., g: 0., b: 0. };

    fn gray(v: f64) -> RGB<f64> { RGB { r: v, g: v, b: v } }

    fn assert_close(a: RGB<f64>, b: RGB<f64>, eps: f64) {
        assert!((a.r - b.r).abs() <= eps && (a.g - b.g).abs() <= eps
                && (a.b - b.b).abs() <= eps, "{a:?} ≉ {b:?}");
    }

    #[test]
    fn gradient_range() {
        let g = BLACK.gradient(&WHITE);
        for (i, (x, c)) in (&g).range(0., 1., 11).enumerate() {
            assert!((x - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.1 * i as f64);
            assert_eq!(g.rgb(x), c);
        }
    }

    #[test]
    fn range_len_and_reverse() {
        let g = BLACK.gradient(&WHITE);
        let mut r = (&g).range(0., 1., 4);
        assert_eq!(r.len(), 4);
        assert_eq!(r.next_back().map(|(x, _)| x), Some(1.));
        assert_eq!(r.len(), 3);
        assert_eq!(r.next().map(|(x, _)| x), Some(0.));
        assert_eq!(r.len(), 2);
        assert_eq!((&g).range(0., 1., 0).count(), 0);
    }

    #[test]
    fn white_from_hex() {
        let white = RGB::<f64>::from_hex("#ffffff").unwrap();
        assert_eq!(white, WHITE);
        assert_eq!(white.to_rgb_string(), "rgb(255,255,255)");
        let black = RGB::<f64>::from_hex("#000000").unwrap();
        let ratio = white.contrast_ratio(&black);
        assert!((ratio - 21.).abs() <= 0.01, "{ratio}");
    }

    #[test]
    fn not_a_color() {
        assert_eq!(RGB::<f64>::from_hex("notacolor"),
                   Err(Error::InvalidFormat("notacolor".to_string())));
        assert!(matches!(RGB8::from_hex("#12345"), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn solarized_base03_is_dark() {
        let c = RGB::<f64>::from_hex("#002b36").unwrap();
        assert!(c.luminance() < 0.05, "{}", c.luminance());
    }

    #[test]
    fn rgb8_conversions() {
        let c = RGB8::from_hex("#002B36").unwrap();
        assert_eq!(c, RGB8::new(0, 43, 54));
        assert_eq!(c.to_hex(), "#002b36");
        assert_eq!(RGB8::from_rgb(gray(0.5)), RGB8::new(128, 128, 128));
        assert_eq!(RGB8::from_rgb(RGB { r: -1., g: 2., b: 0.2 }),
                   RGB8::new(0, 255, 51));
    }

    #[test]
    fn mixed_encodings_contrast() {
        let white8 = RGB8::new(255, 255, 255);
        assert_eq!(white8.contrast_ratio(&WHITE), 1.);
        assert!((white8.contrast_ratio(&BLACK) - 21.).abs() < 1e-9);
    }

    #[test]
    fn lerp_endpoints_and_extrapolation() {
        let a = RGB { r: 0.1, g: 0.7, b: 0.3 };
        let b = RGB { r: 0.9, g: 0.2, b: 0.35 };
        assert_eq!(a.lerp(&b, 0.), a);
        assert_eq!(a.lerp(&b, 1.), b);
        let c = BLACK.lerp(&WHITE, 1.5);
        assert_close(c, gray(1.5), 1e-15);
        assert_eq!(c.to_hex(), "#ffffff");
        assert_eq!(BLACK.lerp(&WHITE, -0.5).to_rgb_string(), "rgb(0,0,0)");
    }

    #[test]
    fn gradient_clamps() {
        let g = BLACK.gradient(&WHITE);
        assert_eq!(g.rgb(-3.), BLACK);
        assert_eq!(g.rgb(7.), WHITE);
        assert_close(g.rgb(0.25), gray(0.25), 1e-15);
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(matches!(Palette::<RGB<f64>>::new(vec![]),
                         Err(Error::InvalidArgument(_))));
        assert!(matches!(Palette::<RGB8>::from_hex(&[]),
                         Err(Error::InvalidArgument(_))));
        assert!(matches!(Palette::<RGB8>::from_hex(&["#000000", "oops"]),
                         Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn palette_gradient_stops() {
        let p = Palette::new(vec![WHITE, gray(0.5), BLACK, BLACK]).unwrap();
        let g = p.gradient();
        assert_eq!(g.rgb(0.), WHITE);
        assert_close(g.rgb(1. / 3.), gray(0.5), 1e-12);
        assert_close(g.rgb(1. / 6.), gray(0.75), 1e-12);
        // Duplicate stops give a constant segment.
        assert_close(g.rgb(0.9), BLACK, 1e-12);
        assert_eq!(g.rgb(1.), BLACK);
        assert_eq!(g.rgb(2.), BLACK);
    }

    #[test]
    fn single_color_palette() {
        let c = RGB { r: 0.2, g: 0.4, b: 0.6 };
        let p = Palette::new(vec![c]).unwrap();
        for t in [0., 0.3, 1.] {
            assert_close(p.gradient().rgb(t), c, 1e-15);
        }
        assert_eq!(p.resample(3).unwrap().colors(), &[c, c, c]);
        assert_eq!(p.traverse_until_contrast(4.5, ContrastMode::Both), c);
    }

    #[test]
    fn resample() {
        let a = RGB { r: 0.1, g: 0.7, b: 0.3 };
        let b = RGB { r: 0.9, g: 0.2, b: 0.35 };
        let p = Palette::new(vec![a, b]).unwrap();
        assert_eq!(p.resample(2).unwrap(), p);
        let p3 = p.resample(3).unwrap();
        assert_eq!(p3.colors(), &[a, a.lerp(&b, 0.5), b]);
        assert_eq!(p.resample(1).unwrap().colors(), &[a]);
        assert!(matches!(p.resample(0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn sample_any_gradient() {
        let g = BLACK.gradient(&WHITE);
        let p = g.sample(5).unwrap();
        assert_eq!(p.len(), 5);
        for (i, &c) in p.colors().iter().enumerate() {
            assert_close(c, gray(0.25 * i as f64), 1e-15);
        }
        assert!(matches!(g.sample(0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn traverse_gray_on_white() {
        let p = Palette::new(vec![WHITE, gray(0.5), BLACK]).unwrap();
        let (t, c) = p.gradient().seek_contrast(0.5, 4.5, ContrastMode::Both);
        let ratio = c.contrast_ratio(&WHITE);
        assert!(ratio >= 4.5 && ratio < 4.5 + 1e-2, "{ratio}");
        assert!(t > 0.5, "moved toward black, t = {t}");
        // A smaller move does not reach the target.
        let closer = p.gradient().rgb(t - 2. * TOLERANCE);
        assert!(closer.contrast_ratio(&WHITE) < 4.5);
        assert_eq!(p.traverse_until_contrast(4.5, ContrastMode::Both), c);
    }

    #[test]
    fn traverse_starts_at_middle_stop() {
        let dark = RGB::<f64>::from_hex("#333333").unwrap();
        let light = RGB::<f64>::from_hex("#e6e6e6").unwrap();
        let p = Palette::new(vec![WHITE, dark, light, BLACK]).unwrap();
        assert_eq!(p.middle(), 1. / 3.);
        assert_eq!(p.gradient().rgb(p.middle()), dark);
        assert_eq!(p.traverse_until_contrast(1.5, ContrastMode::IncreaseOnly),
                   dark);
        let p2 = Palette::new(vec![WHITE, BLACK]).unwrap();
        assert_eq!(p2.middle(), 0.);
        let c = p2.traverse_until_contrast(1.5, ContrastMode::IncreaseOnly);
        let ratio = c.contrast_ratio(&WHITE);
        assert!(ratio >= 1.5 && ratio < 1.5 + 1e-2, "{ratio}");
        assert_eq!(Palette::new(vec![dark]).unwrap().middle(), 0.);
    }

    #[test]
    fn palette_gradient_hits_stops_exactly() {
        let colors: Vec<_> = (0..50).map(|i| gray(i as f64 / 49.)).collect();
        let p = Palette::new(colors.clone()).unwrap();
        let g = p.gradient();
        for (k, &c) in colors.iter().enumerate() {
            assert_eq!(g.rgb(k as f64 / 49.), c, "stop {k}");
        }
    }

    #[test]
    fn traverse_toward_background_when_closer() {
        // Leaving magenta toward the green background first darkens
        // it, which reaches the target sooner than heading to gray.
        let green = RGB::<f64>::from_hex("#00ff00").unwrap();
        let magenta = RGB::<f64>::from_hex("#ff00ff").unwrap();
        let gray = RGB::<f64>::from_hex("#4d4d4d").unwrap();
        let p = Palette::new(vec![green, magenta, gray]).unwrap();
        let g = p.gradient();
        let (t, c) = g.seek_contrast(0.5, 2.6, ContrastMode::Both);
        let ratio = c.contrast_ratio(&green);
        assert!(ratio >= 2.6 && ratio < 2.6 + 1e-2, "{ratio}");
        assert!(t < 0.5 && 0.5 - t < 0.04, "t = {t}");
        // `IncreaseOnly` keeps to the direction whose end raises the
        // contrast.
        let (t, c) = g.seek_contrast(0.5, 2.6, ContrastMode::IncreaseOnly);
        assert!(t > 0.5 && t - 0.5 < 0.05, "t = {t}");
        assert!(c.contrast_ratio(&green) >= 2.6);
    }

    #[test]
    fn traverse_already_readable() {
        let dark = gray(0.2);
        let p = Palette::new(vec![WHITE, dark, BLACK]).unwrap();
        let r0 = dark.contrast_ratio(&WHITE);
        assert!(r0 > 7.);
        assert_eq!(p.traverse_until_contrast(4.5, ContrastMode::IncreaseOnly),
                   dark);
        // `Both` lightens it back toward the target.
        let c = p.traverse_until_contrast(4.5, ContrastMode::Both);
        let ratio = c.contrast_ratio(&WHITE);
        assert!(ratio >= 4.5 && ratio < 4.5 + 1e-2, "{ratio}");
        assert!(c.r > dark.r);
    }

    #[test]
    fn traverse_on_dark_background() {
        let accent = RGB::<f64>::from_hex("#268bd2").unwrap();
        let p = Palette::new(vec![BLACK, accent, WHITE]).unwrap();
        let c = p.traverse_until_contrast(7., ContrastMode::IncreaseOnly);
        let ratio = c.contrast_ratio(&BLACK);
        assert!(ratio >= 7. && ratio < 7. + 1e-2, "{ratio}");
        assert!(c.luminance() > accent.luminance());
    }

    #[test]
    fn traverse_best_effort() {
        let bg = gray(0.9);
        let p = Palette::new(vec![bg, gray(0.8), gray(0.6)]).unwrap();
        let c = p.traverse_until_contrast(4.5, ContrastMode::Both);
        assert_eq!(c, gray(0.6));
        let c = p.traverse_until_contrast(4.5, ContrastMode::IncreaseOnly);
        assert_eq!(c, gray(0.6));
    }

    #[test]
    fn traverse_increase_only_keeps_direction() {
        // The far end is closer in luminance to the background than
        // the candidate: nothing increases contrast.
        let p = Palette::new(vec![WHITE, gray(0.3), gray(0.6)]).unwrap();
        let c = p.traverse_until_contrast(21., ContrastMode::IncreaseOnly);
        assert_eq!(c, gray(0.3));
    }

    #[test]
    fn solarized_palettes() {
        let base = RGB8::solarized_base();
        assert_eq!(base.len(), 8);
        assert_eq!(base.colors()[0].to_hex(), "#002b36");
        assert_eq!(base.colors()[7].to_hex(), "#fdf6e3");
        let accents = RGB::<f64>::solarized_accents();
        assert_eq!(accents.len(), 8);
        assert_eq!(accents.colors()[5].to_hex(), "#268bd2");
    }
}
