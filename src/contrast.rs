//! WCAG relative luminance, contrast ratio and contrast-seeking
//! search along gradients.
//!
//! The search works on the parameter axis of a [`ColorRange`]: the
//! color at `t = 0` is the reference (typically the background) and a
//! candidate at `t0` is slid along the gradient until its contrast
//! against the reference reaches a target ratio.  Each direction is
//! walked in [`SCAN_STEPS`] coarse steps to bracket the first
//! crossing of the target, which is then refined by bisection.  When
//! the contrast is monotonic between `t0` and an end (e.g. when the
//! gradient bleaches the candidate toward black or white) the crossing
//! found is the nearest one; otherwise it is the nearest one up to the
//! scan resolution.

use std::marker::PhantomData;
use rgb::RGB;
use tracing::{debug, trace};
use crate::{ColorRange, RGBColor};

/// Width, in parameter space, of the final bisection interval.
pub const TOLERANCE: f64 = 1e-4;

/// Number of coarse steps taken from `t0` toward each end of the
/// range before bisecting.
pub const SCAN_STEPS: usize = 64;

/// How the contrast search may move a candidate color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContrastMode {
    /// Move the candidate in either direction so that its contrast
    /// lands on the target: raise it if too low, lower it (staying
    /// at or above the target) if too high.  Both directions are
    /// explored and the smaller move wins, so a candidate may also be
    /// slid toward the background when the path there raises the
    /// contrast first.
    #[default]
    Both,
    /// Only raise contrast.  A candidate that already meets the
    /// target is left unchanged.
    IncreaseOnly,
}

#[inline]
fn linearize(v: f64) -> f64 {
    let v = v.clamp(0., 1.);
    if v <= 0.03928 { v / 12.92 } else { ((v + 0.055) / 1.055).powf(2.4) }
}

/// Relative luminance of `c` (channels in \[0, 1\], clamped).
///
/// Returns a value in \[0, 1\]: 0 for black and 1 for white.
pub fn relative_luminance(c: RGB<f64>) -> f64 {
    0.2126 * linearize(c.r) + 0.7152 * linearize(c.g) + 0.0722 * linearize(c.b)
}

/// WCAG contrast ratio `(L1 + 0.05) / (L2 + 0.05)` where `L1` is the
/// greater luminance.  The result lies in \[1, 21\] and does not
/// depend on the order of the arguments.
pub fn contrast_ratio(a: RGB<f64>, b: RGB<f64>) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// A position explored by the search.
#[derive(Clone, Copy)]
struct Point<Color> {
    t: f64,
    ratio: f64,
    color: Color,
}

struct Search<'a, R: ?Sized, Color> {
    range: &'a R,
    reference: RGB<f64>,
    target: f64,
    color: PhantomData<Color>,
}

impl<'a, R, Color> Search<'a, R, Color>
where R: ColorRange<Color> + ?Sized,
      Color: RGBColor {
    fn at(&self, t: f64) -> Point<Color> {
        let color: Color = self.range.rgb(t);
        let ratio = contrast_ratio(color.to_rgb(), self.reference);
        Point { t, ratio, color }
    }

    /// Bisect between `pass` (meeting the target) and the parameter
    /// `fail` (not meeting it).  Return the passing point closest to
    /// the crossing.
    fn bisect(&self, mut pass: Point<Color>, mut fail: f64) -> Point<Color> {
        while (pass.t - fail).abs() > TOLERANCE {
            let mid = self.at(0.5 * (pass.t + fail));
            if mid.ratio >= self.target { pass = mid } else { fail = mid.t }
        }
        pass
    }

    /// Walk from `start` toward `end` and bisect around the first
    /// position where meeting the target flips.  The returned point
    /// meets the target.
    fn scan(&self, start: Point<Color>, end: f64) -> Option<Point<Color>> {
        let passes = start.ratio >= self.target;
        let mut prev = start;
        for k in 1..=SCAN_STEPS {
            let t = if k == SCAN_STEPS { end }
                    else { start.t + (end - start.t) * k as f64 / SCAN_STEPS as f64 };
            let p = self.at(t);
            if (p.ratio >= self.target) != passes {
                return Some(if passes { self.bisect(prev, p.t) }
                            else { self.bisect(p, prev.t) })
            }
            prev = p;
        }
        None
    }
}

fn nearest<Color>(points: impl Iterator<Item = Point<Color>>,
                  t0: f64) -> Option<Point<Color>> {
    points.min_by(|a, b| (a.t - t0).abs().total_cmp(&(b.t - t0).abs()))
}

/// Slide the color at `t0` along `range` until its contrast against
/// `range.rgb(0.)` reaches `target`.  See [`ContrastMode`] and
/// [`ColorRange::seek_contrast`].
pub(crate) fn seek<R, Color>(range: &R, t0: f64, target: f64,
                             mode: ContrastMode) -> (f64, Color)
where R: ColorRange<Color> + ?Sized,
      Color: RGBColor {
    let t0 = if t0.is_nan() { 0.5 } else { t0.clamp(0., 1.) };
    let search = Search { range,
                          reference: ColorRange::<Color>::rgb(range, 0.).to_rgb(),
                          target,
                          color: PhantomData };
    let start = search.at(t0);
    trace!(t0, ratio = start.ratio, target, ?mode, "contrast search");
    if start.ratio >= target && mode == ContrastMode::IncreaseOnly {
        return (start.t, start.color);
    }
    let allowed: Vec<_> = [1., 0.].into_iter()
        .filter(|&e| e != t0)
        .map(|e| search.at(e))
        .filter(|e| mode == ContrastMode::Both || e.ratio > start.ratio)
        .collect();
    let crossed = allowed.iter().filter_map(|e| search.scan(start, e.t));

    let found = match nearest(crossed, t0) {
        Some(p) => p,
        // Nothing brings the contrast back down to the target.
        None if start.ratio >= target => start,
        None => {
            let best = allowed.into_iter()
                .filter(|e| e.ratio > start.ratio)
                .max_by(|a, b| a.ratio.total_cmp(&b.ratio))
                .unwrap_or(start);
            debug!(t = best.t, ratio = best.ratio, target,
                   "contrast target unreachable, using best effort");
            best
        }
    };
    trace!(t = found.t, ratio = found.ratio, "contrast search done");
    (found.t, found.color)
}
