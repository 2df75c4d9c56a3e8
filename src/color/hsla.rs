//! HSLA color values with a hue-aware distance and circular averaging
//!
//! Hue is measured in degrees on `[0, 360)`; saturation, lightness and alpha
//! are fractions on `[0, 1]`. Averages treat hue as an angle so that colors
//! either side of the 0/360 seam average towards the seam rather than away
//! from it.

use crate::color::hue::{angular_distance, degrees_to_x, degrees_to_y, xy_to_degrees};

/// A color in hue, saturation, lightness, alpha space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    /// Hue angle in degrees, `[0, 360)`
    pub h: f64,
    /// Saturation, `[0, 1]`
    pub s: f64,
    /// Lightness, `[0, 1]`
    pub l: f64,
    /// Opacity, `[0, 1]`
    pub a: f64,
}

impl Default for Hsla {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Hsla {
    /// Opaque white, used as the blank canvas color
    pub const WHITE: Self = Self {
        h: 0.0,
        s: 0.0,
        l: 1.0,
        a: 1.0,
    };

    /// Opaque black
    pub const BLACK: Self = Self {
        h: 0.0,
        s: 0.0,
        l: 0.0,
        a: 1.0,
    };

    /// Create a color, wrapping the hue into `[0, 360)` and clamping the
    /// remaining channels into `[0, 1]`
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        let hue = h.rem_euclid(360.0);
        Self {
            h: if hue >= 360.0 { 0.0 } else { hue },
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Opaque color from hue, saturation and lightness
    pub fn opaque(h: f64, s: f64, l: f64) -> Self {
        Self::new(h, s, l, 1.0)
    }

    /// Perceptual distance between two colors
    ///
    /// Euclidean combination of the hue separation (as a fraction of a half
    /// turn), the saturation difference and the lightness difference. Alpha
    /// does not participate. The result lies in `[0, sqrt(3)]` and is zero
    /// exactly when hue, saturation and lightness agree.
    pub fn distance(&self, other: &Self) -> f64 {
        let hue = angular_distance(self.h, other.h) / 180.0;
        let saturation = self.s - other.s;
        let lightness = self.l - other.l;
        hue.mul_add(hue, saturation.mul_add(saturation, lightness * lightness))
            .sqrt()
    }

    /// Average of a collection of colors, or `None` when it is empty
    ///
    /// Hue is averaged on the unit circle; the other channels are plain
    /// arithmetic means.
    pub fn mean<'a, I>(colors: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut accumulator = ColorMean::default();
        for color in colors {
            accumulator.push(color);
        }
        accumulator.finish()
    }

    /// Convert 8-bit RGBA channels to HSLA
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        let [r, g, b, a] = rgba.map(|channel| f64::from(channel) / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Self::new(0.0, 0.0, lightness, a);
        }

        let chroma = max - min;
        let saturation = if lightness > 0.5 {
            chroma / (2.0 - max - min)
        } else {
            chroma / (max + min)
        };
        let sector = if max == r {
            (g - b) / chroma + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };

        Self::new(sector * 60.0, saturation, lightness, a)
    }

    /// Convert to 8-bit RGBA channels, rounding to the nearest level
    pub fn to_rgba8(&self) -> [u8; 4] {
        let (r, g, b) = if self.s == 0.0 {
            (self.l, self.l, self.l)
        } else {
            let q = if self.l < 0.5 {
                self.l * (1.0 + self.s)
            } else {
                self.l + self.s - self.l * self.s
            };
            let p = 2.0f64.mul_add(self.l, -q);
            let turn = self.h / 360.0;
            (
                hue_to_channel(p, q, turn + 1.0 / 3.0),
                hue_to_channel(p, q, turn),
                hue_to_channel(p, q, turn - 1.0 / 3.0),
            )
        };

        [r, g, b, self.a].map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

// Piecewise RGB channel reconstruction for one third of the hue wheel
fn hue_to_channel(p: f64, q: f64, turn: f64) -> f64 {
    let t = turn.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

/// Running average of colors
///
/// Each channel keeps an incremental mean (`m += (v - m) / k`) rather than a
/// raw sum, so a stream of identical colors reproduces that color exactly.
/// Hue goes through the unit circle, which does not round-trip exactly;
/// when every pushed hue is the same, that hue is returned as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorMean {
    count: usize,
    first_hue: f64,
    mixed_hue: bool,
    hue_x: f64,
    hue_y: f64,
    saturation: f64,
    lightness: f64,
    alpha: f64,
}

impl ColorMean {
    /// Fold one color into the average
    pub fn push(&mut self, color: &Hsla) {
        self.count += 1;
        if self.count == 1 {
            self.first_hue = color.h;
        } else if color.h.to_bits() != self.first_hue.to_bits() {
            self.mixed_hue = true;
        }
        let k = self.count as f64;
        self.hue_x += (degrees_to_x(color.h) - self.hue_x) / k;
        self.hue_y += (degrees_to_y(color.h) - self.hue_y) / k;
        self.saturation += (color.s - self.saturation) / k;
        self.lightness += (color.l - self.lightness) / k;
        self.alpha += (color.a - self.alpha) / k;
    }

    /// Number of colors folded in so far
    pub const fn count(&self) -> usize {
        self.count
    }

    /// The average color, or `None` if nothing was pushed
    pub fn finish(&self) -> Option<Hsla> {
        let h = if self.mixed_hue {
            xy_to_degrees(self.hue_x, self.hue_y)
        } else {
            self.first_hue
        };
        (self.count > 0).then_some(Hsla {
            h,
            s: self.saturation,
            l: self.lightness,
            a: self.alpha,
        })
    }
}
