//! Colour sets for chart series

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_895;
const DISTINCT_SATURATION: f64 = 0.65;
const DISTINCT_VALUE: f64 = 0.95;

/// Opaque 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let h = (hue.rem_euclid(1.0)) * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * f);
        let t = value * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match sector as u8 {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        };
        let channel = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// `count` colours for chart series.
///
/// `distinct` spaces hues by the golden ratio starting from a hue picked by
/// `seed` (0 when absent), which keeps neighbours far apart and is fully
/// deterministic. Otherwise every channel is random; `seed` makes the
/// sequence reproducible.
pub fn colour_set(seed: Option<u64>, count: usize, distinct: bool) -> Vec<Rgb> {
    if distinct {
        let start = seed.map_or(0.0, |s| StdRng::seed_from_u64(s).random::<f64>());
        return (0..count)
            .map(|i| {
                let hue = start + i as f64 * GOLDEN_RATIO_CONJUGATE;
                Rgb::from_hsv(hue, DISTINCT_SATURATION, DISTINCT_VALUE)
            })
            .collect();
    }

    match seed {
        Some(s) => random_colours(&mut StdRng::seed_from_u64(s), count),
        None => random_colours(&mut rand::rng(), count),
    }
}

fn random_colours<R: Rng>(rng: &mut R, count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|_| Rgb {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsv_primaries() {
        assert_eq!(Rgb::from_hsv(0.0, 1.0, 1.0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(Rgb::from_hsv(1.0 / 3.0, 1.0, 1.0), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(Rgb::from_hsv(2.0 / 3.0, 1.0, 1.0), Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn distinct_set_is_deterministic_and_unique() {
        let a = colour_set(None, 10, true);
        let b = colour_set(None, 10, true);
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
        let unique: std::collections::HashSet<_> = a.iter().collect();
        assert_eq!(unique.len(), 10);
        assert_eq!(a[0], Rgb::from_hsv(0.0, DISTINCT_SATURATION, DISTINCT_VALUE));
    }

    #[test]
    fn seeded_random_set_is_reproducible() {
        assert_eq!(colour_set(Some(7), 5, false), colour_set(Some(7), 5, false));
        assert_eq!(colour_set(None, 4, false).len(), 4);
    }

    #[test]
    fn display_and_argb() {
        let c = Rgb { r: 0x12, g: 0xab, b: 0x0f };
        assert_eq!(c.to_string(), "#12ab0f");
    }
}
