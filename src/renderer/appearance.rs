//! Per-body presentation records

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::vertex::{colors, rgb8};
use crate::consts::OUTLINE_THICKNESS;
use crate::sim::BodyId;

/// How a body is drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    /// Fill color as 8-bit RGB
    pub fill: [u8; 3],
    pub outline_color: [f32; 4],
    /// Outline width, drawn outside the disc
    pub outline_thickness: f32,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            fill: [255, 255, 255],
            outline_color: colors::OUTLINE,
            outline_thickness: OUTLINE_THICKNESS,
        }
    }
}

impl Appearance {
    /// Random fill, each channel uniform in [0, 256), black outline
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            fill: [rng.random(), rng.random(), rng.random()],
            ..Default::default()
        }
    }

    pub fn fill_color(&self) -> [f32; 4] {
        let [r, g, b] = self.fill;
        rgb8(r, g, b)
    }
}

/// Appearances keyed by body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Palette {
    entries: BTreeMap<BodyId, Appearance>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: BodyId, appearance: Appearance) {
        self.entries.insert(id, appearance);
    }

    /// Appearance for `id`, or the default look if none was assigned
    pub fn get(&self, id: BodyId) -> Appearance {
        self.entries.get(&id).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_random_appearance_has_black_outline() {
        let mut rng = Pcg32::seed_from_u64(3);
        let look = Appearance::random(&mut rng);
        assert_eq!(look.outline_color, colors::OUTLINE);
        assert_eq!(look.outline_thickness, 4.0);
    }

    #[test]
    fn test_palette_lookup() {
        let mut palette = Palette::new();
        let look = Appearance {
            fill: [10, 20, 30],
            ..Default::default()
        };
        palette.insert(BodyId(7), look);

        assert_eq!(palette.len(), 1);
        assert_eq!(palette.get(BodyId(7)), look);
        assert_eq!(palette.get(BodyId(8)), Appearance::default());
    }
}
