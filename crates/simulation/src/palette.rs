//! Material-name to render-color lookup.
//!
//! Most materials draw a uniformly random color from a short swatch on
//! every call, giving painted regions a grainy, textured look. `Rainbow
//! Sand` instead cycles its swatch in order, so a dragged brush stroke
//! visibly bands through the spectrum.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SimError;

/// An RGBA color quadruple.
pub type Color = [u8; 4];

pub(crate) const EMPTY_COLOR: Color = [0, 0, 0, 255];

struct Entry {
    colors: Vec<Color>,
    sequential: bool,
    cursor: usize,
}

impl Entry {
    fn random(colors: Vec<Color>) -> Self {
        Self { colors, sequential: false, cursor: 0 }
    }

    fn sequential(colors: Vec<Color>) -> Self {
        Self { colors, sequential: true, cursor: 0 }
    }
}

struct Palette {
    entries: HashMap<&'static str, Entry>,
    rng: StdRng,
}

impl Palette {
    fn new() -> Self {
        let mut entries = HashMap::new();
        entries.insert("EMPTY", Entry::random(vec![EMPTY_COLOR]));
        entries.insert(
            "SAND",
            Entry::random(vec![
                [240, 215, 150, 255],
                [230, 200, 120, 255],
                [220, 190, 100, 255],
                [210, 180, 80, 255],
                [200, 170, 60, 255],
            ]),
        );
        entries.insert(
            "DIRT",
            Entry::random(vec![
                [96, 47, 18, 255],
                [135, 70, 32, 255],
                [110, 54, 25, 255],
                [145, 85, 40, 255],
                [90, 44, 20, 255],
            ]),
        );
        entries.insert(
            "WOOD",
            Entry::random(vec![
                [205, 92, 52, 255],
                [210, 105, 60, 255],
                [190, 85, 40, 255],
                [215, 100, 50, 255],
                [180, 75, 30, 255],
            ]),
        );
        entries.insert(
            "STONE",
            Entry::random(vec![
                [150, 150, 150, 255],
                [120, 120, 120, 255],
                [180, 180, 180, 255],
                [140, 140, 140, 255],
                [160, 160, 160, 255],
            ]),
        );
        entries.insert("WATER", Entry::random(vec![[28, 85, 234, 255]]));
        entries.insert("STEAM", Entry::random(vec![[174, 174, 174, 255]]));
        // No HELIUM entry existed upstream to carry forward; a pale
        // balloon-gas tint distinct from STEAM's grey is used instead
        // (see DESIGN.md).
        entries.insert("HELIUM", Entry::random(vec![[223, 255, 224, 235]]));
        entries.insert(
            "RAINBOWSAND",
            Entry::sequential(vec![
                [255, 0, 0, 255],
                [255, 127, 0, 255],
                [255, 255, 0, 255],
                [0, 255, 0, 255],
                [0, 0, 255, 255],
                [75, 0, 130, 255],
                [148, 0, 211, 255],
            ]),
        );

        Self { entries, rng: StdRng::from_entropy() }
    }

    fn color_of(&mut self, name: &str) -> Result<Color, SimError> {
        let key = normalize(name);
        let Palette { entries, rng } = self;
        let entry = entries
            .get_mut(key.as_str())
            .ok_or_else(|| SimError::UnknownMaterial(name.to_string()))?;

        if entry.sequential {
            let color = entry.colors[entry.cursor];
            entry.cursor = (entry.cursor + 1) % entry.colors.len();
            Ok(color)
        } else {
            let idx = rng.gen_range(0..entry.colors.len());
            Ok(entry.colors[idx])
        }
    }
}

fn global() -> &'static Mutex<Palette> {
    static PALETTE: OnceLock<Mutex<Palette>> = OnceLock::new();
    PALETTE.get_or_init(|| Mutex::new(Palette::new()))
}

/// Upper-case a material name and strip whitespace, so `"Rainbow Sand"`,
/// `"rainbow sand"`, and `" RAINBOWSAND "` all key the same swatch.
pub(crate) fn normalize(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_ascii_uppercase()
}

/// Look up a color for `name`, picking randomly or cycling sequentially
/// depending on the material.
pub fn color_of(name: &str) -> Result<Color, SimError> {
    let mut guard = global().lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    guard.color_of(name)
}

/// Canonical, human-facing names of every recognized material. `Steam` is
/// reachable only through its `Helium` alias here; both names resolve to
/// the same species.
#[must_use]
pub fn element_names() -> Vec<&'static str> {
    vec!["Empty", "Sand", "Dirt", "Wood", "Stone", "Rainbow Sand", "Water", "Helium"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_material_is_rejected() {
        assert_eq!(color_of("lava"), Err(SimError::UnknownMaterial("lava".to_string())));
    }

    #[test]
    fn empty_is_opaque_black() {
        assert_eq!(color_of("Empty").unwrap(), [0, 0, 0, 255]);
    }

    #[test]
    fn normalize_strips_case_and_whitespace() {
        assert_eq!(normalize("Rainbow Sand"), "RAINBOWSAND");
        assert_eq!(normalize(" water "), "WATER");
    }

    #[test]
    fn rainbow_sand_cycles_in_order() {
        let first = color_of("Rainbow Sand").unwrap();
        let mut saw_wrap = false;
        let mut prev = first;
        for _ in 0..6 {
            let next = color_of("Rainbow Sand").unwrap();
            assert_ne!(next, prev);
            if next == first {
                saw_wrap = true;
            }
            prev = next;
        }
        assert!(saw_wrap, "rainbow sand should cycle back to its first color within one full loop");
    }

    #[test]
    fn sand_colors_come_from_the_fixed_swatch() {
        let swatch = [
            [240, 215, 150, 255],
            [230, 200, 120, 255],
            [220, 190, 100, 255],
            [210, 180, 80, 255],
            [200, 170, 60, 255],
        ];
        for _ in 0..50 {
            let color = color_of("sand").unwrap();
            assert!(swatch.contains(&color));
        }
    }
}
