//! Material identity and per-cell behavior state.

/// The closed set of materials the engine understands.
///
/// A tagged union rather than a class hierarchy: every variant's data lives
/// directly in [`Cell`], so moving a cell is just copying bytes, never
/// virtual dispatch.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Species {
    Empty = 0,
    Sand = 1,
    Dirt = 2,
    Wood = 3,
    Stone = 4,
    RainbowSand = 5,
    Water = 6,
    /// Also reachable through the `Helium` material name; same behavior,
    /// different palette.
    Steam = 7,
}

impl Species {
    /// Resolve a material name (case- and whitespace-insensitive) to the
    /// species it constructs, or `None` if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match crate::palette::normalize(name).as_str() {
            "EMPTY" => Some(Species::Empty),
            "SAND" => Some(Species::Sand),
            "DIRT" => Some(Species::Dirt),
            "WOOD" => Some(Species::Wood),
            "STONE" => Some(Species::Stone),
            "RAINBOWSAND" => Some(Species::RainbowSand),
            "WATER" => Some(Species::Water),
            "STEAM" | "HELIUM" => Some(Species::Steam),
            _ => None,
        }
    }

    /// The swap-compatibility category this species falls into.
    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Species::Empty => Category::Empty,
            Species::Sand | Species::Dirt | Species::RainbowSand => Category::MovableSolid,
            Species::Wood | Species::Stone => Category::ImmovableSolid,
            Species::Water => Category::Liquid,
            Species::Steam => Category::Gas,
        }
    }
}

/// Coarse classification used to decide which materials may swap into
/// which others.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    Empty,
    ImmovableSolid,
    MovableSolid,
    Liquid,
    Gas,
}

impl Category {
    /// True if a cell in `self`'s category can be swapped into by a mover
    /// in `mover`'s category.
    ///
    /// Gas is swappable by liquid and movable solids falling through it,
    /// but gas itself only ever moves into `Empty` — the relation is not
    /// symmetric.
    #[must_use]
    pub fn swappable_by(self, mover: Category) -> bool {
        match self {
            Category::Empty => {
                matches!(mover, Category::Gas | Category::Liquid | Category::MovableSolid)
            }
            Category::Gas => matches!(mover, Category::Liquid | Category::MovableSolid),
            Category::Liquid => matches!(mover, Category::MovableSolid),
            Category::ImmovableSolid | Category::MovableSolid => false,
        }
    }
}

/// A single grid cell: its material, render color, and whatever motion
/// state that material's behavior needs between ticks.
///
/// `vx`/`sideways_direction` are only meaningful for liquids and gases
/// respectively; other species simply never read them.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cell {
    pub species: Species,
    pub color: [u8; 4],
    pub vx: i32,
    pub vy: i32,
    pub gravity_accumulator: f32,
    pub sideways_direction: i8,
}

impl Cell {
    #[must_use]
    pub fn new(species: Species, color: [u8; 4]) -> Self {
        Cell {
            species,
            color,
            vx: 0,
            vy: -1,
            gravity_accumulator: 0.0,
            sideways_direction: 1,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Cell::new(Species::Empty, crate::palette::EMPTY_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_cell_is_empty_species() {
        assert_eq!(Cell::empty().species, Species::Empty);
        assert_eq!(Cell::empty().color, [0, 0, 0, 255]);
    }

    #[test]
    fn species_from_name_is_case_and_space_insensitive() {
        assert_eq!(Species::from_name("sand"), Some(Species::Sand));
        assert_eq!(Species::from_name("  Rainbow Sand "), Some(Species::RainbowSand));
        assert_eq!(Species::from_name("HELIUM"), Some(Species::Steam));
        assert_eq!(Species::from_name("steam"), Some(Species::Steam));
        assert_eq!(Species::from_name("lava"), None);
    }

    #[test]
    fn category_matrix_matches_design() {
        assert!(Category::Empty.swappable_by(Category::MovableSolid));
        assert!(Category::Empty.swappable_by(Category::Liquid));
        assert!(Category::Empty.swappable_by(Category::Gas));
        assert!(Category::Gas.swappable_by(Category::Liquid));
        assert!(Category::Gas.swappable_by(Category::MovableSolid));
        assert!(!Category::Gas.swappable_by(Category::Gas));
        assert!(Category::Liquid.swappable_by(Category::MovableSolid));
        assert!(!Category::Liquid.swappable_by(Category::Liquid));
        assert!(!Category::Liquid.swappable_by(Category::Gas));
        assert!(!Category::ImmovableSolid.swappable_by(Category::MovableSolid));
        assert!(!Category::MovableSolid.swappable_by(Category::MovableSolid));
    }

    proptest! {
        #[test]
        fn prop_new_cell_always_carries_requested_species(species_tag in 0u8..8) {
            let species = match species_tag {
                0 => Species::Empty,
                1 => Species::Sand,
                2 => Species::Dirt,
                3 => Species::Wood,
                4 => Species::Stone,
                5 => Species::RainbowSand,
                6 => Species::Water,
                _ => Species::Steam,
            };
            let cell = Cell::new(species, [1, 2, 3, 4]);
            prop_assert_eq!(cell.species, species);
            prop_assert_eq!(cell.color, [1, 2, 3, 4]);
        }
    }
}
