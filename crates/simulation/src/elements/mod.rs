//! Per-category material behaviors, dispatched from the tick loop.
//!
//! Materials are grouped by their swap-compatibility category rather than
//! one module per concrete kind — `Sand`, `Dirt`, and `Rainbow Sand` share
//! one implementation, as do `Wood`/`Stone` and `Steam`/`Helium`.

mod gas;
mod immovable;
mod liquid;
mod motion;
mod movable_solid;


use crate::api::SandApi;
use crate::cell::Species;

/// Dispatch to the behavior for `species`.
pub fn update_cell(species: Species, api: &mut SandApi) {
    match species {
        Species::Empty => {}
        Species::Sand | Species::Dirt | Species::RainbowSand => movable_solid::update(api),
        Species::Wood | Species::Stone => immovable::update(api),
        Species::Water => liquid::update(api),
        Species::Steam => gas::update(api),
    }
}
