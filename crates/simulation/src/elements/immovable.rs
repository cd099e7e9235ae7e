//! Immovable solids (Wood, Stone): never move.

use crate::api::SandApi;

pub fn update(_api: &mut SandApi) {}
