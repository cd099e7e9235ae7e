//! Movable solids (Sand, Dirt, Rainbow Sand): fall straight down, then
//! diagonally, then rest.

use crate::cell::Category;
use crate::api::SandApi;

use super::motion;

pub fn update(api: &mut SandApi) {
    let mut me = api.cell();
    let generation = api.generation();

    motion::apply_gravity(&mut me);
    api.update_self(me);

    if motion::try_fall(api, me.vy, Category::MovableSolid) {
        return;
    }
    if motion::try_diagonal_fall(api, me.vy, generation, Category::MovableSolid) {
        return;
    }

    me.vy = -1;
    api.update_self(me);
}
