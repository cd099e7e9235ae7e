//! Liquid (Water): falls and diagonal-falls like a movable solid, then
//! disperses sideways along whatever surface supports it.

use crate::api::SandApi;
use crate::cell::{Category, Cell};

use super::motion;

const DISPERSION_RATE: i32 = 5;

pub fn update(api: &mut SandApi) {
    let mut me = api.cell();
    let generation = api.generation();

    motion::apply_gravity(&mut me);
    cap_velocity(&mut me);
    api.update_self(me);

    if motion::try_fall(api, me.vy, Category::Liquid) {
        return;
    }
    if motion::try_diagonal_fall(api, me.vy, generation, Category::Liquid) {
        return;
    }
    disperse_horizontally(api, &mut me);
}

fn cap_velocity(cell: &mut Cell) {
    cell.vx = cell.vx.clamp(-10, 10);
    cell.vy = cell.vy.clamp(-motion::MAX_FALL_SPEED, 0);
}

/// Walk sideways up to `DISPERSION_RATE` cells, flipping direction whenever
/// blocked, advancing only onto cells that have no support underneath (so
/// the liquid flows along a floor rather than hovering over a gap).
///
/// Whether or not this finds anywhere to go, the vertical velocity is reset
/// to a stand-still value before committing — this is the last thing a
/// liquid's update does this tick, and the reset has to land in the same
/// `update_self` call that precedes a possible swap, since `swap_to` moves
/// whatever is already stored rather than a value handed to it afterward.
fn disperse_horizontally(api: &mut SandApi, me: &mut Cell) {
    let mut direction = if me.vx != 0 { me.vx.signum() } else { 1 };
    let mut remaining = DISPERSION_RATE;
    let mut furthest_dx = 0;

    while remaining > 0 {
        let target_dx = furthest_dx + direction;
        if !api.swappable(target_dx, 0, Category::Liquid) {
            direction = -direction;
            remaining -= 1;
            continue;
        }
        if !api.swappable(target_dx, -1, Category::Liquid) {
            furthest_dx = target_dx;
        } else {
            break;
        }
        remaining -= 1;
    }

    me.vx = direction;
    me.vy = -1;
    api.update_self(*me);

    if furthest_dx != 0 {
        api.swap_to(furthest_dx, 0);
    }
}
