//! Fall and diagonal-fall stepping shared by movable solids and liquids —
//! liquids reuse a solid's vertical motion wholesale and only differ once
//! it's time to disperse sideways.

use crate::api::SandApi;
use crate::cell::{Category, Cell};

pub const GRAVITY: f32 = 0.2;
pub const MAX_FALL_SPEED: i32 = 10;

/// Accumulate gravity, converting whole units into downward velocity
/// (capped at `MAX_FALL_SPEED`) and keeping the fractional remainder for
/// next tick.
pub fn apply_gravity(cell: &mut Cell) {
    cell.gravity_accumulator += GRAVITY;
    if cell.gravity_accumulator >= 1.0 {
        let whole = cell.gravity_accumulator.floor();
        cell.vy = (cell.vy - whole as i32).max(-MAX_FALL_SPEED);
        cell.gravity_accumulator -= whole;
    }
}

/// Walk down from the current position toward `y + vy` (clamped at the
/// world floor), swapping into the furthest swappable cell reached.
pub fn try_fall(api: &mut SandApi, vy: i32, mover: Category) -> bool {
    let y = api.y();
    let target_y = (y + vy).max(0);
    let mut cur_y = y;
    while cur_y > target_y && api.swappable(0, cur_y - 1 - y, mover) {
        cur_y -= 1;
    }
    if cur_y < y {
        api.swap_to(0, cur_y - y);
        true
    } else {
        false
    }
}

/// Try both diagonal-fall targets, alternating which side goes first by
/// `generation`'s parity so repeated ticks don't drift consistently one way.
pub fn try_diagonal_fall(api: &mut SandApi, vy: i32, generation: u64, mover: Category) -> bool {
    let (dx1, dx2) = if generation % 2 == 0 { (-1, 1) } else { (1, -1) };
    for dx in [dx1, dx2] {
        if api.swappable(dx, vy, mover) {
            api.swap_to(dx, vy);
            return true;
        }
    }
    false
}
