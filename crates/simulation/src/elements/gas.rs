//! Gas (Steam / Helium): rises, drifts diagonally, or slides sideways,
//! reversing its sideways preference whenever every option is blocked.
//!
//! Gas always marks its own chunk active — unlike solids and liquids it
//! never truly settles, so a chunk holding gas never goes quiet on its own.

use crate::api::SandApi;
use crate::cell::Category;

const DISPERSAL_RANGE: i32 = 5;
const OPTION_PROBABILITY: f64 = 0.1;

pub fn update(api: &mut SandApi) {
    api.mark_own_chunk_active();

    let mut me = api.cell();
    let mut options: Vec<(i32, i32, f64)> = vec![
        (0, 1, OPTION_PROBABILITY),
        (-1, 1, OPTION_PROBABILITY),
        (1, 1, OPTION_PROBABILITY),
    ];
    for i in 1..=DISPERSAL_RANGE {
        options.push((i32::from(me.sideways_direction) * i, 0, OPTION_PROBABILITY));
    }

    for (dx, dy, chance) in options {
        if api.random_unit() < chance && api.swappable(dx, dy, Category::Gas) {
            api.swap_to(dx, dy);
            return;
        }
    }

    me.sideways_direction = -me.sideways_direction;
    api.update_self(me);
}
