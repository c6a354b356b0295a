//! Step costs relative to a unit grid.
//!
//! A one-track jog in the non-preferred direction (4) is cheaper than two vias
//! plus a preferred step (5), so a minimum-cost search takes the jog.

use maze_common::geom::coord::{GridCoord, LayerDirection};

/// Changing layer at a fixed (x, y).
pub const VIA_COST: u32 = 2;
/// One track along the layer's preferred direction.
pub const PREFERRED_COST: u32 = 1;
/// One track across the layer's preferred direction.
pub const NONPREFERRED_COST: u32 = 4;

/// Cost of moving between two adjacent coordinates, or `None` when the move
/// is not a single track step or a single via.
pub fn step_cost(from: GridCoord, to: GridCoord) -> Option<u32> {
    let dx = from.x.abs_diff(to.x);
    let dy = from.y.abs_diff(to.y);
    let dz = from.z.abs_diff(to.z);

    match (dx, dy, dz) {
        (0, 0, 1) => Some(VIA_COST),
        (1, 0, 0) => Some(planar_cost(from.z, LayerDirection::Horizontal)),
        (0, 1, 0) => Some(planar_cost(from.z, LayerDirection::Vertical)),
        _ => None,
    }
}

#[inline]
fn planar_cost(layer: u8, travel: LayerDirection) -> u32 {
    if LayerDirection::of_layer(layer) == travel {
        PREFERRED_COST
    } else {
        NONPREFERRED_COST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jog_is_cheaper_than_two_vias() {
        assert!(NONPREFERRED_COST < 2 * VIA_COST + PREFERRED_COST);
        assert!(PREFERRED_COST < NONPREFERRED_COST);
    }

    #[test]
    fn planar_steps_follow_layer_direction() {
        let a = GridCoord::new(5, 5, 0);
        assert_eq!(step_cost(a, a.offset(1, 0)), Some(PREFERRED_COST));
        assert_eq!(step_cost(a, a.offset(0, -1)), Some(NONPREFERRED_COST));

        let b = a.with_layer(1);
        assert_eq!(step_cost(b, b.offset(0, 1)), Some(PREFERRED_COST));
        assert_eq!(step_cost(b, b.offset(-1, 0)), Some(NONPREFERRED_COST));
    }

    #[test]
    fn via_and_invalid_moves() {
        let a = GridCoord::new(0, 0, 0);
        assert_eq!(step_cost(a, a.with_layer(1)), Some(VIA_COST));
        assert_eq!(step_cost(a.with_layer(1), a), Some(VIA_COST));
        assert_eq!(step_cost(a, a), None);
        assert_eq!(step_cost(a, a.offset(1, 1)), None);
        assert_eq!(step_cost(a, a.offset(2, 0)), None);
        assert_eq!(step_cost(a, GridCoord::new(1, 0, 1)), None);
    }
}
