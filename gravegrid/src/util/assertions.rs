use itertools::Itertools;
use log::error;

use crate::entities::{PlacementResult, Yard};
use crate::geometry::kernel;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and in the test suites

/// Every placed grave and its clearance circle lie inside the region.
pub fn graves_inside_region(yard: &Yard, result: &PlacementResult) -> bool {
    result.iter().all(|g| {
        let inside = kernel::contains(&yard.region, &g.shape)
            && kernel::contains(&yard.region, &g.clearance);
        if !inside {
            error!("grave #{} is not contained by the region", g.index);
        }
        inside
    })
}

/// No clearance circle touches any (valid) obstacle.
pub fn graves_avoid_obstacles(yard: &Yard, result: &PlacementResult) -> bool {
    result.iter().all(|g| {
        yard.obstacles.iter().enumerate().all(|(i, obs)| {
            let clear = !kernel::intersects(&g.clearance, obs);
            if !clear {
                error!("grave #{} intersects obstacle {}", g.index, i);
            }
            clear
        })
    })
}

/// No two clearance circles touch each other.
pub fn graves_disjoint(result: &PlacementResult) -> bool {
    result.iter().tuple_combinations().all(|(g1, g2)| {
        let disjoint = !kernel::intersects(&g1.clearance, &g2.clearance);
        if !disjoint {
            error!("graves #{} and #{} intersect", g1.index, g2.index);
        }
        disjoint
    })
}

/// Graves are numbered consecutively in placement order.
pub fn graves_indexed_in_order(result: &PlacementResult) -> bool {
    result.iter().enumerate().all(|(i, g)| g.index == i)
}

pub fn result_is_valid(yard: &Yard, result: &PlacementResult) -> bool {
    graves_indexed_in_order(result)
        && graves_inside_region(yard, result)
        && graves_avoid_obstacles(yard, result)
        && graves_disjoint(result)
}
