//! Random obstacle placement.

use pathviz_search::{Grid, Role};
use rand::Rng;

/// Turn each empty node into a barrier with probability `density`.
///
/// Start and End are kept, as are existing barriers. Adjacency is not
/// refreshed. Returns the number of barriers added.
pub fn scatter_barriers(grid: &mut Grid, density: f64, rng: &mut impl Rng) -> usize {
    let density = density.clamp(0.0, 1.0);
    let mut added = 0;
    for p in grid.range().iter() {
        if grid.role(p) == Role::None && rng.random_bool(density) {
            grid.set_role(p, Role::Barrier);
            added += 1;
        }
    }
    added
}
