//! Floor-type selection: level filter, then weighted pick.

use tracing::debug;

use super::weighted::weighted_index;
use crate::catalog::{Catalog, FloorDefinition};
use crate::error::{TowerError, TowerResult};
use crate::rng::RandomSource;

/// Choose the floor-type for `level`, weighted by spawn weight.
///
/// No covering definition is a content-authoring gap and is returned as
/// [`TowerError::NoEligibleFloorType`].
pub fn select_floor_type<'c>(
    catalog: &'c Catalog,
    level: u32,
    rng: &mut impl RandomSource,
) -> TowerResult<&'c FloorDefinition> {
    let eligible: Vec<&FloorDefinition> = catalog.eligible(level).collect();
    let weights: Vec<u32> = eligible.iter().map(|def| def.spawn_weight).collect();

    let index = weighted_index(&weights, rng).ok_or(TowerError::NoEligibleFloorType { level })?;
    let chosen = eligible[index];
    debug!(level, floor_type = %chosen.name, candidates = eligible.len(), "floor-type selected");
    Ok(chosen)
}
