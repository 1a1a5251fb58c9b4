//! Legacy wire format: fixed stride, absolute coordinates
//!
//! Four symbols per voxel: `[x, y, z, color]` with per-axis offsets
//! baked into the stored values. The offsets (18, +1) and the 25-unit
//! scale are format constants kept for compatibility with previously
//! shared tokens; they are not derivable from the grid.

use crate::core::types::{IVec3, Result};
use crate::palette::ColorIndex;
use crate::voxel::{CELL_SIZE, Voxel};
use super::alphabet;

/// Symbols per voxel record
const STRIDE: usize = 4;

/// Stored-value offset on the x and z axes
const XZ_OFFSET: i32 = 18;

/// Stored-value offset on the y axis
const Y_OFFSET: i32 = 1;

/// World units per stored step (half a cell)
const LEGACY_UNIT: i32 = 25;

/// World position denoted by one stored coordinate triple
///
/// Legacy positions step in half-cells, so they can land off the cell
/// lattice; [`decode_values`] quantizes to the enclosing cell.
pub fn world_position(stored: [i32; 3]) -> IVec3 {
    IVec3::new(
        (stored[0] - XZ_OFFSET) * LEGACY_UNIT,
        (stored[1] + Y_OFFSET) * LEGACY_UNIT,
        (stored[2] - XZ_OFFSET) * LEGACY_UNIT,
    )
}

/// Interpret a decoded value array as voxels
///
/// A trailing partial record is dropped; an out-of-range color drops
/// that single voxel. Both keep everything decoded so far.
pub fn decode_values(values: &[i32]) -> Vec<Voxel> {
    let mut voxels = Vec::with_capacity(values.len() / STRIDE);
    let records = values.chunks_exact(STRIDE);

    let trailing = records.remainder().len();
    if trailing != 0 {
        log::warn!("legacy token truncated: dropping {trailing} trailing symbols");
    }

    for record in records {
        let Some(color) = u8::try_from(record[3]).ok().and_then(ColorIndex::new) else {
            log::warn!("legacy token: color {} out of range, voxel dropped", record[3]);
            continue;
        };
        let position = world_position([record[0], record[1], record[2]]);
        let cell = position.div_euclid(IVec3::splat(CELL_SIZE));
        voxels.push(Voxel::new(cell, color));
    }

    voxels
}

/// Decode a legacy token payload
pub fn decode(payload: &str) -> Result<Vec<Voxel>> {
    let values: Vec<i32> = alphabet::decode_payload(payload)?
        .into_iter()
        .map(i32::from)
        .collect();
    Ok(decode_values(&values))
}
