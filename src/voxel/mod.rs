//! Voxel data structures and grid geometry

pub mod voxel;
pub mod world;

pub use voxel::Voxel;
pub use world::VoxelWorld;

use crate::core::types::{IVec3, Vec3};
use crate::math::aabb::Aabb;

/// Edge length of one grid cell in world units
pub const CELL_SIZE: i32 = 50;

/// Offset from a cell's min corner to its center
pub const HALF_CELL: i32 = 25;

/// World-space center of a grid cell
pub fn cell_center(cell: IVec3) -> Vec3 {
    (cell * CELL_SIZE + IVec3::splat(HALF_CELL)).as_vec3()
}

/// Grid cell enclosing a world-space point
pub fn cell_containing(point: Vec3) -> IVec3 {
    (point / CELL_SIZE as f32).floor().as_ivec3()
}

/// World-space bounds of a grid cell
pub fn cell_aabb(cell: IVec3) -> Aabb {
    let min = (cell * CELL_SIZE).as_vec3();
    Aabb::new(min, min + Vec3::splat(CELL_SIZE as f32))
}
