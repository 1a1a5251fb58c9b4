//! Voxel data type

use crate::core::types::{IVec3, Vec3};
use crate::math::aabb::Aabb;
use crate::palette::ColorIndex;
use super::{cell_aabb, cell_center};

/// A single placed voxel: one grid cell painted with one palette color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Voxel {
    /// Grid cell coordinates (unbounded)
    pub cell: IVec3,
    /// Palette color; always a valid index by construction
    pub color: ColorIndex,
}

impl Voxel {
    /// Create a voxel at a grid cell
    pub fn new(cell: IVec3, color: ColorIndex) -> Self {
        Self { cell, color }
    }

    /// World-space center of the voxel's cube
    pub fn world_center(&self) -> Vec3 {
        cell_center(self.cell)
    }

    /// World-space bounds of the voxel's cube
    pub fn aabb(&self) -> Aabb {
        cell_aabb(self.cell)
    }
}
