//! Read-only scene snapshots for an external renderer
//!
//! A snapshot is an owned copy of everything a renderer needs for one
//! frame: draw commands in paint order plus the camera pose. Handing
//! out owned values is the synchronization point that lets a renderer
//! run on another thread without aliasing live editor state.

use serde::Serialize;

use crate::core::types::Vec3;

/// Opacity of a placed voxel
pub const VOXEL_OPACITY: f32 = 1.0;

/// Opacity of the voxel highlighted for removal
pub const HOVERED_OPACITY: f32 = 0.5;

/// Opacity of the brush preview fill
pub const BRUSH_OPACITY: f32 = 0.4;

/// Draw command for one placed voxel cube
#[derive(Clone, Copy, Debug, Serialize)]
pub struct VoxelDraw {
    /// Cube center in world units
    pub position: Vec3,
    /// RGB888 fill color
    pub rgb: (u8, u8, u8),
    pub opacity: f32,
}

/// Draw command for the brush preview cube
#[derive(Clone, Copy, Debug, Serialize)]
pub struct BrushDraw {
    /// Cube center; parked far above the grid when there is no target
    pub position: Vec3,
    pub rgb: (u8, u8, u8),
    pub opacity: f32,
}

/// Draw command for the ground plane and its grid
#[derive(Clone, Copy, Debug, Serialize)]
pub struct GroundDraw {
    /// Half the plane's edge length
    pub half_extent: f32,
}

/// Camera pose for the frame
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
}

/// One frame's worth of scene state
#[derive(Clone, Debug, Serialize)]
pub struct SceneSnapshot {
    pub ground: GroundDraw,
    /// Voxel cubes in insertion order (paint order)
    pub voxels: Vec<VoxelDraw>,
    pub brush: BrushDraw,
    pub camera: CameraPose,
}
