//! Editor session: all mutable editor state under one owner
//!
//! The session owns the world, the camera pose, the selected color and
//! the transient brush/hover state. Nothing else mutates them; external
//! collaborators read owned [`SceneSnapshot`] values instead.

use crate::codec;
use crate::core::camera::OrbitCamera;
use crate::core::types::{IVec3, Vec2, Vec3};
use crate::math::ray::Ray;
use crate::palette::ColorIndex;
use crate::pick::GroundPlane;
use crate::scene::{
    BrushDraw, CameraPose, GroundDraw, SceneSnapshot, VoxelDraw, BRUSH_OPACITY, HOVERED_OPACITY,
    VOXEL_OPACITY,
};
use crate::voxel::{cell_center, VoxelWorld};

/// Height the brush parks at when there is no placement target; far
/// enough above the grid to be off-screen at any sensible camera pose
pub const BRUSH_PARK_Y: f32 = 2000.0;

/// All state of one editor instance
pub struct EditorSession {
    pub world: VoxelWorld,
    pub camera: OrbitCamera,
    pub ground: GroundPlane,
    selected_color: ColorIndex,
    /// Cell the brush previews at; None parks it off-screen
    brush_cell: Option<IVec3>,
    /// Voxel highlighted for removal, by insertion index
    hovered: Option<usize>,
    viewport: Vec2,
    needs_redraw: bool,
}

impl EditorSession {
    /// Create a session with an empty world
    pub fn new(viewport: Vec2) -> Self {
        Self {
            world: VoxelWorld::new(),
            camera: OrbitCamera::new(viewport.x / viewport.y),
            ground: GroundPlane::default(),
            selected_color: ColorIndex::default(),
            brush_cell: None,
            hovered: None,
            viewport,
            needs_redraw: true,
        }
    }

    /// Replace the world from a stored token
    ///
    /// A malformed token is logged and ignored; the session always
    /// starts with a usable (possibly empty) world.
    pub fn load_token(&mut self, token: &str) {
        match codec::decode(token) {
            Ok(voxels) => {
                log::info!("loaded {} voxels from token", voxels.len());
                self.world = VoxelWorld::from_voxels(voxels);
            }
            Err(err) => {
                log::warn!("ignoring stored token: {err}");
                self.world = VoxelWorld::new();
            }
        }
        self.hovered = None;
        self.needs_redraw = true;
    }

    /// Color used by the next commit
    pub fn selected_color(&self) -> ColorIndex {
        self.selected_color
    }

    /// Select the color for future commits and the brush fill
    pub fn set_selected_color(&mut self, color: ColorIndex) {
        self.selected_color = color;
        self.needs_redraw = true;
    }

    /// Cell the brush previews at, if it has a target
    pub fn brush_cell(&self) -> Option<IVec3> {
        self.brush_cell
    }

    pub fn set_brush_cell(&mut self, cell: Option<IVec3>) {
        self.brush_cell = cell;
    }

    /// Voxel currently highlighted for removal
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn set_hovered(&mut self, voxel: Option<usize>) {
        self.hovered = voxel;
    }

    /// Viewport size in pixels
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Resize the viewport and keep the camera aspect in sync
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.camera.set_aspect(viewport.x, viewport.y);
        self.needs_redraw = true;
    }

    /// Ray from the camera through a pointer position
    pub fn pointer_ray(&self, pointer: Vec2) -> Ray {
        self.camera.pointer_ray(pointer, self.viewport)
    }

    /// World position of the brush cube's center
    pub fn brush_position(&self) -> Vec3 {
        match self.brush_cell {
            Some(cell) => cell_center(cell),
            None => Vec3::new(0.0, BRUSH_PARK_Y, 0.0),
        }
    }

    /// Flag that the next frame must be redrawn
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Take the redraw flag, clearing it
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Owned scene snapshot for the renderer
    pub fn snapshot(&self) -> SceneSnapshot {
        let voxels = self
            .world
            .iter()
            .enumerate()
            .map(|(index, voxel)| VoxelDraw {
                position: voxel.world_center(),
                rgb: voxel.color.to_rgb(),
                opacity: if self.hovered == Some(index) {
                    HOVERED_OPACITY
                } else {
                    VOXEL_OPACITY
                },
            })
            .collect();

        SceneSnapshot {
            ground: GroundDraw {
                half_extent: self.ground.half_extent,
            },
            voxels,
            brush: BrushDraw {
                position: self.brush_position(),
                rgb: self.selected_color.to_rgb(),
                opacity: BRUSH_OPACITY,
            },
            camera: CameraPose {
                eye: self.camera.eye(),
                target: self.camera.target,
                fov_y: self.camera.fov_y,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditorSession {
        EditorSession::new(Vec2::new(800.0, 600.0))
    }

    #[test]
    fn test_load_token_populates_world() {
        let mut world = VoxelWorld::new();
        world.add(IVec3::new(1, 0, -1), ColorIndex::new(6).unwrap());
        let token = codec::encode(&world);

        let mut session = session();
        session.load_token(&token);
        assert_eq!(session.world.len(), 1);
        assert_eq!(session.world.get(0).unwrap().cell, IVec3::new(1, 0, -1));
    }

    #[test]
    fn test_load_malformed_token_leaves_world_empty() {
        let mut session = session();
        session.world.add(IVec3::ZERO, ColorIndex::default());
        session.load_token("A/??");
        assert!(session.world.is_empty());
    }

    #[test]
    fn test_brush_parks_off_screen() {
        let mut session = session();
        assert_eq!(session.brush_position().y, BRUSH_PARK_Y);

        session.set_brush_cell(Some(IVec3::ZERO));
        assert_eq!(session.brush_position(), Vec3::splat(25.0));
    }

    #[test]
    fn test_take_redraw_clears() {
        let mut session = session();
        assert!(session.take_redraw());
        assert!(!session.take_redraw());
        session.request_redraw();
        assert!(session.take_redraw());
    }

    #[test]
    fn test_snapshot_marks_hovered() {
        let mut session = session();
        session.world.add(IVec3::ZERO, ColorIndex::default());
        session.world.add(IVec3::new(1, 0, 0), ColorIndex::default());
        session.set_hovered(Some(1));

        let snapshot = session.snapshot();
        assert_eq!(snapshot.voxels.len(), 2);
        assert_eq!(snapshot.voxels[0].opacity, VOXEL_OPACITY);
        assert_eq!(snapshot.voxels[1].opacity, HOVERED_OPACITY);
        assert_eq!(snapshot.brush.opacity, BRUSH_OPACITY);
    }
}
