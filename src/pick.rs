//! Ray picking over the editor scene
//!
//! Candidates are every placed voxel's cube, the bounded ground plane,
//! and the brush preview. The brush is never a valid target: the ray
//! always originates outside it and would otherwise self-intersect, so
//! it is skipped when choosing the pick result.

use crate::core::types::{IVec3, Vec3};
use crate::math::ray::Ray;
use crate::voxel::{cell_aabb, cell_containing, VoxelWorld};

/// Distance the hit point is nudged along the struck face normal
/// before snapping to a cell; keeps the placement adjacent to, never
/// inside, the struck surface.
pub const PLACEMENT_NUDGE: f32 = 1.0;

/// What a ray can strike in the editor scene
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneTarget {
    /// The ground plane
    GroundPlane,
    /// The transient brush preview cube
    BrushPreview,
    /// A placed voxel, by insertion index
    PlacedVoxel(usize),
}

/// A single ray hit
#[derive(Clone, Copy, Debug)]
pub struct Hit {
    pub target: SceneTarget,
    /// Ray parameter; hits sort nearest-first on this
    pub t: f32,
    /// World-space hit point
    pub point: Vec3,
    /// Outward normal of the struck face
    pub normal: Vec3,
}

/// Outcome of a pick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickResult {
    /// Cell where the brush should preview and a commit would place
    Place { cell: IVec3 },
    /// Placed voxel under the cursor, eligible for removal
    RemoveHover { voxel: usize },
    /// Nothing under the cursor; the brush parks off-screen
    NoTarget,
}

/// Bounded ground plane at y = 0
#[derive(Clone, Copy, Debug)]
pub struct GroundPlane {
    /// Half the plane's edge length
    pub half_extent: f32,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self { half_extent: 500.0 }
    }
}

impl GroundPlane {
    /// Intersect a ray with the plane; the normal faces the ray origin
    pub fn intersect(&self, ray: &Ray) -> Option<(f32, Vec3, Vec3)> {
        if ray.direction.y.abs() < 1e-6 {
            return None;
        }
        let t = -ray.origin.y / ray.direction.y;
        if t < 0.0 {
            return None;
        }
        let point = ray.at(t);
        if point.x.abs() > self.half_extent || point.z.abs() > self.half_extent {
            return None;
        }
        let normal = if ray.origin.y >= 0.0 { Vec3::Y } else { -Vec3::Y };
        Some((t, point, normal))
    }
}

/// All intersections of a ray with the scene, nearest first
///
/// Coincident voxel cubes tie on distance; the most recently added one
/// ranks first, matching painter's order.
pub fn intersect_scene(
    ray: &Ray,
    world: &VoxelWorld,
    ground: GroundPlane,
    brush: Option<IVec3>,
) -> Vec<Hit> {
    let mut hits = Vec::new();

    for (index, voxel) in world.iter().enumerate() {
        if let Some((t, normal)) = ray.intersects_aabb_face(&voxel.aabb()) {
            hits.push(Hit {
                target: SceneTarget::PlacedVoxel(index),
                t,
                point: ray.at(t),
                normal,
            });
        }
    }

    if let Some((t, point, normal)) = ground.intersect(ray) {
        hits.push(Hit {
            target: SceneTarget::GroundPlane,
            t,
            point,
            normal,
        });
    }

    if let Some(cell) = brush {
        if let Some((t, normal)) = ray.intersects_aabb_face(&cell_aabb(cell)) {
            hits.push(Hit {
                target: SceneTarget::BrushPreview,
                t,
                point: ray.at(t),
                normal,
            });
        }
    }

    hits.sort_by(|a, b| {
        a.t.partial_cmp(&b.t)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| tie_rank(b.target).cmp(&tie_rank(a.target)))
    });
    hits
}

/// Later insertions outrank earlier ones at equal distance
fn tie_rank(target: SceneTarget) -> i64 {
    match target {
        SceneTarget::PlacedVoxel(index) => index as i64,
        _ => -1,
    }
}

/// Pick the interaction target under a ray
///
/// With shift held the nearest placed voxel becomes a removal hover;
/// the ground plane is not removable. Without shift the result is the
/// placement cell adjacent to the struck face.
pub fn pick(
    ray: &Ray,
    world: &VoxelWorld,
    ground: GroundPlane,
    brush: Option<IVec3>,
    shift_held: bool,
) -> PickResult {
    let hits = intersect_scene(ray, world, ground, brush);
    let Some(hit) = hits
        .iter()
        .find(|hit| hit.target != SceneTarget::BrushPreview)
    else {
        return PickResult::NoTarget;
    };

    if shift_held {
        match hit.target {
            SceneTarget::PlacedVoxel(index) => PickResult::RemoveHover { voxel: index },
            _ => PickResult::NoTarget,
        }
    } else {
        let nudged = hit.point + hit.normal * PLACEMENT_NUDGE;
        PickResult::Place {
            cell: cell_containing(nudged),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ColorIndex;

    fn color(index: u8) -> ColorIndex {
        ColorIndex::new(index).unwrap()
    }

    /// Ray straight down onto the center of a cell's top face
    fn down_onto(cell: IVec3) -> Ray {
        let center = crate::voxel::cell_center(cell);
        Ray::new(Vec3::new(center.x, 500.0, center.z), -Vec3::Y)
    }

    #[test]
    fn test_ground_plane_hit() {
        let ground = GroundPlane::default();
        let ray = Ray::new(Vec3::new(10.0, 100.0, 10.0), -Vec3::Y);
        let (t, point, normal) = ground.intersect(&ray).unwrap();
        assert_eq!(t, 100.0);
        assert_eq!(point, Vec3::new(10.0, 0.0, 10.0));
        assert_eq!(normal, Vec3::Y);
    }

    #[test]
    fn test_ground_plane_bounded() {
        let ground = GroundPlane::default();
        let ray = Ray::new(Vec3::new(600.0, 100.0, 0.0), -Vec3::Y);
        assert!(ground.intersect(&ray).is_none());
    }

    #[test]
    fn test_place_on_empty_ground() {
        let world = VoxelWorld::new();
        let ray = down_onto(IVec3::ZERO);
        let result = pick(&ray, &world, GroundPlane::default(), None, false);
        assert_eq!(result, PickResult::Place { cell: IVec3::ZERO });
    }

    #[test]
    fn test_place_adjacent_to_top_face() {
        let mut world = VoxelWorld::new();
        world.add(IVec3::new(2, 0, 3), color(0));

        let ray = down_onto(IVec3::new(2, 0, 3));
        let result = pick(&ray, &world, GroundPlane::default(), None, false);
        // One cell above the struck voxel, never coincident
        assert_eq!(result, PickResult::Place { cell: IVec3::new(2, 1, 3) });
    }

    #[test]
    fn test_place_adjacent_to_side_face() {
        let mut world = VoxelWorld::new();
        world.add(IVec3::ZERO, color(0));

        let ray = Ray::new(Vec3::new(-100.0, 25.0, 25.0), Vec3::X);
        let result = pick(&ray, &world, GroundPlane::default(), None, false);
        assert_eq!(result, PickResult::Place { cell: IVec3::new(-1, 0, 0) });
    }

    #[test]
    fn test_nearest_voxel_wins_along_ray() {
        let mut world = VoxelWorld::new();
        world.add(IVec3::new(0, 0, 0), color(0));
        world.add(IVec3::new(0, 2, 0), color(1)); // higher, nearer to the ray

        let ray = down_onto(IVec3::ZERO);
        let result = pick(&ray, &world, GroundPlane::default(), None, true);
        assert_eq!(result, PickResult::RemoveHover { voxel: 1 });
    }

    #[test]
    fn test_coincident_voxels_most_recent_wins() {
        let mut world = VoxelWorld::new();
        world.add(IVec3::ZERO, color(0));
        world.add(IVec3::ZERO, color(5));

        let ray = down_onto(IVec3::ZERO);
        let result = pick(&ray, &world, GroundPlane::default(), None, true);
        assert_eq!(result, PickResult::RemoveHover { voxel: 1 });
    }

    #[test]
    fn test_shift_over_ground_is_no_target() {
        let world = VoxelWorld::new();
        let ray = down_onto(IVec3::ZERO);
        let result = pick(&ray, &world, GroundPlane::default(), None, true);
        assert_eq!(result, PickResult::NoTarget);
    }

    #[test]
    fn test_miss_everything_is_no_target() {
        let world = VoxelWorld::new();
        let ray = Ray::new(Vec3::new(0.0, 100.0, 0.0), Vec3::Y);
        let result = pick(&ray, &world, GroundPlane::default(), None, false);
        assert_eq!(result, PickResult::NoTarget);
    }

    #[test]
    fn test_brush_never_picked() {
        let world = VoxelWorld::new();
        let brush = Some(IVec3::ZERO);

        // The ray passes through the brush cube before reaching the ground
        let ray = down_onto(IVec3::ZERO);
        let hits = intersect_scene(&ray, &world, GroundPlane::default(), brush);
        assert_eq!(hits[0].target, SceneTarget::BrushPreview);

        let result = pick(&ray, &world, GroundPlane::default(), brush, false);
        assert_eq!(result, PickResult::Place { cell: IVec3::ZERO });
    }

    #[test]
    fn test_removal_behind_brush() {
        let mut world = VoxelWorld::new();
        world.add(IVec3::ZERO, color(2));

        // Brush hovers above the voxel; shift-pick still finds the voxel
        let brush = Some(IVec3::new(0, 1, 0));
        let ray = down_onto(IVec3::ZERO);
        let result = pick(&ray, &world, GroundPlane::default(), brush, true);
        assert_eq!(result, PickResult::RemoveHover { voxel: 0 });
    }
}
