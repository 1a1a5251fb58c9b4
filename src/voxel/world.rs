//! World container: the ordered collection of placed voxels

use crate::core::types::IVec3;
use crate::palette::ColorIndex;
use super::voxel::Voxel;

/// Ordered collection of placed voxels
///
/// Insertion order is load-bearing: it is both the render order and
/// the wire order of the share token. Duplicate voxels at one cell are
/// permitted; removal takes the most recently added match.
#[derive(Debug, Default)]
pub struct VoxelWorld {
    /// Voxels in insertion order
    voxels: Vec<Voxel>,
    /// Set on every mutation; the token needs re-encoding
    dirty: bool,
}

impl VoxelWorld {
    /// Create a new empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a world from an already-decoded voxel sequence
    ///
    /// The world starts clean: the sequence came from a token, so the
    /// token already matches.
    pub fn from_voxels(voxels: Vec<Voxel>) -> Self {
        Self {
            voxels,
            dirty: false,
        }
    }

    /// Append a voxel; no dedup check
    pub fn add(&mut self, cell: IVec3, color: ColorIndex) {
        self.voxels.push(Voxel::new(cell, color));
        self.dirty = true;
    }

    /// Append one voxel per cell, all with the same color
    ///
    /// Bulk seeding for worlds captured outside the editor.
    pub fn extend_from_cells(&mut self, cells: impl IntoIterator<Item = IVec3>, color: ColorIndex) {
        self.voxels
            .extend(cells.into_iter().map(|cell| Voxel::new(cell, color)));
        self.dirty = true;
    }

    /// Remove the most recently added voxel at exactly this cell
    pub fn remove_at(&mut self, cell: IVec3) -> Option<Voxel> {
        let index = self.voxels.iter().rposition(|v| v.cell == cell)?;
        self.dirty = true;
        Some(self.voxels.remove(index))
    }

    /// Remove a voxel by insertion index
    pub fn remove_index(&mut self, index: usize) -> Option<Voxel> {
        if index >= self.voxels.len() {
            return None;
        }
        self.dirty = true;
        Some(self.voxels.remove(index))
    }

    /// Remove every voxel
    pub fn clear(&mut self) {
        self.voxels.clear();
        self.dirty = true;
    }

    /// Shift every voxel by a cell offset
    pub fn translate_all(&mut self, delta: IVec3) {
        for voxel in &mut self.voxels {
            voxel.cell += delta;
        }
        self.dirty = true;
    }

    /// Iterate voxels in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Voxel> {
        self.voxels.iter()
    }

    /// Get a voxel by insertion index
    pub fn get(&self, index: usize) -> Option<&Voxel> {
        self.voxels.get(index)
    }

    /// Number of placed voxels
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Check if the world has no voxels
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Take the dirty flag, clearing it
    ///
    /// Returns true if the world mutated since the last take.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
