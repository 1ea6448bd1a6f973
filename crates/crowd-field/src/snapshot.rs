//! Per-tick disposable copy of the marker grid.

use crowd_core::{MarkerId, Vec2};

use crate::MarkerField;

/// A deep copy of the cell lists, owned by the simulation for the duration
/// of one tick and discarded afterwards.
///
/// The snapshot is the only mutable shared state of a tick: agents claim
/// markers by removing them from snapshot cells, in sequence order, so a
/// marker can be claimed by at most one agent per tick.
pub struct GridSnapshot {
    grid_size: u32,
    cells: Vec<Vec<MarkerId>>,
}

impl GridSnapshot {
    pub(crate) fn of(field: &MarkerField) -> Self {
        Self {
            grid_size: field.grid_size(),
            cells: field.cell_lists().to_vec(),
        }
    }

    #[inline]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    #[inline]
    fn index(&self, cx: u32, cz: u32) -> usize {
        cx as usize * self.grid_size as usize + cz as usize
    }

    /// Markers still available in snapshot cell `(cx, cz)`.
    ///
    /// # Panics
    /// Panics if either coordinate is `>= grid_size`.
    #[inline]
    pub fn cell(&self, cx: u32, cz: u32) -> &[MarkerId] {
        &self.cells[self.index(cx, cz)]
    }

    /// Empty one cell, making its markers unavailable for the rest of the
    /// tick.  Applied to every agent-occupied cell before claiming starts.
    pub fn clear_cell(&mut self, cx: u32, cz: u32) {
        let idx = self.index(cx, cz);
        self.cells[idx].clear();
    }

    /// Claim every marker in cell `(cx, cz)` strictly closer than `radius`
    /// to `origin`; claimed markers are removed from the cell and returned
    /// in residence order, the rest remain available.
    ///
    /// `markers` is the arena of the field this snapshot was taken from.
    /// Matches are collected first, then the cell is rewritten as one
    /// partition — never mutated mid-scan.
    pub fn claim_from_cell(
        &mut self,
        cx:      u32,
        cz:      u32,
        origin:  Vec2,
        radius:  f32,
        markers: &[Vec2],
    ) -> Vec<MarkerId> {
        let idx = self.index(cx, cz);
        let cell = &mut self.cells[idx];
        if cell.is_empty() {
            return Vec::new();
        }

        let (claimed, remaining): (Vec<MarkerId>, Vec<MarkerId>) = cell
            .drain(..)
            .partition(|id| markers[id.index()].distance(origin) < radius);
        *cell = remaining;
        claimed
    }

    /// Total markers still available across all cells.
    pub fn available(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }
}
