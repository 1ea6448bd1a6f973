//! Canonical marker storage: arena + grid index.

use crowd_core::{MarkerId, SimRng, Vec2};

use crate::{FieldError, FieldResult, GridSnapshot};

/// The scattered marker set and its cell index.
///
/// Construct via [`MarkerField::scatter`] (random layout) or
/// [`MarkerField::from_positions`] (explicit layout).  Both are one-time:
/// markers are never added, removed, or moved afterwards.
///
/// Invariant: every marker ID appears in exactly one cell of the canonical
/// grid, and the union of all cells is the full marker set.
#[derive(Debug)]
pub struct MarkerField {
    grid_size: u32,

    /// Marker positions, indexed by `MarkerId`.
    markers: Vec<Vec2>,

    /// Row-major `grid_size²` cells; `cells[cx * grid_size + cz]` holds the
    /// markers whose floored coordinates are `(cx, cz)`.
    cells: Vec<Vec<MarkerId>>,
}

impl MarkerField {
    /// Scatter `count` markers uniformly over `[0, grid_size)²`.
    pub fn scatter(grid_size: u32, count: usize, rng: &mut SimRng) -> FieldResult<Self> {
        let mut field = Self::empty(grid_size)?;
        let span = grid_size as f32;
        for _ in 0..count {
            let x = rng.gen_range(0.0..span);
            let z = rng.gen_range(0.0..span);
            field.insert(Vec2::new(x, z));
        }
        Ok(field)
    }

    /// Build a field from explicit marker positions.
    ///
    /// Every position must lie within `[0, grid_size)` on both axes.
    pub fn from_positions(grid_size: u32, positions: Vec<Vec2>) -> FieldResult<Self> {
        let mut field = Self::empty(grid_size)?;
        let span = grid_size as f32;
        for p in positions {
            if !(0.0..span).contains(&p.x) || !(0.0..span).contains(&p.z) {
                return Err(FieldError::MarkerOutOfBounds { x: p.x, z: p.z, grid_size });
            }
            field.insert(p);
        }
        Ok(field)
    }

    fn empty(grid_size: u32) -> FieldResult<Self> {
        if grid_size == 0 {
            return Err(FieldError::Config("grid_size must be positive".into()));
        }
        let cell_count = grid_size as usize * grid_size as usize;
        Ok(Self {
            grid_size,
            markers: Vec::new(),
            cells: vec![Vec::new(); cell_count],
        })
    }

    /// Append one marker to the arena and index it into its home cell.
    fn insert(&mut self, position: Vec2) {
        let id = MarkerId(self.markers.len() as u32);
        self.markers.push(position);
        let cx = position.x.floor() as usize;
        let cz = position.z.floor() as usize;
        self.cells[cx * self.grid_size as usize + cz].push(id);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// All marker positions, indexed by `MarkerId`.  Static for the
    /// lifetime of the field — suitable for one-time render setup.
    #[inline]
    pub fn markers(&self) -> &[Vec2] {
        &self.markers
    }

    #[inline]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Markers resident in canonical cell `(cx, cz)`.
    ///
    /// # Panics
    /// Panics if either coordinate is `>= grid_size`.
    #[inline]
    pub fn cell(&self, cx: u32, cz: u32) -> &[MarkerId] {
        &self.cells[cx as usize * self.grid_size as usize + cz as usize]
    }

    pub(crate) fn cell_lists(&self) -> &[Vec<MarkerId>] {
        &self.cells
    }

    // ── Snapshot ──────────────────────────────────────────────────────────

    /// Deep copy of the grid for one tick of claim arbitration.
    ///
    /// Cost is proportional to `grid_size²` plus the total marker count.
    /// Mutations of the snapshot never affect the canonical grid.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::of(self)
    }
}
