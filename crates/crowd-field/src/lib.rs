//! `crowd-field` — marker storage and the per-tick claim arbitration grid.
//!
//! # Data layout
//!
//! Markers live in an **arena**: a `Vec<Vec2>` indexed by `MarkerId`.  The
//! grid is a dense row-major `Vec<Vec<MarkerId>>` of `grid_size²` cells;
//! cell `(cx, cz)` holds the IDs of the markers whose floored coordinates
//! are `(cx, cz)`.  Markers never move, so cell membership is fixed at
//! scatter time and the canonical grid is immutable after construction.
//!
//! # Snapshot protocol
//!
//! Claim arbitration happens on a [`GridSnapshot`] — a deep copy of the
//! cell lists taken at the start of each tick.  Agents remove markers from
//! the snapshot as they claim them, which is what makes claims exclusive
//! within a tick; the canonical grid is untouched and every marker is
//! available again next tick.

pub mod error;
pub mod field;
pub mod snapshot;


pub use error::{FieldError, FieldResult};
pub use field::MarkerField;
pub use snapshot::GridSnapshot;
