use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canvas::WallError;
use crate::canvas::cell::{Cell, PainterId, Rgb888};

pub const GRID_WIDTH: u32 = 64;
pub const GRID_HEIGHT: u32 = 64;
pub const TOTAL_CELLS: u32 = GRID_WIDTH * GRID_HEIGHT;
/// Fee floor per paint: 0.00031 ether.
pub const PAINT_COST_WEI: u128 = 310_000_000_000_000;
/// Tag payloads longer than this are clamped, never rejected.
pub const MAX_TAG_BYTES: usize = 16;
/// Construction floor: 0.005 ether.
pub const MINIMUM_FUNDING_WEI: u128 = 5_000_000_000_000_000;

/// Aggregate counters, as of one consistent snapshot of the wall.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct WallStats {
	pub total_painted: u32,
	pub total_cells: u32,
	pub total_collected_wei: u128,
	pub unique_painters: u32,
	pub cells_remaining: u32,
}

#[derive(Debug, Default)]
struct WallState {
	// Sparse: occupied cells only. Entries are replaced on repaint,
	// never removed, so `contains_key` means "ever painted".
	cells: HashMap<u32, Cell>,
	// Paint history per painter, repaints included. Entries are kept
	// even after another painter overwrites the cell: this is a record
	// of paint actions, not of current ownership.
	painter_cells: HashMap<PainterId, Vec<u32>>,
	paint_counts: HashMap<PainterId, u64>,
	// Distinct cell ids in first-paint order. Its length is the
	// total_painted counter.
	painted_order: Vec<u32>,
	// Distinct painters in first-paint order, append-only.
	painter_order: Vec<PainterId>,
	treasury_wei: u128,
}

/// The graffiti wall store. Sole authority over grid state; every read
/// and write funnels through it.
///
/// All methods take `&self`; share the wall between threads with an
/// `Arc`. A single coarse lock serializes writers, so racing paints of
/// the same cell resolve to last-writer-wins and the aggregate
/// counters never lose updates.
#[derive(Debug)]
pub struct GraffitiWall {
	state: RwLock<WallState>,
}

impl GraffitiWall {
	/// Creates a wall funded with `initial_funding_wei`, all cells
	/// unpainted. Funding below [`MINIMUM_FUNDING_WEI`] is rejected.
	pub fn new(initial_funding_wei: u128) -> Result<Self, WallError> {
		(initial_funding_wei >= MINIMUM_FUNDING_WEI)
			.then(|| ())
			.ok_or(WallError::InsufficientFunding {
				required: MINIMUM_FUNDING_WEI,
			})?;
		debug!(initial_funding_wei, "graffiti wall created");
		Ok(Self {
			state: RwLock::new(WallState {
				treasury_wei: initial_funding_wei,
				..WallState::default()
			}),
		})
	}

	/// Maps (x,y) to a cell id, row-major: id = y * width + x.
	fn cell_id(x: u32, y: u32) -> Result<u32, WallError> {
		if x < GRID_WIDTH && y < GRID_HEIGHT {
			Ok(y * GRID_WIDTH + x)
		} else {
			Err(WallError::OutOfBounds { x, y })
		}
	}

	// Mutation only happens after validation, so a panic mid-write
	// cannot leave half-applied state; a poisoned lock is recoverable.
	fn read(&self) -> RwLockReadGuard<'_, WallState> {
		self.state.read().unwrap_or_else(PoisonError::into_inner)
	}

	fn write(&self) -> RwLockWriteGuard<'_, WallState> {
		self.state.write().unwrap_or_else(PoisonError::into_inner)
	}

	/// Paints the cell at (x,y), replacing any previous occupant.
	///
	/// Validates bounds then fee, in that order; a failed call leaves
	/// every structure untouched. The payment is kept in full even
	/// when it exceeds [`PAINT_COST_WEI`], no change is returned. Tags
	/// over [`MAX_TAG_BYTES`] are clamped silently. Returns the stored
	/// cell record.
	pub fn paint(
		&self,
		painter: PainterId,
		x: u32,
		y: u32,
		color: Rgb888,
		tag: &[u8],
		payment_wei: u128,
	) -> Result<Cell, WallError> {
		let cell_id = Self::cell_id(x, y)?;
		(payment_wei >= PAINT_COST_WEI)
			.then(|| ())
			.ok_or(WallError::InsufficientFee {
				required: PAINT_COST_WEI,
			})?;

		let mut tag = tag.to_vec();
		tag.truncate(MAX_TAG_BYTES);

		let mut state = self.write();
		if !state.cells.contains_key(&cell_id) {
			state.painted_order.push(cell_id);
		}
		let cell = Cell {
			cell_id,
			painter: painter.clone(),
			color,
			tag,
			painted_at: unix_now(),
		};
		state.cells.insert(cell_id, cell.clone());
		state
			.painter_cells
			.entry(painter.clone())
			.or_default()
			.push(cell_id);
		let count = state.paint_counts.entry(painter.clone()).or_insert(0);
		*count += 1;
		let first_paint = *count == 1;
		if first_paint {
			state.painter_order.push(painter.clone());
		}
		// No error path after validation; treasury stays monotone.
		state.treasury_wei = state.treasury_wei.saturating_add(payment_wei);
		drop(state);

		debug!(cell_id, painter = %painter, color = %color, payment_wei, "cell painted");
		Ok(cell)
	}

	/// Reads the cell at (x,y). `None` if never painted,
	/// `OutOfBounds` if the coordinates fall outside the grid.
	pub fn cell(&self, x: u32, y: u32) -> Result<Option<Cell>, WallError> {
		let cell_id = Self::cell_id(x, y)?;
		Ok(self.read().cells.get(&cell_id).cloned())
	}

	/// Reads a cell by id. `InvalidCell` outside `[0, TOTAL_CELLS)`.
	pub fn cell_by_id(&self, id: u32) -> Result<Option<Cell>, WallError> {
		(id < TOTAL_CELLS)
			.then(|| ())
			.ok_or(WallError::InvalidCell { id })?;
		Ok(self.read().cells.get(&id).cloned())
	}

	/// Cell ids this painter has painted, in paint order, repaints
	/// included. Empty for an unknown painter, never an error.
	pub fn painter_cells(&self, painter: &str) -> Vec<u32> {
		self.read()
			.painter_cells
			.get(painter)
			.cloned()
			.unwrap_or_default()
	}

	/// Successful paints by this painter, repaints included.
	pub fn paint_count(&self, painter: &str) -> u64 {
		self.read().paint_counts.get(painter).copied().unwrap_or(0)
	}

	pub fn stats(&self) -> WallStats {
		let state = self.read();
		let total_painted = state.painted_order.len() as u32;
		WallStats {
			total_painted,
			total_cells: TOTAL_CELLS,
			total_collected_wei: state.treasury_wei,
			unique_painters: state.painter_order.len() as u32,
			cells_remaining: TOTAL_CELLS - total_painted,
		}
	}

	/// Distinct painter identities in first-paint order.
	pub fn all_painters(&self) -> Vec<PainterId> {
		self.read().painter_order.clone()
	}

	/// Distinct cell ids that have ever been painted, in first-paint
	/// order. A repainted cell appears once.
	pub fn painted_cell_ids(&self) -> Vec<u32> {
		self.read().painted_order.clone()
	}

	/// Whether (x,y) has ever been painted. Out-of-bounds coordinates
	/// answer `false` rather than erroring, unlike [`Self::cell`].
	pub fn is_painted(&self, x: u32, y: u32) -> bool {
		match Self::cell_id(x, y) {
			Ok(cell_id) => self.read().cells.contains_key(&cell_id),
			Err(_) => false,
		}
	}

	/// Administrative treasury top-up. Unconditional, tied to no
	/// painter or cell.
	pub fn add_funds(&self, amount_wei: u128) {
		let mut state = self.write();
		state.treasury_wei = state.treasury_wei.saturating_add(amount_wei);
		drop(state);
		debug!(amount_wei, "funds added to treasury");
	}

	pub fn treasury_wei(&self) -> u128 {
		self.read().treasury_wei
	}
}

fn unix_now() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|d| d.as_secs())
		.unwrap_or(0)
}
