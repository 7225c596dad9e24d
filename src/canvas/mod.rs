pub mod cell;
pub mod wall;

pub use self::cell::{Cell, PainterId, Rgb888};
pub use self::wall::{
	GRID_HEIGHT, GRID_WIDTH, GraffitiWall, MAX_TAG_BYTES, MINIMUM_FUNDING_WEI, PAINT_COST_WEI,
	TOTAL_CELLS, WallStats,
};

use thiserror::Error;

/// Wall operation failures. All are local validation errors, reported
/// synchronously and never retryable without corrected input.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum WallError {
	#[error("initial funding below minimum, required = {required} wei")]
	InsufficientFunding { required: u128 },
	#[error("coordinates ({x}, {y}) outside the grid")]
	OutOfBounds { x: u32, y: u32 },
	#[error("payment below paint cost, required = {required} wei")]
	InsufficientFee { required: u128 },
	#[error("cell id {id} outside the valid range")]
	InvalidCell { id: u32 },
}
