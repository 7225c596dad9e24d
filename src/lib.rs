//! Collaborative pixel canvas: paint cells, leave your mark forever.
//!
//! A [`GraffitiWall`] is a fixed 64x64 grid. Painters claim a cell by
//! writing a colored, tagged mark and paying a fee in wei; the latest
//! paint of a cell wins, and every payment accumulates in the wall's
//! treasury. The wall keeps per-painter paint history and aggregate
//! statistics, and is safe to share across threads.
//!
//! ```
//! use graffiti_wall::{GraffitiWall, Rgb888, MINIMUM_FUNDING_WEI, PAINT_COST_WEI};
//!
//! let wall = GraffitiWall::new(MINIMUM_FUNDING_WEI)?;
//! let cell = wall.paint("alice".into(), 0, 0, Rgb888(0xFF0000), b"hi", PAINT_COST_WEI)?;
//! assert_eq!(cell.cell_id, 0);
//! assert_eq!(wall.stats().total_painted, 1);
//! # Ok::<(), graffiti_wall::WallError>(())
//! ```

pub mod canvas;

pub use canvas::{
	Cell, GRID_HEIGHT, GRID_WIDTH, GraffitiWall, MAX_TAG_BYTES, MINIMUM_FUNDING_WEI, PAINT_COST_WEI,
	PainterId, Rgb888, TOTAL_CELLS, WallError, WallStats,
};
