use std::fmt;

use serde::{Deserialize, Serialize};

/// Painter identity. Opaque, assumed authenticated upstream.
pub type PainterId = String;

/// One painted grid position and its current mark.
///
/// A cell record is never mutated in place. Repainting the same
/// coordinates stores a whole new record that replaces this one.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Cell {
	pub cell_id: u32,
	pub painter: PainterId,
	pub color: Rgb888,
	/// Mark payload, at most `MAX_TAG_BYTES` bytes (clamped on paint).
	pub tag: Vec<u8>,
	/// Unix timestamp, second resolution.
	pub painted_at: u64,
}

/// 24-bit packed color (0xRRGGBB).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Rgb888(pub u32);

impl fmt::Display for Rgb888 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
	}
}
