//! Coordinate types and ordering detection
//!
//! Pasted data arrives as bare `[x, y]` pairs. This module defines the raw and
//! resolved point types and the heuristic that decides which value is the
//! latitude.

mod detect;
mod types;

pub use detect::{detect_format, SAMPLE_SIZE};
pub use types::{
    is_valid_latitude, is_valid_longitude, CoordFormat, LatLng, LatLngBounds, RawPair,
};
