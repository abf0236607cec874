//! Built-in sample track used by "load example"

use crate::{GeopathError, Result};

/// Ten `[lon, lat]` fixes from a short walk near Redding, California
pub const EXAMPLE_PATH: [[f64; 2]; 10] = [
    [-122.541347576002, 40.8797068810007],
    [-122.541319702002, 40.8797905080007],
    [-122.541320089002, 40.8797907340007],
    [-122.541320000002, 40.8797910000008],
    [-122.541346723002, 40.8798062700008],
    [-122.541361851002, 40.8798149140008],
    [-122.541362000002, 40.8798150000007],
    [-122.541373978002, 40.8798154920007],
    [-122.541435001002, 40.8798180000007],
    [-122.541529000002, 40.8798180000007],
];

/// The sample track as pretty-printed JSON, ready for the input box
pub fn example_json() -> Result<String> {
    serde_json::to_string_pretty(&EXAMPLE_PATH)
        .map_err(|e| GeopathError::WriterError(format!("Failed to serialize example: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_json_round_trips() {
        let parsed: Vec<[f64; 2]> = serde_json::from_str(&example_json().unwrap()).unwrap();
        assert_eq!(parsed, EXAMPLE_PATH.to_vec());
    }

    #[test]
    fn test_example_json_is_pretty() {
        let json = example_json().unwrap();
        assert!(json.starts_with("[\n  [\n    -122.541347576002,"));
    }
}
