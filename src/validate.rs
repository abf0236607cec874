//! Parsing and structural validation of pasted coordinate data
//!
//! Input must be a JSON array holding at least one `[x, y]` array of two
//! numbers. Structural checks happen here; geographic range checks happen
//! later, per point, when a layer is built.

use serde_json::Value;

use crate::coord::RawPair;
use crate::{GeopathError, Result};

/// Parse user text into raw coordinate pairs
///
/// # Errors
///
/// - `EmptyInput` if the text is blank
/// - `ParseError` if the text is not valid JSON
/// - `StructuralError` if the JSON does not have the expected shape
pub fn parse_coordinates(text: &str) -> Result<Vec<RawPair>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GeopathError::EmptyInput);
    }

    let value: Value =
        serde_json::from_str(trimmed).map_err(|e| GeopathError::ParseError(e.to_string()))?;
    validate_structure(&value)
}

/// Check that a parsed value is a non-empty array of numeric pairs
///
/// Reports the first offending element by index. Top-level problems (not an
/// array, or an empty array) carry no index.
pub fn validate_structure(value: &Value) -> Result<Vec<RawPair>> {
    let elements = match value.as_array() {
        Some(elements) if !elements.is_empty() => elements,
        _ => return Err(GeopathError::StructuralError { index: None }),
    };

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            as_pair(element).ok_or(GeopathError::StructuralError { index: Some(index) })
        })
        .collect()
}

fn as_pair(element: &Value) -> Option<RawPair> {
    match element.as_array()?.as_slice() {
        [first, second] => Some(RawPair::new(first.as_f64()?, second.as_f64()?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_pairs() {
        let pairs = parse_coordinates("[[1, 2], [3.5, -4.25]]").unwrap();
        assert_eq!(pairs, vec![RawPair::new(1.0, 2.0), RawPair::new(3.5, -4.25)]);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let pairs = parse_coordinates("\n  [[1, 2]]  \t").unwrap();
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(parse_coordinates("   "), Err(GeopathError::EmptyInput));
        assert_eq!(parse_coordinates(""), Err(GeopathError::EmptyInput));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_coordinates("[[1, 2],").unwrap_err();
        assert!(matches!(err, GeopathError::ParseError(_)));
    }

    #[test]
    fn test_wrong_arity_reports_index() {
        assert_eq!(
            parse_coordinates("[[1,2],[3]]"),
            Err(GeopathError::StructuralError { index: Some(1) })
        );
        assert_eq!(
            parse_coordinates("[[1,2,3]]"),
            Err(GeopathError::StructuralError { index: Some(0) })
        );
    }

    #[test]
    fn test_first_offending_index_wins() {
        let value = json!([[1, 2], [3, 4], "x", [5]]);
        assert_eq!(
            validate_structure(&value),
            Err(GeopathError::StructuralError { index: Some(2) })
        );
    }

    #[test]
    fn test_non_numeric_members() {
        let value = json!([[1, 2], ["3", 4]]);
        assert_eq!(
            validate_structure(&value),
            Err(GeopathError::StructuralError { index: Some(1) })
        );
        let value = json!([[null, 2]]);
        assert_eq!(
            validate_structure(&value),
            Err(GeopathError::StructuralError { index: Some(0) })
        );
    }

    #[test]
    fn test_top_level_shape() {
        for value in [json!({"lat": 1, "lng": 2}), json!(42), json!("[[1,2]]"), json!([])] {
            assert_eq!(
                validate_structure(&value),
                Err(GeopathError::StructuralError { index: None })
            );
        }
    }

    #[test]
    fn test_structure_does_not_check_ranges() {
        let pairs = parse_coordinates("[[200, 50]]").unwrap();
        assert_eq!(pairs, vec![RawPair::new(200.0, 50.0)]);
    }
}
