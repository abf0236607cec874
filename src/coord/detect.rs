//! Coordinate ordering heuristic

use super::types::{is_valid_latitude, is_valid_longitude, CoordFormat, RawPair};

/// Number of leading pairs inspected by [`detect_format`]
pub const SAMPLE_SIZE: usize = 10;

/// Guess whether pairs are `[lon, lat]` or `[lat, lon]`
///
/// Looks at the first [`SAMPLE_SIZE`] pairs. A pair whose first value fits the
/// longitude range and whose second fits the latitude range votes `LonLat` when
/// the first value has the larger magnitude, `LatLon` otherwise. Pairs outside
/// those ranges do not vote. Ties go to `LatLon`.
///
/// Points close to the equator and the prime meridian can be misread; callers
/// get a guess, not a guarantee.
pub fn detect_format(pairs: &[RawPair]) -> CoordFormat {
    let mut lon_lat = 0usize;
    let mut lat_lon = 0usize;

    for pair in pairs.iter().take(SAMPLE_SIZE) {
        if !is_valid_longitude(pair.first) || !is_valid_latitude(pair.second) {
            continue;
        }
        if pair.first.abs() > pair.second.abs() {
            lon_lat += 1;
        } else {
            lat_lon += 1;
        }
    }

    let format = if lon_lat > lat_lon {
        CoordFormat::LonLat
    } else {
        CoordFormat::LatLon
    };
    tracing::debug!(lon_lat, lat_lon, %format, "Detected coordinate format");
    format
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pairs(values: &[[f64; 2]]) -> Vec<RawPair> {
        values.iter().copied().map(RawPair::from).collect()
    }

    #[test]
    fn test_lat_lon_sample() {
        let input = pairs(&[[40.88, -122.54], [40.87, -122.53]]);
        assert_eq!(detect_format(&input), CoordFormat::LatLon);
    }

    #[test]
    fn test_lon_lat_sample() {
        let input = pairs(&[[-122.54, 40.88], [-122.53, 40.87]]);
        assert_eq!(detect_format(&input), CoordFormat::LonLat);
    }

    #[test]
    fn test_tie_favors_lat_lon() {
        // One vote each way.
        let input = pairs(&[[-122.54, 40.88], [40.87, -12.53]]);
        assert_eq!(detect_format(&input), CoordFormat::LatLon);
    }

    #[test]
    fn test_equal_magnitudes_vote_lat_lon() {
        let input = pairs(&[[0.0, 0.0], [10.0, -10.0]]);
        assert_eq!(detect_format(&input), CoordFormat::LatLon);
    }

    #[test]
    fn test_out_of_range_pairs_do_not_vote() {
        // [200, 50] fails the longitude check; only the last pair votes.
        let input = pairs(&[[200.0, 50.0], [200.0, 50.0], [-122.5, 40.8]]);
        assert_eq!(detect_format(&input), CoordFormat::LonLat);

        let none_vote = pairs(&[[200.0, 50.0]]);
        assert_eq!(detect_format(&none_vote), CoordFormat::LatLon);
    }

    #[test]
    fn test_only_first_ten_pairs_sampled() {
        let mut values = vec![[40.0, -120.0]; SAMPLE_SIZE];
        values.extend(vec![[-120.0, 40.0]; 50]);
        assert_eq!(detect_format(&pairs(&values)), CoordFormat::LatLon);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(detect_format(&[]), CoordFormat::LatLon);
    }

    proptest! {
        #[test]
        fn prop_consistent_lon_lat_detected(
            values in prop::collection::vec((-180.0f64..=180.0, -90.0f64..=90.0), 1..40)
        ) {
            let input: Vec<RawPair> = values
                .iter()
                .filter(|(a, b)| a.abs() > b.abs())
                .map(|(a, b)| RawPair::new(*a, *b))
                .collect();
            prop_assume!(!input.is_empty());
            prop_assert_eq!(detect_format(&input), CoordFormat::LonLat);
        }

        #[test]
        fn prop_swapping_consistent_input_gives_lat_lon(
            values in prop::collection::vec((-90.0f64..=90.0, -90.0f64..=90.0), 1..40)
        ) {
            // Both values fit the latitude range, so the swapped pair still
            // passes the range check and votes lat-lon.
            let input: Vec<RawPair> = values
                .iter()
                .filter(|(a, b)| a.abs() > b.abs())
                .map(|(a, b)| RawPair::new(*b, *a))
                .collect();
            prop_assume!(!input.is_empty());
            prop_assert_eq!(detect_format(&input), CoordFormat::LatLon);
        }
    }
}
