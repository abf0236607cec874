//! Coordinate value types

use serde::{Deserialize, Serialize};

/// Valid latitude range in degrees
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range in degrees
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Check whether a value lies within [-90, 90]
pub fn is_valid_latitude(value: f64) -> bool {
    value >= LATITUDE_RANGE.0 && value <= LATITUDE_RANGE.1
}

/// Check whether a value lies within [-180, 180]
pub fn is_valid_longitude(value: f64) -> bool {
    value >= LONGITUDE_RANGE.0 && value <= LONGITUDE_RANGE.1
}

/// An unresolved `[x, y]` pair as pasted by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPair {
    pub first: f64,
    pub second: f64,
}

impl RawPair {
    pub fn new(first: f64, second: f64) -> Self {
        Self { first, second }
    }

    /// Resolve into a geographic point according to the ordering
    pub fn resolve(&self, format: CoordFormat) -> LatLng {
        match format {
            CoordFormat::LatLon => LatLng::new(self.first, self.second),
            CoordFormat::LonLat => LatLng::new(self.second, self.first),
        }
    }
}

impl From<[f64; 2]> for RawPair {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

/// Ordering of the values inside each pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoordFormat {
    /// `[latitude, longitude]`
    LatLon,
    /// `[longitude, latitude]` (GeoJSON order)
    LonLat,
}

impl CoordFormat {
    /// Label shown in the info panel
    pub fn label(&self) -> &'static str {
        match self {
            CoordFormat::LatLon => "Lat, Lon",
            CoordFormat::LonLat => "Lon, Lat",
        }
    }
}

impl std::fmt::Display for CoordFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordFormat::LatLon => write!(f, "lat-lon"),
            CoordFormat::LonLat => write!(f, "lon-lat"),
        }
    }
}

/// A resolved geographic point
///
/// Serializes as `[lat, lng]`, the order map libraries such as Leaflet expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components inside their geographic ranges
    pub fn is_valid(&self) -> bool {
        is_valid_latitude(self.lat) && is_valid_longitude(self.lng)
    }
}

impl From<[f64; 2]> for LatLng {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(point: LatLng) -> Self {
        [point.lat, point.lng]
    }
}

/// Axis-aligned bounding box of a set of points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Smallest box containing every point; `None` for an empty slice
    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self {
            south_west: *first,
            north_east: *first,
        };
        for point in rest {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }
}
