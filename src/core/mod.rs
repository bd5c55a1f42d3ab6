//! Core-Domänentypen: Koordinaten und Kugelgeodäsie.

pub mod coordinate;
pub mod geodesic;

pub use coordinate::LatLng;
pub use geodesic::{haversine_distance, path_length, ring_area, EARTH_RADIUS_M};
