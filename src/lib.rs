//! messwerk — Mess-Engine für interaktive Karten.
//! Distanz- und Flächenmessung als Library exportiert für Host-UIs und Tests.

pub mod core;
pub mod engine;
pub mod headless;
pub mod shared;

pub use core::{haversine_distance, path_length, ring_area, LatLng, EARTH_RADIUS_M};
pub use engine::{
    AnchorHandle, AnchorStyle, ClickOutcome, ClickSubscription, FillStyle, MapSurface,
    MarkerFactory, MeasureError, MeasurementEngine, MeasurementMode, MeasurementPoint,
    MeasurementSession, OverlayHandle, ResourceError, StrokeStyle,
};
pub use shared::{format_area, format_distance, MeasureOptions};
