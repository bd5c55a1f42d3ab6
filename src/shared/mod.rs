//! Layer-übergreifende Unterstützung: Optionen und Einheiten-Formatierung.

pub mod options;
pub mod units;

pub use options::MeasureOptions;
pub use units::{format_area, format_distance};
