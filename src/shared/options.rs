//! Zentrale Konfiguration der Mess-Engine.
//!
//! `MeasureOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::engine::{AnchorStyle, FillStyle, StrokeStyle};
use serde::{Deserialize, Serialize};

// ── Mess-Linie (Distanz) ────────────────────────────────────────────

/// Farbe der Distanz-Polyline (RGBA: Signal-Orange).
pub const LINE_COLOR: [f32; 4] = [0.95, 0.35, 0.1, 1.0];
/// Linienstärke der Distanz-Polyline in Pixeln.
pub const LINE_WIDTH_PX: f32 = 3.0;

// ── Mess-Fläche (Polygon) ───────────────────────────────────────────

/// Füllfarbe des Flächen-Polygons (RGBA, halbtransparent).
pub const AREA_FILL_COLOR: [f32; 4] = [0.95, 0.35, 0.1, 0.25];
/// Umrandungsfarbe des Flächen-Polygons.
pub const AREA_STROKE_COLOR: [f32; 4] = [0.95, 0.35, 0.1, 1.0];
/// Umrandungsstärke des Flächen-Polygons in Pixeln.
pub const AREA_STROKE_WIDTH_PX: f32 = 2.0;

// ── Anker-Marker ────────────────────────────────────────────────────

/// Radius der Anker-Marker in Pixeln.
pub const ANCHOR_RADIUS_PX: f32 = 5.0;
/// Füllfarbe der Anker-Marker (RGBA: Weiß).
pub const ANCHOR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Outline-Farbe der Anker-Marker.
pub const ANCHOR_OUTLINE_COLOR: [f32; 4] = [0.95, 0.35, 0.1, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Mess-Optionen.
/// Wird als `messwerk.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasureOptions {
    // ── Distanz-Linie ───────────────────────────────────────────
    /// Farbe der Distanz-Polyline (RGBA)
    pub line_color: [f32; 4],
    /// Linienstärke der Distanz-Polyline in Pixeln
    pub line_width_px: f32,

    // ── Flächen-Polygon ─────────────────────────────────────────
    /// Füllfarbe des Flächen-Polygons (RGBA)
    pub area_fill_color: [f32; 4],
    /// Umrandungsfarbe des Flächen-Polygons
    pub area_stroke_color: [f32; 4],
    /// Umrandungsstärke des Flächen-Polygons in Pixeln
    pub area_stroke_width_px: f32,

    // ── Anker ───────────────────────────────────────────────────
    /// Radius der Anker-Marker in Pixeln
    pub anchor_radius_px: f32,
    /// Füllfarbe der Anker-Marker
    pub anchor_color: [f32; 4],
    /// Outline-Farbe der Anker-Marker
    pub anchor_outline_color: [f32; 4],
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            line_color: LINE_COLOR,
            line_width_px: LINE_WIDTH_PX,

            area_fill_color: AREA_FILL_COLOR,
            area_stroke_color: AREA_STROKE_COLOR,
            area_stroke_width_px: AREA_STROKE_WIDTH_PX,

            anchor_radius_px: ANCHOR_RADIUS_PX,
            anchor_color: ANCHOR_COLOR,
            anchor_outline_color: ANCHOR_OUTLINE_COLOR,
        }
    }
}

impl MeasureOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("messwerk"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("messwerk.toml")
    }

    /// Stil der Distanz-Polyline.
    pub fn line_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.line_color,
            width_px: self.line_width_px,
        }
    }

    /// Stil des Flächen-Polygons.
    pub fn polygon_style(&self) -> FillStyle {
        FillStyle {
            fill_color: self.area_fill_color,
            stroke: StrokeStyle {
                color: self.area_stroke_color,
                width_px: self.area_stroke_width_px,
            },
        }
    }

    /// Stil der Anker-Marker.
    pub fn anchor_style(&self) -> AnchorStyle {
        AnchorStyle {
            radius_px: self.anchor_radius_px,
            color: self.anchor_color,
            outline_color: self.anchor_outline_color,
        }
    }
}
