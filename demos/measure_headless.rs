//! Headless-Demo: Distanz- und Flächenmessung ohne Karten-Widget.
//!
//! Treibt die Mess-Engine gegen die In-Memory-Capabilities und gibt die
//! formatierten Ergebnisse aus. Nützlich als Smoke-Test und als Vorlage
//! für die Host-Anbindung.

use messwerk::headless::{HeadlessMarkers, HeadlessSurface};
use messwerk::{
    format_area, format_distance, LatLng, MeasureOptions, MeasurementEngine, MeasurementMode,
};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("messwerk v{} Headless-Demo", env!("CARGO_PKG_VERSION"));

    let mut surface = HeadlessSurface::new();
    let mut markers = HeadlessMarkers::new();
    let mut engine = MeasurementEngine::new(MeasureOptions::default());

    // ── Distanz: Spaziergang durch München ──────────────────────────
    engine.start(MeasurementMode::Distance, &mut surface, &mut markers)?;
    for &(lat, lng) in &[
        (48.1351, 11.5820), // Marienplatz
        (48.1390, 11.5890),
        (48.1447, 11.5930),
        (48.1525, 11.5916), // Englischer Garten, Südspitze
    ] {
        engine.handle_click(LatLng::new(lat, lng), &mut surface, &mut markers)?;
    }
    println!(
        "Strecke über {} Punkte: {}",
        engine.point_count(),
        format_distance(engine.cumulative_distance())
    );

    // Abschließen: Overlay bleibt zur Ansicht stehen
    engine.finish(&mut surface);
    println!(
        "Nach Abschluss: {} Overlay(s), {} Anker sichtbar",
        surface.overlay_count(),
        markers.anchor_count()
    );

    // ── Fläche: Viereck um den Englischen Garten ────────────────────
    engine.start(MeasurementMode::Area, &mut surface, &mut markers)?;
    for &(lat, lng) in &[
        (48.1490, 11.5870),
        (48.1490, 11.5990),
        (48.1610, 11.5990),
        (48.1610, 11.5870),
    ] {
        engine.handle_click(LatLng::new(lat, lng), &mut surface, &mut markers)?;
    }
    println!(
        "Fläche über {} Punkte: {}",
        engine.point_count(),
        format_area(engine.cumulative_area())
    );

    engine.clear(&mut surface, &mut markers)?;
    println!("Aufgeräumt: {} Overlays, {} Anker", surface.overlay_count(), markers.anchor_count());

    Ok(())
}
