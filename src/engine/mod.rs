//! Mess-Engine: Zustandsmaschine für Distanz- und Flächenmessung.
//!
//! Aufgeteilt in:
//! - `session` — Modus, Punktfolge, abgeleitete Summen
//! - `surface` — Capability-Schnittstellen zum Karten-Host
//! - `error`   — Fehler-Taxonomie
//!
//! Die Engine reagiert synchron auf diskrete Ereignisse (Karten-Klick,
//! Undo, Clear, Finish); nichts blockiert, nichts läuft im Hintergrund.
//! Sie ist alleiniger Besitzer aller von ihr erzeugten Anker und Overlays
//! und paart Erzeugen/Freigeben auf jeder Transition.

mod error;
mod session;
mod surface;

pub use error::{MeasureError, ResourceError};
pub use session::{MeasurementMode, MeasurementPoint, MeasurementSession};
pub use surface::{
    AnchorHandle, AnchorStyle, ClickSubscription, FillStyle, MapSurface, MarkerFactory,
    OverlayHandle, StrokeStyle,
};

use crate::core::LatLng;
use crate::shared::MeasureOptions;

/// Ergebnis eines weitergeleiteten Karten-Klicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Punkt erfasst, Summen und Overlay aktualisiert
    PointAdded,
    /// Klick verworfen: kein aktives Abonnement (z.B. nach `finish`)
    Ignored,
}

/// Zustandsmaschine für On-Map-Messungen.
///
/// Langlebiger, wiederverwendbarer Controller: `Inactive` ist beliebig
/// oft wieder erreichbar. Die Capabilities (`MapSurface`, `MarkerFactory`)
/// werden pro Aufruf übergeben; die Engine hält nur Handles.
pub struct MeasurementEngine {
    session: MeasurementSession,
    subscription: Option<ClickSubscription>,
    options: MeasureOptions,
}

impl Default for MeasurementEngine {
    fn default() -> Self {
        Self::new(MeasureOptions::default())
    }
}

impl MeasurementEngine {
    /// Erstellt eine neue Engine im Zustand `Inactive`.
    pub fn new(options: MeasureOptions) -> Self {
        Self {
            session: MeasurementSession::default(),
            subscription: None,
            options,
        }
    }

    // ── Lesende Zugriffe ─────────────────────────────────────────────

    /// Aktueller Messmodus.
    pub fn mode(&self) -> MeasurementMode {
        self.session.mode
    }

    /// Punktfolge in Einfüge-Reihenfolge (nur lesend).
    pub fn points(&self) -> &[MeasurementPoint] {
        self.session.points()
    }

    /// Anzahl erfasster Punkte.
    pub fn point_count(&self) -> usize {
        self.session.point_count()
    }

    /// Kumulierte Distanz in Metern (0.0 außerhalb des Distanz-Modus
    /// oder unter 2 Punkten).
    pub fn cumulative_distance(&self) -> f64 {
        self.session.cumulative_distance()
    }

    /// Kumulierte Fläche in Quadratmetern (0.0 außerhalb des Flächen-Modus
    /// oder unter 3 Punkten).
    pub fn cumulative_area(&self) -> f64 {
        self.session.cumulative_area()
    }

    /// Session-Zustand für Host-Inspektion.
    pub fn session(&self) -> &MeasurementSession {
        &self.session
    }

    /// `true` solange ein Klick-Abonnement aktiv ist.
    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    // ── Transitionen ─────────────────────────────────────────────────

    /// Startet eine Messung im gegebenen Modus: bedingungsloses
    /// Zurücksetzen und Neubeginnen.
    ///
    /// Eine bestehende Session (auch eine per `finish` abgeschlossene)
    /// wird vollständig freigegeben, danach wird das Klick-Abonnement
    /// registriert. `start(Inactive)` ist als `clear()` definiert.
    /// Schlägt das Abonnieren fehl, bleibt die Engine `Inactive` mit
    /// leerer Session.
    pub fn start(
        &mut self,
        mode: MeasurementMode,
        surface: &mut dyn MapSurface,
        markers: &mut dyn MarkerFactory,
    ) -> Result<(), MeasureError> {
        let release_err = self.release_all(surface, markers);
        self.session.mode = MeasurementMode::Inactive;

        if mode.is_active() {
            self.subscription = Some(surface.subscribe_clicks()?);
            self.session.mode = mode;
            log::info!("Messung gestartet: {:?}", mode);
        }

        match release_err {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Verarbeitet einen vom Host weitergeleiteten Karten-Klick.
    ///
    /// Ohne aktives Abonnement (nach `clear`/`finish`, oder ein noch
    /// "in flight" zugestellter Klick) wird der Klick gefahrlos verworfen.
    pub fn handle_click(
        &mut self,
        at: LatLng,
        surface: &mut dyn MapSurface,
        markers: &mut dyn MarkerFactory,
    ) -> Result<ClickOutcome, MeasureError> {
        if self.subscription.is_none() || !self.session.mode.is_active() {
            log::debug!("Klick ignoriert: kein aktives Abonnement");
            return Ok(ClickOutcome::Ignored);
        }
        self.add_point(at, surface, markers)?;
        Ok(ClickOutcome::PointAdded)
    }

    /// Hängt einen Messpunkt an und synchronisiert Anker, Summen und Overlay.
    ///
    /// Im Zustand `Inactive` wird mit `InvalidState` abgelehnt. Schlägt
    /// die Anker-Erzeugung fehl, wird nichts übernommen. Schlägt erst die
    /// Overlay-Synchronisation fehl, bleibt der Punkt bestehen (die
    /// Punktliste ist die Quelle der Wahrheit) und der Fehler geht an den
    /// Aufrufer.
    pub fn add_point(
        &mut self,
        at: LatLng,
        surface: &mut dyn MapSurface,
        markers: &mut dyn MarkerFactory,
    ) -> Result<(), MeasureError> {
        if !self.session.mode.is_active() {
            return Err(MeasureError::InvalidState {
                operation: "add_point",
                mode: self.session.mode,
            });
        }
        debug_assert!(at.is_valid(), "Koordinate außerhalb des Wertebereichs: {at:?}");

        let anchor = markers.create_anchor(at, &self.options.anchor_style())?;
        self.session.points.push(MeasurementPoint {
            coordinate: at,
            anchor,
        });
        self.session.recompute_totals();
        log::debug!(
            "Punkt {} erfasst: ({:.5}, {:.5})",
            self.session.point_count(),
            at.lat,
            at.lng
        );

        self.sync_overlay(surface)?;
        Ok(())
    }

    /// Entfernt den zuletzt erfassten Punkt samt Anker.
    ///
    /// No-op bei leerer Punktliste; `InvalidState` im Zustand `Inactive`.
    /// Fällt die Punktzahl unter die Overlay-Schwelle, wird das Overlay
    /// zerstört. Freigabe-Fehler werden geloggt, der Zustand schreitet
    /// trotzdem fort und der erste Fehler geht an den Aufrufer.
    pub fn undo_last_point(
        &mut self,
        surface: &mut dyn MapSurface,
        markers: &mut dyn MarkerFactory,
    ) -> Result<(), MeasureError> {
        if !self.session.mode.is_active() {
            return Err(MeasureError::InvalidState {
                operation: "undo_last_point",
                mode: self.session.mode,
            });
        }
        let Some(point) = self.session.points.pop() else {
            return Ok(());
        };
        self.session.recompute_totals();

        let mut first_err: Option<ResourceError> = None;
        if let Err(err) = markers.remove_anchor(point.anchor) {
            log::warn!("Anker {:?} konnte nicht entfernt werden: {err}", point.anchor);
            first_err.get_or_insert(err);
        }
        if let Err(err) = self.sync_overlay(surface) {
            log::warn!("Overlay-Synchronisation nach Undo fehlgeschlagen: {err}");
            first_err.get_or_insert(err);
        }
        log::debug!(
            "Letzter Punkt entfernt, {} verbleibend",
            self.session.point_count()
        );

        match first_err {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Verwirft die Messung vollständig: alle Anker und das Overlay werden
    /// freigegeben, die Punktliste geleert, die Summen genullt, das
    /// Klick-Abonnement beendet, Modus `Inactive`. Idempotent.
    pub fn clear(
        &mut self,
        surface: &mut dyn MapSurface,
        markers: &mut dyn MarkerFactory,
    ) -> Result<(), MeasureError> {
        let had_session = self.session.mode.is_active() || self.session.point_count() > 0;
        let release_err = self.release_all(surface, markers);
        self.session.mode = MeasurementMode::Inactive;
        if had_session {
            log::info!("Messung verworfen und zurückgesetzt");
        }

        match release_err {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Schließt die Messung ab: das Klick-Abonnement endet und der Modus
    /// wird `Inactive`, aber Punkte, Anker und Overlay bleiben zur Ansicht
    /// stehen. Ein späteres `start` oder `clear` gibt sie frei.
    pub fn finish(&mut self, surface: &mut dyn MapSurface) {
        self.stop_listening(surface);
        self.session.mode = MeasurementMode::Inactive;
        log::info!(
            "Messung abgeschlossen: {} Punkte bleiben zur Ansicht",
            self.session.point_count()
        );
    }

    // ── Interne Helfer ───────────────────────────────────────────────

    /// Beendet ein aktives Klick-Abonnement.
    fn stop_listening(&mut self, surface: &mut dyn MapSurface) {
        if let Some(subscription) = self.subscription.take() {
            surface.unsubscribe_clicks(subscription);
            log::debug!("Klick-Abonnement beendet");
        }
    }

    /// Gibt Abonnement, Anker und Overlay frei und nullt die Summen.
    ///
    /// Best-effort: jede Ressource wird versucht, der Zustand wird in
    /// jedem Fall vollständig geleert (ein hängendes Handle darf die
    /// Zustandsmaschine nie blockieren). Gibt den ersten Fehler zurück.
    fn release_all(
        &mut self,
        surface: &mut dyn MapSurface,
        markers: &mut dyn MarkerFactory,
    ) -> Option<ResourceError> {
        self.stop_listening(surface);

        let mut first_err: Option<ResourceError> = None;
        for point in self.session.points.drain(..) {
            if let Err(err) = markers.remove_anchor(point.anchor) {
                log::warn!("Anker {:?} konnte nicht entfernt werden: {err}", point.anchor);
                first_err.get_or_insert(err);
            }
        }
        if let Some(handle) = self.session.overlay.take() {
            if let Err(err) = surface.remove_overlay(handle) {
                log::warn!("Overlay {handle:?} konnte nicht entfernt werden: {err}");
                first_err.get_or_insert(err);
            }
        }
        self.session.path_length_m = 0.0;
        self.session.ring_area_m2 = 0.0;

        first_err
    }

    /// Synchronisiert das Overlay mit der aktuellen Punktfolge.
    ///
    /// Unterhalb der Modus-Schwelle existiert kein Overlay; ab der
    /// Schwelle wird es einmal erzeugt und danach in-place aktualisiert
    /// (nie neu erzeugt und geleakt). Pro Session existiert höchstens
    /// ein Overlay.
    fn sync_overlay(&mut self, surface: &mut dyn MapSurface) -> Result<(), ResourceError> {
        let mode = self.session.mode;
        if self.session.point_count() < mode.overlay_threshold() {
            if let Some(handle) = self.session.overlay.take() {
                surface.remove_overlay(handle)?;
            }
            return Ok(());
        }

        let vertices = self.session.coordinates();
        match self.session.overlay {
            Some(handle) => match mode {
                MeasurementMode::Distance => surface.update_polyline(handle, &vertices),
                MeasurementMode::Area => surface.update_polygon(handle, &vertices),
                // overlay_threshold() ist usize::MAX — hier nie erreicht
                MeasurementMode::Inactive => Ok(()),
            },
            None => {
                let handle = match mode {
                    MeasurementMode::Distance => {
                        surface.create_polyline(&vertices, &self.options.line_style())?
                    }
                    MeasurementMode::Area => {
                        surface.create_polygon(&vertices, &self.options.polygon_style())?
                    }
                    MeasurementMode::Inactive => return Ok(()),
                };
                self.session.overlay = Some(handle);
                Ok(())
            }
        }
    }
}
