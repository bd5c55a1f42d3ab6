//! Fehler-Taxonomie der Mess-Engine.
//!
//! Jeder Fehler ist lokal zu genau einer Operation; die Session bleibt
//! danach benutzbar. Die Engine führt keine internen Wiederholungen aus,
//! alle Fehler gehen synchron an den Aufrufer.

use super::session::MeasurementMode;
use thiserror::Error;

/// Fehlgeschlagener Capability-Aufruf des Karten-Hosts,
/// z.B. weil die Karten-Oberfläche noch nicht bereit ist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Ressourcen-Operation '{operation}' fehlgeschlagen: {reason}")]
pub struct ResourceError {
    /// Name der fehlgeschlagenen Operation (z.B. "create_polyline")
    pub operation: &'static str,
    /// Begründung des Hosts
    pub reason: String,
}

impl ResourceError {
    /// Erstellt einen Ressourcen-Fehler für eine benannte Operation.
    pub fn new(operation: &'static str, reason: impl Into<String>) -> Self {
        Self {
            operation,
            reason: reason.into(),
        }
    }
}

/// Fehler der Mess-Engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    /// Operation erfordert einen aktiven Messmodus.
    #[error("Operation '{operation}' erfordert einen aktiven Messmodus (aktuell: {mode:?})")]
    InvalidState {
        /// Name der abgelehnten Operation
        operation: &'static str,
        /// Modus zum Zeitpunkt des Aufrufs
        mode: MeasurementMode,
    },
    /// Anker oder Overlay konnte nicht erzeugt bzw. entfernt werden.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}
