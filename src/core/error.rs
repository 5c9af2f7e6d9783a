//! Fehlertypen des Spline-Kerns.

use thiserror::Error;

/// Fehler der geprüften Auswertungs- und Registry-Pfade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplineError {
    /// Kurvenauswertung braucht mindestens zwei Kontrollpunkte
    #[error("Kurve nicht auswertbar: {count} Kontrollpunkt(e), mindestens 2 nötig")]
    TooFewControlPoints { count: usize },
    /// Keine Straße unter dieser ID registriert
    #[error("Unbekannte Straße: {0}")]
    UnknownRoad(usize),
    /// Die DriveLine (Slot 0) kann nicht entfernt werden
    #[error("Die DriveLine kann nicht entfernt werden")]
    DriveLineRemoval,
}
