//! Zentrale Konfiguration für den Spline-Kern.
//!
//! `SplineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::Vec3;
use serde::{Deserialize, Serialize};

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Standard-Breite neuer Kontrollpunkte.
pub const DEFAULT_WIDTH: f32 = 1.0;
/// Standard-Normale neuer Kontrollpunkte (Y = oben).
pub const DEFAULT_NORMAL: Vec3 = Vec3::Y;

// ── Rendering ───────────────────────────────────────────────────────

/// Parameter-Schrittweite beim Abtasten der Kurve für Linien-Segmente.
pub const SAMPLE_STEP: f32 = 0.005;
/// Obergrenze für Segmente pro Abtastung; feinere Schrittweiten sind ungültig.
pub const MAX_SAMPLE_SEGMENTS: usize = 1_000_000;
/// Linienfarbe der Kurve (RGBA: Rot).
pub const LINE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// ── Straßen ─────────────────────────────────────────────────────────

/// Start-Position des Breiten-Sliders (Breite = Position / 10).
pub const ROAD_WIDTH_SLIDER: u32 = 40;
/// Start-Position des Detail-Sliders (Detail = Position / 100).
pub const ROAD_DETAIL_SLIDER: u32 = 25;
/// Gültiger Bereich beider Slider.
pub const SLIDER_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

/// Alle zur Laufzeit änderbaren Spline-Optionen.
/// Wird als `track_spline.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplineOptions {
    // ── Kontrollpunkte ──────────────────────────────────────────
    /// Breite neu angelegter Kontrollpunkte
    pub default_width: f32,
    /// Normale neu angelegter Kontrollpunkte
    pub default_normal: Vec3,

    // ── Rendering ───────────────────────────────────────────────
    /// Schrittweite im Parameterraum für die Linien-Darstellung
    pub sample_step: f32,
    /// Linienfarbe (RGBA)
    pub line_color: [f32; 4],

    // ── Straßen ─────────────────────────────────────────────────
    /// Breiten-Slider für neu angelegte Straßen
    #[serde(default = "default_road_width_slider")]
    pub road_width_slider: u32,
    /// Detail-Slider für neu angelegte Straßen
    #[serde(default = "default_road_detail_slider")]
    pub road_detail_slider: u32,
}

impl Default for SplineOptions {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_WIDTH,
            default_normal: DEFAULT_NORMAL,
            sample_step: SAMPLE_STEP,
            line_color: LINE_COLOR,
            road_width_slider: ROAD_WIDTH_SLIDER,
            road_detail_slider: ROAD_DETAIL_SLIDER,
        }
    }
}

/// Serde-Default für `road_width_slider` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_road_width_slider() -> u32 {
    ROAD_WIDTH_SLIDER
}

/// Serde-Default für `road_detail_slider` (Abwärtskompatibilität).
fn default_road_detail_slider() -> u32 {
    ROAD_DETAIL_SLIDER
}

impl SplineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
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
            .unwrap_or_else(|_| std::path::PathBuf::from("track_spline"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("track_spline.toml")
    }

    /// Korrigiert Werte, die Invarianten der Kontrollpunkte verletzen würden.
    ///
    /// Negative Breiten werden auf 0 geklemmt, eine Null-Normale fällt auf
    /// `DEFAULT_NORMAL` zurück, Slider landen im gültigen Bereich.
    pub fn sanitized(mut self) -> Self {
        if self.default_width.is_nan() || self.default_width < 0.0 {
            log::warn!(
                "Ungültige Standard-Breite {}, verwende 0.0",
                self.default_width
            );
            self.default_width = 0.0;
        }
        self.default_normal = self.default_normal.try_normalize().unwrap_or(DEFAULT_NORMAL);
        if !is_valid_sample_step(self.sample_step) {
            log::warn!(
                "Ungültige Abtast-Schrittweite {}, verwende {}",
                self.sample_step,
                SAMPLE_STEP
            );
            self.sample_step = SAMPLE_STEP;
        }
        self.road_width_slider = clamp_slider(self.road_width_slider);
        self.road_detail_slider = clamp_slider(self.road_detail_slider);
        self
    }
}

/// Schrittweite in (0, 1] mit höchstens `MAX_SAMPLE_SEGMENTS` Segmenten.
pub fn is_valid_sample_step(step: f32) -> bool {
    if step.is_nan() || step <= 0.0 || step > 1.0 {
        return false;
    }
    (1.0 / step) <= MAX_SAMPLE_SEGMENTS as f32
}

/// Klemmt eine Slider-Position in `SLIDER_RANGE`.
pub fn clamp_slider(pos: u32) -> u32 {
    pos.clamp(*SLIDER_RANGE.start(), *SLIDER_RANGE.end())
}
