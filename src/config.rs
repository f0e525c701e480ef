//! Viewer tuning knobs. Defaults reproduce the shipped hero section; a JSON
//! override may be stored under `localStorage["stellarscope_config"]`.

use log::LevelFilter;
use serde::Deserialize;

pub const STORAGE_KEY: &str = "stellarscope_config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Radians of rotation per pixel of pointer travel.
    pub rotation_speed: f64,
    pub zoom_initial: f64,
    pub zoom_min: f64,
    pub zoom_max: f64,
    /// Camera distance per unit of wheel `deltaY`.
    pub zoom_step: f64,
    pub fov_deg: f64,
    pub model_url: String,
    pub log_level: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 0.0005,
            zoom_initial: 8.0,
            zoom_min: 4.0,
            zoom_max: 15.0,
            zoom_step: 0.001,
            fov_deg: 45.0,
            model_url: "models/earth.json".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Reads the stored override, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(STORAGE_KEY).ok().flatten());
        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|err| {
                log::warn!("ignoring stored config {STORAGE_KEY}: {err}");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let cfg: Self = serde_json::from_str(raw)?;
        Ok(cfg.normalized())
    }

    /// Repairs values that would break the controllers' invariants.
    pub fn normalized(mut self) -> Self {
        let d = Self::default();
        if !self.rotation_speed.is_finite() {
            self.rotation_speed = d.rotation_speed;
        }
        if !self.zoom_step.is_finite() {
            self.zoom_step = d.zoom_step;
        }
        if !(self.zoom_min.is_finite() && self.zoom_max.is_finite()) {
            self.zoom_min = d.zoom_min;
            self.zoom_max = d.zoom_max;
        }
        if self.zoom_min > self.zoom_max {
            std::mem::swap(&mut self.zoom_min, &mut self.zoom_max);
        }
        self.zoom_initial = if self.zoom_initial.is_finite() {
            self.zoom_initial.clamp(self.zoom_min, self.zoom_max)
        } else {
            d.zoom_initial.clamp(self.zoom_min, self.zoom_max)
        };
        if !(self.fov_deg.is_finite() && self.fov_deg > 1.0 && self.fov_deg < 179.0) {
            self.fov_deg = d.fov_deg;
        }
        self
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_hero_constants() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.rotation_speed, 0.0005);
        assert_eq!(cfg.zoom_initial, 8.0);
        assert_eq!((cfg.zoom_min, cfg.zoom_max), (4.0, 15.0));
        assert_eq!(cfg.zoom_step, 0.001);
        assert_eq!(cfg.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = ViewerConfig::from_json(r#"{"rotation_speed":0.001,"log_level":"debug"}"#)
            .unwrap();
        assert_eq!(cfg.rotation_speed, 0.001);
        assert_eq!(cfg.zoom_initial, 8.0);
        assert_eq!(cfg.model_url, "models/earth.json");
        assert_eq!(cfg.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_normalizes_ranges() {
        let cfg = ViewerConfig::from_json(
            r#"{"zoom_min":20,"zoom_max":5,"zoom_initial":100,"fov_deg":0}"#,
        )
        .unwrap();
        assert_eq!((cfg.zoom_min, cfg.zoom_max), (5.0, 20.0));
        assert_eq!(cfg.zoom_initial, 20.0);
        assert_eq!(cfg.fov_deg, 45.0);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(ViewerConfig::from_json("[1,2").is_err());
        let cfg = ViewerConfig {
            log_level: "loud".into(),
            ..ViewerConfig::default()
        };
        assert_eq!(cfg.log_level(), LevelFilter::Info);
    }
}
