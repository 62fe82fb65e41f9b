//! Render settings persisted in `localStorage`.

use serde::{Deserialize, Serialize};

use crate::util::clog;

const STORAGE_KEY: &str = "iso_render_settings";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Draw the "column.row" label on every tile.
    pub show_coordinates: bool,
    /// Stroke the four diamond edges of every tile.
    pub show_outline: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            show_coordinates: true,
            show_outline: true,
        }
    }
}

impl RenderSettings {
    /// Malformed input falls back to the defaults.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(s) => s,
            Err(e) => {
                clog(&format!("bad render settings, using defaults: {}", e));
                Self::default()
            }
        }
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(STORAGE_KEY) {
                    return Self::from_json(&raw);
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(s) = serde_json::to_string(self) {
                    let _ = store.set_item(STORAGE_KEY, &s);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let s = RenderSettings::from_json(r#"{"show_outline":false}"#);
        assert!(s.show_coordinates);
        assert!(!s.show_outline);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        assert_eq!(RenderSettings::from_json("not json"), RenderSettings::default());
    }
}
