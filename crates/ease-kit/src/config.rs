use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extensions::easing::Easing;

/// Named easing curves for a game, loaded from JSON.
///
/// ```json
/// { "default": "cubic_out", "curves": { "menu_open": "back_out" } }
/// ```
///
/// Curve names accept anything [`Easing`]'s `FromStr` does.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EasingPresets {
    /// Curve used when a requested preset is missing.
    #[serde(default)]
    pub default: Easing,
    /// Preset name → curve.
    #[serde(default)]
    pub curves: HashMap<String, Easing>,
}

impl EasingPresets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse presets from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let presets: Self = serde_json::from_str(json)?;
        log::debug!(
            "loaded {} easing presets (default {})",
            presets.curves.len(),
            presets.default
        );
        Ok(presets)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_default(mut self, easing: Easing) -> Self {
        self.default = easing;
        self
    }

    /// Add or replace a preset.
    pub fn insert(&mut self, name: impl Into<String>, easing: Easing) -> Option<Easing> {
        self.curves.insert(name.into(), easing)
    }

    /// Add or replace a preset from a curve name such as `"EaseBackOut"`.
    pub fn insert_named(&mut self, name: impl Into<String>, curve: &str) -> Result<Option<Easing>> {
        let easing: Easing = curve.parse()?;
        Ok(self.insert(name, easing))
    }

    pub fn get(&self, name: &str) -> Option<Easing> {
        self.curves.get(name).copied()
    }

    /// The named preset, or the default curve if there is none.
    pub fn resolve(&self, name: &str) -> Easing {
        match self.get(name) {
            Some(easing) => easing,
            None => {
                log::debug!("no easing preset {name:?}, using {}", self.default);
                self.default
            }
        }
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}
