use std::{collections::HashMap, fs, time::Duration};

use customization_core::SessionTimings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub reset_tick_ms: u64,
    pub reset_steps: u32,
    pub cart_reset_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reset_tick_ms: 50,
            reset_steps: 20,
            cart_reset_ms: 2000,
        }
    }
}

impl Settings {
    pub fn timings(&self) -> SessionTimings {
        SessionTimings {
            reset_tick: Duration::from_millis(self.reset_tick_ms),
            reset_steps: self.reset_steps,
            cart_reset_delay: Duration::from_millis(self.cart_reset_ms),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("demo.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("reset_tick_ms").and_then(|v| v.parse().ok()) {
                settings.reset_tick_ms = v;
            }
            if let Some(v) = file_cfg.get("reset_steps").and_then(|v| v.parse().ok()) {
                settings.reset_steps = v;
            }
            if let Some(v) = file_cfg.get("cart_reset_ms").and_then(|v| v.parse().ok()) {
                settings.cart_reset_ms = v;
            }
        }
    }

    if let Ok(v) = std::env::var("DEMO__RESET_TICK_MS") {
        if let Ok(parsed) = v.parse() {
            settings.reset_tick_ms = parsed;
        }
    }
    if let Ok(v) = std::env::var("DEMO__RESET_STEPS") {
        if let Ok(parsed) = v.parse() {
            settings.reset_steps = parsed;
        }
    }
    if let Ok(v) = std::env::var("DEMO__CART_RESET_MS") {
        if let Ok(parsed) = v.parse() {
            settings.cart_reset_ms = parsed;
        }
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_legacy_timings() {
        let settings = Settings::default();
        let timings = settings.timings();
        assert_eq!(timings.reset_tick, Duration::from_millis(50));
        assert_eq!(timings.reset_steps, 20);
        assert_eq!(timings.cart_reset_delay, Duration::from_millis(2000));
    }
}
