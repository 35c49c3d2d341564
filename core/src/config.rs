//! Configuration persistence
//!
//! The highlight config lives in a TOML file under the platform config
//! directory, managed through confy. Loading is infallible from the
//! caller's perspective: a missing or unreadable file falls back to
//! defaults so the engine always comes up.
//!
//! Numeric ranges are clamped here, at the persistence boundary; the
//! classifier and renderer never observe out-of-range values.

use std::path::PathBuf;

use thiserror::Error;

use hilite_types::HighlightConfig;

/// Application name used for the config storage location
const APP_NAME: &str = "hilite";

/// Config file name (without extension)
const CONFIG_NAME: &str = "highlights";

/// Host config namespace owned by the highlighter. `ConfigChanged` signals
/// carrying any other namespace are ignored.
pub const CONFIG_GROUP: &str = "highlights";

/// Errors from persisting the highlight config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to persist highlight config: {0}")]
    Store(#[from] confy::ConfyError),
}

/// Persistence and sanitization for [`HighlightConfig`].
pub trait HighlightConfigExt: Sized {
    /// Load the persisted config, falling back to defaults if the file is
    /// missing or unreadable.
    fn load_or_default() -> Self;

    /// Persist the config.
    fn save(&self) -> Result<(), ConfigError>;

    /// Clamp numeric fields into their valid ranges: stroke width 1-5,
    /// alphas at least 1.
    fn sanitized(self) -> Self;
}

impl HighlightConfigExt for HighlightConfig {
    fn load_or_default() -> Self {
        match confy::load::<HighlightConfig>(APP_NAME, Some(CONFIG_NAME)) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load highlight config, using defaults");
                HighlightConfig::default()
            }
        }
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, Some(CONFIG_NAME), self)?;
        Ok(())
    }

    fn sanitized(mut self) -> Self {
        let style = &mut self.render_style;
        style.outline_stroke_width = style.outline_stroke_width.clamp(1, 5);
        for group in &mut self.groups {
            group.fill_alpha = group.fill_alpha.max(1);
            group.color[3] = group.color[3].max(1);
        }
        self
    }
}

/// Location of the backing config file, for diagnostics.
pub fn config_path() -> Option<PathBuf> {
    confy::get_configuration_file_path(APP_NAME, Some(CONFIG_NAME)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_clamps_stroke_width() {
        let mut config = HighlightConfig::default();
        config.render_style.outline_stroke_width = 0;
        assert_eq!(config.sanitized().render_style.outline_stroke_width, 1);

        let mut config = HighlightConfig::default();
        config.render_style.outline_stroke_width = 9;
        assert_eq!(config.sanitized().render_style.outline_stroke_width, 5);
    }

    #[test]
    fn test_sanitize_keeps_valid_values() {
        let config = HighlightConfig::default().sanitized();
        assert_eq!(config, HighlightConfig::default());
    }

    #[test]
    fn test_sanitize_raises_zero_alphas() {
        let mut config = HighlightConfig::default();
        config.groups[0].fill_alpha = 0;
        config.groups[0].color[3] = 0;

        let config = config.sanitized();
        assert_eq!(config.groups[0].fill_alpha, 1);
        assert_eq!(config.groups[0].color[3], 1);
    }
}
