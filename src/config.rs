//! Game configuration.

use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Deserialize;

/// Initial game configuration passed to [`crate::run`].
///
/// The grid, the cell size and the speed of the game are fixed, this only configures the window around it.
///
/// There's three ways to initialize the config:
///
/// # Example
///
/// ```rust
/// # use pixel_snake::Config;
/// Config {
///   title: "My Snake".to_owned(),
///   ..Default::default()
/// };
/// ```
///
/// # Example
///
/// ```rust
/// # use pixel_snake::Config;
/// Config::default().with_title("My Snake");
/// ```
///
/// # Example
///
/// ```rust
/// # use pixel_snake::Config;
/// let config = Config::from_toml_str(r#"title = "My Snake""#).unwrap();
/// assert_eq!(config.title, "My Snake");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Name in the title bar.
    ///
    /// The score is appended to it while playing.
    ///
    /// Defaults to `"Snake"`.
    pub title: String,
    /// Factor applied to the buffer size for the requested window size.
    ///
    /// Defaults to `1.0`.
    pub scaling: f32,
    /// Whether to synchronize presenting frames with the display.
    ///
    /// Defaults to `true`.
    pub vsync: bool,
    /// Seed for placing the food, random every run when `None`.
    ///
    /// Defaults to `None`.
    pub seed: Option<u64>,
    /// Color of the viewport as `0xAARRGGBB`.
    ///
    /// The viewport is the area outside of the buffer when inside a bigger window.
    ///
    /// Defaults to `0xFF000000` (black).
    pub viewport_color: u32,
}

impl Config {
    /// Set the name in the title bar.
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();

        self
    }

    /// Set the factor applied to the buffer size for the requested window size.
    #[inline]
    #[must_use]
    pub fn with_scaling(mut self, scaling: f32) -> Self {
        self.scaling = scaling;

        self
    }

    /// Set whether presenting frames waits for the display.
    #[inline]
    #[must_use]
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;

        self
    }

    /// Set the seed used for placing food, making runs reproducible.
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);

        self
    }

    /// Set the color of the viewport.
    ///
    /// The viewport is the area outside of the buffer when inside a bigger window.
    #[inline]
    #[must_use]
    pub fn with_viewport_color(mut self, viewport_color: u32) -> Self {
        self.viewport_color = viewport_color;

        self
    }

    /// Parse a configuration from TOML, missing fields get their default value.
    ///
    /// # Errors
    ///
    /// - When the TOML is invalid or contains unknown fields.
    /// - When the scaling is not a positive number.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)
            .into_diagnostic()
            .wrap_err("Error parsing configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Read a TOML configuration file.
    ///
    /// # Errors
    ///
    /// - When the file can't be read.
    /// - See [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        log::debug!("Loading configuration from '{}'", path.display());

        let source = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Error reading configuration file '{}'", path.display()))?;

        Self::from_toml_str(&source)
    }

    /// Check the values that can't be expressed by the types.
    fn validate(&self) -> Result<()> {
        if !(self.scaling.is_finite() && self.scaling > 0.0) {
            miette::bail!(
                "Invalid scaling '{}' in configuration, must be bigger than zero",
                self.scaling
            );
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Snake".to_owned(),
            scaling: 1.0,
            vsync: true,
            seed: None,
            viewport_color: 0xFF00_0000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn toml_fields() {
        let config = Config::from_toml_str(
            r#"
            title = "Test"
            scaling = 2.0
            vsync = false
            seed = 42
            viewport_color = 0xFF112233
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            Config::default()
                .with_title("Test")
                .with_scaling(2.0)
                .with_vsync(false)
                .with_seed(42)
                .with_viewport_color(0xFF11_2233)
        );
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(Config::from_toml_str("grid_width = 80").is_err());
    }

    #[test]
    fn invalid_scaling_is_rejected() {
        assert!(Config::from_toml_str("scaling = 0.0").is_err());
        assert!(Config::from_toml_str("scaling = -1.0").is_err());
    }

    #[test]
    fn missing_file() {
        assert!(Config::load("this/file/does/not/exist.toml").is_err());
    }
}
