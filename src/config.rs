//! Startup configuration.
//!
//! Values are layered once at startup: built-in defaults, then an optional
//! TOML file, then command line overrides. The resulting [`Config`] is never
//! mutated afterwards and is handed out by reference.

use std::path::{Path, PathBuf};

use glam::DVec2;
use serde::Deserialize;
use sfml::graphics::Color;
use tracing::level_filters::LevelFilter;

use crate::error::{Error, Result};

pub const LICENSE: &str = "MIT License Copyright (c) 2023 Jacob Alexander Thompson";

const DEFAULT_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/font.ttf");
const DEFAULT_ICON: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/logo.png");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Show the egui inspector window on top of the scene
    pub overlay: bool,
    pub window: WindowConfig,
    pub pendulum: PendulumConfig,
    pub colors: Colors,
    pub text: TextConfig,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Pendulum Simulator".to_string(),
            fps: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PendulumConfig {
    pub pivot_radius: u32,
    pub bob_radius: u32,
    /// Drawn stroke width of the rod. Hit-testing uses twice this.
    pub rod_width: u32,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            pivot_radius: 12,
            bob_radius: 27,
            rod_width: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::rgb(r, g, b)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Colors {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            background: Rgb(255, 255, 255),
            foreground: Rgb(0, 0, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    pub small_size: u32,
    pub large_size: u32,
    /// Distance in pixels between text and the window edge
    pub inset: u32,
    pub license: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            small_size: 12,
            large_size: 20,
            inset: 3,
            license: LICENSE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    pub font: PathBuf,
    pub icon: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            font: PathBuf::from(DEFAULT_FONT),
            icon: PathBuf::from(DEFAULT_ICON),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            overlay: false,
            window: WindowConfig::default(),
            pendulum: PendulumConfig::default(),
            colors: Colors::default(),
            text: TextConfig::default(),
            assets: AssetsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Reads `path` if given, otherwise starts from the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents, path)
    }

    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        let WindowConfig {
            width, height, fps, ..
        } = self.window;

        if width == 0 || height == 0 {
            return Err(Error::InvalidConfig(format!(
                "window size must be non-zero, got {width}x{height}"
            )));
        }

        if fps == 0 {
            return Err(Error::InvalidConfig("fps must be at least 1".into()));
        }

        let PendulumConfig {
            pivot_radius,
            bob_radius,
            rod_width,
        } = self.pendulum;

        if pivot_radius == 0 || bob_radius == 0 || rod_width == 0 {
            return Err(Error::InvalidConfig(
                "pivot radius, bob radius and rod width must be non-zero".into(),
            ));
        }

        for (name, centre, radius) in [
            ("pivot", self.pivot_position(), pivot_radius),
            ("bob", self.bob_position(), bob_radius),
        ] {
            let r = radius as f64;
            let fits = centre.x - r >= 0.0
                && centre.y - r >= 0.0
                && centre.x + r <= width as f64
                && centre.y + r <= height as f64;

            if !fits {
                return Err(Error::InvalidConfig(format!(
                    "{name} of radius {radius} at ({}, {}) does not fit a {width}x{height} window",
                    centre.x, centre.y
                )));
            }
        }

        if self.logging.level.parse::<LevelFilter>().is_err() {
            return Err(Error::InvalidConfig(format!(
                "unknown log level {:?}, expected off, error, warn, info, debug or trace",
                self.logging.level
            )));
        }

        Ok(())
    }

    pub fn pivot_position(&self) -> DVec2 {
        let WindowConfig { width, height, .. } = self.window;
        DVec2::new((width >> 1) as f64, (height >> 2) as f64)
    }

    pub fn bob_position(&self) -> DVec2 {
        let WindowConfig { width, height, .. } = self.window;
        DVec2::new((width >> 1) as f64, (height - (height >> 2)) as f64)
    }

    /// Seconds allotted to a single frame
    pub fn frame_budget(&self) -> f32 {
        1.0 / self.window.fps as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_place_the_pendulum_on_the_center_line() {
        let config = Config::default();

        assert_eq!(config.pivot_position(), DVec2::new(400.0, 150.0));
        assert_eq!(config.bob_position(), DVec2::new(400.0, 450.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config = Config::parse(
            r#"
            overlay = true

            [window]
            fps = 30

            [colors]
            background = [10, 20, 30]
            "#,
            Path::new("test.toml"),
        )
        .unwrap();

        assert!(config.overlay);
        assert_eq!(config.window.fps, 30);
        assert_eq!(config.window.width, 800);
        assert_eq!(config.colors.background, Rgb(10, 20, 30));
        assert_eq!(config.colors.foreground, Rgb(0, 0, 0));
        assert_eq!(config.pendulum, PendulumConfig::default());
        assert_eq!(config.text.license, LICENSE);
    }

    #[test]
    fn example_file_matches_defaults() {
        let config = Config::parse(
            include_str!("../pendulum.example.toml"),
            Path::new("pendulum.example.toml"),
        )
        .unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::parse("[window]\nfsp = 30\n", Path::new("typo.toml")).unwrap_err();
        assert!(matches!(err, Error::ParseConfig { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Config::load(Some(Path::new("/nonexistent/pendulum.toml"))).unwrap_err();
        assert!(matches!(err, Error::ReadConfig { .. }));
    }

    #[test]
    fn zero_fps_is_invalid() {
        let mut config = Config::default();
        config.window.fps = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn oversized_bob_is_invalid() {
        let mut config = Config::default();
        config.pendulum.bob_radius = 200;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn oversized_pivot_is_invalid() {
        let mut config = Config::default();
        config.pendulum.pivot_radius = 160;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pivot"), "{err}");
    }

    #[test]
    fn unknown_log_level_is_invalid() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        config.logging.level = "debug".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn frame_budget_follows_fps() {
        let mut config = Config::default();
        config.window.fps = 50;
        assert!((config.frame_budget() - 0.02).abs() < 1e-6);
    }
}
