use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::{Jitter, RenderSettings};
use std::path::PathBuf;

use crate::scenes::DemoScene;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "Progressive path tracer for small procedural scenes")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 600)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Number of progressive frames (one sample per pixel each)
    #[arg(short, long, default_value_t = 64)]
    pub frames: u32,

    /// Scene to render
    #[arg(long, value_enum, default_value_t = DemoScene::Cornell)]
    pub scene: DemoScene,

    /// Vertical field of view in degrees (defaults per scene)
    #[arg(long)]
    pub fov: Option<f32>,

    /// Render settings JSON; flags below override its values
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Maximum bounces per camera ray
    #[arg(long)]
    pub max_bounces: Option<u32>,

    /// Seed for the per-row random streams
    #[arg(long)]
    pub seed: Option<u64>,

    /// Jitter camera rays inside a cone of this many degrees instead of the pixel footprint
    #[arg(long)]
    pub cone: Option<f32>,

    /// Render on a single thread
    #[arg(long)]
    pub serial: bool,

    /// Output PNG path
    #[arg(short, long, default_value = "lumen.png")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    /// Settings from the optional JSON file with command line overrides applied.
    pub fn render_settings(&self) -> Result<RenderSettings> {
        let mut settings = match &self.settings {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read settings file {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Invalid settings file {}", path.display()))?
            }
            None => RenderSettings::default(),
        };

        if let Some(max_bounces) = self.max_bounces {
            settings.max_bounces = max_bounces;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if let Some(degrees) = self.cone {
            settings.jitter = Jitter::Cone { degrees };
        }
        if self.serial {
            settings.parallel = false;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["lumen"]).unwrap();
        assert_eq!(args.width, 600);
        assert_eq!(args.frames, 64);
        assert_eq!(args.scene, DemoScene::Cornell);
        assert_eq!(args.render_settings().unwrap(), RenderSettings::default());
    }

    #[test]
    fn test_flag_overrides() {
        let args = Args::try_parse_from([
            "lumen",
            "--scene",
            "two-spheres",
            "--max-bounces",
            "6",
            "--seed",
            "9",
            "--cone",
            "10",
            "--serial",
        ])
        .unwrap();
        let settings = args.render_settings().unwrap();

        assert_eq!(args.scene, DemoScene::TwoSpheres);
        assert_eq!(settings.max_bounces, 6);
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.jitter, Jitter::Cone { degrees: 10.0 });
        assert!(!settings.parallel);
    }

    #[test]
    fn test_settings_file_with_overrides() {
        let path = std::env::temp_dir().join(format!("lumen-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "max_bounces": 4, "seed": 3, "jitter": "none" }"#).unwrap();

        let args = Args::try_parse_from([
            "lumen",
            "--settings",
            path.to_str().unwrap(),
            "--seed",
            "5",
        ])
        .unwrap();
        let settings = args.render_settings().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.max_bounces, 4);
        assert_eq!(settings.seed, 5);
        assert_eq!(settings.jitter, Jitter::None);
    }

    #[test]
    fn test_missing_settings_file_is_an_error() {
        let args =
            Args::try_parse_from(["lumen", "--settings", "/nonexistent/lumen.json"]).unwrap();
        let err = args.render_settings().unwrap_err();
        assert!(err.to_string().contains("Failed to read settings file"));
    }
}
