use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

use crate::geometry::RadiusProfile;

/// Radius profile selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RadiusKind {
    #[value(name = "ripple")]
    Ripple,
    #[value(name = "constant")]
    Constant,
}

impl std::fmt::Display for RadiusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RadiusKind::Ripple => write!(f, "ripple"),
            RadiusKind::Constant => write!(f, "constant"),
        }
    }
}

/// Texture-coordinate tiling: `uv = offset + scale · fraction`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct UvTiling {
    pub offset: f64,
    pub scale: f64,
}

impl Default for UvTiling {
    fn default() -> Self {
        Self {
            offset: 5.0,
            scale: 10.0,
        }
    }
}

/// Lathe sweep parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LatheConfig {
    /// Vertices per ring (M). Must be at least 3.
    pub ring_resolution: usize,
    pub radius: RadiusProfile,
    pub uv: UvTiling,
}

impl Default for LatheConfig {
    fn default() -> Self {
        Self {
            ring_resolution: 256,
            radius: RadiusProfile::default(),
            uv: UvTiling::default(),
        }
    }
}

impl LatheConfig {
    /// Defaults with a specific ring resolution.
    pub fn with_ring_resolution(ring_resolution: usize) -> Self {
        Self {
            ring_resolution,
            ..Default::default()
        }
    }
}

/// Fully resolved session configuration (constructed from CLI args).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub script: PathBuf,
    pub output: Option<PathBuf>,
    pub lathe: LatheConfig,
    pub dry_run: bool,
    pub verbose: bool,
    pub threads: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            script: PathBuf::new(),
            output: None,
            lathe: LatheConfig::default(),
            dry_run: false,
            verbose: false,
            threads: None,
        }
    }
}

/// CLI argument definition (clap derive).
#[derive(Parser, Debug)]
#[command(
    name = "lathe-sketch",
    about = "Replay a sketched profile/axis session and sweep it into a lathe mesh",
    version
)]
pub struct CliArgs {
    /// Event script (JSON) recorded from a sketch session
    #[arg(short = 's', long)]
    pub script: PathBuf,

    /// Output GLB file
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Vertices per sweep ring
    #[arg(short = 'r', long, default_value_t = 256)]
    pub ring_resolution: usize,

    /// Cross-section radius function
    #[arg(long, value_enum, default_value = "ripple")]
    pub radius: RadiusKind,

    /// Radius used with `--radius constant`
    #[arg(long, default_value_t = 3.0)]
    pub constant_radius: f64,

    /// Texture coordinate offset
    #[arg(long, default_value_t = 5.0)]
    pub uv_offset: f64,

    /// Texture coordinate scale
    #[arg(long, default_value_t = 10.0)]
    pub uv_scale: f64,

    /// Replay events and report stats without writing output
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Worker thread count (default: all cores)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
}

impl From<CliArgs> for SessionConfig {
    fn from(args: CliArgs) -> Self {
        let radius = match args.radius {
            RadiusKind::Ripple => RadiusProfile::default(),
            RadiusKind::Constant => RadiusProfile::Constant {
                radius: args.constant_radius,
            },
        };

        SessionConfig {
            script: args.script,
            output: args.output,
            lathe: LatheConfig {
                ring_resolution: args.ring_resolution,
                radius,
                uv: UvTiling {
                    offset: args.uv_offset,
                    scale: args.uv_scale,
                },
            },
            dry_run: args.dry_run,
            verbose: args.verbose,
            threads: args.threads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lathe_config() {
        let lc = LatheConfig::default();
        assert_eq!(lc.ring_resolution, 256);
        assert_eq!(lc.radius, RadiusProfile::default());
        assert_eq!(lc.uv.offset, 5.0);
        assert_eq!(lc.uv.scale, 10.0);
    }

    #[test]
    fn with_ring_resolution_keeps_other_defaults() {
        let lc = LatheConfig::with_ring_resolution(8);
        assert_eq!(lc.ring_resolution, 8);
        assert_eq!(lc.uv, UvTiling::default());
    }

    #[test]
    fn lathe_config_partial_json() {
        let lc: LatheConfig = serde_json::from_str(r#"{"ring_resolution": 12}"#).unwrap();
        assert_eq!(lc.ring_resolution, 12);
        assert_eq!(lc.radius, RadiusProfile::default());
    }

    #[test]
    fn radius_kind_display() {
        assert_eq!(RadiusKind::Ripple.to_string(), "ripple");
        assert_eq!(RadiusKind::Constant.to_string(), "constant");
    }

    #[test]
    fn cli_args_to_session_config() {
        let args = CliArgs::parse_from([
            "lathe-sketch",
            "-s",
            "session.json",
            "-o",
            "vase.glb",
            "-r",
            "64",
            "--radius",
            "constant",
            "--constant-radius",
            "1.5",
            "--uv-offset",
            "0",
            "--uv-scale",
            "1",
            "--dry-run",
            "-v",
            "-j",
            "4",
        ]);

        let config: SessionConfig = args.into();

        assert_eq!(config.script, PathBuf::from("session.json"));
        assert_eq!(config.output, Some(PathBuf::from("vase.glb")));
        assert_eq!(config.lathe.ring_resolution, 64);
        assert_eq!(config.lathe.radius, RadiusProfile::Constant { radius: 1.5 });
        assert_eq!(config.lathe.uv.offset, 0.0);
        assert_eq!(config.lathe.uv.scale, 1.0);
        assert!(config.dry_run);
        assert!(config.verbose);
        assert_eq!(config.threads, Some(4));
    }

    #[test]
    fn cli_args_minimal() {
        let args = CliArgs::parse_from(["lathe-sketch", "-s", "session.json"]);
        let config: SessionConfig = args.into();

        assert_eq!(config.script, PathBuf::from("session.json"));
        assert_eq!(config.output, None);
        assert_eq!(config.lathe, LatheConfig::default());
        assert!(!config.dry_run);
        assert!(!config.verbose);
        assert_eq!(config.threads, None);
    }
}
