use crate::geom::point::Point;
use crate::geom::side::Side;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub job: JobConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            job: JobConfig::default(),
        }
    }
}

impl Config {
    /// Reads a TOML config, falling back to the built-in defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::warn!(
                "Configuration file {:?} not found. Using internal defaults.",
                path
            );
            return Ok(Self::default());
        }
        log::info!("Loading configuration from {:?}", path);
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;
        Self::from_toml_str(&config_str)
    }

    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

/// Physical extent of the routing region and its track pitch.
#[derive(Debug, Deserialize, Clone)]
pub struct GridConfig {
    #[serde(default = "default_lower_left")]
    pub lower_left: Point<f64>,
    #[serde(default = "default_upper_right")]
    pub upper_right: Point<f64>,
    #[serde(default = "default_track_pitch")]
    pub track_pitch: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            lower_left: default_lower_left(),
            upper_right: default_upper_right(),
            track_pitch: default_track_pitch(),
        }
    }
}

/// One routing job, in grid units. `routes` are committed before the
/// terminals are registered.
#[derive(Debug, Deserialize, Clone)]
pub struct JobConfig {
    #[serde(default)]
    pub perimeter_side: Option<Side>,
    #[serde(default = "default_coord_list")]
    pub blockages: Vec<[i32; 3]>,
    #[serde(default = "default_coord_list")]
    pub sources: Vec<[i32; 3]>,
    #[serde(default = "default_coord_list")]
    pub targets: Vec<[i32; 3]>,
    #[serde(default = "default_routes")]
    pub routes: Vec<Vec<[i32; 3]>>,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            perimeter_side: None,
            blockages: default_coord_list(),
            sources: default_coord_list(),
            targets: default_coord_list(),
            routes: default_routes(),
        }
    }
}

fn default_lower_left() -> Point<f64> {
    Point::new(0.0, 0.0)
}

fn default_upper_right() -> Point<f64> {
    Point::new(32.0, 32.0)
}

fn default_track_pitch() -> f64 {
    1.0
}

fn default_coord_list() -> Vec<[i32; 3]> {
    Vec::new()
}

fn default_routes() -> Vec<Vec<[i32; 3]>> {
    Vec::new()
}
