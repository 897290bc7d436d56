//! Story configuration.
//!
//! Tunables live in `assets/story.json`, embedded at compile time. Every field
//! has a default, so a partial file is fine; a malformed file is logged and the
//! defaults are used instead so the page still renders.

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::{debug, warn};

const EMBEDDED_CONFIG: &str = include_str!("../../assets/story.json");

static STORY_CONFIG: Lazy<StoryConfig> = Lazy::new(|| StoryConfig::parse(EMBEDDED_CONFIG));

/// Shared configuration for the page, parsed once on first access.
pub fn story() -> &'static StoryConfig {
    &STORY_CONFIG
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoryConfig {
    /// Prefix for the pre-rendered artifact folders (`p0/` … `p4/`).
    #[serde(default = "default_asset_base")]
    pub asset_base: String,
    /// Folder (under `asset_base`) holding one residual plot per ticker.
    #[serde(default = "default_ticker_dir")]
    pub ticker_dir: String,
    #[serde(default = "default_ticker")]
    pub default_ticker: String,
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
    #[serde(default = "default_export_width")]
    pub export_width: u32,
    #[serde(default = "default_export_height")]
    pub export_height: u32,
    /// Maximum samples retained by the scroll series before it compacts.
    #[serde(default = "default_series_capacity")]
    pub series_capacity: usize,
    /// Upper bound on plotted points per chart render.
    #[serde(default = "default_chart_points")]
    pub chart_points: usize,
    #[serde(default = "default_carousel_interval_ms")]
    pub carousel_interval_ms: u64,
    #[serde(default = "default_formula_interval_ms")]
    pub formula_interval_ms: u64,
}

impl StoryConfig {
    /// Parse a JSON document, falling back to defaults when it is invalid.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<StoryConfig>(raw) {
            Ok(config) => {
                debug!(?config, "Loaded story config");
                config.sanitized()
            }
            Err(err) => {
                warn!("Invalid story config ({err}); using defaults");
                Self::default()
            }
        }
    }

    /// Resolve a path relative to the artifact root, e.g. `p0/cdf.png`.
    pub fn asset(&self, relative: &str) -> String {
        let base = self.asset_base.trim_end_matches('/');
        let relative = relative.trim_start_matches("./").trim_start_matches('/');
        if base.is_empty() {
            relative.to_string()
        } else {
            format!("{base}/{relative}")
        }
    }

    fn sanitized(mut self) -> Self {
        if self.series_capacity < 4 {
            warn!(
                capacity = self.series_capacity,
                "series_capacity too small; using default"
            );
            self.series_capacity = default_series_capacity();
        }
        if self.chart_points < 2 {
            self.chart_points = default_chart_points();
        }
        if self.export_width == 0 || self.export_height == 0 {
            self.export_width = default_export_width();
            self.export_height = default_export_height();
        }
        self
    }
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            asset_base: default_asset_base(),
            ticker_dir: default_ticker_dir(),
            default_ticker: default_ticker(),
            export_file_name: default_export_file_name(),
            export_width: default_export_width(),
            export_height: default_export_height(),
            series_capacity: default_series_capacity(),
            chart_points: default_chart_points(),
            carousel_interval_ms: default_carousel_interval_ms(),
            formula_interval_ms: default_formula_interval_ms(),
        }
    }
}

fn default_asset_base() -> String {
    ".".to_string()
}

fn default_ticker_dir() -> String {
    "p4/plots".to_string()
}

fn default_ticker() -> String {
    "AAPL".to_string()
}

fn default_export_file_name() -> String {
    "my-reading-journey.png".to_string()
}

fn default_export_width() -> u32 {
    800
}

fn default_export_height() -> u32 {
    450
}

fn default_series_capacity() -> usize {
    4096
}

fn default_chart_points() -> usize {
    240
}

fn default_carousel_interval_ms() -> u64 {
    3000
}

fn default_formula_interval_ms() -> u64 {
    2500
}
