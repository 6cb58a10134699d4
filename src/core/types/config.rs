use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            level: Some(self.level().to_string()),
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub addr: Option<String>,
    pub port: Option<u16>,
}

impl ServerConfig {
    pub fn addr(&self) -> &str {
        self.addr.as_deref().unwrap_or("127.0.0.1")
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(8050)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.addr(), self.port())
    }

    pub fn to_effective(&self) -> Self {
        Self {
            addr: Some(self.addr().to_string()),
            port: Some(self.port()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DashboardConfig {
    pub title: Option<String>,
}

impl DashboardConfig {
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or("SpaceX Launch Records Dashboard")
    }

    pub fn to_effective(&self) -> Self {
        Self {
            title: Some(self.title().to_string()),
        }
    }
}

/// Bounds of the payload range control. Independent of the data span.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SliderConfig {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub mark_every: Option<f64>,
}

impl SliderConfig {
    pub fn min(&self) -> f64 {
        self.min.unwrap_or(0.0)
    }

    pub fn max(&self) -> f64 {
        self.max.unwrap_or(10_000.0)
    }

    pub fn step(&self) -> f64 {
        self.step.unwrap_or(1_000.0)
    }

    pub fn mark_every(&self) -> f64 {
        self.mark_every.unwrap_or(2_500.0)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            min: Some(self.min()),
            max: Some(self.max()),
            step: Some(self.step()),
            mark_every: Some(self.mark_every()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    // Top-level fields
    pub data: Option<String>,

    // Nested sections
    pub server: Option<ServerConfig>,
    pub dashboard: Option<DashboardConfig>,
    pub slider: Option<SliderConfig>,
    pub log: Option<LogConfig>,
}

impl Config {
    pub fn data(&self) -> &str {
        self.data.as_deref().unwrap_or("spacex_launch_dash.csv")
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    pub fn dashboard(&self) -> DashboardConfig {
        self.dashboard.clone().unwrap_or_default()
    }

    pub fn slider(&self) -> SliderConfig {
        self.slider.clone().unwrap_or_default()
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn to_effective(&self) -> Self {
        Self {
            data: Some(self.data().to_string()),
            server: Some(self.server().to_effective()),
            dashboard: Some(self.dashboard().to_effective()),
            slider: Some(self.slider().to_effective()),
            log: Some(self.log().to_effective()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data: Option<String>,
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
    pub addr: Option<String>,
    pub port: Option<u16>,
}

pub const CONFIG_FILENAME: &str = "launchdash.toml";

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut cfg = Config::default();
        // Apply nearest config file found by walking up from cwd
        if let Some(path) = find_nearest_config_file()
            && let Some(file_cfg) = read_config_file(&path)
        {
            apply_file_config(&mut cfg, &file_cfg);
        }
        cfg
    })
}

pub fn init_with_overrides(overrides: &CliOverrides) {
    let _ = CONFIG.set(resolve_config(find_nearest_config_file().as_deref(), overrides));
}

/// Build a config from defaults, an optional file, then CLI overrides.
pub fn resolve_config(file: Option<&Path>, overrides: &CliOverrides) -> Config {
    let mut cfg = Config::default();

    // 1) Config file
    if let Some(path) = file
        && let Some(file_cfg) = read_config_file(path)
    {
        apply_file_config(&mut cfg, &file_cfg);
    }

    // 2) CLI arguments (highest priority). Only override if user specified.
    apply_cli_overrides(&mut cfg, overrides);
    cfg
}

fn read_config_file(path: &Path) -> Option<Config> {
    match fs::read_to_string(path) {
        Ok(contents) => toml::from_str::<Config>(&contents).ok(),
        Err(_) => None,
    }
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    if file.data.is_some() {
        cfg.data = file.data.clone();
    }

    if let Some(file_server) = &file.server {
        let mut server = cfg.server();
        if file_server.addr.is_some() {
            server.addr = file_server.addr.clone();
        }
        if file_server.port.is_some() {
            server.port = file_server.port;
        }
        cfg.server = Some(server);
    }

    if let Some(file_dashboard) = &file.dashboard
        && file_dashboard.title.is_some()
    {
        cfg.dashboard = Some(file_dashboard.clone());
    }

    if let Some(file_slider) = &file.slider {
        let mut slider = cfg.slider();
        slider.min = file_slider.min.or(slider.min);
        slider.max = file_slider.max.or(slider.max);
        slider.step = file_slider.step.or(slider.step);
        slider.mark_every = file_slider.mark_every.or(slider.mark_every);
        cfg.slider = Some(slider);
    }

    if let Some(file_log) = &file.log {
        let mut log = cfg.log();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    if let Some(data) = &overrides.data
        && !data.trim().is_empty()
    {
        cfg.data = Some(data.trim().to_string());
    }

    // Server overrides
    if overrides.addr.is_some() || overrides.port.is_some() {
        let mut server = cfg.server();
        if let Some(addr) = &overrides.addr {
            server.addr = Some(addr.clone());
        }
        if overrides.port.is_some() {
            server.port = overrides.port;
        }
        cfg.server = Some(server);
    }

    // Log overrides
    let mut log = cfg.log();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled(),
    }
}
