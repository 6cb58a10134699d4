use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::core::loader::has_launch_header;
use crate::types::AppResult;
use crate::types::config::CONFIG_FILENAME;

const EXAMPLE_CONFIG: &str = include_str!("../../../example.toml");
const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";

pub async fn execute_init() -> AppResult<()> {
    info!("Initializing dashboard config...");

    let cwd = env::current_dir()?;
    match write_config(&cwd)? {
        Some(path) => info!("Created {}", path.display()),
        None => warn!("{} already exists; leaving it unchanged", CONFIG_FILENAME),
    }
    Ok(())
}

/// Write the example config into `dir`, pointing `data` at a launch CSV
/// found there. Returns `None` if a config file already exists.
pub fn write_config(dir: &Path) -> AppResult<Option<PathBuf>> {
    let cfg_path = dir.join(CONFIG_FILENAME);
    if cfg_path.exists() {
        return Ok(None);
    }

    let contents = match find_launch_csv(dir)? {
        Some(data) => {
            info!("Using launch data {}", data);
            render_config(&data)
        }
        None => {
            warn!(
                "No CSV with launch columns found in {}; keeping data = \"{}\"",
                dir.display(),
                DEFAULT_DATA_FILE
            );
            EXAMPLE_CONFIG.to_string()
        }
    };
    fs::write(&cfg_path, contents)?;
    Ok(Some(cfg_path))
}

/// File name of the first CSV in `dir` (by name) carrying the launch columns.
/// The default data file wins when it qualifies.
fn find_launch_csv(dir: &Path) -> AppResult<Option<String>> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();
    let default_name = OsStr::new(DEFAULT_DATA_FILE);
    candidates.sort_by(|a, b| {
        let a_other = a.file_name() != Some(default_name);
        let b_other = b.file_name() != Some(default_name);
        a_other.cmp(&b_other).then_with(|| a.cmp(b))
    });

    for path in candidates {
        if has_launch_header(&path) {
            return Ok(path.file_name().map(|n| n.to_string_lossy().into_owned()));
        }
        debug!("Skipping {}: missing launch columns", path.display());
    }
    Ok(None)
}

fn render_config(data: &str) -> String {
    let value = toml::Value::String(data.to_string());
    EXAMPLE_CONFIG
        .lines()
        .map(|line| {
            if line.starts_with("data = ") {
                format!("data = {value}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}
