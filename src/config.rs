use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "hugopost.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Paths {
    /// Where the exported drafts live
    pub source_dir: PathBuf,
    /// Where converted posts are written
    pub dest_dir: PathBuf,
    /// Hugo content directory, validated and listed
    pub content_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            source_dir: PathBuf::from("drafts"),
            dest_dir: PathBuf::from("content/post"),
            content_dir: PathBuf::from("content/post"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Convert {
    pub prefix: String,
    pub tags: Vec<String>,
    pub draft: bool,
    pub start_offset: u32,
}

impl Default for Convert {
    fn default() -> Self {
        Convert {
            prefix: "devto-".to_string(),
            tags: vec!["agents".to_string(), "ai".to_string(), "mcp".to_string()],
            draft: false,
            start_offset: 1,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Log {
    pub level: LogLevel,
    #[serde(default = "default_log_to_console")]
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

fn default_log_to_console() -> bool {
    true
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    pub convert: Convert,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf) -> PathBuf {
    if !path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match (exe_dir, path.strip_prefix("${exe_dir}")) {
        (Some(exe_dir), Ok(rest)) => exe_dir.join(rest),
        _ => path,
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        source_dir: parse_path(cfg.paths.source_dir),
        dest_dir: parse_path(cfg.paths.dest_dir),
        content_dir: parse_path(cfg.paths.content_dir),
    };
    if let Some(ref mut log) = cfg.log {
        log.location = log.location.take().map(parse_path);
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

/// Places searched when no configuration is given explicitly, in order
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("hugopost").join(CONFIG_FILE_NAME));
    }
    paths
}

/// Reads the explicit configuration, or the first one found in the default places.
/// Without any configuration file the built-in defaults are used.
pub fn load_config(explicit: Option<&Path>) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(cfg_path) = explicit {
        return Ok((read_config(cfg_path)?, Some(cfg_path.to_path_buf())));
    }

    for cfg_path in default_config_paths() {
        if cfg_path.is_file() {
            let cfg = read_config(&cfg_path)?;
            return Ok((cfg, Some(cfg_path)));
        }
    }

    Ok((Config::default(), None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.convert.prefix, "devto-");
        assert_eq!(cfg.convert.tags, ["agents", "ai", "mcp"]);
        assert_eq!(cfg.convert.start_offset, 1);
        assert!(!cfg.convert.draft);
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_full_config() {
        let toml_str = r##"
[paths]
source_dir = "export"
dest_dir = "site/content/post"
content_dir = "site/content"

[convert]
prefix = "medium-"
tags = ["rust"]
draft = true
start_offset = 0

[log]
level = "Debug"
log_to_console = false
location = "/var/log/hugopost.log"
"##;
        let cfg = parse_config(toml_str).unwrap();
        assert_eq!(cfg.paths.source_dir, PathBuf::from("export"));
        assert_eq!(cfg.paths.dest_dir, PathBuf::from("site/content/post"));
        assert_eq!(cfg.paths.content_dir, PathBuf::from("site/content"));
        assert_eq!(cfg.convert.prefix, "medium-");
        assert_eq!(cfg.convert.tags, ["rust"]);
        assert!(cfg.convert.draft);
        assert_eq!(cfg.convert.start_offset, 0);
        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Debug);
        assert!(!log.log_to_console);
        assert_eq!(log.location, Some(PathBuf::from("/var/log/hugopost.log")));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let cfg = parse_config("[convert]\ntags = []\n").unwrap();
        assert_eq!(cfg.convert.prefix, "devto-");
        assert!(cfg.convert.tags.is_empty());
        assert_eq!(cfg.paths, Paths::default());
    }

    #[test]
    fn test_exe_dir_expansion() {
        let cfg = parse_config("[paths]\nsource_dir = \"${exe_dir}/drafts\"\n").unwrap();
        let exe_dir = env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(cfg.paths.source_dir, exe_dir.join("drafts"));
    }

    #[test]
    fn test_bad_config() {
        let err = parse_config("[log]\nlevel = \"Loud\"\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("Error parsing configuration file"));
    }

    #[test]
    fn test_read_missing_config() {
        let err = read_config(Path::new("/does/not/exist/hugopost.toml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("/does/not/exist/hugopost.toml"));
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&cfg_path, "[convert]\nprefix = \"hashnode-\"\n").unwrap();

        let (cfg, found) = load_config(Some(&cfg_path)).unwrap();
        assert_eq!(cfg.convert.prefix, "hashnode-");
        assert_eq!(found, Some(cfg_path));
    }
}
