use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::JobsiftConfig;

/// Load configuration from .jobsift.toml if it exists
/// Pure function to read and parse config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<JobsiftConfig, String> {
    let mut config = toml::from_str::<JobsiftConfig>(contents)
        .map_err(|e| format!("Failed to parse .jobsift.toml: {}", e))?;

    // A broken taxonomy silently misclassifies everything; fall back to the
    // built-in tables rather than run with it.
    if let Some(ref mut taxonomy) = config.taxonomy {
        if let Err(e) = taxonomy.validate() {
            eprintln!("Warning: Invalid taxonomy: {}. Using defaults.", e);
            config.taxonomy = None;
        } else {
            taxonomy.normalize();
        }
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<JobsiftConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub(crate) fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

pub fn load_config() -> JobsiftConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    // Get current directory or return default
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return JobsiftConfig::default();
        }
    };

    // Search for config file in directory hierarchy
    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(".jobsift.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            JobsiftConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert!(config.taxonomy.is_none());
        assert_eq!(config.top_skills, super::super::default_top_skills());
    }

    #[test]
    fn taxonomy_override_is_normalized() {
        let config = parse_and_validate_config(
            r#"
            [[taxonomy.skills]]
            label = "Rust"
            triggers = ["Rust", "Tokio", "actix"]
            "#,
        )
        .unwrap();
        let taxonomy = config.taxonomy.unwrap();
        assert_eq!(taxonomy.skills.len(), 1);
        assert_eq!(taxonomy.skills[0].triggers, vec!["rust", "tokio", "actix"]);
        // Untouched sections fall back to the built-in tables.
        assert_eq!(taxonomy.experience.len(), 4);
    }

    #[test]
    fn invalid_taxonomy_falls_back_to_defaults() {
        let config = parse_and_validate_config(
            r#"
            [[taxonomy.skills]]
            label = "Rust"
            triggers = []
            "#,
        )
        .unwrap();
        assert!(config.taxonomy.is_none());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_and_validate_config("not [valid toml").is_err());
    }

    #[test]
    fn directory_ancestors_respects_depth_limit() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d/e"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d/e"),
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
            ]
        );
    }
}
