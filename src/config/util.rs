//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by walking up parent directories from `start`.
///
/// # Example
/// ```text
/// /home/user/shop/app/assets/   ← start
/// /home/user/shop/twbuild.toml  ← found!
/// ```
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    // An absolute config path is taken as-is
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_start_dir() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("twbuild.toml");
        fs::write(&config, "").unwrap();

        assert_eq!(
            find_config_file_from(temp.path(), Path::new("twbuild.toml")),
            Some(config)
        );
    }

    #[test]
    fn test_find_walks_up() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("twbuild.toml");
        fs::write(&config, "").unwrap();

        let nested = temp.path().join("app/assets/tailwind");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            find_config_file_from(&nested, Path::new("twbuild.toml")),
            Some(config)
        );
    }

    #[test]
    fn test_find_absolute() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("custom.toml");

        assert_eq!(find_config_file_from(Path::new("/"), &config), None);

        fs::write(&config, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &config), Some(config));
    }
}
