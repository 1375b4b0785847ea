//! Project configuration management for `twbuild.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── tailwind   # [tailwind]
//! │   └── components # [[components]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # ProjectConfig (this file)
//! ```
//!
//! The project root is the directory holding the config file. Without a
//! config file the current directory is the root and every default applies.

pub mod section;
pub mod types;
mod util;

use util::find_config_file_from;

pub use section::{ComponentConfig, TailwindSection};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::Cli,
    debug, log,
    tailwind::{Commands, Contributor, ProjectPaths, TailwindSettings},
    utils::path::{normalize_path, resolve_against},
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "twbuild.toml";

/// Presence forces unminified output.
pub const DEBUG_OVERRIDE_ENV: &str = "TAILWINDCSS_DEBUG";

/// Fallback directory containing the executable.
pub const INSTALL_DIR_ENV: &str = "TAILWINDCSS_INSTALL_DIR";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing twbuild.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Tailwind settings
    #[serde(default)]
    pub tailwind: TailwindSection,

    /// Registered sub-components
    #[serde(default)]
    pub components: Vec<ComponentConfig>,
}

impl ProjectConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. Falls back to defaults
    /// rooted at cwd when the default config is absent; an explicitly named
    /// config must exist.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let (mut config, root) = match Self::locate(&cli.config, &cwd)? {
            Some(path) => {
                let path = normalize_path(&path);
                let mut config = Self::from_path(&path)?;
                let root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config.config_path = Some(path);
                (config, root)
            }
            None => {
                debug!("config"; "`{}` not found, using defaults", cli.config.display());
                (Self::default(), cwd)
            }
        };

        config.apply_env(|name| {
            std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
        });
        config.finalize(&root);
        Ok(config)
    }

    /// Find `name` from `cwd` upward. Only the default name may be missing.
    fn locate(name: &Path, cwd: &Path) -> Result<Option<PathBuf>> {
        match find_config_file_from(cwd, name) {
            Some(path) => Ok(Some(path)),
            None if name == Path::new(DEFAULT_CONFIG) => Ok(None),
            None => bail!("Config file `{}` not found", name.display()),
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Capture environment overrides.
    ///
    /// Read once here so the rest of the program sees plain values.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        self.tailwind.debug_override = var(DEBUG_OVERRIDE_ENV);
        self.tailwind.install_dir = var(INSTALL_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
    }

    /// Finalize configuration after loading: absolute root and paths.
    fn finalize(&mut self, root: &Path) {
        let root = normalize_path(root);

        if let Some(exe_path) = self.tailwind.exe_path.take() {
            self.tailwind.exe_path = Some(resolve_against(&exe_path, &root));
        }
        if let Some(install_dir) = self.tailwind.install_dir.take() {
            self.tailwind.install_dir = Some(resolve_against(&install_dir, &root));
        }
        for component in &mut self.components {
            component.root = resolve_against(&component.root, &root);
        }

        self.set_root(&root);
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Conventional stylesheet/output locations for this project.
    pub fn paths(&self) -> ProjectPaths<'_> {
        ProjectPaths::new(&self.root)
    }

    /// Registered components as contributors, in declaration order.
    pub fn contributors(&self) -> Vec<Contributor> {
        self.components
            .iter()
            .map(ComponentConfig::to_contributor)
            .collect()
    }

    /// Settings for the command builder.
    pub fn settings(&self) -> TailwindSettings {
        TailwindSettings {
            executable: self.tailwind.executable.clone(),
            exe_path: self.tailwind.exe_dir().map(Path::to_path_buf),
            css_compressor: self.tailwind.css_compressor,
            debug_override: self.tailwind.debug_override.clone(),
            engines: self.tailwind.engines.clone(),
        }
    }

    /// Command builder backed by the configured components.
    pub fn commands(&self) -> Commands {
        Commands::new(&self.root, self.settings(), self.contributors())
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Hints and warnings are printed; errors are returned all at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.collect_diagnostics(&mut diag);

        diag.print_hints_and_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every section check.
    pub fn collect_diagnostics(&self, diag: &mut ConfigDiagnostics) {
        ComponentConfig::validate_all(&self.components, diag);
        self.tailwind.validate(&self.paths(), &self.components, diag);
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ProjectConfig {
    let (parsed, ignored) = ProjectConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_invalid_toml() {
        let result = ProjectConfig::parse_with_ignored("[tailwind\nexecutable = \"x\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_locate_default_missing_falls_back() {
        let temp = TempDir::new().unwrap();
        let found = ProjectConfig::locate(Path::new(DEFAULT_CONFIG), temp.path()).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_locate_explicit_missing_errors() {
        let temp = TempDir::new().unwrap();
        let err = ProjectConfig::locate(Path::new("custom.toml"), temp.path()).unwrap_err();
        assert!(err.to_string().contains("custom.toml"));

        fs::write(temp.path().join("custom.toml"), "").unwrap();
        let found = ProjectConfig::locate(Path::new("custom.toml"), temp.path()).unwrap();
        assert_eq!(found, Some(temp.path().join("custom.toml")));
    }

    #[test]
    fn test_default_config() {
        let config = ProjectConfig::default();
        assert!(config.config_path.is_none());
        assert_eq!(config.get_root(), Path::new(""));
        assert_eq!(config.tailwind.executable, "tailwindcss");
        assert!(config.components.is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[tailwind]\nminify = true\n[unknown_section]\nfield = \"value\"";
        let (_, ignored) = ProjectConfig::parse_with_ignored(content).unwrap();

        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
        assert!(ignored.iter().any(|f| f.contains("minify")));
    }

    #[test]
    fn test_apply_env() {
        let mut config = ProjectConfig::default();
        config.apply_env(|name| match name {
            DEBUG_OVERRIDE_ENV => Some(String::new()),
            INSTALL_DIR_ENV => Some("/opt/tailwind".into()),
            _ => None,
        });
        assert_eq!(config.tailwind.debug_override.as_deref(), Some(""));
        assert_eq!(
            config.tailwind.install_dir,
            Some(PathBuf::from("/opt/tailwind"))
        );

        config.apply_env(no_env);
        assert!(config.tailwind.debug_override.is_none());
        assert!(config.tailwind.install_dir.is_none());
    }

    #[test]
    fn test_finalize_resolves_paths() {
        let temp = TempDir::new().unwrap();
        let mut config = test_parse_config(
            r#"
[tailwind]
exe_path = "bin"

[[components]]
name = "widgets"
root = "vendor/widgets"
"#,
        );
        config.finalize(temp.path());

        let root = normalize_path(temp.path());
        assert_eq!(config.get_root(), root);
        assert_eq!(config.tailwind.exe_path, Some(root.join("bin")));
        assert_eq!(config.components[0].root, root.join("vendor/widgets"));
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = test_parse_config(
            r#"
[tailwind]
css_compressor = true
engines = ["widgets"]
"#,
        );
        config.apply_env(|name| (name == DEBUG_OVERRIDE_ENV).then(|| "1".to_string()));

        let settings = config.settings();
        assert!(settings.css_compressor);
        assert_eq!(settings.engines, vec!["widgets"]);
        assert_eq!(settings.debug_override.as_deref(), Some("1"));
        assert!(settings.exe_path.is_none());
    }

    #[test]
    fn test_commands_use_components() {
        let temp = TempDir::new().unwrap();
        let mut config = test_parse_config(
            r#"
[tailwind]
exe_path = "bin"
engines = ["widgets"]

[[components]]
name = "widgets"
root = "vendor/widgets"
"#,
        );
        config.finalize(temp.path());

        let css = config
            .get_root()
            .join("vendor/widgets/app/assets/tailwind/widgets/application.css");
        fs::create_dir_all(css.parent().unwrap()).unwrap();
        fs::write(&css, "").unwrap();

        let mut commands = config.commands();
        assert_eq!(commands.contributor_stylesheets(), vec![css.clone()]);

        let entry = commands.entry_path().unwrap();
        let content = fs::read_to_string(&entry).unwrap();
        assert!(content.starts_with(&format!("@import \"{}\";\n\n", css.display())));

        commands.remove_tempfile().unwrap();
        assert!(!entry.exists());
    }

    #[test]
    fn test_validate_missing_stylesheet() {
        let temp = TempDir::new().unwrap();
        let mut config = test_parse_config("[tailwind]\nexe_path = \"bin\"");
        config.finalize(temp.path());

        let mut diag = ConfigDiagnostics::new();
        config.collect_diagnostics(&mut diag);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.message.contains("primary stylesheet"))
        );
        assert!(config.validate().is_err());
    }
}
