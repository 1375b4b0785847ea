//! `[tailwind]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [tailwind]
//! executable = "tailwindcss"
//! exe_path = "~/.local/bin"
//! css_compressor = false
//! engines = ["widgets", "admin"]
//! ```

use super::ComponentConfig;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::tailwind::ProjectPaths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tailwind executable and build behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TailwindSection {
    /// Executable name or path (default: `tailwindcss`).
    pub executable: String,
    /// Directory containing the executable, searched before `PATH`.
    pub exe_path: Option<PathBuf>,
    /// The host pipeline compresses CSS itself, so never pass `--minify`.
    pub css_compressor: bool,
    /// Components allowed to contribute stylesheets.
    pub engines: Vec<String>,

    /// Value of `TAILWINDCSS_DEBUG` at load time (internal use only).
    #[serde(skip)]
    pub debug_override: Option<String>,
    /// Value of `TAILWINDCSS_INSTALL_DIR` at load time (internal use only).
    #[serde(skip)]
    pub install_dir: Option<PathBuf>,
}

impl Default for TailwindSection {
    fn default() -> Self {
        Self {
            executable: "tailwindcss".into(),
            exe_path: None,
            css_compressor: false,
            engines: Vec::new(),
            debug_override: None,
            install_dir: None,
        }
    }
}

/// Field paths of [`TailwindSection`].
pub struct TailwindFields {
    pub section: FieldPath,
    pub executable: FieldPath,
    pub exe_path: FieldPath,
    pub engines: FieldPath,
}

impl TailwindSection {
    pub const FIELDS: TailwindFields = TailwindFields {
        section: FieldPath::new("tailwind"),
        executable: FieldPath::new("tailwind.executable"),
        exe_path: FieldPath::new("tailwind.exe_path"),
        engines: FieldPath::new("tailwind.engines"),
    };

    /// Directory to search for the executable: configured `exe_path`, then
    /// `TAILWINDCSS_INSTALL_DIR`.
    pub fn exe_dir(&self) -> Option<&Path> {
        self.exe_path.as_deref().or(self.install_dir.as_deref())
    }

    /// Validate tailwind configuration.
    ///
    /// # Checks
    /// - `executable` must not be empty and must be installed
    /// - the primary stylesheet must exist
    /// - every `engines` entry should name a registered component
    /// - allow-listed components should ship a stylesheet
    pub fn validate(
        &self,
        paths: &ProjectPaths<'_>,
        components: &[ComponentConfig],
        diag: &mut ConfigDiagnostics,
    ) {
        self.validate_executable(diag);

        let primary = paths.primary_stylesheet();
        if !primary.is_file() {
            diag.error_with_hint(
                Self::FIELDS.section,
                format!("primary stylesheet not found: {}", primary.display()),
                "create it with `@import \"tailwindcss\";`",
            );
        }

        for name in &self.engines {
            let Some(component) = components.iter().find(|c| c.name == *name) else {
                diag.warn(
                    Self::FIELDS.engines,
                    format!("`{name}` is not a registered component"),
                );
                continue;
            };

            let candidates = paths.contributor_candidates(&component.to_contributor());
            if !candidates.iter().any(|c| c.exists()) {
                diag.hint(
                    Self::FIELDS.engines,
                    format!(
                        "`{name}` has no stylesheet at {} or {}, it will be skipped",
                        candidates[0].display(),
                        candidates[1].display()
                    ),
                );
            }
        }
    }

    fn validate_executable(&self, diag: &mut ConfigDiagnostics) {
        let exe = &self.executable;
        if exe.is_empty() {
            diag.error(Self::FIELDS.executable, "executable is empty");
            return;
        }

        if let Some(dir) = self.exe_dir() {
            let path = dir.join(exe);
            if !path.is_file() {
                diag.error_with_hint(
                    Self::FIELDS.exe_path,
                    format!("`{}` not found", path.display()),
                    format!("install tailwindcss there or update {}", Self::FIELDS.exe_path),
                );
            }
        } else if which::which(exe).is_err() {
            diag.error_with_hint(
                Self::FIELDS.executable,
                format!("`{exe}` not found"),
                format!("install the command or update {}", Self::FIELDS.executable),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.tailwind.executable, "tailwindcss");
        assert!(config.tailwind.exe_path.is_none());
        assert!(!config.tailwind.css_compressor);
        assert!(config.tailwind.engines.is_empty());
        assert!(config.tailwind.debug_override.is_none());
    }

    #[test]
    fn test_tailwind_section() {
        let config = test_parse_config(
            r#"
[tailwind]
executable = "tailwindcss-linux-x64"
exe_path = "bin"
css_compressor = true
engines = ["widgets", "admin"]
"#,
        );
        assert_eq!(config.tailwind.executable, "tailwindcss-linux-x64");
        assert_eq!(config.tailwind.exe_path, Some(PathBuf::from("bin")));
        assert!(config.tailwind.css_compressor);
        assert_eq!(config.tailwind.engines, vec!["widgets", "admin"]);
    }

    #[test]
    fn test_exe_dir_precedence() {
        let mut section = TailwindSection {
            install_dir: Some(PathBuf::from("/env/bin")),
            ..Default::default()
        };
        assert_eq!(section.exe_dir(), Some(Path::new("/env/bin")));

        section.exe_path = Some(PathBuf::from("/config/bin"));
        assert_eq!(section.exe_dir(), Some(Path::new("/config/bin")));
    }

    #[test]
    fn test_validate_reports_problems() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let paths = ProjectPaths::new(root);

        let section = TailwindSection {
            exe_path: Some(root.join("bin")),
            engines: vec!["widgets".into(), "ghost".into()],
            ..Default::default()
        };
        let components = vec![ComponentConfig {
            name: "widgets".into(),
            root: root.join("vendor/widgets"),
        }];

        let mut diag = ConfigDiagnostics::new();
        section.validate(&paths, &components, &mut diag);

        // missing executable + missing primary stylesheet
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field, TailwindSection::FIELDS.exe_path);
        // `ghost` is not registered
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.warnings()[0].message.contains("ghost"));
        // `widgets` has no stylesheet
        assert_eq!(diag.hints().len(), 1);
        assert!(diag.hints()[0].message.contains("widgets"));
    }

    #[test]
    fn test_validate_clean_project() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let paths = ProjectPaths::new(root);

        touch(&root.join("bin/tailwindcss"));
        touch(&paths.primary_stylesheet());
        touch(&root.join("vendor/widgets/app/assets/tailwind/widgets/application.css"));

        let section = TailwindSection {
            exe_path: Some(root.join("bin")),
            engines: vec!["widgets".into()],
            ..Default::default()
        };
        let components = vec![ComponentConfig {
            name: "widgets".into(),
            root: root.join("vendor/widgets"),
        }];

        let mut diag = ConfigDiagnostics::new();
        section.validate(&paths, &components, &mut diag);

        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
        assert!(diag.hints().is_empty());
    }

    #[test]
    fn test_validate_empty_executable() {
        let temp = TempDir::new().unwrap();
        let section = TailwindSection {
            executable: String::new(),
            ..Default::default()
        };

        let mut diag = ConfigDiagnostics::new();
        section.validate(&ProjectPaths::new(temp.path()), &[], &mut diag);
        assert_eq!(diag.errors()[0].field, TailwindSection::FIELDS.executable);
    }
}
