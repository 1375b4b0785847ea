//! Conventional project layout.
//!
//! ```text
//! <root>/
//! ├── app/assets/tailwind/application.css         # primary stylesheet
//! ├── app/assets/tailwind/<name>/application.css  # contributor override
//! ├── app/assets/builds/tailwind.css              # compiled output
//! └── postcss.config.js                           # optional
//! ```

use super::Contributor;
use std::path::{Path, PathBuf};

/// Directory holding Tailwind sources, relative to a root.
pub const TAILWIND_DIR: &str = "app/assets/tailwind";

/// Stylesheet file name used by the project and every contributor.
pub const STYLESHEET: &str = "application.css";

/// Compiled output, relative to the project root.
pub const OUTPUT: &str = "app/assets/builds/tailwind.css";

/// PostCSS config, relative to the project root.
pub const POSTCSS_CONFIG: &str = "postcss.config.js";

/// Path builder rooted at the project directory.
#[derive(Debug, Clone, Copy)]
pub struct ProjectPaths<'a> {
    root: &'a Path,
}

impl<'a> ProjectPaths<'a> {
    pub const fn new(root: &'a Path) -> Self {
        Self { root }
    }

    pub const fn root(&self) -> &'a Path {
        self.root
    }

    /// `<root>/app/assets/tailwind/application.css`
    pub fn primary_stylesheet(&self) -> PathBuf {
        self.root.join(TAILWIND_DIR).join(STYLESHEET)
    }

    /// `<root>/app/assets/builds/tailwind.css`
    pub fn output(&self) -> PathBuf {
        self.root.join(OUTPUT)
    }

    /// `<root>/postcss.config.js`
    pub fn postcss_config(&self) -> PathBuf {
        self.root.join(POSTCSS_CONFIG)
    }

    /// Candidate stylesheet locations for a contributor, in lookup order:
    /// the project's own tree first, then the contributor's tree.
    pub fn contributor_candidates(&self, contributor: &Contributor) -> [PathBuf; 2] {
        [
            namespaced_stylesheet(self.root, &contributor.name),
            namespaced_stylesheet(&contributor.root, &contributor.name),
        ]
    }
}

/// `<base>/app/assets/tailwind/<name>/application.css`
fn namespaced_stylesheet(base: &Path, name: &str) -> PathBuf {
    base.join(TAILWIND_DIR).join(name).join(STYLESHEET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_locations() {
        let paths = ProjectPaths::new(Path::new("/proj"));
        assert_eq!(
            paths.primary_stylesheet(),
            PathBuf::from("/proj/app/assets/tailwind/application.css")
        );
        assert_eq!(
            paths.output(),
            PathBuf::from("/proj/app/assets/builds/tailwind.css")
        );
        assert_eq!(
            paths.postcss_config(),
            PathBuf::from("/proj/postcss.config.js")
        );
    }

    #[test]
    fn test_contributor_candidates_order() {
        let paths = ProjectPaths::new(Path::new("/proj"));
        let widgets = Contributor::new("widgets", "/gems/widgets");

        let [own, theirs] = paths.contributor_candidates(&widgets);
        assert_eq!(
            own,
            PathBuf::from("/proj/app/assets/tailwind/widgets/application.css")
        );
        assert_eq!(
            theirs,
            PathBuf::from("/gems/widgets/app/assets/tailwind/widgets/application.css")
        );
    }
}
