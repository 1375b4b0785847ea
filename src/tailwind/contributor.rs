//! Contributor discovery.
//!
//! A contributor is a sub-component registered with the host application
//! that ships its own `application.css`. Only contributors named in the
//! allow-list take part in the build.

use super::ProjectPaths;
use crate::debug;
use std::path::PathBuf;

/// A registered sub-component: identifier plus root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub name: String,
    pub root: PathBuf,
}

impl Contributor {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }
}

/// Host interface listing the currently registered contributors.
///
/// Implementations return contributors in registration order; that order is
/// preserved in the generated merged entry.
pub trait ContributorSource {
    fn contributors(&self) -> Vec<Contributor>;
}

impl ContributorSource for [Contributor] {
    fn contributors(&self) -> Vec<Contributor> {
        self.to_vec()
    }
}

impl ContributorSource for Vec<Contributor> {
    fn contributors(&self) -> Vec<Contributor> {
        self.clone()
    }
}

impl<F> ContributorSource for F
where
    F: Fn() -> Vec<Contributor>,
{
    fn contributors(&self) -> Vec<Contributor> {
        self()
    }
}

/// Resolve the stylesheets of allow-listed contributors.
///
/// For each registered contributor whose name is in `enabled`, the first
/// existing candidate from [`ProjectPaths::contributor_candidates`] is kept.
/// Contributors with no stylesheet in either location are skipped.
pub fn stylesheets(
    paths: &ProjectPaths<'_>,
    source: &(impl ContributorSource + ?Sized),
    enabled: &[String],
) -> Vec<PathBuf> {
    source
        .contributors()
        .into_iter()
        .filter(|contributor| enabled.iter().any(|name| *name == contributor.name))
        .filter_map(|contributor| {
            let found = paths
                .contributor_candidates(&contributor)
                .into_iter()
                .find(|candidate| candidate.exists());
            if found.is_none() {
                debug!("contributor"; "`{}` has no stylesheet, skipped", contributor.name);
            }
            found
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_contributors() {
        let paths = ProjectPaths::new(Path::new("/dummy"));
        let source: Vec<Contributor> = Vec::new();
        assert!(stylesheets(&paths, &source, &names(&["anything"])).is_empty());
    }

    #[test]
    fn test_resolves_first_existing_candidate() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let paths = ProjectPaths::new(root);

        let engine1 = Contributor::new("test_engine1", root.join("engine1"));
        let engine2 = Contributor::new("test_engine2", root.join("engine2"));
        let engine3 = Contributor::new("test_engine3", root.join("engine3"));

        // engine1 ships its own stylesheet, engine2 is overridden by the project,
        // engine3's stylesheet lives under the wrong root.
        let engine1_css = root.join("engine1/app/assets/tailwind/test_engine1/application.css");
        let engine2_css = root.join("app/assets/tailwind/test_engine2/application.css");
        let engine3_css = root.join("engine2/app/assets/tailwind/test_engine3/application.css");
        for css in [&engine1_css, &engine2_css, &engine3_css] {
            touch(css);
        }

        let source = vec![engine1, engine2, engine3];
        let found = stylesheets(
            &paths,
            &source,
            &names(&["test_engine1", "test_engine2", "test_engine3"]),
        );

        assert_eq!(found, vec![engine1_css, engine2_css]);
        assert!(!found.contains(&engine3_css));
    }

    #[test]
    fn test_project_override_wins() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let paths = ProjectPaths::new(root);

        let own = root.join("app/assets/tailwind/widgets/application.css");
        let theirs = root.join("vendor/widgets/app/assets/tailwind/widgets/application.css");
        touch(&own);
        touch(&theirs);

        let source = vec![Contributor::new("widgets", root.join("vendor/widgets"))];
        assert_eq!(stylesheets(&paths, &source, &names(&["widgets"])), vec![own]);
    }

    #[test]
    fn test_allow_list_filters_and_keeps_registration_order() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let paths = ProjectPaths::new(root);

        for name in ["alpha", "beta", "gamma"] {
            touch(&root.join(format!("app/assets/tailwind/{name}/application.css")));
        }

        let source = || {
            vec![
                Contributor::new("alpha", "/nowhere/alpha"),
                Contributor::new("beta", "/nowhere/beta"),
                Contributor::new("gamma", "/nowhere/gamma"),
            ]
        };

        let found = stylesheets(&paths, &source, &names(&["gamma", "alpha"]));
        assert_eq!(
            found,
            vec![
                root.join("app/assets/tailwind/alpha/application.css"),
                root.join("app/assets/tailwind/gamma/application.css"),
            ]
        );
    }

    #[test]
    fn test_empty_allow_list_excludes_everything() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(&root.join("app/assets/tailwind/widgets/application.css"));

        let source = vec![Contributor::new("widgets", root)];
        assert!(stylesheets(&ProjectPaths::new(root), &source, &[]).is_empty());
    }
}
