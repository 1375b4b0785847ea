//! `[[components]]` registered sub-components.
//!
//! # Example
//!
//! ```toml
//! [[components]]
//! name = "widgets"
//! root = "vendor/widgets"
//! ```
//!
//! Registering a component does not make it contribute a stylesheet; it must
//! also be listed in `tailwind.engines`.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::tailwind::Contributor;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A sub-component of the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Component identifier, also its stylesheet namespace.
    pub name: String,
    /// Component root directory (relative to the project root).
    pub root: PathBuf,
}

/// Field paths of [`ComponentConfig`].
pub struct ComponentFields {
    pub name: FieldPath,
    pub root: FieldPath,
}

impl ComponentConfig {
    pub const FIELDS: ComponentFields = ComponentFields {
        name: FieldPath::new("components.name"),
        root: FieldPath::new("components.root"),
    };

    pub fn to_contributor(&self) -> Contributor {
        Contributor::new(self.name.clone(), self.root.clone())
    }

    /// Validate the component list.
    ///
    /// # Checks
    /// - names must be non-empty and unique
    /// - roots should exist (hint only, the stylesheet may live in the project)
    pub fn validate_all(components: &[Self], diag: &mut ConfigDiagnostics) {
        for (i, component) in components.iter().enumerate() {
            if component.name.is_empty() {
                diag.error(Self::FIELDS.name, format!("component #{} has an empty name", i + 1));
                continue;
            }

            if components[..i].iter().any(|c| c.name == component.name) {
                diag.error_with_hint(
                    Self::FIELDS.name,
                    format!("component `{}` is registered twice", component.name),
                    "remove one of the entries",
                );
            }

            if !component.root.is_dir() {
                diag.hint(
                    Self::FIELDS.root,
                    format!(
                        "`{}` root does not exist: {}",
                        component.name,
                        component.root.display()
                    ),
                );
            }
        }
    }
}
