//! Configuration section definitions.
//!
//! Each module corresponds to a section in `twbuild.toml`:
//!
//! | Module       | TOML Section     | Purpose                              |
//! |--------------|------------------|--------------------------------------|
//! | `tailwind`   | `[tailwind]`     | Executable, minification, allow-list |
//! | `components` | `[[components]]` | Registered sub-components            |

mod components;
mod tailwind;

pub use components::ComponentConfig;
pub use tailwind::TailwindSection;
