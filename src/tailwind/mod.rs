//! Tailwind CSS integration.
//!
//! | Module        | Purpose                                          |
//! |---------------|--------------------------------------------------|
//! | `paths`       | Conventional stylesheet/output/PostCSS locations |
//! | `contributor` | Allow-listed contributor stylesheet discovery    |
//! | `entry`       | Merged entry file (temporary, caller-owned)      |
//! | `command`     | Argument list and environment for the executable |

mod command;
mod contributor;
mod entry;
mod paths;

pub use command::{CompileOptions, Commands, TailwindSettings, WatchOptions, command_env};
pub use contributor::{Contributor, ContributorSource};
pub use paths::ProjectPaths;
