//! Merged entry stylesheet.
//!
//! When contributors exist, Tailwind is pointed at a temporary file that
//! `@import`s every contributor stylesheet followed by the primary one.

use std::fmt::Write as _;
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const PREFIX: &str = "tailwind.application";
const SUFFIX: &str = ".css";

/// Render the merged entry content.
///
/// One import per contributor in order, a blank line, then the primary
/// stylesheet import.
pub fn render_imports(contributors: &[PathBuf], primary: &Path) -> String {
    let mut out = String::new();
    for path in contributors {
        let _ = writeln!(out, "@import \"{}\";", path.display());
    }
    let _ = writeln!(out, "\n@import \"{}\";", primary.display());
    out
}

/// Owner of the (at most one) merged entry file.
///
/// The file is created on first [`write`](Self::write) and reused by later
/// writes. It is removed by [`dispose`](Self::dispose) or when the handle is
/// dropped.
#[derive(Debug, Default)]
pub struct MergedEntry {
    file: Option<NamedTempFile>,
}

impl MergedEntry {
    pub const fn new() -> Self {
        Self { file: None }
    }

    /// Path of the current merged entry, if one exists.
    pub fn path(&self) -> Option<&Path> {
        self.file.as_ref().map(NamedTempFile::path)
    }

    /// Write the merged entry, creating the file if needed, and return its path.
    pub fn write(&mut self, contributors: &[PathBuf], primary: &Path) -> io::Result<PathBuf> {
        let content = render_imports(contributors, primary);

        // Removed behind our back: writing through the old handle would land
        // in an unlinked inode.
        if self.file.as_ref().is_some_and(|file| !file.path().exists()) {
            self.file = None;
        }

        let file = match &mut self.file {
            Some(file) => {
                let handle = file.as_file_mut();
                handle.set_len(0)?;
                handle.seek(SeekFrom::Start(0))?;
                file
            }
            None => self.file.insert(
                tempfile::Builder::new()
                    .prefix(PREFIX)
                    .suffix(SUFFIX)
                    .tempfile()?,
            ),
        };

        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(file.path().to_path_buf())
    }

    /// Close and delete the merged entry.
    ///
    /// No-op when nothing was created or it was already disposed. A file
    /// removed behind our back is not an error.
    pub fn dispose(&mut self) -> io::Result<()> {
        let Some(file) = self.file.take() else {
            return Ok(());
        };

        match file.close() {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            result => result,
        }
    }
}
