// SPDX-License-Identifier: MPL-2.0
//! Copies rendered plot images into the static assets tree.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Files copied by one run, in name order. Names that are not valid UTF-8
/// are recorded lossily; the copies on disk keep the original bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: Vec<String>,
}

/// Copies every file of `source` whose name ends with `extension` into
/// `destination`.
///
/// The destination is created when missing and existing files are
/// overwritten, so repeated runs converge to the same tree. The extension
/// match is an exact, case-sensitive suffix test. Subdirectories are not
/// descended into. The first failure aborts the run; files already copied
/// stay in place.
pub fn copy_plots(source: &Path, destination: &Path, extension: &str) -> Result<CopyReport> {
    fs::create_dir_all(destination).map_err(|err| Error::io_at(destination, &err))?;

    let mut entries = fs::read_dir(source)
        .map_err(|err| Error::io_at(source, &err))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|err| Error::io_at(source, &err))?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut report = CopyReport::default();
    for entry in entries {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy().into_owned();
        if !name.ends_with(extension) {
            continue;
        }
        let file_type = entry.file_type().map_err(|err| Error::io_at(&entry.path(), &err))?;
        if file_type.is_dir() {
            continue;
        }

        let target = destination.join(&file_name);
        fs::copy(entry.path(), &target).map_err(|err| Error::io_at(&target, &err))?;
        tracing::info!("Copied {name} successfully");
        report.copied.push(name);
    }

    tracing::info!("All plots copied successfully!");
    Ok(report)
}
