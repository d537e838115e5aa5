//! Utilities module.

use crate::criticality::Criticality;
use anyhow::{Context, Result};
use colored::Colorize;
use log::warn;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Prints a warning through the logger.
pub fn print_warning<S: AsRef<str>>(warning: S) {
    warn!("{}", warning.as_ref());
}

/// Prints a finding to `stdout` in a color depending on its criticality.
#[allow(clippy::print_stdout)]
pub fn print_vulnerability<S: AsRef<str>>(text: S, criticality: Criticality) {
    let text = text.as_ref();
    let start = format!("Possible {} criticality vulnerability found!:", criticality);
    let (start, message) = match criticality {
        Criticality::Warning => (start.normal(), text.normal()),
        Criticality::Low => (start.cyan(), text.cyan()),
        Criticality::Medium => (start.yellow(), text.yellow()),
        Criticality::High | Criticality::Critical => (start.red(), text.red()),
    };
    println!("{} {}", start, message);
}

/// Gets the base name of an artifact: its file name without the extension.
///
/// Reports of the external analyzers and of this tool are keyed by it.
pub fn get_package_name<P: AsRef<Path>>(package: P) -> String {
    package
        .as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Expands the given paths into the artifacts to analyze.
///
/// Files are kept as they are. Directories are replaced by the `.apk` files directly inside them,
/// sorted by name.
pub fn collect_packages<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>> {
    let mut packages = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            let mut found = Vec::new();
            for entry in fs::read_dir(path)
                .with_context(|| format!("could not read the directory `{}`", path.display()))?
            {
                let entry_path = entry?.path();
                if entry_path.is_file()
                    && entry_path.extension().map_or(false, |ext| ext == "apk")
                {
                    found.push(entry_path);
                }
            }
            found.sort();
            packages.extend(found);
        } else if path.is_file() {
            packages.push(path.to_path_buf());
        } else {
            anyhow::bail!("the package `{}` does not exist", path.display());
        }
    }
    Ok(packages)
}
