//! Tracker library detection.
//!
//! The tracker list follows the Exodus Privacy format. Each tracker has a code signature: one or
//! more `|`-separated Java package prefixes. A tracker is present when at least one class
//! defined by the application lives in one of those packages.

use crate::{model::ProgramModel, print_warning, results::Results, Config};
use anyhow::{Context, Result};
use log::debug;
use regex::Regex;
use serde::{
    ser::{SerializeMap, Serializer},
    Deserialize, Serialize,
};
use std::{fs::File, io::Read, path::Path};

/// Tracker signature list file.
#[derive(Debug, Deserialize)]
struct TrackerList {
    trackers: Vec<TrackerEntry>,
}

/// Tracker as written in the signature list.
#[derive(Debug, Deserialize)]
struct TrackerEntry {
    name: String,
    #[serde(default)]
    website: String,
    #[serde(default)]
    code_signature: String,
}

/// Known tracker, with its code signature converted to class name patterns.
#[derive(Debug)]
pub struct Tracker {
    name: String,
    website: String,
    patterns: Vec<Regex>,
}

impl Tracker {
    /// Creates a tracker from its dotted code signature.
    pub fn new<N, W>(name: N, website: W, code_signature: &str) -> Result<Self>
    where
        N: Into<String>,
        W: Into<String>,
    {
        let patterns = code_signature
            .split('|')
            .map(str::trim)
            .filter(|package| !package.is_empty())
            .map(|package| Regex::new(&class_pattern(package)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.into(),
            website: website.into(),
            patterns,
        })
    }

    /// Gets the name of the tracker.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the website of the tracker.
    pub fn website(&self) -> &str {
        &self.website
    }

    /// Gets the class name patterns of the tracker.
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }
}

/// Converts a dotted package prefix, such as `com.example.sdk.`, into a pattern matching the
/// classes of that package, such as `^Lcom/example/sdk/.*`.
fn class_pattern(package: &str) -> String {
    let mut path = package.replace('.', "/");
    if !path.ends_with('/') {
        path.push('/');
    }
    format!("^L{}.*", regex::escape(&path))
}

/// Tracker found in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerMatch {
    name: String,
    website: String,
}

impl TrackerMatch {
    /// Gets the name of the tracker.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the website of the tracker.
    pub fn website(&self) -> &str {
        &self.website
    }
}

impl Serialize for TrackerMatch {
    /// Serialized as a `{ name: website }` map.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.website)?;
        map.end()
    }
}

/// Loads the tracker list from a file.
pub fn load_trackers<P: AsRef<Path>>(path: P) -> Result<Vec<Tracker>> {
    let f = File::open(path.as_ref()).with_context(|| {
        format!(
            "could not open the tracker list `{}`",
            path.as_ref().display()
        )
    })?;
    parse_trackers(f)
}

/// Parses a tracker list.
///
/// Trackers without code signature can not be detected, so they are left out.
pub fn parse_trackers<R: Read>(reader: R) -> Result<Vec<Tracker>> {
    let list: TrackerList =
        serde_json::from_reader(reader).context("the tracker list is not valid")?;

    list.trackers
        .into_iter()
        .filter(|entry| !entry.code_signature.trim().is_empty())
        .map(|entry| {
            let TrackerEntry {
                name,
                website,
                code_signature,
            } = entry;
            Tracker::new(name.as_str(), website, &code_signature)
                .with_context(|| format!("invalid code signature for tracker `{}`", name))
        })
        .collect()
}

/// Finds the trackers present in the program.
///
/// Each tracker is reported at most once, in the order of the list.
pub fn detect<M: ProgramModel + ?Sized>(program: &M, trackers: &[Tracker]) -> Vec<TrackerMatch> {
    trackers
        .iter()
        .filter(|tracker| {
            tracker
                .patterns
                .iter()
                .any(|pattern| !program.find_classes(pattern, true).is_empty())
        })
        .map(|tracker| TrackerMatch {
            name: tracker.name.clone(),
            website: tracker.website.clone(),
        })
        .collect()
}

/// Runs the tracker detection.
pub fn analysis<M: ProgramModel + ?Sized>(
    program: &M,
    trackers: &[Tracker],
    config: &Config,
    results: &mut Results,
) {
    if trackers.is_empty() {
        print_warning("the tracker list is empty, no tracker will be detected");
    }

    let found = detect(program, trackers);
    debug!("{} trackers found", found.len());
    if !config.is_quiet() {
        for tracker in &found {
            println!("Tracker found: {} ({})", tracker.name, tracker.website);
        }
    }
    results.set_trackers(found);
}
