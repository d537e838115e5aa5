//! Static analysis of the exported program and manifest.
//!
//! Every component queries the same read-only program model and stores its findings in the
//! results. Missing or malformed reports of the external analyzers only empty the part of the
//! report that depends on them.

pub mod code;
pub mod consistency;
pub mod manifest;
pub mod network;
pub mod payment;
pub mod policy;
pub mod taint;
pub mod trackers;

use self::{
    code::Rule,
    manifest::{Manifest, PermissionTable},
    taint::Keywords,
    trackers::Tracker,
};
use crate::{
    error,
    model::{Program, ProgramExport},
    print_warning,
    results::Results,
    Config,
};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::{fs::File, io::BufReader, path::Path};

/// Immutable data shared by the analysis of every artifact.
#[derive(Debug)]
pub struct Catalog {
    rules: Vec<Rule>,
    permissions: PermissionTable,
    keywords: Keywords,
    trackers: Vec<Tracker>,
}

impl Catalog {
    /// Loads the catalog from the configured files.
    ///
    /// The rules are required. The tracker and keyword lists are optional: without them, their
    /// analyses find nothing.
    pub fn load(config: &Config) -> Result<Self> {
        let rules = code::load_rules(config).context("could not load the code analysis rules")?;

        let trackers = trackers::load_trackers(config.trackers_json()).unwrap_or_else(|e| {
            print_warning(format!("{:#}", e));
            Vec::new()
        });
        let keywords = Keywords::from_file(config.keywords_file()).unwrap_or_else(|e| {
            print_warning(format!("{:#}", e));
            Keywords::default()
        });

        debug!(
            "loaded {} rules, {} trackers and {} keywords",
            rules.len(),
            trackers.len(),
            keywords.len()
        );
        Ok(Self::new(rules, keywords, trackers))
    }

    /// Creates a catalog with the built-in permission table.
    pub fn new(rules: Vec<Rule>, keywords: Keywords, trackers: Vec<Tracker>) -> Self {
        Self {
            rules,
            permissions: PermissionTable::default(),
            keywords,
            trackers,
        }
    }

    /// Gets the pattern rules.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Gets the permission table.
    pub fn permissions(&self) -> &PermissionTable {
        &self.permissions
    }

    /// Gets the sensitive resource names.
    pub fn keywords(&self) -> &Keywords {
        &self.keywords
    }

    /// Gets the tracker signatures.
    pub fn trackers(&self) -> &[Tracker] {
        &self.trackers
    }
}

/// Export of one artifact: its manifest and its program.
#[derive(Debug, Deserialize)]
pub struct Artifact {
    #[serde(default)]
    manifest: Manifest,
    #[serde(default)]
    program: ProgramExport,
}

impl Artifact {
    /// Loads the export of an artifact.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("could not open the program export `{}`", path.display()))?;
        serde_json::from_reader(BufReader::new(f))
            .context(error::Kind::Parse)
            .with_context(|| format!("the program export `{}` is malformed", path.display()))
    }

    /// Builds the program model, consuming the export.
    pub fn into_parts(self) -> (Manifest, Program) {
        (self.manifest, Program::from(self.program))
    }
}

/// Runs every static analysis over one artifact.
pub fn static_analysis(
    program: &Program,
    manifest: &Manifest,
    base_name: &str,
    catalog: &Catalog,
    config: &Config,
    results: &mut Results,
) {
    if config.is_verbose() {
        info!(
            "It's time to analyze `{}`. The manifest goes first, then the code, and finally the \
             reports of the external analyzers.",
            base_name
        );
    }

    let permissions = manifest::analysis(manifest, catalog.permissions(), config, results);
    code::analysis(program, catalog.rules(), config, results);
    network::analysis(program, config, results);
    trackers::analysis(program, catalog.trackers(), config, results);
    taint::analysis(
        program,
        manifest.package(),
        base_name,
        catalog.keywords(),
        config,
        results,
    );
    consistency::analysis(base_name, &permissions, config, results);
    policy::analysis(program, base_name, config, results);
    payment::analysis(base_name, config, results);

    if !config.is_quiet() {
        println!("Static analysis of `{}` finished.", base_name);
    }
}
