//! JSON report generation module.

use crate::{
    config::Config,
    results::{report::Generator, Results, REPORT_FILE},
};
use anyhow::{Context, Result};
use log::debug;
use serde_json::ser;
use std::{
    fs::File,
    io::{BufWriter, Write},
};

/// JSON report generator.
#[derive(Debug, Default)]
pub struct Json;

impl Json {
    /// Creates a new JSON report generator.
    pub fn new() -> Self {
        Self
    }
}

impl Generator for Json {
    fn generate(&mut self, config: &Config, results: &Results) -> Result<()> {
        let path = results.report_folder(config).join(REPORT_FILE);
        debug!("writing the JSON report to `{}`", path.display());

        let mut f = BufWriter::new(
            File::create(&path).with_context(|| format!("could not create `{}`", path.display()))?,
        );
        ser::to_writer_pretty(&mut f, results)
            .with_context(|| format!("could not write the report to `{}`", path.display()))?;
        f.flush()?;

        Ok(())
    }
}
