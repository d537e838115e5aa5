//! Batch summary, written once every artifact of a run has been analyzed.

use super::{Results, REPORT_FILE};
use crate::{error, get_package_name, Config};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

/// Name of the summary file inside the results folder.
pub const SUMMARY_FILE: &str = "summary.json";

/// Cross-artifact view of the payment and permission consistency results.
#[derive(Debug, Default, Serialize)]
pub struct Summary {
    /// Applications grouped by their first payment vulnerability type.
    payment: BTreeMap<String, Vec<String>>,
    /// Artifacts grouped by capability used without permission, such as `hand_inconsistency`.
    inconsistencies: BTreeMap<String, Vec<String>>,
    /// Every artifact with at least one inconsistency, in the order they were added.
    inconsistent_apps: Vec<String>,
}

impl Summary {
    /// Adds the results of one artifact.
    pub fn add(&mut self, results: &Results) {
        let app_name = if results.app_label().is_empty() {
            results.base_name()
        } else {
            results.app_label()
        };
        let payment = results
            .payment()
            .and_then(|outcome| outcome.types().first().copied());
        let capabilities: Vec<&str> = results
            .inconsistencies()
            .iter()
            .map(|mismatch| mismatch.capability())
            .collect();

        self.record(results.base_name(), app_name, payment, &capabilities);
    }

    /// Adds the report already written for a package in a previous run.
    pub fn add_existing<P: AsRef<Path>>(&mut self, config: &Config, package: P) -> Result<()> {
        let base_name = get_package_name(package.as_ref());
        let path = config.results_folder().join(&base_name).join(REPORT_FILE);
        let f = File::open(&path).with_context(|| format!("could not open `{}`", path.display()))?;
        let report: Value = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            error::Kind::MalformedExternalReport {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;

        self.add_report(&base_name, &report);
        Ok(())
    }

    /// Adds the JSON report of one artifact.
    pub fn add_report(&mut self, base_name: &str, report: &Value) {
        let app_name = match report["app"]["app_name"].as_str() {
            Some(name) if !name.is_empty() => name,
            _ => base_name,
        };
        let payment = report["payment_vulnerable"]["payment_vulnerability_type"][0].as_str();
        let capabilities: Vec<&str> = report["permission_consistency"]["inconsistencies"]
            .as_array()
            .map(|mismatches| {
                mismatches
                    .iter()
                    .filter_map(|mismatch| mismatch["capability"].as_str())
                    .collect()
            })
            .unwrap_or_default();

        self.record(base_name, app_name, payment, &capabilities);
    }

    fn record(
        &mut self,
        base_name: &str,
        app_name: &str,
        payment: Option<&str>,
        capabilities: &[&str],
    ) {
        if let Some(kind) = payment {
            self.payment
                .entry(kind.to_owned())
                .or_default()
                .push(app_name.to_owned());
        }

        for capability in capabilities {
            let apps = self
                .inconsistencies
                .entry(format!("{}_inconsistency", capability))
                .or_default();
            if !apps.iter().any(|app| app == base_name) {
                apps.push(base_name.to_owned());
            }
        }
        if !capabilities.is_empty() && !self.inconsistent_apps.iter().any(|app| app == base_name) {
            self.inconsistent_apps.push(base_name.to_owned());
        }
    }

    /// Gets the applications grouped under a payment vulnerability type.
    pub fn payment_group(&self, kind: &str) -> &[String] {
        self.payment.get(kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Gets every artifact with at least one inconsistency.
    pub fn inconsistent_apps(&self) -> &[String] {
        &self.inconsistent_apps
    }

    /// Whether nothing was added.
    pub fn is_empty(&self) -> bool {
        self.payment.is_empty() && self.inconsistencies.is_empty()
    }

    /// Writes the summary in the results folder and returns its path.
    pub fn write(&self, config: &Config) -> Result<PathBuf> {
        let path = config.results_folder().join(SUMMARY_FILE);
        fs::create_dir_all(config.results_folder()).with_context(|| {
            format!("could not create `{}`", config.results_folder().display())
        })?;
        let f = BufWriter::new(
            File::create(&path).with_context(|| format!("could not create `{}`", path.display()))?,
        );
        serde_json::to_writer_pretty(f, self)
            .with_context(|| format!("could not write the summary to `{}`", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{Summary, SUMMARY_FILE};
    use crate::{
        results::{Results, REPORT_FILE},
        static_analysis::{
            consistency::{check, UsageListing, CAPABILITIES},
            manifest::PermissionChecklist,
            payment::{PaymentOutcome, NOT_APPLICABLE},
        },
        Config,
    };
    use tempfile::TempDir;

    #[test]
    fn it_groups_the_batch() {
        let mut first = Results::new("first", None);
        first.set_app_label("First Game");
        first.set_payment(PaymentOutcome::NotApplicable);
        first.set_inconsistencies(check(
            &UsageListing::from_names(vec![
                "OVRHand$$OVRSkeleton.IOVRSkeletonDataProvider.GetSkeletonPoseData",
                "OVREyeGaze$$CalculateEyeRotation",
            ]),
            &PermissionChecklist::default(),
            CAPABILITIES,
        ));

        let mut second = Results::new("second", None);
        second.set_payment(PaymentOutcome::NotApplicable);

        let mut summary = Summary::default();
        summary.add(&first);
        summary.add(&second);

        assert_eq!(summary.payment_group(NOT_APPLICABLE), ["First Game", "second"]);
        assert_eq!(summary.inconsistent_apps(), ["first"]);
        assert!(summary.payment_group("Unprotected purchase flow").is_empty());

        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set_results_folder(dir.path());
        let path = summary.write(&config).unwrap();
        assert_eq!(path, dir.path().join(SUMMARY_FILE));

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["inconsistencies"]["hand_inconsistency"][0], "first");
        assert_eq!(json["inconsistencies"]["eye_inconsistency"][0], "first");
    }

    #[test]
    fn it_adds_the_reports_of_previous_runs() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set_results_folder(dir.path());

        let mut previous = Results::new("previous", None);
        previous.set_payment(PaymentOutcome::NotApplicable);
        previous.set_inconsistencies(check(
            &UsageListing::from_names(vec!["OVREyeGaze$$CalculateEyeRotation"]),
            &PermissionChecklist::default(),
            CAPABILITIES,
        ));
        previous.generate_report(&config).unwrap();
        assert!(dir.path().join("previous").join(REPORT_FILE).is_file());

        let mut current = Results::new("current", None);
        current.set_app_label("Current Game");
        current.set_payment(PaymentOutcome::NotApplicable);

        let mut summary = Summary::default();
        summary.add(&current);
        summary.add_existing(&config, "previous.apk").unwrap();

        assert_eq!(summary.payment_group(NOT_APPLICABLE), ["Current Game", "previous"]);
        assert_eq!(summary.inconsistent_apps(), ["previous"]);
        assert!(summary.add_existing(&config, "missing.apk").is_err());
    }
}
