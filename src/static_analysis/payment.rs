//! In-app purchase vulnerability interpretation.
//!
//! The external payment scanner works on Unity applications. It leaves its findings in a
//! working folder per artifact; this module classifies what it left there.

use crate::{print_warning, results::Results, Config};
use anyhow::{Context, Result};
use log::debug;
use serde::{ser::Serializer, Deserialize, Serialize};
use std::{fs, path::Path};

/// Name of the scanner result file.
pub const RESULT_FILE: &str = "analysisRes.json";

/// Outcome message when the marker library is missing.
pub const NOT_APPLICABLE: &str = "It is not UNITY-based app";

/// Outcome message when the marker library is present but no result was produced.
pub const NO_PURCHASE_FOUND: &str =
    "It is UNITY-based app, but there is no UNITY IAP in this app or this app is protected";

/// Classification of the payment scanner output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// The scanner produced a result: its vulnerability types.
    Reported(Vec<String>),
    /// The application does not run on the runtime the scanner understands.
    NotApplicable,
    /// The runtime was detected, but no in-app purchase usage was found, or the application is
    /// protected.
    NoPurchaseFound,
}

impl PaymentOutcome {
    /// Gets the vulnerability types, or the outcome message.
    pub fn types(&self) -> Vec<&str> {
        match self {
            Self::Reported(types) => types.iter().map(String::as_str).collect(),
            Self::NotApplicable => vec![NOT_APPLICABLE],
            Self::NoPurchaseFound => vec![NO_PURCHASE_FOUND],
        }
    }
}

impl Serialize for PaymentOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.types())
    }
}

/// Scanner result file.
#[derive(Debug, Deserialize)]
struct AnalysisResult {
    #[serde(rename = "isVulnerable")]
    is_vulnerable: Option<Indicator>,
    #[serde(rename = "vulnerabilityTypes")]
    #[serde(default)]
    vulnerability_types: Option<Vec<String>>,
}

/// Vulnerability indicator, which the scanner writes in several shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Indicator {
    Types(Vec<String>),
    Text(String),
    Flag(bool),
}

impl AnalysisResult {
    /// Gets the reported vulnerability types, verbatim.
    fn into_types(self) -> Vec<String> {
        if let Some(types) = self.vulnerability_types {
            return types;
        }
        match self.is_vulnerable {
            Some(Indicator::Types(types)) => types,
            Some(Indicator::Text(text)) => vec![text],
            Some(Indicator::Flag(flag)) => vec![flag.to_string()],
            None => Vec::new(),
        }
    }
}

/// Gets the name of the marker library of an artifact.
pub fn marker_file_name(base_name: &str) -> String {
    format!("{}_libil2cpp.so", base_name)
}

/// Reads the scanner result file.
fn read_result(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("could not read `{}`", path.display()))?;
    let result: AnalysisResult = serde_json::from_str(&contents)
        .with_context(|| format!("`{}` is not a valid scanner result", path.display()))?;
    Ok(result.into_types())
}

/// Classifies the working folder of the scanner for the artifact with the given base name.
///
/// An unreadable result file is treated as absent.
pub fn classify<P: AsRef<Path>>(working_dir: P, base_name: &str) -> PaymentOutcome {
    let working_dir = working_dir.as_ref();
    let result_path = working_dir.join(RESULT_FILE);

    if result_path.is_file() {
        match read_result(&result_path) {
            Ok(types) => return PaymentOutcome::Reported(types),
            Err(e) => print_warning(format!("{:#}", e)),
        }
    }

    if working_dir.join(marker_file_name(base_name)).is_file() {
        PaymentOutcome::NoPurchaseFound
    } else {
        PaymentOutcome::NotApplicable
    }
}

/// Runs the payment interpretation for the artifact with the given base name.
pub fn analysis(base_name: &str, config: &Config, results: &mut Results) {
    let working_dir = config.payment().results_folder().join(base_name);
    let outcome = classify(&working_dir, base_name);
    debug!("payment scanner outcome: {:?}", outcome);

    if !config.is_quiet() {
        println!("Payment analysis: {}", outcome.types().join(", "));
    }
    results.set_payment(outcome);
}

#[cfg(test)]
mod tests {
    use super::{classify, marker_file_name, PaymentOutcome, RESULT_FILE};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn it_is_not_applicable_without_marker() {
        let dir = TempDir::new().unwrap();
        assert_eq!(classify(dir.path(), "app"), PaymentOutcome::NotApplicable);
        assert_eq!(
            classify(dir.path().join("missing"), "app"),
            PaymentOutcome::NotApplicable
        );
    }

    #[test]
    fn it_detects_the_runtime_without_purchases() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(marker_file_name("app")), b"\x7fELF").unwrap();
        assert_eq!(classify(dir.path(), "app"), PaymentOutcome::NoPurchaseFound);
    }

    #[test]
    fn it_reports_the_types_verbatim() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(marker_file_name("app")), b"\x7fELF").unwrap();
        fs::write(
            dir.path().join(RESULT_FILE),
            r#"{"isVulnerable": ["Client-side receipt validation", "No server validation"]}"#,
        )
        .unwrap();

        let outcome = classify(dir.path(), "app");
        assert_eq!(
            outcome,
            PaymentOutcome::Reported(vec![
                "Client-side receipt validation".to_owned(),
                "No server validation".to_owned()
            ])
        );
        assert_eq!(
            serde_json::to_string(&outcome).unwrap(),
            r#"["Client-side receipt validation","No server validation"]"#
        );
    }

    #[test]
    fn it_prefers_the_type_list() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(RESULT_FILE),
            r#"{"isVulnerable": true, "vulnerabilityTypes": ["Unprotected purchase flow"]}"#,
        )
        .unwrap();

        assert_eq!(
            classify(dir.path(), "app"),
            PaymentOutcome::Reported(vec!["Unprotected purchase flow".to_owned()])
        );
    }

    #[test]
    fn it_falls_back_on_malformed_results() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(RESULT_FILE), "{ not json").unwrap();
        fs::write(dir.path().join(marker_file_name("app")), b"\x7fELF").unwrap();
        assert_eq!(classify(dir.path(), "app"), PaymentOutcome::NoPurchaseFound);
    }
}
