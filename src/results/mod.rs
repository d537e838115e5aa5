//! Module containing the results structure.
//!
//! Every analysis component stores what it found here. Once the artifact is analyzed, the results
//! are written as a JSON report.

mod report;
mod summary;
mod utils;

pub use self::{
    report::{Generator, Json},
    summary::Summary,
    utils::{Finding, FindingSet, FingerPrint},
};

use crate::{
    get_package_name, print_warning,
    static_analysis::{
        code::Category,
        consistency::Mismatch,
        manifest::{LaunchMode, ManifestFlags, PermissionChecklist},
        network::IpDisclosure,
        payment::PaymentOutcome,
        policy::PiiUsage,
        trackers::TrackerMatch,
    },
    Config,
};
use anyhow::{Context, Result};
use chrono::Local;
use log::info;
use serde::{
    ser::{SerializeStruct, Serializer},
    Serialize,
};
use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
    result::Result as StdResult,
};

/// Name of the report file inside the artifact results folder.
pub const REPORT_FILE: &str = "results.json";

/// Results of the analysis of one artifact.
#[derive(Debug)]
pub struct Results {
    base_name: String,
    app_package: String,
    app_label: String,
    app_version: String,
    app_version_num: u32,
    app_min_sdk: u32,
    app_target_sdk: Option<u32>,
    app_fingerprint: Option<FingerPrint>,
    manifest_flags: ManifestFlags,
    activities_launch_mode: BTreeMap<String, LaunchMode>,
    permissions: PermissionChecklist,
    findings: FindingSet,
    ip_disclosure: IpDisclosure,
    trackers: Vec<TrackerMatch>,
    leaked_keys: Vec<String>,
    payment: Option<PaymentOutcome>,
    inconsistencies: Vec<Mismatch>,
    policy_usage: Option<Vec<PiiUsage>>,
    warnings: BTreeSet<String>,
}

impl Results {
    /// Initializes the results for the given package.
    ///
    /// Returns `None` if a report for the package already exists and the analysis is not forced.
    pub fn init<P: AsRef<Path>>(config: &Config, package: P) -> Option<Self> {
        let base_name = get_package_name(package.as_ref());
        let path = config.results_folder().join(&base_name).join(REPORT_FILE);
        if path.exists() && !config.is_force() {
            if config.is_verbose() {
                info!(
                    "The results for `{}` have already been generated. No need to generate them \
                     again.",
                    base_name
                );
            } else if !config.is_quiet() {
                println!("Skipping result generation.");
            }
            return None;
        }

        let app_fingerprint = if package.as_ref().is_file() {
            match FingerPrint::new(package.as_ref()) {
                Ok(f) => Some(f),
                Err(e) => {
                    print_warning(format!(
                        "an error occurred when trying to fingerprint the application: {}",
                        e
                    ));
                    None
                }
            }
        } else {
            None
        };

        Some(Self::new(base_name, app_fingerprint))
    }

    /// Creates empty results.
    pub(crate) fn new<S: Into<String>>(base_name: S, app_fingerprint: Option<FingerPrint>) -> Self {
        Self {
            base_name: base_name.into(),
            app_package: String::new(),
            app_label: String::new(),
            app_version: String::new(),
            app_version_num: 0,
            app_min_sdk: 0,
            app_target_sdk: None,
            app_fingerprint,
            manifest_flags: ManifestFlags::default(),
            activities_launch_mode: BTreeMap::new(),
            permissions: PermissionChecklist::default(),
            findings: FindingSet::default(),
            ip_disclosure: IpDisclosure::default(),
            trackers: Vec::new(),
            leaked_keys: Vec::new(),
            payment: None,
            inconsistencies: Vec::new(),
            policy_usage: None,
            warnings: BTreeSet::new(),
        }
    }

    /// Gets the base name of the artifact.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Sets the application package.
    pub fn set_app_package<S: Into<String>>(&mut self, package: S) {
        self.app_package = package.into();
    }

    /// Gets the application package.
    pub fn app_package(&self) -> &str {
        &self.app_package
    }

    /// Sets the application label.
    pub fn set_app_label<S: Into<String>>(&mut self, label: S) {
        self.app_label = label.into();
    }

    /// Gets the application label.
    pub fn app_label(&self) -> &str {
        &self.app_label
    }

    /// Sets the application version name.
    pub fn set_app_version<S: Into<String>>(&mut self, version: S) {
        self.app_version = version.into();
    }

    /// Sets the application version code.
    pub fn set_app_version_num(&mut self, version: u32) {
        self.app_version_num = version;
    }

    /// Sets the minimum SDK.
    pub fn set_app_min_sdk(&mut self, sdk: u32) {
        self.app_min_sdk = sdk;
    }

    /// Sets the target SDK.
    pub fn set_app_target_sdk(&mut self, sdk: u32) {
        self.app_target_sdk = Some(sdk);
    }

    pub fn set_manifest_flags(&mut self, flags: ManifestFlags) {
        self.manifest_flags = flags;
    }

    pub fn set_activities_launch_mode(&mut self, modes: BTreeMap<String, LaunchMode>) {
        self.activities_launch_mode = modes;
    }

    /// Sets the classified permissions.
    pub fn set_permissions(&mut self, permissions: PermissionChecklist) {
        self.permissions = permissions;
    }

    /// Gets the classified permissions.
    pub fn permissions(&self) -> &PermissionChecklist {
        &self.permissions
    }

    /// Adds a finding. Findings already recorded for the same method in the same category are
    /// dropped.
    pub fn add_finding(&mut self, finding: Finding) {
        let _ = self.findings.add(finding);
    }

    /// Gets the findings of a category.
    pub fn findings(&self, category: Category) -> &[Finding] {
        self.findings.get(category)
    }

    pub fn set_ip_disclosure(&mut self, ip_disclosure: IpDisclosure) {
        self.ip_disclosure = ip_disclosure;
    }

    pub fn set_trackers(&mut self, trackers: Vec<TrackerMatch>) {
        self.trackers = trackers;
    }

    /// Sets the sensitive resource names that flow into a sink.
    pub fn set_leaked_keys(&mut self, leaked_keys: Vec<String>) {
        self.leaked_keys = leaked_keys;
    }

    /// Gets the leaked resource names.
    pub fn leaked_keys(&self) -> &[String] {
        &self.leaked_keys
    }

    /// Sets the payment scanner outcome.
    pub fn set_payment(&mut self, outcome: PaymentOutcome) {
        self.payment = Some(outcome);
    }

    /// Gets the payment scanner outcome, if the payment analysis ran.
    pub fn payment(&self) -> Option<&PaymentOutcome> {
        self.payment.as_ref()
    }

    /// Sets the capabilities used without their permission.
    pub fn set_inconsistencies(&mut self, inconsistencies: Vec<Mismatch>) {
        self.inconsistencies = inconsistencies;
    }

    /// Gets the capabilities used without their permission.
    pub fn inconsistencies(&self) -> &[Mismatch] {
        &self.inconsistencies
    }

    /// Sets the personal data found in the code, checked against the privacy policy.
    pub fn set_policy_usage(&mut self, usage: Vec<PiiUsage>) {
        self.policy_usage = Some(usage);
    }

    /// Gets the personal data found in the code, if a privacy policy was checked.
    pub fn policy_usage(&self) -> Option<&[PiiUsage]> {
        self.policy_usage.as_deref()
    }

    /// Attaches a warning to the report.
    pub fn add_warning<S: Into<String>>(&mut self, warning: S) {
        let _ = self.warnings.insert(warning.into());
    }

    /// Gets the warnings attached to the report.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.warnings.iter().map(String::as_str)
    }

    /// Gets the folder the report of these results is written to.
    pub fn report_folder(&self, config: &Config) -> PathBuf {
        config.results_folder().join(&self.base_name)
    }

    /// Writes the report.
    pub fn generate_report(&self, config: &Config) -> Result<()> {
        let path = self.report_folder(config);
        if config.is_verbose() {
            info!("Starting report generation. First we'll create the results folder.");
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("could not create `{}`", path.display()))?;

        let mut json_reporter = Json::new();
        json_reporter.generate(config, self)?;

        if config.is_verbose() {
            info!("JSON report generated at `{}`.", path.join(REPORT_FILE).display());
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct AppSection<'r> {
    app_name: &'r str,
    package_name: &'r str,
    min_sdk: u32,
    target_sdk: Option<u32>,
    version_code: u32,
    version_name: &'r str,
    permissions: &'r PermissionChecklist,
    activities_launch_mode: &'r BTreeMap<String, LaunchMode>,
    allow_backup: bool,
    debuggable: bool,
    use_cleartext_traffic: bool,
}

#[derive(Serialize)]
struct ImproperEncryption<'r> {
    ecb_mode: &'r [Finding],
    rsa_no_padding: &'r [Finding],
}

#[derive(Serialize)]
struct CryptographySection<'r> {
    insecure_hash_functions: &'r [Finding],
    improper_encrypt_functions: ImproperEncryption<'r>,
}

#[derive(Serialize)]
struct CodeSection<'r> {
    sql_raw_queries: &'r [Finding],
    sql_hardcoded_secrets: &'r [Finding],
    insecure_external_storage: &'r [Finding],
    ip_disclosure: &'r IpDisclosure,
    insecure_random_generator: &'r [Finding],
    risky_cryptographic_algorithms: CryptographySection<'r>,
    remote_webview_debugging: &'r [Finding],
    insecure_webview_implementation: &'r [Finding],
    insecure_certificate_validation: &'r [Finding],
    trackers: &'r [TrackerMatch],
}

#[derive(Serialize)]
struct RootSection<'r> {
    root_detections: &'r [Finding],
    root_usage: &'r [Finding],
    debug_detections: &'r [Finding],
}

#[derive(Serialize)]
struct TaintSection<'r> {
    leaked_keys: &'r [String],
}

#[derive(Serialize)]
struct PaymentSection<'r> {
    payment_vulnerability_type: Option<&'r PaymentOutcome>,
}

#[derive(Serialize)]
struct ConsistencySection<'r> {
    inconsistencies: &'r [Mismatch],
}

#[derive(Serialize)]
struct PolicySection<'r> {
    pii_usage: Option<&'r [PiiUsage]>,
}

impl Serialize for Results {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let now = Local::now();
        let findings = &self.findings;
        let mut ser_struct = serializer.serialize_struct("Results", 12)?;

        ser_struct.serialize_field("meta_detector_version", env!("CARGO_PKG_VERSION"))?;
        ser_struct.serialize_field("now_rfc3339", &now.to_rfc3339())?;
        ser_struct.serialize_field(
            "app",
            &AppSection {
                app_name: &self.app_label,
                package_name: &self.app_package,
                min_sdk: self.app_min_sdk,
                target_sdk: self.app_target_sdk,
                version_code: self.app_version_num,
                version_name: &self.app_version,
                permissions: &self.permissions,
                activities_launch_mode: &self.activities_launch_mode,
                allow_backup: self.manifest_flags.allow_backup,
                debuggable: self.manifest_flags.debuggable,
                use_cleartext_traffic: self.manifest_flags.uses_cleartext_traffic,
            },
        )?;
        ser_struct.serialize_field("app_fingerprint", &self.app_fingerprint)?;
        ser_struct.serialize_field(
            "code_analysis",
            &CodeSection {
                sql_raw_queries: findings.get(Category::SqlRawQuery),
                sql_hardcoded_secrets: findings.get(Category::SqlHardcodedSecret),
                insecure_external_storage: findings.get(Category::ExternalStorage),
                ip_disclosure: &self.ip_disclosure,
                insecure_random_generator: findings.get(Category::InsecureRandom),
                risky_cryptographic_algorithms: CryptographySection {
                    insecure_hash_functions: findings.get(Category::WeakHash),
                    improper_encrypt_functions: ImproperEncryption {
                        ecb_mode: findings.get(Category::EcbMode),
                        rsa_no_padding: findings.get(Category::RsaNoPadding),
                    },
                },
                remote_webview_debugging: findings.get(Category::WebViewDebugging),
                insecure_webview_implementation: findings.get(Category::InsecureWebView),
                insecure_certificate_validation: findings
                    .get(Category::InsecureCertificateValidation),
                trackers: &self.trackers,
            },
        )?;
        ser_struct.serialize_field(
            "root_analysis",
            &RootSection {
                root_detections: findings.get(Category::RootDetection),
                root_usage: findings.get(Category::RootUsage),
                debug_detections: findings.get(Category::DebugDetection),
            },
        )?;
        ser_struct.serialize_field(
            "pii_taint_result",
            &TaintSection {
                leaked_keys: &self.leaked_keys,
            },
        )?;
        ser_struct.serialize_field(
            "payment_vulnerable",
            &PaymentSection {
                payment_vulnerability_type: self.payment.as_ref(),
            },
        )?;
        ser_struct.serialize_field(
            "permission_consistency",
            &ConsistencySection {
                inconsistencies: &self.inconsistencies,
            },
        )?;
        ser_struct.serialize_field(
            "policy_consistency",
            &PolicySection {
                pii_usage: self.policy_usage(),
            },
        )?;
        ser_struct.serialize_field("total_findings", &findings.len())?;
        ser_struct.serialize_field("warnings", &self.warnings)?;

        ser_struct.end()
    }
}

#[cfg(test)]
mod tests {
    use super::{Finding, Results, REPORT_FILE};
    use crate::{
        model::Program,
        static_analysis::{code::Category, payment::PaymentOutcome},
        Config,
    };
    use tempfile::TempDir;

    fn sample_results() -> Results {
        let mut builder = Program::builder();
        let class = builder.class("Lcom/example/Crypto;", false);
        let method = builder.method(class, "encrypt", "([B)[B", Vec::new(), None);
        let program = builder.build();

        let mut results = Results::new("sample", None);
        results.set_app_package("com.example");
        results.set_app_label("Example");
        results.set_app_min_sdk(23);
        results.set_app_target_sdk(29);
        results.add_finding(Finding::new(
            Category::EcbMode,
            program.method(method),
            Some("AES/ECB/PKCS5Padding".to_owned()),
        ));
        results.set_payment(PaymentOutcome::NotApplicable);
        results.add_warning("the external tool `FlowDroid` failed");
        results
    }

    #[test]
    fn it_serializes_the_report_layout() {
        let json = serde_json::to_value(&sample_results()).unwrap();

        assert_eq!(json["app"]["package_name"], "com.example");
        assert_eq!(json["app"]["target_sdk"], 29);
        assert_eq!(
            json["code_analysis"]["risky_cryptographic_algorithms"]["improper_encrypt_functions"]
                ["ecb_mode"][0],
            "Lcom/example/Crypto;.encrypt"
        );
        assert_eq!(
            json["code_analysis"]["sql_raw_queries"]
                .as_array()
                .unwrap()
                .len(),
            0
        );
        assert_eq!(
            json["payment_vulnerable"]["payment_vulnerability_type"][0],
            "It is not UNITY-based app"
        );
        assert!(json["policy_consistency"]["pii_usage"].is_null());
        assert_eq!(json["total_findings"], 1);
        assert_eq!(json["warnings"][0], "the external tool `FlowDroid` failed");
    }

    #[test]
    fn it_writes_the_report() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set_results_folder(dir.path());

        let results = sample_results();
        results.generate_report(&config).unwrap();

        let path = dir.path().join("sample").join(REPORT_FILE);
        assert!(path.is_file());
        assert!(Results::init(&config, "sample.apk").is_none());

        config.set_force(true);
        assert!(Results::init(&config, "sample.apk").is_some());
    }
}
