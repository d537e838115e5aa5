//! Configuration module.
//!
//! Handles and configures the initial settings and variables needed to run the program. The
//! configuration is read from a TOML file and then decorated with the command line options.

use crate::{criticality::Criticality, error, static_analysis::code::CallerStrategy};
use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Largest number of worker threads accepted.
const MAX_THREADS: usize = u8::MAX as usize;

/// Config structure.
///
/// Contains configuration related fields. It is used for storing the configuration parameters
/// and checking their values. Implements the `Default` trait.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Application packages to analyze, not read from the file.
    #[serde(skip)]
    packages: Vec<PathBuf>,
    /// Boolean to represent `--verbose` mode.
    verbose: bool,
    /// Boolean to represent `--quiet` mode.
    quiet: bool,
    /// Boolean to represent `--force` mode.
    force: bool,
    /// Whether the external analyzers should be run before the analysis.
    run_external: bool,
    /// Number of threads.
    threads: usize,
    /// Folder where the program exports are stored.
    dist_folder: PathBuf,
    /// Folder where the reports are written.
    results_folder: PathBuf,
    /// Path to the pattern rules file.
    rules_json: PathBuf,
    /// Path to the tracker signature list.
    trackers_json: PathBuf,
    /// Path to the sensitivity keyword list.
    keywords_file: PathBuf,
    /// Minimum criticality of the rules to load.
    min_criticality: Criticality,
    /// How callers of a matched method are resolved.
    caller_strategy: CallerStrategy,
    /// Taint analyzer settings.
    taint: TaintConfig,
    /// Payment scanner settings.
    payment: PaymentConfig,
    /// Privacy policy extraction settings.
    policy: PolicyConfig,
}

/// Settings of the external taint analyzer.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TaintConfig {
    results_folder: PathBuf,
    jar: Option<PathBuf>,
    android_sdk: Option<PathBuf>,
    sources_and_sinks: Option<PathBuf>,
}

impl TaintConfig {
    /// Gets the folder the taint reports are written to.
    pub fn results_folder(&self) -> &Path {
        &self.results_folder
    }

    /// Gets the analyzer JAR, if configured.
    pub fn jar(&self) -> Option<&Path> {
        self.jar.as_deref()
    }

    /// Gets the Android SDK location, if configured.
    pub fn android_sdk(&self) -> Option<&Path> {
        self.android_sdk.as_deref()
    }

    /// Gets the sources and sinks definition file, if configured.
    pub fn sources_and_sinks(&self) -> Option<&Path> {
        self.sources_and_sinks.as_deref()
    }
}

impl Default for TaintConfig {
    fn default() -> Self {
        Self {
            results_folder: PathBuf::from("results/flowdroid"),
            jar: None,
            android_sdk: None,
            sources_and_sinks: None,
        }
    }
}

/// Settings of the external payment scanner.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    results_folder: PathBuf,
    script: Option<PathBuf>,
}

impl PaymentConfig {
    /// Gets the working folder of the scanner.
    pub fn results_folder(&self) -> &Path {
        &self.results_folder
    }

    /// Gets the scanner script, if configured.
    pub fn script(&self) -> Option<&Path> {
        self.script.as_deref()
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            results_folder: PathBuf::from("results/paymentscope"),
            script: None,
        }
    }
}

/// Settings of the privacy policy extraction.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    results_folder: PathBuf,
}

impl PolicyConfig {
    /// Gets the folder holding the statements extracted from each policy.
    pub fn results_folder(&self) -> &Path {
        &self.results_folder
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            results_folder: PathBuf::from("results/policy"),
        }
    }
}

impl Config {
    /// Creates a new `Config` struct from a TOML file.
    pub fn from_file<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let contents = fs::read_to_string(config_path.as_ref()).with_context(|| {
            format!(
                "could not read the configuration file `{}`",
                config_path.as_ref().display()
            )
        })?;
        Self::from_toml(&contents)
    }

    /// Parses a configuration from its TOML representation.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context(error::Kind::Parse)?;
        config.check()?;
        Ok(config)
    }

    /// Modifies the options from the CLI.
    pub fn decorate_with_cli(&mut self, cli: &ArgMatches<'_>) -> Result<()> {
        self.set_options(cli);

        self.verbose = cli.is_present("verbose");
        self.quiet = cli.is_present("quiet");
        self.force = cli.is_present("force");
        if cli.is_present("exhaustive") {
            self.caller_strategy = CallerStrategy::Exhaustive;
        }
        if cli.is_present("no-external") {
            self.run_external = false;
        }

        if let Some(threads) = cli.value_of("threads") {
            self.threads = threads.parse().map_err(|_| error::Kind::Config {
                message: format!("invalid number of threads: {}", threads),
            })?;
        }
        if let Some(min) = cli.value_of("min_criticality") {
            self.min_criticality = Criticality::from_str(min).map_err(|_| {
                error::Kind::Config {
                    message: format!("invalid minimum criticality: {}", min),
                }
            })?;
        }

        if let Some(packages) = cli.values_of("package") {
            self.packages = packages.map(PathBuf::from).collect();
        }

        self.check()
    }

    /// Sets the folder and file options from the CLI.
    fn set_options(&mut self, cli: &ArgMatches<'_>) {
        if let Some(dist_folder) = cli.value_of("dist") {
            self.dist_folder = PathBuf::from(dist_folder);
        }
        if let Some(results_folder) = cli.value_of("results") {
            self.results_folder = PathBuf::from(results_folder);
        }
        if let Some(rules_json) = cli.value_of("rules") {
            self.rules_json = PathBuf::from(rules_json);
        }
    }

    /// Checks the values that can not be expressed in the types.
    fn check(&self) -> Result<()> {
        if self.threads == 0 || self.threads > MAX_THREADS {
            return Err(error::Kind::Config {
                message: format!(
                    "the number of threads must be between 1 and {}, found {}",
                    MAX_THREADS, self.threads
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Gets the packages to analyze.
    pub fn packages(&self) -> &[PathBuf] {
        &self.packages
    }

    /// Sets the packages to analyze.
    pub fn set_packages(&mut self, packages: Vec<PathBuf>) {
        self.packages = packages;
    }

    /// Returns true if the application is running in `--verbose` mode, false otherwise.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Returns true if the application is running in `--quiet` mode, false otherwise.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Returns true if the application is running in `--force` mode, false otherwise.
    pub fn is_force(&self) -> bool {
        self.force
    }

    /// Sets the `--force` mode.
    pub fn set_force(&mut self, force: bool) {
        self.force = force;
    }

    /// Whether the external analyzers have to run before the analysis.
    pub fn runs_external(&self) -> bool {
        self.run_external
    }

    /// Returns the `threads` field.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Returns the path to the `dist_folder`.
    pub fn dist_folder(&self) -> &Path {
        &self.dist_folder
    }

    /// Sets the path to the `dist_folder`.
    pub fn set_dist_folder<P: Into<PathBuf>>(&mut self, path: P) {
        self.dist_folder = path.into();
    }

    /// Returns the path to the `results_folder`.
    pub fn results_folder(&self) -> &Path {
        &self.results_folder
    }

    /// Sets the path to the `results_folder`.
    pub fn set_results_folder<P: Into<PathBuf>>(&mut self, path: P) {
        self.results_folder = path.into();
    }

    /// Returns the path to the `rules_json`.
    pub fn rules_json(&self) -> &Path {
        &self.rules_json
    }

    /// Returns the path to the tracker signature list.
    pub fn trackers_json(&self) -> &Path {
        &self.trackers_json
    }

    /// Returns the path to the sensitivity keyword list.
    pub fn keywords_file(&self) -> &Path {
        &self.keywords_file
    }

    /// Returns the minimum criticality of the rules to load.
    pub fn min_criticality(&self) -> Criticality {
        self.min_criticality
    }

    /// Returns the caller resolution strategy.
    pub fn caller_strategy(&self) -> CallerStrategy {
        self.caller_strategy
    }

    /// Sets the caller resolution strategy.
    pub fn set_caller_strategy(&mut self, strategy: CallerStrategy) {
        self.caller_strategy = strategy;
    }

    /// Returns the taint analyzer settings.
    pub fn taint(&self) -> &TaintConfig {
        &self.taint
    }

    /// Returns the payment scanner settings.
    pub fn payment(&self) -> &PaymentConfig {
        &self.payment
    }

    /// Returns the privacy policy extraction settings.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Points every external report folder to the given base folder.
    pub fn set_external_results_folder<P: AsRef<Path>>(&mut self, base: P) {
        self.taint.results_folder = base.as_ref().join("flowdroid");
        self.payment.results_folder = base.as_ref().join("paymentscope");
        self.policy.results_folder = base.as_ref().join("policy");
    }
}

impl Default for Config {
    /// Creates a `Config` struct with default values.
    fn default() -> Self {
        Self {
            packages: Vec::new(),
            verbose: false,
            quiet: false,
            force: false,
            run_external: true,
            threads: num_cpus::get().min(MAX_THREADS),
            dist_folder: PathBuf::from("dist"),
            results_folder: PathBuf::from("results"),
            rules_json: PathBuf::from("rules.json"),
            trackers_json: PathBuf::from("assets/trackers.json"),
            keywords_file: PathBuf::from("assets/pii_keywords.txt"),
            min_criticality: Criticality::Warning,
            caller_strategy: CallerStrategy::default(),
            taint: TaintConfig::default(),
            payment: PaymentConfig::default(),
            policy: PolicyConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::{criticality::Criticality, static_analysis::code::CallerStrategy};
    use std::path::Path;

    #[test]
    fn it_config() {
        let config = Config::default();

        assert!(!config.is_verbose());
        assert!(!config.is_quiet());
        assert!(!config.is_force());
        assert!(config.runs_external());
        assert!(config.threads() >= 1);
        assert_eq!(config.dist_folder(), Path::new("dist"));
        assert_eq!(config.results_folder(), Path::new("results"));
        assert_eq!(config.rules_json(), Path::new("rules.json"));
        assert_eq!(config.min_criticality(), Criticality::Warning);
        assert_eq!(config.caller_strategy(), CallerStrategy::FirstRepresentative);
        assert_eq!(
            config.taint().results_folder(),
            Path::new("results/flowdroid")
        );
        assert!(config.payment().script().is_none());
        assert_eq!(config.policy().results_folder(), Path::new("results/policy"));
    }

    #[test]
    fn it_config_from_toml() {
        let config = Config::from_toml(
            r#"
            threads = 4
            results_folder = "out"
            min_criticality = "medium"
            caller_strategy = "exhaustive"

            [taint]
            results_folder = "out/flowdroid"
            jar = "vendor/flowdroid.jar"
            android_sdk = "/opt/android-sdk"

            [payment]
            script = "vendor/PaymentScope/src/python/paymentScope.py"

            [policy]
            results_folder = "out/policy"
            "#,
        )
        .unwrap();

        assert_eq!(config.threads(), 4);
        assert_eq!(config.results_folder(), Path::new("out"));
        assert_eq!(config.dist_folder(), Path::new("dist"));
        assert_eq!(config.min_criticality(), Criticality::Medium);
        assert_eq!(config.caller_strategy(), CallerStrategy::Exhaustive);
        assert_eq!(config.taint().jar(), Some(Path::new("vendor/flowdroid.jar")));
        assert_eq!(
            config.payment().results_folder(),
            Path::new("results/paymentscope")
        );
        assert_eq!(config.policy().results_folder(), Path::new("out/policy"));
    }

    #[test]
    fn it_rejects_invalid_config() {
        assert!(Config::from_toml("threads = 0").is_err());
        assert!(Config::from_toml("min_criticality = \"severe\"").is_err());
        assert!(Config::from_toml("caller_strategy = \"random\"").is_err());
    }

    #[test]
    fn it_loads_the_shipped_config() {
        let config = Config::from_file("config.toml").unwrap();
        assert_eq!(config.rules_json(), Path::new("rules.json"));
    }
}
