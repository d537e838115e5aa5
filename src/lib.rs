//! MetaDetector
//!
//! Static security and privacy analyzer for Android and VR application packages. The packages
//! are not decompiled here: an external bytecode library exports the program and the manifest
//! of each package, and external analyzers leave their taint and payment reports on disk. This
//! crate queries the exported program with a set of pattern rules, classifies the manifest,
//! correlates the external reports and writes one JSON report per package.

#![forbid(
    overflowing_literals,
    stable_features,
    unconditional_recursion,
    unused_allocation,
    while_true,
    unused_parens,
    unused_comparisons,
    unused_import_braces,
    unused_results,
    improper_ctypes,
    non_shorthand_field_patterns,
    mutable_transmutes,
    no_mangle_const_items
)]
#![deny(
    unused_qualifications,
    unused,
    unused_attributes,
    unused_extern_crates
)]
#![warn(missing_debug_implementations, trivial_casts, trivial_numeric_casts)]

pub mod cli;
mod config;
mod criticality;
pub mod error;
pub mod external;
pub mod model;
pub mod results;
pub mod static_analysis;
mod utils;

pub use crate::{
    config::{Config, PaymentConfig, PolicyConfig, TaintConfig},
    criticality::Criticality,
    utils::{collect_packages, get_package_name, print_vulnerability, print_warning},
};

use crate::{
    external::ExternalAnalyzer,
    results::Results,
    static_analysis::{static_analysis, Artifact, Catalog},
};
use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use log::{info, Level, LevelFilter};
use std::{
    env,
    io::Write,
    path::{Path, PathBuf},
    time::Instant,
};

/// Initializes the config with the config files and command line options.
///
/// On UNIX, if the local file (`config.toml`) does not exist, but the global one does
/// (`/etc/meta-detector/config.toml`), the latter is used. Otherwise, the local file is used.
/// Finally, if none of the files could be loaded, the default config is used.
pub fn initialize_config(cli: &ArgMatches<'_>) -> Result<Config> {
    let config_path = PathBuf::from("config.toml");
    let global_config_path = PathBuf::from("/etc/meta-detector/config.toml");

    let mut config =
        if cfg!(target_family = "unix") && !config_path.exists() && global_config_path.exists() {
            Config::from_file(&global_config_path).context(
                "there was an error when reading the /etc/meta-detector/config.toml file",
            )?
        } else if config_path.exists() {
            Config::from_file(&config_path)
                .context("there was an error when reading the config.toml file")?
        } else {
            print_warning("config file not found. Using default configuration");
            Config::default()
        };

    config
        .decorate_with_cli(cli)
        .context("there was an error reading config from CLI")?;

    Ok(config)
}

/// Initializes the logger.
///
/// `RUST_LOG` overrides the default filter, which shows debug messages of this crate only in
/// verbose mode.
pub fn initialize_logger(is_verbose: bool) {
    let log_level = if is_verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    let _ = builder.format(|buf, record| match record.level() {
        Level::Warn => writeln!(
            buf,
            "{}{}",
            "Warning: ".bold().yellow(),
            record.args().to_string().yellow()
        ),
        Level::Error => writeln!(
            buf,
            "{}{}",
            "Error: ".bold().red(),
            record.args().to_string().red()
        ),
        Level::Debug => writeln!(
            buf,
            "{}{}",
            "Debug: ".bold(),
            record.args().to_string().bold()
        ),
        Level::Info => writeln!(buf, "{}", record.args()),
        Level::Trace => writeln!(buf, "{}: {}", record.level(), record.args()),
    });

    let _ = if let Ok(env_log) = env::var("RUST_LOG") {
        builder.parse_filters(&env_log)
    } else {
        builder
            .filter_module("meta_detector_core", log_level)
            .filter_module("meta_detector", log_level)
    };

    if let Err(e) = builder.try_init() {
        println!("could not initialize logger: {}", e);
    }
}

/// Analyzes the given package with the given config.
///
/// The external analyzers run first, then the static analysis over the program export of the
/// package. Returns `None` if the package was already analyzed.
pub fn analyze_package<P: AsRef<Path>>(
    package: P,
    config: &Config,
    catalog: &Catalog,
    analyzers: &[Box<dyn ExternalAnalyzer>],
) -> Result<Option<Results>> {
    let package = package.as_ref();
    let base_name = get_package_name(package);
    if !config.is_quiet() {
        println!();
        println!("Starting analysis of {}.", base_name.italic());
    }
    let start_time = Instant::now();

    let mut results = match Results::init(config, package) {
        Some(results) => results,
        None => return Ok(None),
    };

    let export_path = config.dist_folder().join(format!("{}.json", base_name));
    let (manifest, program) = Artifact::from_file(&export_path)?.into_parts();
    info!(
        "Program model of {} loaded: {} methods.",
        base_name.italic(),
        program.method_count()
    );

    run_external_analyzers(package, analyzers, config, &mut results);
    static_analysis(&program, &manifest, &base_name, catalog, config, &mut results);

    results.generate_report(config).with_context(|| {
        format!(
            "there was an error generating the results report. Tried to generate at: {}",
            results.report_folder(config).display()
        )
    })?;

    if config.is_verbose() {
        info!(
            "Analysis of {} finished in {:.2}s.",
            base_name.italic(),
            start_time.elapsed().as_secs_f64()
        );
    } else if !config.is_quiet() {
        println!("Report of {} generated.", base_name.italic());
    }

    Ok(Some(results))
}

/// Runs every external analyzer over the package.
///
/// Failures are attached to the report as warnings; the analysis goes on with whatever reports
/// the tools left.
pub fn run_external_analyzers(
    package: &Path,
    analyzers: &[Box<dyn ExternalAnalyzer>],
    config: &Config,
    results: &mut Results,
) {
    for analyzer in analyzers {
        if let Err(e) = analyzer.run(package, config) {
            let warning = format!("{:#}", e);
            print_warning(&warning);
            results.add_warning(warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{analyze_package, external::ExternalAnalyzer};
    use crate::{
        error,
        static_analysis::{
            code::parse_rules,
            payment::{marker_file_name, NO_PURCHASE_FOUND},
            taint::Keywords,
            trackers::parse_trackers,
            Catalog,
        },
        Config, Criticality,
    };
    use anyhow::Result;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    /// Stands in for the payment scanner: leaves the marker library behind.
    struct UnityMarker;

    impl ExternalAnalyzer for UnityMarker {
        fn name(&self) -> &str {
            "unity-marker"
        }

        fn run(&self, _artifact: &Path, config: &Config) -> Result<()> {
            let dir = config.payment().results_folder().join("game");
            fs::create_dir_all(&dir)?;
            fs::write(dir.join(marker_file_name("game")), b"\x7fELF")?;
            Ok(())
        }
    }

    struct Broken;

    impl ExternalAnalyzer for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn run(&self, _artifact: &Path, _config: &Config) -> Result<()> {
            Err(error::Kind::ExternalToolFailure {
                tool: self.name().to_owned(),
                message: "exit status: 1".to_owned(),
            }
            .into())
        }
    }

    const EXPORT: &str = r#"{
        "manifest": {
            "package": "com.example.game",
            "app_name": "Example Game",
            "version_code": 3,
            "version_name": "1.2",
            "min_sdk": 29,
            "permissions": [
                "android.permission.INTERNET",
                "com.oculus.permission.HAND_TRACKING",
                "com.example.permission.CUSTOM"
            ],
            "allow_backup": true,
            "activities": [{ "name": ".MainActivity", "launch_mode": "singleTask" }]
        },
        "program": {
            "classes": [
                {
                    "name": "Ljavax/crypto/Cipher;",
                    "external": true,
                    "methods": [{ "name": "getInstance", "descriptor": "(Ljava/lang/String;)Ljavax/crypto/Cipher;" }]
                },
                {
                    "name": "Lcom/example/game/Crypto;",
                    "methods": [{
                        "name": "encrypt",
                        "descriptor": "([B)[B",
                        "instructions": [
                            { "opcode": "const-string", "operands": [{ "register": 0 }, { "string": "AES/ECB/PKCS5Padding" }] }
                        ]
                    }]
                },
                {
                    "name": "Lcom/example/game/R$id;",
                    "fields": [{ "name": "password_edittext", "value": 2131230866 }]
                },
                {
                    "name": "Lcom/appsflyer/AppsFlyerLib;",
                    "methods": [{ "name": "init", "descriptor": "()V", "instructions": [] }]
                }
            ],
            "strings": [
                { "value": "AES/ECB/PKCS5Padding", "sites": [{ "class": "Lcom/example/game/Crypto;", "name": "encrypt", "descriptor": "([B)[B" }] },
                { "value": "8.8.8.8" }
            ],
            "xrefs": [{
                "caller": { "class": "Lcom/example/game/Crypto;", "name": "encrypt", "descriptor": "([B)[B" },
                "callee": { "class": "Ljavax/crypto/Cipher;", "name": "getInstance", "descriptor": "(Ljava/lang/String;)Ljavax/crypto/Cipher;" },
                "offset": 1
            }]
        }
    }"#;

    const TAINT_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DataFlowResults FileFormatVersion="102">
  <Results>
    <Result>
      <Sink Statement="virtualinvoke $r2.&lt;java.io.OutputStream: void write(byte[])&gt;($r3)" Method="&lt;com.example.game.Net: void send()&gt;"/>
      <Sources>
        <Source Statement="$r0 = virtualinvoke $r1.&lt;android.app.Activity: android.view.View findViewById(int)&gt;(2131230866)" Method="&lt;com.example.game.Login: void onCreate(android.os.Bundle)&gt;"/>
      </Sources>
    </Result>
  </Results>
</DataFlowResults>"#;

    fn catalog() -> Catalog {
        let rules = parse_rules(fs::File::open("rules.json").unwrap(), Criticality::Warning).unwrap();
        let trackers = parse_trackers(
            r#"{"trackers": [{"name": "AppsFlyer", "website": "https://www.appsflyer.com/", "code_signature": "com.appsflyer."}]}"#
                .as_bytes(),
        )
        .unwrap();
        let keywords: Keywords = vec!["password_edittext"].into_iter().collect();
        Catalog::new(rules, keywords, trackers)
    }

    #[test]
    fn it_analyzes_a_package() {
        let dir = TempDir::new().unwrap();
        let dist = dir.path().join("dist");
        let results_folder = dir.path().join("results");
        fs::create_dir_all(&dist).unwrap();
        fs::write(dist.join("game.json"), EXPORT).unwrap();

        let mut config = Config::default();
        config.set_dist_folder(&dist);
        config.set_results_folder(&results_folder);
        config.set_external_results_folder(&results_folder);
        fs::create_dir_all(config.taint().results_folder()).unwrap();
        fs::write(
            config.taint().results_folder().join("game.xml"),
            TAINT_REPORT,
        )
        .unwrap();

        let analyzers: Vec<Box<dyn ExternalAnalyzer>> = vec![Box::new(UnityMarker), Box::new(Broken)];
        let results = analyze_package(dir.path().join("game.apk"), &config, &catalog(), &analyzers)
            .unwrap()
            .unwrap();

        assert_eq!(results.app_package(), "com.example.game");
        assert_eq!(results.leaked_keys(), ["password_edittext"]);
        assert_eq!(results.warnings().count(), 1);

        let report: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(results_folder.join("game").join("results.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(report["app"]["target_sdk"], 29);
        assert_eq!(report["app"]["allow_backup"], true);
        assert_eq!(
            report["app"]["permissions"]["dangerous"],
            serde_json::json!(["INTERNET", "HAND_TRACKING"])
        );
        assert_eq!(report["app"]["permissions"]["others"][0], "com.example.permission.CUSTOM");
        assert_eq!(
            report["app"]["activities_launch_mode"]["com.example.game.MainActivity"],
            "singleTask"
        );
        assert_eq!(
            report["code_analysis"]["risky_cryptographic_algorithms"]["improper_encrypt_functions"]
                ["ecb_mode"][0],
            "Lcom/example/game/Crypto;.encrypt"
        );
        assert_eq!(
            report["code_analysis"]["risky_cryptographic_algorithms"]["insecure_hash_functions"]
                .as_array()
                .unwrap()
                .len(),
            0
        );
        assert_eq!(report["code_analysis"]["ip_disclosure"]["ipv4"][0], "8.8.8.8");
        assert_eq!(
            report["code_analysis"]["trackers"][0]["AppsFlyer"],
            "https://www.appsflyer.com/"
        );
        assert_eq!(
            report["payment_vulnerable"]["payment_vulnerability_type"][0],
            NO_PURCHASE_FOUND
        );
        assert!(report["warnings"][0]
            .as_str()
            .unwrap()
            .contains("the external tool `broken` failed"));

        assert!(analyze_package(dir.path().join("game.apk"), &config, &catalog(), &[])
            .unwrap()
            .is_none());
    }

    #[test]
    fn it_fails_without_an_export() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set_dist_folder(dir.path().join("dist"));
        config.set_results_folder(dir.path().join("results"));

        assert!(analyze_package("missing.apk", &config, &catalog(), &[]).is_err());
    }
}
