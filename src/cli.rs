use clap::{crate_version, App, Arg};

/// Generates the command line interface.
pub fn generate_cli() -> App<'static, 'static> {
    App::new("MetaDetector")
        .version(crate_version!())
        .about("Audits Android and VR application packages for vulnerabilities")
        .arg(
            Arg::with_name("package")
                .help("The package file or a directory of packages to analyze")
                .value_name("PACKAGE")
                .required(true)
                .multiple(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .conflicts_with("quiet")
                .help("If you'd like the auditor to talk more than necessary"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("If you'd like a zen auditor that won't output anything in stdout"),
        )
        .arg(
            Arg::with_name("force")
                .long("force")
                .help("If you'd like to force the auditor to analyze again packages with a report"),
        )
        .arg(
            Arg::with_name("threads")
                .short("t")
                .long("threads")
                .value_name("THREADS")
                .takes_value(true)
                .help("Number of packages analyzed at the same time"),
        )
        .arg(
            Arg::with_name("dist")
                .long("dist")
                .value_name("DIST_FOLDER")
                .takes_value(true)
                .help("Folder containing the program exports"),
        )
        .arg(
            Arg::with_name("results")
                .long("results")
                .value_name("RESULTS_FOLDER")
                .takes_value(true)
                .help("Folder where the reports are written"),
        )
        .arg(
            Arg::with_name("rules")
                .long("rules")
                .value_name("RULES")
                .takes_value(true)
                .help("Path to a JSON rules file"),
        )
        .arg(
            Arg::with_name("min_criticality")
                .long("min-criticality")
                .value_name("CRITICALITY")
                .takes_value(true)
                .possible_values(&["warning", "low", "medium", "high", "critical"])
                .help("Ignores the rules under the given criticality"),
        )
        .arg(
            Arg::with_name("exhaustive")
                .long("exhaustive")
                .help("Records every caller of a matched method instead of the first one"),
        )
        .arg(
            Arg::with_name("no-external")
                .long("no-external")
                .help("Does not run the external analyzers, only reads their existing reports"),
        )
}

#[cfg(test)]
mod tests {
    use super::generate_cli;

    #[test]
    fn it_parses_the_flags() {
        let matches = generate_cli()
            .get_matches_from_safe(vec![
                "meta-detector",
                "--exhaustive",
                "--min-criticality",
                "medium",
                "-t",
                "4",
                "apps",
            ])
            .unwrap();

        assert!(matches.is_present("exhaustive"));
        assert!(!matches.is_present("no-external"));
        assert_eq!(matches.value_of("min_criticality"), Some("medium"));
        assert_eq!(matches.value_of("threads"), Some("4"));
        assert_eq!(matches.values_of("package").unwrap().collect::<Vec<_>>(), ["apps"]);
    }

    #[test]
    fn it_requires_a_package() {
        assert!(generate_cli()
            .get_matches_from_safe(vec!["meta-detector", "--force"])
            .is_err());
        assert!(generate_cli()
            .get_matches_from_safe(vec!["meta-detector", "-v", "-q", "app.apk"])
            .is_err());
    }
}
