//! MetaDetector command line entry point.

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
    non_shorthand_field_patterns
)]
#![deny(
    unused_qualifications,
    unused,
    unused_attributes,
    unused_extern_crates
)]

use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;
use log::error;
use meta_detector_core::{
    analyze_package, cli, collect_packages, external::configured_analyzers, initialize_config,
    initialize_logger, print_warning, results::Summary, static_analysis::Catalog,
};
use std::{
    path::PathBuf,
    process,
    sync::{Arc, Mutex},
    thread,
};

fn main() {
    let cli = cli::generate_cli().get_matches();
    let verbose = cli.is_present("verbose");
    initialize_logger(verbose);

    if let Err(e) = run(&cli) {
        error!("{}", e);

        for e in e.chain().skip(1) {
            error!("\tcaused by: {}", e);
        }

        if !verbose {
            println!(
                "If you need more information, try to run the program again with the {} flag.",
                "-v".bold()
            );
        }

        process::exit(1);
    }
}

/// Analyzes every requested package with a pool of worker threads.
fn run(cli: &ArgMatches<'_>) -> Result<()> {
    let config = initialize_config(cli)?;
    let packages = collect_packages(config.packages())?;
    if packages.is_empty() {
        print_warning("no packages to analyze");
        return Ok(());
    }

    let total = packages.len();
    let threads = config.threads().min(total);
    if !config.is_quiet() {
        println!(
            "Starting the analysis of {} packages with {} threads.",
            format!("{}", total).bold(),
            format!("{}", threads).bold()
        );
    }

    let config = Arc::new(config);
    let catalog = Arc::new(Catalog::load(&config)?);
    let analyzers = Arc::new(configured_analyzers(&config));
    let queue: Arc<Mutex<Vec<PathBuf>>> =
        Arc::new(Mutex::new(packages.into_iter().rev().collect()));
    let summary = Arc::new(Mutex::new(Summary::default()));
    let failures = Arc::new(Mutex::new(0_usize));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let thread_queue = Arc::clone(&queue);
            let thread_config = Arc::clone(&config);
            let thread_catalog = Arc::clone(&catalog);
            let thread_analyzers = Arc::clone(&analyzers);
            let thread_summary = Arc::clone(&summary);
            let thread_failures = Arc::clone(&failures);

            thread::spawn(move || loop {
                let package = match thread_queue.lock().ok().and_then(|mut q| q.pop()) {
                    Some(package) => package,
                    None => break,
                };

                match analyze_package(
                    &package,
                    &thread_config,
                    &thread_catalog,
                    &thread_analyzers,
                ) {
                    Ok(Some(results)) => {
                        if let Ok(mut summary) = thread_summary.lock() {
                            summary.add(&results);
                        }
                    }
                    Ok(None) => {
                        if let Ok(mut summary) = thread_summary.lock() {
                            if let Err(e) = summary.add_existing(&thread_config, &package) {
                                print_warning(format!(
                                    "the previous report of `{}` will not be summarized: {:#}",
                                    package.display(),
                                    e
                                ));
                            }
                        }
                    }
                    Err(e) => {
                        error!("could not analyze `{}`: {:#}", package.display(), e);
                        if let Ok(mut failures) = thread_failures.lock() {
                            *failures += 1;
                        }
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        if let Err(e) = handle.join() {
            print_warning(format!(
                "an error occurred when joining the analysis threads: {:?}",
                e
            ));
        }
    }

    if total > 1 {
        if let Ok(summary) = summary.lock() {
            if !summary.is_empty() {
                let path = summary.write(&config)?;
                if !config.is_quiet() {
                    println!("Summary written to {}.", path.display());
                }
            }
        }
    }

    let failed = failures.lock().map(|f| *f).unwrap_or_default();
    if failed > 0 {
        anyhow::bail!("{} of {} packages could not be analyzed", failed, total);
    }
    Ok(())
}
