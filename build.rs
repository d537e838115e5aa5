use clap::Shell;
use std::{env, path::PathBuf};

#[path = "src/cli.rs"]
mod cli;

fn main() {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let mut out_dir = match env::var_os("OUT_DIR") {
        Some(out_dir) => PathBuf::from(out_dir),
        None => return,
    };
    let _ = out_dir.pop();
    let _ = out_dir.pop();
    let _ = out_dir.pop();

    let mut cli = cli::generate_cli();
    cli.gen_completions("meta-detector", Shell::Bash, &out_dir);
    cli.gen_completions("meta-detector", Shell::Fish, &out_dir);
    cli.gen_completions("meta-detector", Shell::Zsh, &out_dir);
}
