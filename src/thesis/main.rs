//! # Thesis CLI
//!
//! The binary is thin: the CLI lives in `src/thesis/cli/`, while this file only
//! invokes `cli::run()` and turns a failure into an exit code. Everything the CLI
//! calls goes through [`thesis::api`].
//!
//! Terminal output is rendered from minijinja templates in `cli/templates/`,
//! embedded with `include_str!()` and styled through a `style` filter backed by
//! `console` styles. Colors follow terminal detection unless `--no-color` is given.

mod cli;

fn main() {
    match cli::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
