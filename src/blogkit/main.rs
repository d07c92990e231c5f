//! The `blogkit` binary is a thin shell: the CLI lives in `cli/`, this file
//! only invokes `cli::run()` and turns an error into exit status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
