//! bezpath CLI
//!
//! Builds the piecewise Bezier path for a JSON list of control points and
//! prints its polyline, length, and points along it.
//!
//! # Usage
//!
//! ```bash
//! # Summary of a path
//! bezpath path.json
//!
//! # Denser sampling, with every polyline point listed
//! bezpath path.json --step 0.01 --points
//!
//! # Where is the marker halfway along?
//! bezpath path.json --fraction 0.5
//! ```

mod inspect;

use std::process;

use inspect::Command;

fn print_usage() {
    eprintln!(
        r#"bezpath - piecewise Bezier path inspector

USAGE:
    bezpath <path.json> [OPTIONS]

ARGS:
    <path.json>        {{ "points": [[x, y, z], ...], "step": 0.1 }}

OPTIONS:
    --step <S>         Sampling step, clamped to the configured range
    --config <FILE>    JSON file with min_step, max_step, default_step, pick_radius
    --fraction <F>     Report the point at fraction F of the path length
    --position <P>     Report the point at arc length P
    --points           List every polyline point
    --summary          Print the summary only (default)
    --help             Show this help message
"#
    );
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match inspect::parse_args(&args) {
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Ok(Command::Run(options)) => options,
        Err(e) => {
            eprintln!("Error: {:#}\n", e);
            print_usage();
            process::exit(1);
        }
    };

    let result = inspect::load_model(&options).and_then(|model| inspect::report(&model, &options));
    match result {
        Ok(text) => print!("{}", text),
        Err(e) => {
            log::error!("{:#}", e);
            process::exit(1);
        }
    }
}
