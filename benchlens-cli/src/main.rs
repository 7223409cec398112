//! Benchlens binary entry point.

fn main() {
    if let Err(err) = benchlens_cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
