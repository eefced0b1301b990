//! Sortscope command line entry point

fn main() {
    if let Err(e) = sortscope::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
