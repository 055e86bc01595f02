fn main() {
    if let Err(e) = partialjson::cli::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
