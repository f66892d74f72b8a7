fn main() {
    if let Err(e) = local_history_parser::cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
