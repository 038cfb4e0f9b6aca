fn main() {
    if let Err(err) = olympic_standings::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
