fn main() {
    if let Err(err) = dt_fix::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
