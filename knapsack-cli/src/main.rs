//! Entry point for the `knapsack` binary.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = knapsack_cli::run() {
        eprintln!("knapsack: {err}");
        std::process::exit(1);
    }
}
