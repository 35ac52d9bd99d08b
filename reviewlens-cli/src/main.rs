//! Entry point for the `reviewlens` binary.
#![forbid(unsafe_code)]

use reviewlens_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() {
    match reviewlens_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("reviewlens: {err}");
            std::process::exit(1);
        }
    }
}
