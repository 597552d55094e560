use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("stackcalc: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
