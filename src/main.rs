use {
    aoc2024::{solutions, Args, Parser},
    std::process::ExitCode,
};

fn main() -> ExitCode {
    let args: Args = Args::parse();

    match solutions().run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");

            ExitCode::FAILURE
        }
    }
}
