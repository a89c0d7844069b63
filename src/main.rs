use anagram_solver::cli::Cli;
use anagram_solver::report::render;
use anagram_solver::solve;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let Some(pairs) = cli.pairs() else {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "GOAL is required unless --scramble is given",
            )
            .exit()
    };
    let options = cli.report_options();

    let mut failed = false;
    for (start, goal) in pairs {
        println!("{} -> {}", start, goal);

        let result = solve(&start, &goal);
        print!("{}", render(&result, options));
        println!();

        failed |= result.is_err();
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
