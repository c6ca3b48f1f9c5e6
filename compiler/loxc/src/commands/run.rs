//! The `run` command: execute a Lox script.

use lox_eval::stdout_handler;

use super::{read_file, report, report_warnings, CliOptions};
use crate::{frontend, run_program};

pub fn run_file(path: &str, options: &CliOptions) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(e) => return report(&e, "", options.verbose),
    };
    let front = match frontend(&source, options.resolver_options()) {
        Ok(front) => front,
        Err(e) => return report(&e, &source, options.verbose),
    };
    report_warnings(&front.resolutions, &source, options.verbose);
    match run_program(&front, options.eval_config(), stdout_handler()) {
        Ok(()) => 0,
        Err(e) => report(&e, &source, options.verbose),
    }
}
