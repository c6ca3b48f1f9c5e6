//! The `check` command: lex, parse and resolve without running.

use super::{read_file, report, report_warnings, CliOptions};
use crate::check_source;

pub fn check_file(path: &str, options: &CliOptions) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(e) => return report(&e, "", options.verbose),
    };
    match check_source(&source, options.resolver_options()) {
        Ok(front) => {
            report_warnings(&front.resolutions, &source, options.verbose);
            0
        }
        Err(e) => report(&e, &source, options.verbose),
    }
}
