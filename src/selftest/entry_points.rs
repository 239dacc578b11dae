/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

use clap::{App, Arg, ArgMatches};

use crate::FailResult;
use crate::config::Settings;
use crate::harness::{self, Check};
use crate::logging::GlobalLogger;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            eprintln!("ERROR: {}", cause);
        }
        std::process::exit(1);
    });
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("fixmat-selftest")
        .version(clap::crate_version!())
        .about("Runs the named self-checks of the fixmat matrix kernel.")
        .args(&[
            Arg::with_name("config")
                .short("c").long("config")
                .takes_value(true).value_name("FILE")
                .help("settings yaml (tolerances, checks to skip)"),
            Arg::with_name("log")
                .long("log")
                .takes_value(true).value_name("FILE")
                .help("also write the log to this file"),
            Arg::with_name("verbose")
                .short("v").long("verbose")
                .multiple(true)
                .help("log more; may be repeated"),
            Arg::with_name("no_color")
                .long("no-color")
                .help("do not color log levels"),
            Arg::with_name("list")
                .long("list")
                .help("print the check names and exit"),
        ])
}

/// Runs the checks requested by the command line and returns whether all passed.
pub fn run_from_matches(matches: &ArgMatches, checks: &[Check]) -> FailResult<bool> {
    if matches.is_present("list") {
        for check in checks {
            println!("{}", check.name);
        }
        return Ok(true);
    }

    let settings = match matches.value_of("config") {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let summary = harness::run_checks(checks, &settings)?;
    info!("{} passed, {} failed, {} skipped", summary.passed, summary.failed, summary.skipped);
    Ok(summary.all_passed())
}

pub fn selftest() {
    wrap_result_main(|| {
        let matches = app().get_matches();

        let mut logger = GlobalLogger::new();
        logger.verbosity(matches.occurrences_of("verbose") as i32);
        logger.color(!matches.is_present("no_color"));
        if let Some(path) = matches.value_of("log") {
            logger.path(path);
        }
        logger.apply()?;

        if !run_from_matches(&matches, crate::checks::ALL)? {
            failure::bail!("some checks failed");
        }
        Ok(())
    });
}
