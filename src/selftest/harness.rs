/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

//! Running a list of named checks and tallying the results.

use crate::FailResult;
use crate::config::Settings;

/// A named self-check.
#[derive(Clone, Copy)]
pub struct Check {
    pub name: &'static str,
    pub run: fn(&Settings) -> Outcome,
}

/// Result of a single check.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Pass,
    /// Carries a dump of the operands involved.
    Fail(String),
}

impl Outcome {
    /// Pass if `ok`, else fail with the (lazily built) diagnostic.
    pub fn from_bool<F>(ok: bool, diagnostic: F) -> Outcome
    where F: FnOnce() -> String,
    {
        match ok {
            true => Outcome::Pass,
            false => Outcome::Fail(diagnostic()),
        }
    }

    /// Run a fallible check body, turning an error into a failure.
    pub fn guard<E, F>(body: F) -> Outcome
    where
        E: std::fmt::Display,
        F: FnOnce() -> Result<Outcome, E>,
    {
        body().unwrap_or_else(|e| Outcome::Fail(format!("unexpected error: {}", e)))
    }

    /// Continue with `next` only if this outcome passed.
    pub fn and_then<F>(self, next: F) -> Outcome
    where F: FnOnce() -> Outcome,
    {
        match self {
            Outcome::Pass => next(),
            fail => fail,
        }
    }

    pub fn is_pass(&self) -> bool
    { *self == Outcome::Pass }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn all_passed(&self) -> bool
    { self.failed == 0 }
}

/// Make sure every skipped name refers to an actual check.
pub fn validate_skips(checks: &[Check], settings: &Settings) -> FailResult<()> {
    for name in &settings.skip {
        if !checks.iter().any(|c| c.name == name.as_str()) {
            failure::bail!("cannot skip unknown check '{}'", name);
        }
    }
    Ok(())
}

/// Run each check not named in `settings.skip`, logging each result.
pub fn run_checks(checks: &[Check], settings: &Settings) -> FailResult<Summary> {
    validate_skips(checks, settings)?;

    let mut summary = Summary::default();
    for check in checks {
        if settings.skip.iter().any(|s| s.as_str() == check.name) {
            debug!("{}: skipped", check.name);
            summary.skipped += 1;
            continue;
        }

        trace!("{}: running", check.name);
        match (check.run)(settings) {
            Outcome::Pass => {
                info!("{}: ok", check.name);
                summary.passed += 1;
            },
            Outcome::Fail(diagnostic) => {
                error!("{}: FAILED", check.name);
                for line in diagnostic.lines() {
                    error!("    {}", line);
                }
                summary.failed += 1;
            },
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass(_: &Settings) -> Outcome { Outcome::Pass }
    fn fail(_: &Settings) -> Outcome { Outcome::Fail("nope".into()) }

    const CHECKS: &[Check] = &[
        Check { name: "a", run: pass },
        Check { name: "b", run: fail },
        Check { name: "c", run: pass },
    ];

    #[test]
    fn tallies() {
        let _ = env_logger::try_init();

        let summary = run_checks(CHECKS, &Settings::default()).unwrap();
        assert_eq!(summary, Summary { passed: 2, failed: 1, skipped: 0 });
        assert!(!summary.all_passed());

        let settings = Settings { skip: vec!["b".into()], ..Default::default() };
        let summary = run_checks(CHECKS, &settings).unwrap();
        assert_eq!(summary, Summary { passed: 2, failed: 0, skipped: 1 });
        assert!(summary.all_passed());
    }

    #[test]
    fn unknown_skip_is_an_error() {
        let settings = Settings { skip: vec!["d".into()], ..Default::default() };
        assert!(run_checks(CHECKS, &settings).is_err());
    }

    #[test]
    fn outcome_combinators() {
        assert_eq!(Outcome::from_bool(true, || unreachable!()), Outcome::Pass);
        assert_eq!(
            Outcome::from_bool(false, || "x".into()).and_then(|| Outcome::Pass),
            Outcome::Fail("x".into()),
        );
        let guarded = Outcome::guard(|| Err::<Outcome, _>("boom"));
        assert_eq!(guarded, Outcome::Fail("unexpected error: boom".into()));
    }
}
