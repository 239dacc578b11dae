/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

use fixmat::selftest::{checks, run_checks, Settings, Summary};

#[test]
fn all_checks_pass() {
    let _ = env_logger::try_init();

    let summary = run_checks(checks::ALL, &Settings::default()).unwrap();
    assert_eq!(summary, Summary { passed: checks::ALL.len(), failed: 0, skipped: 0 });
}

#[test]
fn settings_from_yaml() {
    let settings = Settings::from_yaml_str("
tolerance:
  equals: 1.0e-6
skip:
  - rotation
  - inverse-4x4
").unwrap();

    let summary = run_checks(checks::ALL, &settings).unwrap();
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.failed, 0);
}

#[test]
fn unknown_skip_is_rejected() {
    let settings = Settings::from_yaml_str("skip: [no-such-check]").unwrap();
    assert!(run_checks(checks::ALL, &settings).is_err());
}
