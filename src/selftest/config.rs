/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

//! Settings for a selftest run, read from YAML.
//!
//! Every field has a default, so an empty mapping is a valid config file.
//!
//! ```yaml
//! tolerance:
//!   inverse_4x4: 1e-10
//! skip:
//!   - rotation
//! ```

use std::io::Read;
use std::path::Path;

use serde_derive::{Serialize, Deserialize};

use crate::FailResult;

/// Root settings object.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub tolerance: Tolerances,

    /// Names of checks that should not be run.
    ///
    /// Naming a check that does not exist is an error.
    pub skip: Vec<String>,
}

/// Absolute per-element tolerances used by the checks.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Tolerances {
    /// Used by the tolerance equality check.
    pub equals: f64,
    /// Fallback for the 2x2 inverse when it is not bit-for-bit exact.
    pub inverse_2x2: f64,
    pub inverse_3x3: f64,
    pub inverse_4x4: f64,
    /// Used by the matrix times vector checks.
    pub homogeneous: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tolerance: Default::default(),
            skip: vec![],
        }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances {
            equals: 1e-7,
            inverse_2x2: 1e-15,
            inverse_3x3: 1e-15,
            inverse_4x4: 1e-9,
            homogeneous: 1e-12,
        }
    }
}

impl Settings {
    pub fn from_reader<R: Read>(r: R) -> FailResult<Self>
    { Ok(serde_yaml::from_reader(r)?) }

    pub fn from_yaml_str(s: &str) -> FailResult<Self>
    { Ok(serde_yaml::from_str(s)?) }

    pub fn load<P: AsRef<Path>>(path: P) -> FailResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            failure::format_err!("could not open config file '{}': {}", path.display(), e)
        })?;
        let settings = Self::from_reader(file)?;
        debug!("read settings from '{}': {:?}", path.display(), settings);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let settings = Settings::from_yaml_str("
tolerance:
  inverse_4x4: 1.0e-10
skip: [rotation]
").unwrap();

        assert_eq!(settings.tolerance.inverse_4x4, 1e-10);
        assert_eq!(settings.tolerance.equals, 1e-7);
        assert_eq!(settings.tolerance.homogeneous, 1e-12);
        assert_eq!(settings.skip, vec!["rotation".to_string()]);
    }

    #[test]
    fn empty_mapping_is_default() {
        assert_eq!(Settings::from_yaml_str("{}").unwrap(), Settings::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Settings::from_yaml_str("tolerence: {}").is_err());
        assert!(Settings::from_yaml_str("tolerance: {inverse_5x5: 1.0}").is_err());
    }

    #[test]
    fn reads_file() {
        let dir = tempdir::TempDir::new("fixmat-selftest").unwrap();
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, "skip: [direct-sum, transpose]\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.skip.len(), 2);
        assert!(Settings::load(dir.path().join("missing.yaml")).is_err());
    }
}
