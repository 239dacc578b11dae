/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

use std::fmt;
use std::path::{Path, PathBuf};

use log::{Level, LevelFilter};

use crate::FailResult;

const CRATE_TARGETS: &[&str] = &["fixmat_selftest", "fixmat_array_types"];

/// Builder-style setup for logging
#[derive(Debug, Clone, Default)]
pub struct GlobalLogger {
    path: Option<PathBuf>,
    verbosity: Verbosity,
    color: bool,
}

impl GlobalLogger {
    pub fn new() -> Self
    { GlobalLogger { color: true, ..Default::default() } }

    /// Also write everything to a file.
    pub fn path<P: AsRef<Path>>(&mut self, path: P) -> &mut Self
    { self.path = Some(path.as_ref().to_owned()); self }

    /// Any integer will be accepted; the level will be truncated
    /// to the most extreme value supported.
    pub fn verbosity(&mut self, level: i32) -> &mut Self
    {
        self.verbosity = match level {
            i32::MIN..=0 => Verbosity::Default,
            1 => Verbosity::Loud,
            _ => Verbosity::Louder,
        };
        self
    }

    pub fn color(&mut self, color: bool) -> &mut Self
    { self.color = color; self }

    fn crate_level(&self) -> LevelFilter {
        match self.verbosity {
            Verbosity::Default => LevelFilter::Info,
            Verbosity::Loud => LevelFilter::Debug,
            Verbosity::Louder => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity { Default, Loud, Louder }

impl Default for Verbosity {
    fn default() -> Self { Verbosity::Default }
}

impl GlobalLogger {
    /// Install the logger.  Fails if a global logger is already set.
    pub fn apply(&mut self) -> FailResult<()>
    {Ok({
        use std::time::Instant;

        let start = Instant::now();
        let color = self.color;
        let mut fern = ::fern::Dispatch::new();
        fern = fern.format(move |out, message, record| {
                let t = start.elapsed();
                let level = ColorizedLevel(record.level(), color);
                out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                    t.as_secs(),
                    t.subsec_millis(),
                    record.target(),
                    level,
                    message))
            })
            .level(LevelFilter::Warn);

        for &target in CRATE_TARGETS {
            fern = fern.level_for(target, self.crate_level());
        }
        fern = fern.chain(std::io::stdout());

        if let Some(path) = self.path.as_ref() {
            fern = fern.chain(::fern::log_file(path)?);
        }

        fern.apply()?;
    })}
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel(pub Level, pub bool);
impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ColorizedLevel(level, color) = *self;
        if !color {
            return write!(f, "{}", level);
        }
        let style = match level {
            Level::Error => ansi_term::Colour::Red.bold(),
            Level::Warn  => ansi_term::Colour::Red.normal(),
            Level::Info  => ansi_term::Colour::Cyan.bold(),
            Level::Debug => ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", style.paint(level.to_string()))
    }
}
