use std::fmt;

/// LogLevel
///
/// Represents minimum level of messages that will be logged.
/// lastdb has no explicit log level option; the level is derived
/// from the number of times -v was given
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Warn = 1,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn from_verbosity(verbosity: usize) -> Self {
        match verbosity {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    pub fn get_level(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let level_str = match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        write!(f, "{}", level_str)
    }
}

/// Initialize logging from the -v count
pub fn init_log(verbosity: usize) -> anyhow::Result<()> {
    let level = LogLevel::from_verbosity(verbosity);

    stderrlog::new()
        .verbosity(level.get_level())
        .init()?;

    debug!("Logging initialized at level {}", level);
    Ok(())
}
