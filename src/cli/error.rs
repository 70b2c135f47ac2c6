use thiserror::Error;

/// Errors arising from the command line. All are fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("bad option")]
    UnrecognizedOption,
    #[error("option requires an argument: {0}")]
    MissingOptionValue(String),
    #[error("bad option value: -{opt} {value}")]
    BadOptionValue { opt: char, value: String },
    #[error("please give me an output name and sequence file(s)\n\n{usage}")]
    MissingPositional { usage: String },
}

impl ArgError {
    pub(super) fn bad_value(opt: char, value: &str) -> Self {
        Self::BadOptionValue {
            opt,
            value: value.to_string(),
        }
    }
}

impl From<lexopt::Error> for ArgError {
    fn from(e: lexopt::Error) -> Self {
        match e {
            lexopt::Error::MissingValue { option } => {
                Self::MissingOptionValue(option.unwrap_or_default())
            }
            _ => Self::UnrecognizedOption,
        }
    }
}
