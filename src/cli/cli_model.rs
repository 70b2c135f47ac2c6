use std::ffi::{OsStr, OsString};

use lexopt::{Arg, Parser};

use super::ArgError;

/// Short options accepted by lastdb and whether they take a value
const GRAMMAR: [(char, bool); 16] = [
    ('h', false),
    ('V', false),
    ('p', false),
    ('R', true),
    ('c', false),
    ('m', true),
    ('s', true),
    ('w', true),
    ('u', true),
    ('a', true),
    ('i', true),
    ('b', true),
    ('C', true),
    ('x', false),
    ('v', false),
    ('Q', true),
];

fn takes_value(c: char) -> Option<bool> {
    GRAMMAR.iter().find(|(o, _)| *o == c).map(|(_, v)| *v)
}

#[derive(Debug, PartialEq, Eq)]
pub(super) enum ScanItem {
    Flag(char),
    Valued(char, String),
    /// First non-option token, with the argv index of the token following it
    Positional { token: OsString, next: usize },
}

/// Scanner over one argument vector
///
/// Option processing stops at the first positional argument, so options given
/// after the output name are treated as input files
pub(super) struct Scanner {
    parser: Parser,
    argc: usize,
    // Option token being read and the byte offset of its next unread character
    cluster: String,
    pos: usize,
}

impl Scanner {
    /// argv[0] is the program name and is skipped
    pub(super) fn new<S: AsRef<OsStr>>(argv: &[S]) -> Self {
        let args: Vec<OsString> = argv.iter().skip(1).map(|s| s.as_ref().to_owned()).collect();
        Self {
            parser: Parser::from_args(args),
            argc: argv.len(),
            cluster: String::new(),
            pos: 0,
        }
    }

    /// Returns None once the argument vector is exhausted without a positional argument
    pub(super) fn next_item(&mut self) -> Result<Option<ScanItem>, ArgError> {
        if let Some(raw) = self.parser.try_raw_args() {
            self.cluster = raw
                .peek()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            self.pos = 1;
        }
        let arg = match self.parser.next()? {
            Some(a) => a,
            None => return Ok(None),
        };
        let c = match arg {
            Arg::Short(c) => {
                self.pos += c.len_utf8();
                c
            }
            Arg::Long(name) => {
                let c = match name {
                    "help" => 'h',
                    "version" => 'V',
                    _ => return Err(ArgError::UnrecognizedOption),
                };
                // Only the exact tokens --help and --version are recognized
                if self.parser.optional_value().is_some() {
                    return Err(ArgError::UnrecognizedOption);
                }
                c
            }
            Arg::Value(token) => {
                let remaining = self.parser.raw_args()?.count();
                let next = self.argc - remaining;
                trace!(
                    "First positional argument {} (next index {})",
                    token.to_string_lossy(),
                    next
                );
                return Ok(Some(ScanItem::Positional { token, next }));
            }
        };
        match takes_value(c) {
            Some(false) => Ok(Some(ScanItem::Flag(c))),
            Some(true) => {
                let raw = self.option_value()?;
                let v = raw
                    .into_string()
                    .map_err(|v| ArgError::bad_value(c, &v.to_string_lossy()))?;
                Ok(Some(ScanItem::Valued(c, v)))
            }
            None => Err(ArgError::UnrecognizedOption),
        }
    }

    /// Value attached to the current option, or else the following token
    fn option_value(&mut self) -> Result<OsString, ArgError> {
        let attached = self.cluster.get(self.pos..).unwrap_or("");
        if attached.is_empty() {
            return Ok(self.parser.value()?);
        }
        let v = self.parser.optional_value().unwrap_or_default();
        // lexopt drops an '=' directly following the option letter; it is part of the value
        if attached.starts_with('=') {
            let mut s = OsString::from("=");
            s.push(v);
            Ok(s)
        } else {
            Ok(v)
        }
    }
}
