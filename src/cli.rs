mod child_table;
mod cli_model;
mod config;
mod defaults;
mod error;
mod parse_utils;
mod seq_format;
mod usage;

use std::ffi::OsStr;

pub use child_table::ChildTableType;
pub use config::Config;
pub use error::ArgError;
pub use seq_format::SequenceFormat;

use cli_model::{ScanItem, Scanner};
use config::{PartialConfig, Step};

/// Early successful exit (help or version), with the text to be written to stdout
#[derive(Debug)]
pub struct Halt {
    status: i32,
    text: String,
}

impl Halt {
    fn success(text: String) -> Self {
        Self { status: 0, text }
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug)]
pub enum CliOutcome {
    Run(Config),
    Halt(Halt),
}

/// Parse the command line
///
/// argv[0] is taken to be the program name. Options are processed in order
/// until the first positional argument (the output name); everything after
/// the output name is an input file
pub fn handle_cli<S: AsRef<OsStr>>(argv: &[S]) -> Result<CliOutcome, ArgError> {
    let mut scanner = Scanner::new(argv);
    let mut pc = PartialConfig::default();
    let mut positional = None;

    while let Some(item) = scanner.next_item()? {
        match item {
            ScanItem::Flag(c) => {
                if let Step::Halt(h) = pc.apply_flag(c)? {
                    return Ok(CliOutcome::Halt(h));
                }
            }
            ScanItem::Valued(c, v) => pc.apply_value(c, &v)?,
            ScanItem::Positional { token, next } => {
                positional = Some((token, next));
                break;
            }
        }
    }

    pc.finalize(positional).map(CliOutcome::Run)
}

/// Report the settings through the logger
pub fn log_config<S: AsRef<OsStr>>(cfg: &Config, argv: &[S]) {
    let inputs = cfg.input_files(argv);
    info!(
        "Preparing {} database {} from {} input file(s)",
        if cfg.is_protein() { "protein" } else { "DNA" },
        cfg.output_name().to_string_lossy(),
        inputs.len()
    );
    for f in inputs {
        debug!("Input file: {}", f.as_ref().to_string_lossy());
    }
    debug!(
        "Input format: {}, index step: {}, child table: {}",
        cfg.input_format(),
        cfg.index_step(),
        cfg.child_table_type()
    );
    debug!(
        "Repeat marking: keep lowercase {}, tantan {}; case sensitive: {}",
        cfg.is_keep_lowercase(),
        cfg.tantan_setting(),
        cfg.is_case_sensitive()
    );
    match cfg.volume_size() {
        Some(s) => debug!("Volume size: {}", s),
        None => debug!("Volume size: unlimited"),
    }
    match cfg.bucket_depth() {
        Some(d) => debug!("Bucket depth: {}", d),
        None => debug!("Bucket depth: auto"),
    }
    for s in cfg.seed_patterns() {
        debug!("Seed pattern: {}", s);
    }
    for s in cfg.subset_seed_files() {
        debug!("Subset seed file: {}", s);
    }
    if !cfg.user_alphabet().is_empty() {
        debug!("User alphabet: {}", cfg.user_alphabet());
    }
    debug!("Minimum seed limit: {}", cfg.min_seed_limit());
    trace!("Input files start at argument {}", cfg.input_start());
    if cfg.is_counts_only() {
        info!("Only counting sequences and letters");
    }
}
