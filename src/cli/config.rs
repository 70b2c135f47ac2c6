use std::ffi::OsStr;

use super::{ChildTableType, SequenceFormat};

mod getters;
mod mk_config;

pub(super) use mk_config::{PartialConfig, Step};

/// Config
///
/// Settings for building a lastdb database, generated from the command line.
/// Once set it is read only
///
/// output_name - name (prefix) of the database files
/// input_start - index in argv of the first input sequence file
///
#[derive(Debug)]
pub struct Config {
    output_name: Box<OsStr>,
    input_start: usize,
    seed_patterns: Vec<Box<str>>,
    subset_seed_files: Vec<Box<str>>,
    user_alphabet: Box<str>,
    volume_size: Option<u64>,
    index_step: usize,
    min_seed_limit: usize,
    bucket_depth: Option<usize>,
    verbosity: usize,
    child_table_type: ChildTableType,
    input_format: SequenceFormat,
    tantan_setting: u8,
    is_protein: bool,
    is_keep_lowercase: bool,
    is_case_sensitive: bool,
    is_counts_only: bool,
}
