use std::ffi::OsStr;

use super::{ChildTableType, Config, SequenceFormat};

impl Config {
    pub fn output_name(&self) -> &OsStr {
        &self.output_name
    }

    pub fn input_start(&self) -> usize {
        self.input_start
    }

    /// Input file names from the argument vector the config was parsed from
    pub fn input_files<'a, S: AsRef<OsStr>>(&self, argv: &'a [S]) -> &'a [S] {
        argv.get(self.input_start..).unwrap_or(&[])
    }

    pub fn is_protein(&self) -> bool {
        self.is_protein
    }

    pub fn is_keep_lowercase(&self) -> bool {
        self.is_keep_lowercase
    }

    pub fn tantan_setting(&self) -> u8 {
        self.tantan_setting
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.is_case_sensitive
    }

    pub fn seed_patterns(&self) -> impl Iterator<Item = &str> {
        self.seed_patterns.iter().map(|s| s as &str)
    }

    /// None means unlimited
    pub fn volume_size(&self) -> Option<u64> {
        self.volume_size
    }

    pub fn index_step(&self) -> usize {
        self.index_step
    }

    pub fn subset_seed_files(&self) -> impl Iterator<Item = &str> {
        self.subset_seed_files.iter().map(|s| s as &str)
    }

    pub fn user_alphabet(&self) -> &str {
        &self.user_alphabet
    }

    pub fn min_seed_limit(&self) -> usize {
        self.min_seed_limit
    }

    /// None means the depth adapts to the data
    pub fn bucket_depth(&self) -> Option<usize> {
        self.bucket_depth
    }

    pub fn child_table_type(&self) -> ChildTableType {
        self.child_table_type
    }

    pub fn is_counts_only(&self) -> bool {
        self.is_counts_only
    }

    pub fn verbosity(&self) -> usize {
        self.verbosity
    }

    pub fn input_format(&self) -> SequenceFormat {
        self.input_format
    }
}
