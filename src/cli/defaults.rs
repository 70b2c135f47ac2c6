//! Default option values
//!
//! These are used both to initialize the configuration and to fill in the
//! defaults shown by the help text
use super::{ChildTableType, SequenceFormat};

pub const IS_PROTEIN: bool = false;
pub const IS_KEEP_LOWERCASE: bool = true;
pub const TANTAN_SETTING: u8 = 0;
pub const IS_CASE_SENSITIVE: bool = false;
pub const MIN_SEED_LIMIT: usize = 0;
pub const CHILD_TABLE_TYPE: ChildTableType = ChildTableType::None;
pub const IS_COUNTS_ONLY: bool = false;
pub const INPUT_FORMAT: SequenceFormat = SequenceFormat::Fasta;

// Resolved after scanning if -w is not given
pub const INDEX_STEP: usize = 1;
pub const BISULFITE_INDEX_STEP: usize = 2;

pub const BISULFITE_SEEDS: [&str; 2] = ["BISF", "BISR"];
