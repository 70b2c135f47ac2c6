use std::ffi::OsString;

use crate::cli::{defaults, parse_utils::*, usage, ArgError, Halt};

use super::{ChildTableType, Config, SequenceFormat};

/// Outcome of handling a single option
#[derive(Debug)]
pub(in crate::cli) enum Step {
    Continue,
    Halt(Halt),
}

/// Configuration while the command line is being scanned
///
/// index_step is None until resolved by [PartialConfig::finalize]
#[derive(Debug)]
pub(in crate::cli) struct PartialConfig {
    seed_patterns: Vec<Box<str>>,
    subset_seed_files: Vec<Box<str>>,
    user_alphabet: Box<str>,
    volume_size: Option<u64>,
    index_step: Option<usize>,
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

impl Default for PartialConfig {
    fn default() -> Self {
        Self {
            seed_patterns: Vec::new(),
            subset_seed_files: Vec::new(),
            user_alphabet: Box::from(""),
            volume_size: None,
            index_step: None,
            min_seed_limit: defaults::MIN_SEED_LIMIT,
            bucket_depth: None,
            verbosity: 0,
            child_table_type: defaults::CHILD_TABLE_TYPE,
            input_format: defaults::INPUT_FORMAT,
            tantan_setting: defaults::TANTAN_SETTING,
            is_protein: defaults::IS_PROTEIN,
            is_keep_lowercase: defaults::IS_KEEP_LOWERCASE,
            is_case_sensitive: defaults::IS_CASE_SENSITIVE,
            is_counts_only: defaults::IS_COUNTS_ONLY,
        }
    }
}

fn is_bisulfite(seeds: &[Box<str>]) -> bool {
    matches!(seeds, [s] if defaults::BISULFITE_SEEDS.contains(&&**s))
}

impl PartialConfig {
    /// Handle an option that takes no value
    pub(in crate::cli) fn apply_flag(&mut self, opt: char) -> Result<Step, ArgError> {
        match opt {
            'h' => return Ok(Step::Halt(Halt::success(usage::help_text()))),
            'V' => return Ok(Step::Halt(Halt::success(usage::version_text()))),
            'p' => self.is_protein = true,
            'c' => self.is_case_sensitive = true,
            'x' => self.is_counts_only = true,
            'v' => self.verbosity += 1,
            _ => return Err(ArgError::UnrecognizedOption),
        }
        Ok(Step::Continue)
    }

    /// Handle an option with its (attached or following) value
    pub(in crate::cli) fn apply_value(&mut self, opt: char, val: &str) -> Result<(), ArgError> {
        let bad = || ArgError::bad_value(opt, val);
        match opt {
            'R' => match val.as_bytes() {
                [k @ b'0'..=b'1', t @ b'0'..=b'2'] => {
                    self.is_keep_lowercase = *k == b'1';
                    self.tantan_setting = t - b'0';
                }
                _ => return Err(bad()),
            },
            'm' => self.seed_patterns.push(Box::from(val)),
            's' => self.volume_size = Some(parse_size(val).ok_or_else(bad)?),
            'w' => {
                let step = parse_int::<usize>(val).filter(|x| *x >= 1).ok_or_else(bad)?;
                self.index_step = Some(step)
            }
            'u' => self.subset_seed_files.push(Box::from(val)),
            'a' => self.user_alphabet = Box::from(val),
            'i' => self.min_seed_limit = parse_int(val).ok_or_else(bad)?,
            'b' => self.bucket_depth = Some(parse_int(val).ok_or_else(bad)?),
            'C' => {
                self.child_table_type = parse_int::<u8>(val)
                    .and_then(ChildTableType::from_ordinal)
                    .ok_or_else(bad)?
            }
            'Q' => {
                self.input_format = parse_int::<u8>(val)
                    .and_then(SequenceFormat::from_ordinal)
                    .filter(|f| f.is_user_selectable())
                    .ok_or_else(bad)?
            }
            _ => return Err(ArgError::UnrecognizedOption),
        }
        Ok(())
    }

    /// Fill in defaults that depend on other options
    fn resolve_defaults(&mut self) -> usize {
        *self.index_step.get_or_insert_with(|| {
            // The bisulfite recipe uses two indexes at once, so saving memory
            // matters more. This did not harm sensitivity in tests.
            if is_bisulfite(&self.subset_seed_files) {
                defaults::BISULFITE_INDEX_STEP
            } else {
                defaults::INDEX_STEP
            }
        })
    }

    /// Resolve remaining defaults and take the output name from the first positional
    /// argument (if any)
    pub(in crate::cli) fn finalize(
        mut self,
        positional: Option<(OsString, usize)>,
    ) -> Result<Config, ArgError> {
        let index_step = self.resolve_defaults();

        let (output_name, input_start) = positional.ok_or_else(|| ArgError::MissingPositional {
            usage: usage::usage_text(),
        })?;

        Ok(Config {
            output_name: output_name.into_boxed_os_str(),
            input_start,
            seed_patterns: self.seed_patterns,
            subset_seed_files: self.subset_seed_files,
            user_alphabet: self.user_alphabet,
            volume_size: self.volume_size,
            index_step,
            min_seed_limit: self.min_seed_limit,
            bucket_depth: self.bucket_depth,
            verbosity: self.verbosity,
            child_table_type: self.child_table_type,
            input_format: self.input_format,
            tantan_setting: self.tantan_setting,
            is_protein: self.is_protein,
            is_keep_lowercase: self.is_keep_lowercase,
            is_case_sensitive: self.is_case_sensitive,
            is_counts_only: self.is_counts_only,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    fn with_values(opts: &[(char, &str)]) -> Result<PartialConfig, ArgError> {
        let mut pc = PartialConfig::default();
        for (c, v) in opts {
            pc.apply_value(*c, v)?;
        }
        Ok(pc)
    }

    fn strs(v: &[Box<str>]) -> Vec<&str> {
        v.iter().map(|s| s as &str).collect()
    }

    #[rstest]
    #[case("00", false, 0)]
    #[case("10", true, 0)]
    #[case("11", true, 1)]
    #[case("12", true, 2)]
    #[case("02", false, 2)]
    fn repeat_marking(#[case] val: &str, #[case] lower: bool, #[case] tantan: u8) {
        let pc = with_values(&[('R', val)]).unwrap();
        assert_eq!(pc.is_keep_lowercase, lower);
        assert_eq!(pc.tantan_setting, tantan);
    }

    #[rstest]
    #[case("123")]
    #[case("100")]
    #[case("ab")]
    #[case("20")]
    #[case("13")]
    #[case("1")]
    #[case("")]
    fn repeat_marking_bad(#[case] val: &str) {
        assert_matches!(
            with_values(&[('R', val)]),
            Err(ArgError::BadOptionValue { opt: 'R', value }) if value == val
        );
    }

    #[rstest]
    #[case('w', "0")]
    #[case('w', "-3")]
    #[case('w', "x")]
    #[case('C', "4")]
    #[case('C', "-1")]
    #[case('Q', "4")]
    #[case('Q', "5")]
    #[case('Q', "300")]
    #[case('s', "12Q")]
    #[case('i', "many")]
    #[case('b', "-2")]
    fn bad_values(#[case] opt: char, #[case] val: &str) {
        assert_eq!(
            with_values(&[(opt, val)]).unwrap_err(),
            ArgError::bad_value(opt, val)
        );
    }

    #[rstest]
    #[case("0", ChildTableType::None)]
    #[case("1", ChildTableType::Byte)]
    #[case("2", ChildTableType::Short)]
    #[case("3", ChildTableType::Full)]
    fn child_table(#[case] val: &str, #[case] expected: ChildTableType) {
        assert_eq!(with_values(&[('C', val)]).unwrap().child_table_type, expected);
    }

    #[rstest]
    #[case("0", SequenceFormat::Fasta)]
    #[case("1", SequenceFormat::FastqSanger)]
    #[case("2", SequenceFormat::FastqSolexa)]
    #[case("3", SequenceFormat::FastqIllumina)]
    fn input_format(#[case] val: &str, #[case] expected: SequenceFormat) {
        assert_eq!(with_values(&[('Q', val)]).unwrap().input_format, expected);
    }

    #[test]
    fn lists_accumulate() {
        let pc = with_values(&[('m', "a"), ('u', "x.seed"), ('m', "b"), ('u', "BISF")]).unwrap();
        assert_eq!(strs(&pc.seed_patterns), vec!["a", "b"]);
        assert_eq!(strs(&pc.subset_seed_files), vec!["x.seed", "BISF"]);
    }

    #[test]
    fn scalars_overwrite() {
        let pc = with_values(&[('i', "3"), ('a', "ACGT"), ('i', "7"), ('a', "acgt"), ('b', "4")])
            .unwrap();
        assert_eq!(pc.min_seed_limit, 7);
        assert_eq!(&*pc.user_alphabet, "acgt");
        assert_eq!(pc.bucket_depth, Some(4));
    }

    #[test]
    fn flags() {
        let mut pc = PartialConfig::default();
        for c in ['p', 'c', 'x', 'v', 'v', 'v'] {
            assert_matches!(pc.apply_flag(c), Ok(Step::Continue));
        }
        assert!(pc.is_protein && pc.is_case_sensitive && pc.is_counts_only);
        assert_eq!(pc.verbosity, 3);
    }

    #[test]
    fn help_and_version_halt() {
        let mut pc = PartialConfig::default();
        assert_matches!(pc.apply_flag('h'), Ok(Step::Halt(h)) if h.status() == 0 && h.text().starts_with("Usage:"));
        assert_matches!(pc.apply_flag('V'), Ok(Step::Halt(h)) if h.text().starts_with("lastdb "));
    }

    #[rstest]
    #[case(&[], 1)]
    #[case(&["BISF"], 2)]
    #[case(&["BISR"], 2)]
    #[case(&["BISF", "BISR"], 1)]
    #[case(&["bisf"], 1)]
    #[case(&["yass.seed"], 1)]
    fn index_step_default(#[case] seeds: &[&str], #[case] expected: usize) {
        let mut pc = PartialConfig::default();
        for s in seeds {
            pc.apply_value('u', s).unwrap();
        }
        let cfg = pc.finalize(Some(("db".into(), 2))).unwrap();
        assert_eq!(cfg.index_step(), expected);
    }

    #[test]
    fn explicit_index_step_kept() {
        let pc = with_values(&[('u', "BISF"), ('w', "5")]).unwrap();
        let cfg = pc.finalize(Some(("db".into(), 2))).unwrap();
        assert_eq!(cfg.index_step(), 5);
    }

    #[test]
    fn missing_positional() {
        let err = PartialConfig::default().finalize(None).err().unwrap();
        assert_matches!(&err, ArgError::MissingPositional { usage: u } if u == &usage::usage_text());
        assert!(err.to_string().contains("Usage: lastdb [options]"));
    }
}
