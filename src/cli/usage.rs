use super::defaults;

/// Short usage summary, also used as the start of the help text
pub fn usage_text() -> String {
    format!(
        "\
Usage: lastdb [options] output-name fasta-sequence-file(s)
Prepare sequences for subsequent alignment with lastal.

Main Options:
-h, --help: show all options and their default settings, and exit
-p: interpret the sequences as proteins
-R: repeat-marking options (default={}{})
-c: soft-mask lowercase letters",
        defaults::IS_KEEP_LOWERCASE as u8,
        defaults::TANTAN_SETTING,
    )
}

pub fn help_text() -> String {
    format!(
        "{}

Advanced Options (default settings):
-Q: input format: 0=fasta, 1=fastq-sanger, 2=fastq-solexa, 3=fastq-illumina ({})
-s: volume size (unlimited)
-m: seed pattern
-u: subset seed (yass.seed)
-w: index step
-a: user-defined alphabet
-i: minimum limit on initial matches per query position ({})
-b: bucket depth
-C: child table type: 0=none, 1=byte-size, 2=short-size, 3=full ({})
-x: just count sequences and letters
-v: be verbose: write messages about what lastdb is doing
-V, --version: show version information, and exit

Report bugs to: last-align (ATmark) googlegroups (dot) com
LAST home page: http://last.cbrc.jp/
",
        usage_text(),
        defaults::INPUT_FORMAT,
        defaults::MIN_SEED_LIMIT,
        defaults::CHILD_TABLE_TYPE,
    )
}

pub fn version_text() -> String {
    format!("lastdb {}\n", env!("CARGO_PKG_VERSION"))
}
