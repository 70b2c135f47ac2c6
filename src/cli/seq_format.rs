use std::fmt;

/// Input sequence formats, numbered as on the command line (-Q)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SequenceFormat {
    Fasta = 0,
    FastqSanger,
    FastqSolexa,
    FastqIllumina,
    Prb,
    Pssm,
}

impl SequenceFormat {
    pub fn from_ordinal(x: u8) -> Option<Self> {
        match x {
            0 => Some(Self::Fasta),
            1 => Some(Self::FastqSanger),
            2 => Some(Self::FastqSolexa),
            3 => Some(Self::FastqIllumina),
            4 => Some(Self::Prb),
            5 => Some(Self::Pssm),
            _ => None,
        }
    }

    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Formats from prb onwards are only used internally (lastal query input)
    pub fn is_user_selectable(&self) -> bool {
        self.ordinal() < Self::Prb.ordinal()
    }
}

impl fmt::Display for SequenceFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.ordinal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(1, true)]
    #[case(3, true)]
    #[case(4, false)]
    #[case(5, false)]
    fn selectable(#[case] x: u8, #[case] expected: bool) {
        let fmt = SequenceFormat::from_ordinal(x).unwrap();
        assert_eq!(fmt.ordinal(), x);
        assert_eq!(fmt.is_user_selectable(), expected);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(SequenceFormat::from_ordinal(6), None);
        assert_eq!(SequenceFormat::from_ordinal(255), None);
    }
}
