use std::fmt;

/// Storage width of the child table (-C)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChildTableType {
    None = 0,
    Byte,
    Short,
    Full,
}

impl ChildTableType {
    pub fn from_ordinal(x: u8) -> Option<Self> {
        match x {
            0 => Some(Self::None),
            1 => Some(Self::Byte),
            2 => Some(Self::Short),
            3 => Some(Self::Full),
            _ => None,
        }
    }

    pub fn ordinal(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for ChildTableType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.ordinal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals() {
        for x in 0..4 {
            assert_eq!(ChildTableType::from_ordinal(x).map(|c| c.ordinal()), Some(x));
        }
        assert_eq!(ChildTableType::from_ordinal(4), None);
        assert_eq!(ChildTableType::Full.to_string(), "3");
    }
}
