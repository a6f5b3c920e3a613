use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Mark {
    X = 1,
    O = -1,
}

impl Mark {
    pub fn from_int(v: i8) -> Option<Self> {
        match v.signum() {
            1 => Some(Mark::X),
            -1 => Some(Mark::O),
            _ => None,
        }
    }

    pub fn to_int(self) -> i8 {
        self as i8
    }

    pub fn opp(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The mark to play when `x_is_next` is set, the other one otherwise.
    pub fn for_turn(x_is_next: bool) -> Self {
        if x_is_next { Mark::X } else { Mark::O }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl Neg for Mark {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_int_normalizes() {
        assert_eq!(Mark::from_int(1), Some(Mark::X));
        assert_eq!(Mark::from_int(7), Some(Mark::X));
        assert_eq!(Mark::from_int(-1), Some(Mark::O));
        assert_eq!(Mark::from_int(-100), Some(Mark::O));
        assert_eq!(Mark::from_int(0), None);
    }

    #[test]
    fn opponent() {
        assert_eq!(Mark::X.opp(), Mark::O);
        assert_eq!(Mark::O.opp(), Mark::X);
        assert_eq!(-Mark::X, Mark::O);
    }

    #[test]
    fn turn_flag_selects_mark() {
        assert_eq!(Mark::for_turn(true), Mark::X);
        assert_eq!(Mark::for_turn(false), Mark::O);
    }

    #[test]
    fn display() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.to_string(), "O");
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Mark::X).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Mark::O).unwrap(), "-1");
        let m: Mark = serde_json::from_str("-1").unwrap();
        assert_eq!(m, Mark::O);
    }
}
