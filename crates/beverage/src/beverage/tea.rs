use std::fmt;

use crate::beverage::{Beverage, Cost};

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TeaKind {
    #[default]
    Black,
    White,
    Blue,
    Cyan,
}

impl fmt::Display for TeaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TeaKind::Black => "Black",
            TeaKind::White => "White",
            TeaKind::Blue => "Blue",
            TeaKind::Cyan => "Cyan",
        };
        f.write_str(name)
    }
}

/// Tea costs the same whatever its kind; only the description changes.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tea {
    kind: TeaKind,
}

impl Tea {
    pub fn new(kind: TeaKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> TeaKind {
        self.kind
    }
}

impl Beverage for Tea {
    fn description(&self) -> String {
        format!("{} Tea", self.kind)
    }

    fn cost(&self) -> Cost {
        30
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tea_kinds() {
        let cases = [
            (TeaKind::Black, "Black Tea"),
            (TeaKind::White, "White Tea"),
            (TeaKind::Blue, "Blue Tea"),
            (TeaKind::Cyan, "Cyan Tea"),
        ];

        for (kind, description) in cases {
            let tea = Tea::new(kind);
            assert_eq!(tea.description(), description);
            assert_eq!(tea.cost(), 30);
        }
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Tea::default().kind(), TeaKind::Black);
    }
}
