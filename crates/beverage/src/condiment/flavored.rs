//! Condiments priced flat, whose kind only changes the description.

use std::fmt;

use crate::beverage::Cost;
use crate::condiment::Condiment;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyrupKind {
    Chocolate,
    Maple,
}

impl fmt::Display for SyrupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyrupKind::Chocolate => f.write_str("Chocolate"),
            SyrupKind::Maple => f.write_str("Maple"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Syrup {
    kind: SyrupKind,
}

impl Syrup {
    pub fn new(kind: SyrupKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> SyrupKind {
        self.kind
    }
}

impl Condiment for Syrup {
    fn fragment(&self) -> String {
        format!("{} syrup", self.kind)
    }

    fn extra_cost(&self) -> Cost {
        15
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiqueurKind {
    Nutty,
    Chocolate,
}

impl fmt::Display for LiqueurKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiqueurKind::Nutty => f.write_str("Nutty"),
            LiqueurKind::Chocolate => f.write_str("Chocolate"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Liqueur {
    kind: LiqueurKind,
}

impl Liqueur {
    pub fn new(kind: LiqueurKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> LiqueurKind {
        self.kind
    }
}

impl Condiment for Liqueur {
    fn fragment(&self) -> String {
        format!("{} Liqueur", self.kind)
    }

    fn extra_cost(&self) -> Cost {
        50
    }
}
