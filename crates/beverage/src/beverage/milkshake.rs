use std::fmt;

use crate::beverage::{Beverage, Cost};

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MilkshakeSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl fmt::Display for MilkshakeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MilkshakeSize::Small => "Small",
            MilkshakeSize::Medium => "Medium",
            MilkshakeSize::Large => "Large",
        };
        f.write_str(name)
    }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Milkshake {
    size: MilkshakeSize,
}

impl Milkshake {
    pub fn new(size: MilkshakeSize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> MilkshakeSize {
        self.size
    }
}

impl Beverage for Milkshake {
    fn description(&self) -> String {
        format!("{} Milkshake", self.size)
    }

    fn cost(&self) -> Cost {
        match self.size {
            MilkshakeSize::Small => 50,
            MilkshakeSize::Medium => 60,
            MilkshakeSize::Large => 80,
        }
    }
}
