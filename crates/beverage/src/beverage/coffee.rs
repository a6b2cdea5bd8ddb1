use std::fmt;

use crate::beverage::{Beverage, Cost};

/// Portion of a coffee based drink.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Portion {
    #[default]
    Standard,
    Double,
}

impl fmt::Display for Portion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Portion::Standard => f.write_str("Standard"),
            Portion::Double => f.write_str("Double"),
        }
    }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Coffee;

impl Beverage for Coffee {
    fn description(&self) -> String {
        "Coffee".into()
    }

    fn cost(&self) -> Cost {
        60
    }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cappuccino {
    portion: Portion,
}

impl Cappuccino {
    pub fn new(portion: Portion) -> Self {
        Self { portion }
    }

    pub fn standard() -> Self {
        Self::new(Portion::Standard)
    }

    pub fn double() -> Self {
        Self::new(Portion::Double)
    }

    pub fn portion(&self) -> Portion {
        self.portion
    }
}

impl Beverage for Cappuccino {
    fn description(&self) -> String {
        format!("{} Cappuccino", self.portion)
    }

    fn cost(&self) -> Cost {
        match self.portion {
            Portion::Standard => 80,
            Portion::Double => 120,
        }
    }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Latte {
    portion: Portion,
}

impl Latte {
    pub fn new(portion: Portion) -> Self {
        Self { portion }
    }

    pub fn standard() -> Self {
        Self::new(Portion::Standard)
    }

    pub fn double() -> Self {
        Self::new(Portion::Double)
    }

    pub fn portion(&self) -> Portion {
        self.portion
    }
}

impl Beverage for Latte {
    fn description(&self) -> String {
        format!("{} Latte", self.portion)
    }

    fn cost(&self) -> Cost {
        match self.portion {
            Portion::Standard => 90,
            Portion::Double => 130,
        }
    }
}
