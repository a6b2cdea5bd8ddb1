use std::fmt;

use micro_beverage::{Beverage, Cost};

/// What the customer is charged for at checkout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    description: String,
    cost: Cost,
}

impl Receipt {
    pub fn of<B: Beverage + ?Sized>(beverage: &B) -> Self {
        Self { description: beverage.description(), cost: beverage.cost() }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, cost: {}", self.description, self.cost)
    }
}
