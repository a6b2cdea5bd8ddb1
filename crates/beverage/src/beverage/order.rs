use tracing::trace;

use crate::beverage::{
    Beverage, BoxedBeverage, Cappuccino, Coffee, Latte, Milkshake, MilkshakeSize, Portion, Tea, TeaKind,
};

/// The base beverage a customer picked, with its variant selector fixed.
///
/// This is what a front end hands to the core when the shape of the order is
/// only known at runtime; [`BaseOrder::brew`] turns it into a type-erased beverage
/// ready to be wrapped with condiments.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BaseOrder {
    Coffee,
    Cappuccino(Portion),
    Latte(Portion),
    Tea(TeaKind),
    Milkshake(MilkshakeSize),
}

impl BaseOrder {
    pub fn brew(self) -> BoxedBeverage {
        trace!(order = ?self, "brewing base beverage");
        match self {
            BaseOrder::Coffee => Box::new(Coffee),
            BaseOrder::Cappuccino(portion) => Box::new(Cappuccino::new(portion)),
            BaseOrder::Latte(portion) => Box::new(Latte::new(portion)),
            BaseOrder::Tea(kind) => Box::new(Tea::new(kind)),
            BaseOrder::Milkshake(size) => Box::new(Milkshake::new(size)),
        }
    }
}
