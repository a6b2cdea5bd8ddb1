//! The beverage capability and the base beverages of the menu.
//!
//! Every beverage, whether a base drink or a condiment wrapping one, answers two
//! pure queries: [`Beverage::description`] and [`Beverage::cost`]. Both are total
//! and calling them repeatedly always yields the same answer.

mod coffee;
mod milkshake;
mod order;
mod tea;

pub use coffee::{Cappuccino, Coffee, Latte, Portion};
pub use milkshake::{Milkshake, MilkshakeSize};
pub use order::BaseOrder;
pub use tea::{Tea, TeaKind};

use crate::condiment::{Condiment, Decorated};
use crate::decorator::Decorator;

/// Price of a beverage or of a condiment, in whole currency units.
pub type Cost = u32;

/// A type-erased beverage, used when the shape of the chain is only known at runtime.
pub type BoxedBeverage = Box<dyn Beverage>;

pub trait Beverage {
    fn description(&self) -> String;

    fn cost(&self) -> Cost;
}

impl<B: Beverage + ?Sized> Beverage for Box<B> {
    #[inline]
    fn description(&self) -> String {
        (**self).description()
    }

    #[inline]
    fn cost(&self) -> Cost {
        (**self).cost()
    }
}

/// Chaining helpers available on every sized beverage.
pub trait BeverageExt: Beverage + Sized {
    /// Moves this beverage into a new wrapper adding `condiment`.
    ///
    /// A wrapper owns what it wraps, so a beverage can not be shared by two
    /// wrappers or used again on its own:
    ///
    /// ```compile_fail
    /// use micro_beverage::beverage::{BeverageExt, Tea};
    /// use micro_beverage::condiment::{Cream, Lemon};
    ///
    /// let tea = Tea::default();
    /// let _lemon = (&tea).with(Lemon::new(1));
    /// let _cream = (&tea).with(Cream);
    /// ```
    ///
    /// ```compile_fail
    /// use micro_beverage::beverage::{Beverage, BeverageExt, Tea};
    /// use micro_beverage::condiment::Cream;
    ///
    /// let tea = Tea::default();
    /// let _cream = tea.with(Cream);
    /// let _ = tea.description();
    /// ```
    fn with<C: Condiment>(self, condiment: C) -> Decorated<Self, C> {
        Decorated::new(self, condiment)
    }

    /// apply a prepared [`Decorator`], e.g. one built by [`crate::decorator::make_condiment`]
    fn decorate_with<D>(self, decorator: &D) -> D::Out
    where
        D: Decorator<Self>,
    {
        decorator.decorate(self)
    }

    fn boxed(self) -> BoxedBeverage
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<B: Beverage> BeverageExt for B {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condiment::{Cinnamon, Lemon};

    #[test]
    fn test_box_delegates() {
        let beverage: BoxedBeverage = Box::new(Coffee);
        assert_eq!(beverage.description(), "Coffee");
        assert_eq!(beverage.cost(), 60);
    }

    #[test]
    fn test_with_wraps_boxed_beverage() {
        let beverage = Coffee.boxed().with(Cinnamon).with(Lemon::default());
        assert_eq!(beverage.description(), "Coffee, Cinnamon, Lemon x 1");
        assert_eq!(beverage.cost(), 60 + 20 + 10);
    }

    #[test]
    fn test_queries_are_idempotent() {
        let beverage = Milkshake::new(MilkshakeSize::Medium).with(Lemon::new(3));
        assert_eq!(beverage.description(), beverage.description());
        assert_eq!(beverage.cost(), beverage.cost());
    }
}
