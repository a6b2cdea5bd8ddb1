//! Condiments and the decorator that attaches them to a beverage.
//!
//! A [`Condiment`] only knows its own fragment and extra cost. [`Decorated`] is the
//! decorator base: it owns the wrapped beverage together with one condiment and is
//! itself a [`Beverage`], so decorations nest to any depth.

mod any;
mod flavored;
mod mass;
mod plain;
mod quantity;

pub use any::AnyCondiment;
pub use flavored::{Liqueur, LiqueurKind, Syrup, SyrupKind};
pub use mass::{ChocolateCrumbs, CoconutFlakes};
pub use plain::{Cinnamon, Cream};
pub use quantity::{ChocolateSlices, IceCubeKind, IceCubes, Lemon};

use crate::beverage::{Beverage, Cost};

/// Placed between the wrapped description and the condiment fragment.
pub const SEPARATOR: &str = ", ";

/// An additive modifier of a beverage.
///
/// Implementations compute both values from their own parameters only, never from
/// the beverage they end up wrapping.
#[cfg_attr(test, mockall::automock)]
pub trait Condiment {
    /// the text appended to the wrapped beverage's description
    fn fragment(&self) -> String;

    /// the amount added to the wrapped beverage's cost
    fn extra_cost(&self) -> Cost;
}

/// A beverage wrapped with one condiment.
///
/// The wrapped beverage is moved in at construction and owned exclusively for the
/// whole lifetime of the wrapper.
#[derive(Clone, Debug)]
pub struct Decorated<B, C> {
    beverage: B,
    condiment: C,
}

impl<B: Beverage, C: Condiment> Decorated<B, C> {
    pub fn new(beverage: B, condiment: C) -> Self {
        Self { beverage, condiment }
    }
}

impl<B, C> Decorated<B, C> {
    pub fn inner(&self) -> &B {
        &self.beverage
    }

    pub fn condiment(&self) -> &C {
        &self.condiment
    }
}

impl<B: Beverage, C: Condiment> Beverage for Decorated<B, C> {
    fn description(&self) -> String {
        let mut description = self.beverage.description();
        description.push_str(SEPARATOR);
        description.push_str(&self.condiment.fragment());
        description
    }

    fn cost(&self) -> Cost {
        self.beverage.cost().saturating_add(self.condiment.extra_cost())
    }
}
