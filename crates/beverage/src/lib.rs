//! Beverages and condiments composed with the decorator pattern
//!
//! A base [`Beverage`] knows its own description and cost. Every condiment wraps
//! exactly one beverage and becomes a beverage itself: it appends its fragment to
//! the wrapped description and adds its extra cost to the wrapped cost. Chains of
//! any length are built by moving the previous beverage into the next wrapper.
//!
//! # Example
//!
//! ```
//! use micro_beverage::beverage::{Beverage, BeverageExt, Latte};
//! use micro_beverage::condiment::{ChocolateCrumbs, Cinnamon, IceCubeKind, IceCubes, Lemon};
//!
//! let beverage = Latte::standard()
//!     .with(Cinnamon)
//!     .with(Lemon::new(2))
//!     .with(IceCubes::new(2, IceCubeKind::Dry))
//!     .with(ChocolateCrumbs::new(2));
//!
//! assert_eq!(
//!     beverage.description(),
//!     "Standard Latte, Cinnamon, Lemon x 2, Dry ice cubes x 2, Chocolate crumbs 2g"
//! );
//! assert_eq!(beverage.cost(), 154);
//! ```
//!
//! # Architecture
//!
//! - [`beverage`]: the capability, the concrete base beverages and [`beverage::BaseOrder`]
//! - [`condiment`]: the decorator base [`condiment::Decorated`] and the concrete condiments
//! - [`decorator`]: composition helpers that capture condiment arguments before the
//!   beverage to wrap is known
//!
//! # Ownership
//!
//! A wrapper owns its inner beverage exclusively. Wrapping moves the beverage, so the
//! previous link of a chain can no longer be used on its own, and no beverage is ever
//! mutated after construction.

pub mod beverage;
pub mod condiment;
pub mod decorator;

pub use beverage::Beverage;
pub use beverage::BoxedBeverage;
pub use beverage::Cost;
pub use condiment::Condiment;
pub use decorator::wrap;
