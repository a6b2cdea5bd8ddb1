//! Composition helpers for wrapping beverages.
//!
//! A [`Decorator`] turns one value into another by moving it into a wrapper. The
//! condiment arguments are captured up front by [`make_condiment`] or by a closure
//! passed to [`decorator_fn`], and the beverage is supplied later. Decorators chain
//! with `and_then`, so a whole recipe can be prepared once and applied
//! to any beverage.
//!
//! ```
//! use micro_beverage::beverage::{Beverage, Tea};
//! use micro_beverage::condiment::{IceCubes, Lemon};
//! use micro_beverage::decorator::{make_condiment, Decorator};
//!
//! let lemon_ice = make_condiment(Lemon::new(2)).and_then(make_condiment(IceCubes::water(3)));
//! let tea = lemon_ice.decorate(Tea::default());
//!
//! assert_eq!(tea.description(), "Black Tea, Lemon x 2, Water ice cubes x 3");
//! assert_eq!(tea.cost(), 30 + 20 + 15);
//! ```

mod condiment_decorator;
mod decorator_composer;
mod decorator_fn;
mod identity;

pub use condiment_decorator::{make_condiment, wrap, CondimentDecorator};
pub use decorator_composer::DecoratorComposer;
pub use decorator_fn::{decorator_fn, DecoratorFn};
pub use identity::IdentityDecorator;

pub trait Decorator<In> {
    type Out;

    fn decorate(&self, raw: In) -> Self::Out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beverage::{Beverage, BeverageExt, Cappuccino, Coffee, Latte};
    use crate::condiment::{Cinnamon, Cream, Lemon, Liqueur, LiqueurKind};

    #[test]
    fn test_and_then_applies_in_order() {
        let recipe = make_condiment(Cinnamon).and_then(make_condiment(Lemon::new(2)));
        let beverage = recipe.decorate(Coffee);

        assert_eq!(beverage.description(), "Coffee, Cinnamon, Lemon x 2");
        assert_eq!(beverage.cost(), 60 + 20 + 20);
    }

    #[test]
    fn test_compose_applies_argument_first() {
        let recipe = make_condiment(Cinnamon).compose(make_condiment(Lemon::new(2)));
        let beverage = recipe.decorate(Coffee);

        assert_eq!(beverage.description(), "Coffee, Lemon x 2, Cinnamon");
    }

    #[test]
    fn test_grouping_does_not_matter() {
        let left = make_condiment(Cinnamon)
            .and_then(make_condiment(Cream))
            .and_then(make_condiment(Liqueur::new(LiqueurKind::Nutty)));
        let right = make_condiment(Cinnamon)
            .and_then(make_condiment(Cream).and_then(make_condiment(Liqueur::new(LiqueurKind::Nutty))));

        let left = left.decorate(Latte::double());
        let right = right.decorate(Latte::double());

        assert_eq!(left.description(), right.description());
        assert_eq!(left.cost(), right.cost());
        assert_eq!(left.cost(), 130 + 20 + 25 + 50);
    }

    #[test]
    fn test_recipe_is_reusable() {
        let recipe = make_condiment(Cream).and_then(make_condiment(Cinnamon));

        let coffee = Coffee.decorate_with(&recipe);
        let cappuccino = Cappuccino::standard().decorate_with(&recipe);

        assert_eq!(coffee.description(), "Coffee, Cream, Cinnamon");
        assert_eq!(cappuccino.description(), "Standard Cappuccino, Cream, Cinnamon");
        assert_eq!(cappuccino.cost(), 80 + 25 + 20);
    }

    #[test]
    fn test_identity_is_neutral() {
        let recipe = IdentityDecorator.and_then(make_condiment(Cream)).and_then(IdentityDecorator);
        let beverage = recipe.decorate(Coffee);

        assert_eq!(beverage.description(), "Coffee, Cream");
        assert_eq!(IdentityDecorator.decorate(Coffee).description(), "Coffee");
    }

    #[test]
    fn test_decorator_fn() {
        let double_lemon = decorator_fn(|beverage: Coffee| beverage.with(Lemon::new(1)).with(Lemon::new(1)));
        let beverage = double_lemon.decorate(Coffee);

        assert_eq!(beverage.description(), "Coffee, Lemon x 1, Lemon x 1");
        assert_eq!(beverage.cost(), 80);
    }
}
