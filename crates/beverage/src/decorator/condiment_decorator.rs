use tracing::trace;

use crate::beverage::{Beverage, BoxedBeverage};
use crate::condiment::{Condiment, Decorated};
use crate::decorator::{Decorator, DecoratorComposer};

/// Remembers a condiment's arguments and wraps whatever beverage it is given later.
///
/// Each call to [`Decorator::decorate`] clones the stored condiment, so one
/// decorator can be applied to many beverages.
#[derive(Copy, Clone, Debug)]
pub struct CondimentDecorator<C> {
    condiment: C,
}

/// Captures `condiment` now and returns a decorator that adds it to any beverage.
pub fn make_condiment<C: Condiment + Clone>(condiment: C) -> CondimentDecorator<C> {
    CondimentDecorator { condiment }
}

impl<C> CondimentDecorator<C> {
    pub fn condiment(&self) -> &C {
        &self.condiment
    }

    pub fn and_then<D>(self, decorator: D) -> DecoratorComposer<Self, D> {
        DecoratorComposer::new(self, decorator)
    }

    pub fn compose<D>(self, decorator: D) -> DecoratorComposer<D, Self> {
        DecoratorComposer::new(decorator, self)
    }
}

impl<B, C> Decorator<B> for CondimentDecorator<C>
where
    B: Beverage,
    C: Condiment + Clone,
{
    type Out = Decorated<B, C>;

    fn decorate(&self, raw: B) -> Self::Out {
        Decorated::new(raw, self.condiment.clone())
    }
}

/// Moves `beverage` into a new type-erased wrapper that adds `condiment`.
pub fn wrap<C>(beverage: BoxedBeverage, condiment: C) -> BoxedBeverage
where
    C: Condiment + 'static,
{
    trace!(fragment = %condiment.fragment(), extra_cost = condiment.extra_cost(), "wrapping beverage");
    Box::new(Decorated::new(beverage, condiment))
}
