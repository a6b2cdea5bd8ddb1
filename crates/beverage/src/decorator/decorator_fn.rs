use crate::decorator::{Decorator, DecoratorComposer};

/// A [`Decorator`] backed by a closure, for wrappings that are not a single condiment.
#[derive(Copy, Clone)]
pub struct DecoratorFn<F> {
    f: F,
}

pub fn decorator_fn<In, Out, F>(f: F) -> DecoratorFn<F>
where
    F: Fn(In) -> Out,
{
    DecoratorFn { f }
}

impl<F> DecoratorFn<F> {
    pub fn and_then<D>(self, decorator: D) -> DecoratorComposer<Self, D> {
        DecoratorComposer::new(self, decorator)
    }

    pub fn compose<D>(self, decorator: D) -> DecoratorComposer<D, Self> {
        DecoratorComposer::new(decorator, self)
    }
}

impl<F> std::fmt::Debug for DecoratorFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoratorFn").finish_non_exhaustive()
    }
}

impl<In, Out, F> Decorator<In> for DecoratorFn<F>
where
    F: Fn(In) -> Out,
{
    type Out = Out;
    fn decorate(&self, raw: In) -> Self::Out {
        (self.f)(raw)
    }
}
