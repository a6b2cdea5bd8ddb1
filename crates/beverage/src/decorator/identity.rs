use crate::decorator::{Decorator, DecoratorComposer};

/// Hands its input back unchanged.
#[derive(Default, Clone, Copy, Debug)]
pub struct IdentityDecorator;

impl IdentityDecorator {
    pub fn and_then<D>(self, decorator: D) -> DecoratorComposer<Self, D> {
        DecoratorComposer::new(self, decorator)
    }
}

impl<In> Decorator<In> for IdentityDecorator {
    type Out = In;

    #[inline(always)]
    fn decorate(&self, raw: In) -> Self::Out {
        raw
    }
}
