use crate::beverage::Cost;
use crate::condiment::{
    ChocolateCrumbs, ChocolateSlices, Cinnamon, CoconutFlakes, Condiment, Cream, IceCubes, Lemon, Liqueur, Syrup,
};

/// Any of the condiments on the menu, chosen at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnyCondiment {
    Cinnamon(Cinnamon),
    Lemon(Lemon),
    IceCubes(IceCubes),
    Syrup(Syrup),
    ChocolateCrumbs(ChocolateCrumbs),
    CoconutFlakes(CoconutFlakes),
    Cream(Cream),
    ChocolateSlices(ChocolateSlices),
    Liqueur(Liqueur),
}

impl AnyCondiment {
    fn as_condiment(&self) -> &dyn Condiment {
        match self {
            AnyCondiment::Cinnamon(c) => c,
            AnyCondiment::Lemon(c) => c,
            AnyCondiment::IceCubes(c) => c,
            AnyCondiment::Syrup(c) => c,
            AnyCondiment::ChocolateCrumbs(c) => c,
            AnyCondiment::CoconutFlakes(c) => c,
            AnyCondiment::Cream(c) => c,
            AnyCondiment::ChocolateSlices(c) => c,
            AnyCondiment::Liqueur(c) => c,
        }
    }
}

impl Condiment for AnyCondiment {
    fn fragment(&self) -> String {
        self.as_condiment().fragment()
    }

    fn extra_cost(&self) -> Cost {
        self.as_condiment().extra_cost()
    }
}

macro_rules! impl_from_condiment {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for AnyCondiment {
                fn from(condiment: $variant) -> Self {
                    AnyCondiment::$variant(condiment)
                }
            }
        )*
    };
}

impl_from_condiment!(
    Cinnamon,
    Lemon,
    IceCubes,
    Syrup,
    ChocolateCrumbs,
    CoconutFlakes,
    Cream,
    ChocolateSlices,
    Liqueur,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condiment::{IceCubeKind, LiqueurKind, SyrupKind};

    #[test]
    fn test_delegates_to_inner_condiment() {
        let cases: Vec<(AnyCondiment, &str, Cost)> = vec![
            (Cinnamon.into(), "Cinnamon", 20),
            (Lemon::new(2).into(), "Lemon x 2", 20),
            (IceCubes::new(2, IceCubeKind::Water).into(), "Water ice cubes x 2", 10),
            (Syrup::new(SyrupKind::Chocolate).into(), "Chocolate syrup", 15),
            (ChocolateCrumbs::new(5).into(), "Chocolate crumbs 5g", 10),
            (CoconutFlakes::new(5).into(), "Coconut flakes 5g", 5),
            (Cream.into(), "Cream", 25),
            (ChocolateSlices::new(2).into(), "Chocolate x2 slices", 20),
            (Liqueur::new(LiqueurKind::Chocolate).into(), "Chocolate Liqueur", 50),
        ];

        for (condiment, fragment, cost) in cases {
            assert_eq!(condiment.fragment(), fragment);
            assert_eq!(condiment.extra_cost(), cost);
        }
    }
}
