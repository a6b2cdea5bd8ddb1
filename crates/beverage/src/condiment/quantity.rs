//! Condiments priced per piece.

use std::fmt;

use crate::beverage::Cost;
use crate::condiment::Condiment;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Lemon {
    quantity: u32,
}

impl Lemon {
    pub fn new(quantity: u32) -> Self {
        Self { quantity }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl Default for Lemon {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Condiment for Lemon {
    fn fragment(&self) -> String {
        format!("Lemon x {}", self.quantity)
    }

    fn extra_cost(&self) -> Cost {
        self.quantity.saturating_mul(10)
    }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IceCubeKind {
    Dry,
    #[default]
    Water,
}

impl IceCubeKind {
    fn cost_per_cube(self) -> Cost {
        match self {
            IceCubeKind::Dry => 10,
            IceCubeKind::Water => 5,
        }
    }
}

impl fmt::Display for IceCubeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IceCubeKind::Dry => f.write_str("Dry"),
            IceCubeKind::Water => f.write_str("Water"),
        }
    }
}

/// Dry ice is twice the price of water ice, per cube.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IceCubes {
    quantity: u32,
    kind: IceCubeKind,
}

impl IceCubes {
    pub fn new(quantity: u32, kind: IceCubeKind) -> Self {
        Self { quantity, kind }
    }

    pub fn water(quantity: u32) -> Self {
        Self::new(quantity, IceCubeKind::Water)
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn kind(&self) -> IceCubeKind {
        self.kind
    }
}

impl Condiment for IceCubes {
    fn fragment(&self) -> String {
        format!("{} ice cubes x {}", self.kind, self.quantity)
    }

    fn extra_cost(&self) -> Cost {
        self.quantity.saturating_mul(self.kind.cost_per_cube())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChocolateSlices {
    slices: u32,
}

impl ChocolateSlices {
    pub fn new(slices: u32) -> Self {
        Self { slices }
    }

    pub fn slices(&self) -> u32 {
        self.slices
    }
}

impl Default for ChocolateSlices {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Condiment for ChocolateSlices {
    fn fragment(&self) -> String {
        format!("Chocolate x{} slices", self.slices)
    }

    fn extra_cost(&self) -> Cost {
        self.slices.saturating_mul(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lemon() {
        let lemon = Lemon::new(3);
        assert_eq!(lemon.fragment(), "Lemon x 3");
        assert_eq!(lemon.extra_cost(), 30);

        assert_eq!(Lemon::default().quantity(), 1);
        assert_eq!(Lemon::default().fragment(), "Lemon x 1");
    }

    #[test]
    fn test_ice_cubes() {
        let dry = IceCubes::new(2, IceCubeKind::Dry);
        assert_eq!(dry.fragment(), "Dry ice cubes x 2");
        assert_eq!(dry.extra_cost(), 20);

        let water = IceCubes::water(3);
        assert_eq!(water.fragment(), "Water ice cubes x 3");
        assert_eq!(water.extra_cost(), 15);
    }

    #[test]
    fn test_ice_cube_kind_default_is_water() {
        assert_eq!(IceCubeKind::default(), IceCubeKind::Water);
    }

    #[test]
    fn test_chocolate_slices() {
        let slices = ChocolateSlices::new(4);
        assert_eq!(slices.fragment(), "Chocolate x4 slices");
        assert_eq!(slices.extra_cost(), 40);

        assert_eq!(ChocolateSlices::default().fragment(), "Chocolate x1 slices");
    }

    #[test]
    fn test_zero_quantity_is_free() {
        assert_eq!(Lemon::new(0).extra_cost(), 0);
        assert_eq!(IceCubes::new(0, IceCubeKind::Dry).extra_cost(), 0);
    }
}
