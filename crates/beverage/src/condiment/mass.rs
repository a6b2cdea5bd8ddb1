//! Condiments priced per gram.

use crate::beverage::Cost;
use crate::condiment::Condiment;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChocolateCrumbs {
    mass: u32,
}

impl ChocolateCrumbs {
    pub fn new(mass: u32) -> Self {
        Self { mass }
    }

    pub fn mass(&self) -> u32 {
        self.mass
    }
}

impl Condiment for ChocolateCrumbs {
    fn fragment(&self) -> String {
        format!("Chocolate crumbs {}g", self.mass)
    }

    fn extra_cost(&self) -> Cost {
        self.mass.saturating_mul(2)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CoconutFlakes {
    mass: u32,
}

impl CoconutFlakes {
    pub fn new(mass: u32) -> Self {
        Self { mass }
    }

    pub fn mass(&self) -> u32 {
        self.mass
    }
}

impl Condiment for CoconutFlakes {
    fn fragment(&self) -> String {
        format!("Coconut flakes {}g", self.mass)
    }

    fn extra_cost(&self) -> Cost {
        self.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chocolate_crumbs() {
        let crumbs = ChocolateCrumbs::new(5);
        assert_eq!(crumbs.fragment(), "Chocolate crumbs 5g");
        assert_eq!(crumbs.extra_cost(), 10);
    }

    #[test]
    fn test_coconut_flakes() {
        let flakes = CoconutFlakes::new(8);
        assert_eq!(flakes.fragment(), "Coconut flakes 8g");
        assert_eq!(flakes.extra_cost(), 8);
    }
}
