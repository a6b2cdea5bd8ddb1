use crate::beverage::Cost;
use crate::condiment::Condiment;

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cinnamon;

impl Condiment for Cinnamon {
    fn fragment(&self) -> String {
        "Cinnamon".into()
    }

    fn extra_cost(&self) -> Cost {
        20
    }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cream;

impl Condiment for Cream {
    fn fragment(&self) -> String {
        "Cream".into()
    }

    fn extra_cost(&self) -> Cost {
        25
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cinnamon() {
        assert_eq!(Cinnamon.fragment(), "Cinnamon");
        assert_eq!(Cinnamon.extra_cost(), 20);
    }

    #[test]
    fn test_cream() {
        assert_eq!(Cream.fragment(), "Cream");
        assert_eq!(Cream.extra_cost(), 25);
    }
}
