//! Menu texts and the mapping from numeric choices to core selectors.
//!
//! Every function here is pure: it takes a choice the customer typed and either
//! returns the selected item or a [`MenuError`] naming the menu it came from.

use std::fmt;

use micro_beverage::beverage::{MilkshakeSize, Portion, TeaKind};
use micro_beverage::condiment::{IceCubeKind, LiqueurKind, SyrupKind};

use crate::ensure;
use crate::error::MenuError;

pub const WELCOME: &str = "Welcome to the beverage ordering system!";

pub const BASE_MENU: &str = "\
Choose your base beverage:
1 - Coffee
2 - Cappuccino
3 - Latte
4 - Tea
5 - Milkshake
";

pub const CONDIMENT_MENU: &str = "\
Choose your condiment:
1 - Lemon
2 - Cinnamon
3 - Ice Cubes
4 - Chocolate Crumbs
5 - Coconut Flakes
6 - Syrup
7 - Cream
8 - Liqueur
9 - Chocolate Slices
0 - Checkout
";

pub const CAPPUCCINO_PROMPT: &str = "Choose Cappuccino portion (1 - Standard, 2 - Double): ";
pub const LATTE_PROMPT: &str = "Choose Latte portion (1 - Standard, 2 - Double): ";
pub const TEA_PROMPT: &str = "Choose tea type (1 - Black, 2 - White, 3 - Blue, 4 - Cyan): ";
pub const MILKSHAKE_PROMPT: &str = "Choose milkshake size (1 - Small, 2 - Medium, 3 - Large): ";
pub const ICE_CUBES_PROMPT: &str = "Choose Ice Cubes Type (1 - Water, 2 - Dry): ";
pub const SYRUP_PROMPT: &str = "Choose Syrup Type (1 - Maple, 2 - Chocolate): ";
pub const LIQUEUR_PROMPT: &str = "Choose Liqueur Type (1 - Nutty, 2 - Chocolate): ";

pub const REJECTED: &str = "Invalid choice, go away from my cafe!";
pub const TRY_AGAIN: &str = "Invalid choice, try again.";
pub const CHECKOUT: &str = "Checkout!";

/// Which question a choice answered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Menu {
    Base,
    Portion,
    Tea,
    Milkshake,
    Condiment,
    IceCubes,
    Syrup,
    Liqueur,
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Menu::Base => "base beverage",
            Menu::Portion => "portion",
            Menu::Tea => "tea type",
            Menu::Milkshake => "milkshake size",
            Menu::Condiment => "condiment",
            Menu::IceCubes => "ice cubes type",
            Menu::Syrup => "syrup type",
            Menu::Liqueur => "liqueur type",
        };
        f.write_str(name)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BaseItem {
    Coffee,
    Cappuccino,
    Latte,
    Tea,
    Milkshake,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CondimentItem {
    Checkout,
    Lemon,
    Cinnamon,
    IceCubes,
    ChocolateCrumbs,
    CoconutFlakes,
    Syrup,
    Cream,
    Liqueur,
    ChocolateSlices,
}

pub fn parse_choice(menu: Menu, line: &str) -> Result<i64, MenuError> {
    let line = line.trim();
    line.parse::<i64>().ok().ok_or_else(|| MenuError::not_a_number(menu, line))
}

/// 1-based lookup into `options`.
fn pick<T: Copy>(menu: Menu, choice: i64, options: &[T]) -> Result<T, MenuError> {
    let index = usize::try_from(choice).unwrap_or(0);
    ensure!((1..=options.len()).contains(&index), MenuError::invalid_choice(menu, choice));
    Ok(options[index - 1])
}

impl BaseItem {
    pub fn from_choice(choice: i64) -> Result<Self, MenuError> {
        use BaseItem::{Cappuccino, Coffee, Latte, Milkshake, Tea};
        pick(Menu::Base, choice, &[Coffee, Cappuccino, Latte, Tea, Milkshake])
    }
}

impl CondimentItem {
    pub fn from_choice(choice: i64) -> Result<Self, MenuError> {
        use CondimentItem::{
            Checkout, ChocolateCrumbs, ChocolateSlices, Cinnamon, CoconutFlakes, Cream, IceCubes, Lemon, Liqueur,
            Syrup,
        };
        if choice == 0 {
            return Ok(Checkout);
        }
        pick(
            Menu::Condiment,
            choice,
            &[Lemon, Cinnamon, IceCubes, ChocolateCrumbs, CoconutFlakes, Syrup, Cream, Liqueur, ChocolateSlices],
        )
    }
}

pub fn portion(choice: i64) -> Result<Portion, MenuError> {
    pick(Menu::Portion, choice, &[Portion::Standard, Portion::Double])
}

pub fn tea_kind(choice: i64) -> Result<TeaKind, MenuError> {
    pick(Menu::Tea, choice, &[TeaKind::Black, TeaKind::White, TeaKind::Blue, TeaKind::Cyan])
}

pub fn milkshake_size(choice: i64) -> Result<MilkshakeSize, MenuError> {
    pick(Menu::Milkshake, choice, &[MilkshakeSize::Small, MilkshakeSize::Medium, MilkshakeSize::Large])
}

pub fn ice_cube_kind(choice: i64) -> Result<IceCubeKind, MenuError> {
    pick(Menu::IceCubes, choice, &[IceCubeKind::Water, IceCubeKind::Dry])
}

pub fn syrup_kind(choice: i64) -> Result<SyrupKind, MenuError> {
    pick(Menu::Syrup, choice, &[SyrupKind::Maple, SyrupKind::Chocolate])
}

pub fn liqueur_kind(choice: i64) -> Result<LiqueurKind, MenuError> {
    pick(Menu::Liqueur, choice, &[LiqueurKind::Nutty, LiqueurKind::Chocolate])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice(Menu::Base, " 3 \n"), Ok(3));
        assert_eq!(parse_choice(Menu::Base, "-1"), Ok(-1));
        assert_eq!(parse_choice(Menu::Tea, "latte"), Err(MenuError::not_a_number(Menu::Tea, "latte")));
    }

    #[test]
    fn test_base_items() {
        assert_eq!(BaseItem::from_choice(1), Ok(BaseItem::Coffee));
        assert_eq!(BaseItem::from_choice(5), Ok(BaseItem::Milkshake));
        assert_eq!(BaseItem::from_choice(0), Err(MenuError::invalid_choice(Menu::Base, 0)));
        assert_eq!(BaseItem::from_choice(6), Err(MenuError::invalid_choice(Menu::Base, 6)));
        assert_eq!(BaseItem::from_choice(-3), Err(MenuError::invalid_choice(Menu::Base, -3)));
    }

    #[test]
    fn test_condiment_items() {
        assert_eq!(CondimentItem::from_choice(0), Ok(CondimentItem::Checkout));
        assert_eq!(CondimentItem::from_choice(1), Ok(CondimentItem::Lemon));
        assert_eq!(CondimentItem::from_choice(9), Ok(CondimentItem::ChocolateSlices));
        assert_eq!(CondimentItem::from_choice(10), Err(MenuError::invalid_choice(Menu::Condiment, 10)));
    }

    #[test]
    fn test_sub_choices() {
        assert_eq!(portion(2), Ok(Portion::Double));
        assert_eq!(portion(3), Err(MenuError::invalid_choice(Menu::Portion, 3)));
        assert_eq!(tea_kind(4), Ok(TeaKind::Cyan));
        assert_eq!(milkshake_size(3), Ok(MilkshakeSize::Large));
        assert_eq!(ice_cube_kind(1), Ok(IceCubeKind::Water));
        assert_eq!(ice_cube_kind(2), Ok(IceCubeKind::Dry));
        assert_eq!(syrup_kind(1), Ok(SyrupKind::Maple));
        assert_eq!(liqueur_kind(2), Ok(LiqueurKind::Chocolate));
        assert_eq!(liqueur_kind(0), Err(MenuError::invalid_choice(Menu::Liqueur, 0)));
    }

    #[test]
    fn test_error_names_menu() {
        let error = syrup_kind(7).unwrap_err();
        assert_eq!(error.menu(), Menu::Syrup);
        assert_eq!(error.to_string(), "invalid syrup type choice: 7");
    }
}
