use std::io::{BufRead, Write};

use micro_beverage::beverage::BaseOrder;
use micro_beverage::condiment::{
    AnyCondiment, ChocolateCrumbs, ChocolateSlices, Cinnamon, CoconutFlakes, Cream, IceCubes, Lemon, Liqueur, Syrup,
};
use micro_beverage::{wrap, BoxedBeverage};
use tracing::{debug, info, warn};

use crate::config::CafeConfig;
use crate::ensure;
use crate::error::{CafeBuildError, CafeError};
use crate::menu::{self, BaseItem, CondimentItem, Menu};
use crate::receipt::Receipt;

#[derive(Debug)]
pub struct CafeBuilder {
    config: CafeConfig,
}

impl CafeBuilder {
    fn new() -> Self {
        Self { config: CafeConfig::default() }
    }

    pub fn config(mut self, config: CafeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn lemon_quantity(mut self, quantity: u32) -> Self {
        self.config.lemon_quantity = quantity;
        self
    }

    pub fn ice_cube_quantity(mut self, quantity: u32) -> Self {
        self.config.ice_cube_quantity = quantity;
        self
    }

    pub fn chocolate_crumbs_mass(mut self, mass: u32) -> Self {
        self.config.chocolate_crumbs_mass = mass;
        self
    }

    pub fn coconut_flakes_mass(mut self, mass: u32) -> Self {
        self.config.coconut_flakes_mass = mass;
        self
    }

    pub fn chocolate_slices(mut self, slices: u32) -> Self {
        self.config.chocolate_slices = slices;
        self
    }

    pub fn build(self) -> Result<Cafe, CafeBuildError> {
        let config = self.config;
        let amounts = [
            ("lemon quantity", config.lemon_quantity),
            ("ice cube quantity", config.ice_cube_quantity),
            ("chocolate crumbs mass", config.chocolate_crumbs_mass),
            ("coconut flakes mass", config.coconut_flakes_mass),
            ("chocolate slices", config.chocolate_slices),
        ];
        for (item, amount) in amounts {
            ensure!(amount > 0, CafeBuildError::ZeroAmount { item });
        }
        Ok(Cafe { config })
    }
}

/// The ordering counter: one call to [`Cafe::serve`] takes one order.
#[derive(Debug)]
pub struct Cafe {
    config: CafeConfig,
}

impl Cafe {
    pub fn builder() -> CafeBuilder {
        CafeBuilder::new()
    }

    pub fn config(&self) -> &CafeConfig {
        &self.config
    }

    /// Runs one ordering dialogue, reading choices from `input` and writing the
    /// menus and the bill to `output`.
    ///
    /// Returns the receipt on checkout. An invalid base beverage choice ends the
    /// order with [`CafeError::Menu`], running out of input ends it with
    /// [`CafeError::InputClosed`].
    pub fn serve<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<Receipt, CafeError> {
        Session { config: &self.config, input, output, line: Vec::new() }.run()
    }
}

struct Session<'cafe, R, W> {
    config: &'cafe CafeConfig,
    input: R,
    output: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn run(mut self) -> Result<Receipt, CafeError> {
        info!("new order");
        writeln!(self.output, "{}", menu::WELCOME)?;

        let order = match self.choose_base() {
            Ok(order) => order,
            Err(CafeError::Menu { source }) => {
                warn!(cause = %source, "order rejected");
                writeln!(self.output, "{}", menu::REJECTED)?;
                return Err(source.into());
            }
            Err(e) => return Err(e),
        };
        debug!(?order, "base beverage chosen");

        let mut beverage = order.brew();
        loop {
            match self.choose_condiment() {
                Ok(Some(condiment)) => {
                    debug!(?condiment, "condiment added");
                    beverage = wrap(beverage, condiment);
                }
                Ok(None) => break,
                Err(CafeError::Menu { source }) => {
                    debug!(cause = %source, "invalid condiment choice");
                    writeln!(self.output, "{}", menu::TRY_AGAIN)?;
                }
                Err(e) => return Err(e),
            }
        }

        self.checkout(&beverage)
    }

    fn choose_base(&mut self) -> Result<BaseOrder, CafeError> {
        let choice = self.ask(Menu::Base, menu::BASE_MENU)?;
        let order = match BaseItem::from_choice(choice)? {
            BaseItem::Coffee => BaseOrder::Coffee,
            BaseItem::Cappuccino => {
                let choice = self.ask(Menu::Portion, menu::CAPPUCCINO_PROMPT)?;
                BaseOrder::Cappuccino(menu::portion(choice)?)
            }
            BaseItem::Latte => {
                let choice = self.ask(Menu::Portion, menu::LATTE_PROMPT)?;
                BaseOrder::Latte(menu::portion(choice)?)
            }
            BaseItem::Tea => {
                let choice = self.ask(Menu::Tea, menu::TEA_PROMPT)?;
                BaseOrder::Tea(menu::tea_kind(choice)?)
            }
            BaseItem::Milkshake => {
                let choice = self.ask(Menu::Milkshake, menu::MILKSHAKE_PROMPT)?;
                BaseOrder::Milkshake(menu::milkshake_size(choice)?)
            }
        };
        Ok(order)
    }

    /// `None` means checkout.
    fn choose_condiment(&mut self) -> Result<Option<AnyCondiment>, CafeError> {
        let config = self.config;
        let choice = self.ask(Menu::Condiment, menu::CONDIMENT_MENU)?;
        let condiment: AnyCondiment = match CondimentItem::from_choice(choice)? {
            CondimentItem::Checkout => return Ok(None),
            CondimentItem::Lemon => Lemon::new(config.lemon_quantity).into(),
            CondimentItem::Cinnamon => Cinnamon.into(),
            CondimentItem::IceCubes => {
                let choice = self.ask(Menu::IceCubes, menu::ICE_CUBES_PROMPT)?;
                IceCubes::new(config.ice_cube_quantity, menu::ice_cube_kind(choice)?).into()
            }
            CondimentItem::ChocolateCrumbs => ChocolateCrumbs::new(config.chocolate_crumbs_mass).into(),
            CondimentItem::CoconutFlakes => CoconutFlakes::new(config.coconut_flakes_mass).into(),
            CondimentItem::Syrup => {
                let choice = self.ask(Menu::Syrup, menu::SYRUP_PROMPT)?;
                Syrup::new(menu::syrup_kind(choice)?).into()
            }
            CondimentItem::Cream => Cream.into(),
            CondimentItem::Liqueur => {
                let choice = self.ask(Menu::Liqueur, menu::LIQUEUR_PROMPT)?;
                Liqueur::new(menu::liqueur_kind(choice)?).into()
            }
            CondimentItem::ChocolateSlices => ChocolateSlices::new(config.chocolate_slices).into(),
        };
        Ok(Some(condiment))
    }

    fn checkout(mut self, beverage: &BoxedBeverage) -> Result<Receipt, CafeError> {
        let receipt = Receipt::of(beverage);
        info!(description = receipt.description(), cost = receipt.cost(), "checkout");

        writeln!(self.output, "{}", menu::CHECKOUT)?;
        writeln!(self.output, "{receipt}")?;
        self.output.flush()?;
        Ok(receipt)
    }

    fn ask(&mut self, which: Menu, prompt: &str) -> Result<i64, CafeError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let line = self.read_line()?;
        Ok(menu::parse_choice(which, &line)?)
    }

    /// next non-blank line of input, bytes that are not UTF-8 replaced
    fn read_line(&mut self) -> Result<String, CafeError> {
        loop {
            self.line.clear();
            let read = self.input.read_until(b'\n', &mut self.line)?;
            ensure!(read > 0, CafeError::InputClosed);
            let line = String::from_utf8_lossy(&self.line);
            let line = line.trim();
            if !line.is_empty() {
                return Ok(line.to_owned());
            }
        }
    }
}
