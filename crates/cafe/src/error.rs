use std::io;

use thiserror::Error;

use crate::menu::Menu;

#[derive(Debug, Error)]
pub enum CafeError {
    #[error("menu error: {source}")]
    Menu {
        #[from]
        source: MenuError,
    },

    #[error("input closed before checkout")]
    InputClosed,

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl CafeError {
    /// the order ended without a receipt, but the counter itself is healthy
    pub fn is_abandoned(&self) -> bool {
        matches!(self, Self::Menu { .. } | Self::InputClosed)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("invalid {menu} choice: {choice}")]
    InvalidChoice { menu: Menu, choice: i64 },

    #[error("{menu} choice is not a number: {input:?}")]
    NotANumber { menu: Menu, input: String },
}

impl MenuError {
    pub fn invalid_choice(menu: Menu, choice: i64) -> Self {
        Self::InvalidChoice { menu, choice }
    }

    pub fn not_a_number<S: ToString>(menu: Menu, input: S) -> Self {
        Self::NotANumber { menu, input: input.to_string() }
    }

    pub fn menu(&self) -> Menu {
        match self {
            Self::InvalidChoice { menu, .. } | Self::NotANumber { menu, .. } => *menu,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CafeBuildError {
    #[error("{item} must be at least 1")]
    ZeroAmount { item: &'static str },
}
