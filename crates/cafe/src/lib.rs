//! An interactive ordering counter on top of [`micro_beverage`]
//!
//! [`Cafe::serve`] runs one order: the customer picks a base beverage, adds
//! condiments one menu choice at a time and checks out with `0`. The dialogue is
//! read from any [`std::io::BufRead`] and written to any [`std::io::Write`], so the
//! same counter drives a terminal or a scripted test.
//!
//! ```
//! use std::io::Cursor;
//! use micro_cafe::Cafe;
//!
//! let cafe = Cafe::builder().build().unwrap();
//! let mut output = Vec::new();
//! let receipt = cafe.serve(Cursor::new("3\n1\n2\n0\n"), &mut output).unwrap();
//!
//! assert_eq!(receipt.to_string(), "Standard Latte, Cinnamon, cost: 110");
//! ```

mod cafe;
mod config;
mod error;
mod receipt;
mod utils;

pub mod menu;

pub use cafe::Cafe;
pub use cafe::CafeBuilder;
pub use config::CafeConfig;
pub use error::CafeBuildError;
pub use error::CafeError;
pub use error::MenuError;
pub use receipt::Receipt;

pub(crate) use utils::ensure;
