//! Core report types, ledger access, ranking, and request validation.
//!
//! This module holds everything needed to decide *who* goes into a top-20
//! report. Rendering the file lives in [`crate::siap`].

mod config;
mod error;
mod ledger;
pub mod money;
mod ranking;
mod types;
mod validation;

pub use config::*;
pub use error::*;
pub use ledger::*;
pub use money::{Rounding, format_amount, format_grouped, round_amount};
pub use ranking::*;
pub use types::*;
pub use validation::*;
