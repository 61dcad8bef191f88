//! Core option and result types.
//!
//! This module provides:
//! - `option`: Validated inputs ([`OptionParameters`]) and payoff direction ([`OptionType`])
//! - `greek`: Sensitivity kinds ([`Greek`]) and result sets ([`GreekValues`], [`PricingReport`])
//! - `error`: Structured error type for validation, pricing and simulation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod error;
pub mod greek;
pub mod option;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use greek::{Greek, GreekValues, PricingReport};
pub use option::{OptionParameters, OptionType};
