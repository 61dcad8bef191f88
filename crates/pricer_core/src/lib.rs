//! # pricer_core: Foundation Types for Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Validated option inputs: [`OptionParameters`](types::OptionParameters)
//! - Payoff direction and sensitivity kinds: [`OptionType`](types::OptionType),
//!   [`Greek`](types::Greek)
//! - Error types: [`PricingError`](types::PricingError)
//! - The [`OptionPricer`](traits::OptionPricer) seam shared by the analytic and
//!   Monte Carlo pricers (`traits`)
//! - Volatility surface abstractions (`market_data::surfaces`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation of parameters and results
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{OptionParameters, OptionType};
//!
//! let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 1_000_000).unwrap();
//! assert_eq!(params.spot(), 100.0);
//! assert_eq!(OptionType::Put.sign(), -1.0);
//!
//! // Invalid inputs never construct
//! assert!(OptionParameters::new(0.0, 100.0, 0.05, 0.2, 1.0, 1_000).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod traits;
pub mod types;
