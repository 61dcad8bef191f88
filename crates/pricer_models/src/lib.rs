//! # Pricer Models (L2: Closed-Form Models)
//!
//! Analytic Black-Scholes pricing and Greeks for European options.
//!
//! This crate provides:
//! - Standard normal CDF and density (`analytical::distributions`)
//! - The d1/d2 risk factors as an owned value ([`AnalyticFactors`](analytical::AnalyticFactors))
//! - Closed-form price, delta, gamma, theta and vega ([`BlackScholes`](analytical::BlackScholes))
//! - An [`OptionPricer`](pricer_core::traits::OptionPricer) adapter for
//!   bump-and-reprice ([`AnalyticPricer`](analytical::AnalyticPricer))
//!
//! ## Design Principles
//!
//! - **No shared state**: every call computes its own factors on the stack,
//!   so concurrent evaluation is safe and results are bit-for-bit repeatable
//! - **Fail fast**: degenerate factor inputs are reported as
//!   `PricingError::InvalidParameter`, never as NaN

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
