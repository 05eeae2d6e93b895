//! Core components of the `avantage-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`AvClient`] and its builder.
//! - The primary [`AvError`] type and the [`FetchResult`] alias.
//! - Shared display models ([`StockQuote`], [`CashFlowPeriod`]).
//! - Safe string-to-number conversions used by the endpoint modules.

/// The main client (`AvClient`), builder, and configuration.
pub mod client;
/// The primary error type (`AvError`) for the crate.
pub mod error;
/// Shared display models used across the endpoint modules.
pub mod models;

pub(crate) mod conversions;

// convenient re-exports so most code can just `use crate::core::AvClient`
pub use client::{AvClient, AvClientBuilder};
pub use error::{AvError, FetchResult};
pub use models::{CashFlowPeriod, SearchOutcome, StockQuote};
