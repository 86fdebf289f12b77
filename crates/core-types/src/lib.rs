//! # Masterkey Core Types
//!
//! Shared vocabulary for the whole platform: the industry, tier, band and
//! signal enums every layer speaks, plus the INR display-formatting helpers.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate depends on nothing else in the workspace. The
//!   metrics engine, the database repository and the web server all build on
//!   these types.
//! - **Coercion over failure:** every enum that is fed from user input has a
//!   documented fallback variant, so decoding a form submission can never
//!   fail. Unknown labels degrade to the default the calculators expect.

pub mod enums;
pub mod formatting;

// Re-export the core types to provide a clean public API.
pub use enums::{
    normalize_label, ClosingTime, ExportCategory, ExportDestination, Industry, ResponseSpeed,
    ThreatLevel, VisibilitySignal, VisibilityStatus,
};
pub use formatting::{format_inr, format_inr_full};
