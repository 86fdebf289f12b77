//! # Masterkey Metrics Engine
//!
//! The five business-diagnostic calculators behind the intake flow: loss
//! audit, night loss, AI threat, digital visibility and export opportunity.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems and depends only on `core-types` and the tuning tables
//!   in `configuration`.
//! - **Stateless Calculation:** the `MetricsEngine` holds nothing but
//!   validated tuning. Every calculator is a deterministic function of its
//!   input record: identical input, identical output, no clock, no I/O.
//! - **Coerce, never fail:** a calculator call cannot error. Negative money
//!   coerces to zero, unknown categories fall back to documented defaults,
//!   and every call returns a fully populated result record. The only
//!   fallible operation is `MetricsEngine::new`, which rejects inconsistent
//!   tuning (signal weights that don't sum to 100, non-exhaustive bands)
//!   before any request is served.
//!
//! ## Public API
//!
//! - `MetricsEngine`: the calculator set.
//! - One input/result record pair per calculator.
//! - `MetricsError`: tuning-validation failures.

// Declare the modules that constitute this crate.
pub mod ai_threat;
pub mod engine;
pub mod error;
pub mod export;
pub mod loss_audit;
pub mod night_loss;
pub mod visibility;

mod coerce;

// Re-export the key components to create a clean, public-facing API.
pub use ai_threat::{AiThreatInput, AiThreatResult};
pub use engine::MetricsEngine;
pub use error::MetricsError;
pub use export::{ExportOpportunityInput, ExportOpportunityResult};
pub use loss_audit::{LossAuditInput, LossAuditResult};
pub use night_loss::{NightLossInput, NightLossResult};
pub use visibility::{SignalGap, VisibilityInput, VisibilityResult};
