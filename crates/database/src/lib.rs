//! # Masterkey Database Crate
//!
//! The Persistence Gateway: a high-level, application-specific interface to
//! the PostgreSQL store holding captured leads and their latest calculator
//! results.
//!
//! ## Architectural Principles
//!
//! - **Layer 3 Adapter:** encapsulates all SQL. The engine never sees the
//!   database; handlers hand it a computed result and a business id, and
//!   this crate stores or rehydrates it.
//! - **Record sink/source:** per metric, `save_*` persists inputs alongside
//!   outputs and `latest_*` returns the most recent row for a business.
//!   Calculations are never redone here.
//! - **Asynchronous & Pooled:** all operations run on a shared `PgPool`.
//!
//! The expected schema is documented in `schema.sql` at the crate root;
//! applying it is an operator concern.
//!
//! ## Public API
//!
//! - `connect`: establish the connection pool from `DATABASE_URL`.
//! - `DbRepository`: all data-access methods.
//! - `DbError`: the specific error types this crate returns.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::connect;
pub use error::DbError;
pub use repository::{
    AiThreatRow, Business, DbRepository, ExportRow, LeadSummary, LossAuditRow, NewBusiness,
    NightLossRow, VisibilityRow,
};
