//! # oy-core
//!
//! Core types for the OY! Indonesia API client.
//!
//! This crate provides:
//! - `OyError` / `OyResult` for typed error handling
//! - `Amount`, an integer rupiah amount that never touches floating point
//! - Request models with builders for disbursements, scheduled
//!   disbursements, virtual accounts, checkout links and invoices
//!
//! ## Example
//!
//! ```rust,ignore
//! use oy_core::{Amount, Disbursement, new_partner_trx_id};
//!
//! let remit = Disbursement::builder()
//!     .recipient_bank("014")
//!     .recipient_account("1234567890")
//!     .amount(Amount::from(10_000u64))
//!     .partner_trx_id(new_partner_trx_id())
//!     .note("Invoice #42")
//!     .build();
//! ```

pub mod amount;
pub mod error;
pub mod model;

// Re-exports for convenience
pub use amount::{Amount, MIN_DISBURSEMENT_AMOUNT};
pub use error::{OyError, OyResult};
pub use model::checkout::{
    CheckoutInvoice, CheckoutStep, InvoiceItem, PaymentCheckout, DEFAULT_ENABLED_BANKS,
    DEFAULT_ENABLED_EWALLETS,
};
pub use model::disbursement::Disbursement;
pub use model::new_partner_trx_id;
pub use model::scheduled::{
    Schedule, ScheduledDisbursement, ScheduledDisbursementFilter, ScheduledDisbursementRetry,
    ScheduledDisbursementUpdate, TriggerSchedule,
};
pub use model::virtual_account::{CreateVirtualAccount, UpdateVirtualAccount};
pub use rust_decimal::Decimal;
