//! # oy-client
//!
//! Async client for the OY! Indonesia partner API.
//!
//! Each method issues exactly one HTTP request and returns the provider's
//! response as an [`ApiResponse`]. Transport failures surface as
//! [`OyError::Transport`](oy_core::OyError::Transport); provider-level
//! errors are left in the response for the caller to inspect.
//!
//! | Product                | Methods |
//! |------------------------|---------|
//! | Balance / inquiry      | `get_balance`, `account_inquiry`, `get_invoices`, `get_invoice_by_id`, `pay_invoice` |
//! | Disbursement           | `disbursement`, `disbursement_status` |
//! | Scheduled disbursement | `scheduled_disbursement`, `get_detail_scheduled_disbursement`, `get_list_scheduled_disbursement`, `update_scheduled_disbursement`, `cancel_scheduled_disbursement`, `retry_scheduled_disbursement` |
//! | Virtual accounts       | `create_virtual_account`, `get_virtual_account_info`, `update_virtual_account_info`, `get_list_virtual_account`, `get_list_va_transaction` |
//! | Checkout / invoices    | `create_payment_checkout`, `create_invoice`, `get_payment_status`, `delete_payment_link`, `get_payment_link` |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use oy_client::OyClient;
//! use oy_core::{Amount, Disbursement, new_partner_trx_id};
//!
//! // OY_API_KEY, OY_USERNAME, OY_PRODUCTION
//! let oy = OyClient::from_env()?;
//!
//! let balance = oy.get_balance().await?;
//! println!("{}", balance.text());
//!
//! let remit = Disbursement::builder()
//!     .recipient_bank("014")
//!     .recipient_account("1234567890")
//!     .amount(Amount::from(10_000u64))
//!     .partner_trx_id(new_partner_trx_id())
//!     .build();
//!
//! let response = oy.disbursement(&remit).await?;
//! if !response.is_success() {
//!     eprintln!("OY! rejected the transfer: {}", response.text());
//! }
//! ```

pub mod client;
pub mod config;
pub mod response;

mod account;
mod checkout;
mod disbursement;
mod scheduled;
mod virtual_account;

// Re-exports
pub use client::OyClient;
pub use config::{OyConfig, PRODUCTION_BASE_URL, STAGING_BASE_URL};
pub use response::ApiResponse;
