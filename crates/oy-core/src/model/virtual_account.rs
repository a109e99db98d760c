//! # Static Virtual Accounts
//!
//! Bodies of `POST /generate-static-va` and `PUT /static-virtual-account/{id}`.
//! VA amounts may carry decimals, so they are `Decimal` and go on the wire as
//! exact decimal strings.

use bon::Builder;
use rust_decimal::Decimal;
use serde::Serialize;

/// Create a static virtual account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
pub struct CreateVirtualAccount {
    /// Partner-side user id the VA belongs to
    #[builder(into)]
    pub partner_user_id: String,

    /// VA aggregator bank code
    #[builder(into)]
    pub bank_code: String,

    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,

    /// Open amount VA accepts any amount
    #[builder(default = true)]
    pub is_open: bool,

    #[builder(default)]
    pub is_single_use: bool,

    /// VA lifetime in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<u32>,

    #[builder(default)]
    pub is_lifetime: bool,

    /// Name shown to the payer
    #[builder(into, default = String::from("username"))]
    pub username_display: String,

    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Per-transaction expiry in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trx_expiration_time: Option<u32>,

    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_trx_id: Option<String>,

    /// Number of payments allowed, -1 for unlimited
    #[builder(default = -1)]
    pub trx_counter: i32,
}

/// Update a static virtual account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
pub struct UpdateVirtualAccount {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,

    #[builder(default)]
    pub is_single_use: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<u32>,

    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_display: Option<String>,

    #[builder(default)]
    pub is_lifetime: bool,

    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trx_expiration_time: Option<u32>,

    #[builder(into)]
    pub partner_trx_id: String,

    #[builder(default = -1)]
    pub trx_counter: i32,
}
