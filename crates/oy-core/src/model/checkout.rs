//! # Payment Checkout and Invoices
//!
//! Bodies of `POST /payment-checkout/create-v2` and
//! `POST /payment-checkout/create-invoice`. An invoice is a checkout plus
//! invoicing-only fields.

use crate::amount::Amount;
use bon::Builder;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Banks enabled on a checkout page unless overridden
pub const DEFAULT_ENABLED_BANKS: &str = "002,008,009,013,022";

/// E-wallets enabled on a checkout page unless overridden
pub const DEFAULT_ENABLED_EWALLETS: &str =
    "shopeepay_ewallet,dana_ewallet,linkaja_ewallet,ovo_ewallet";

/// Page the payer lands on when opening the link
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckoutStep {
    #[default]
    InputAmount,
    InputPersonalInfo,
    SelectPaymentMethod,
}

/// Create a payment checkout link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
pub struct PaymentCheckout {
    #[builder(into)]
    pub partner_trx_id: String,

    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[builder(into)]
    pub sender_name: String,

    pub amount: Amount,

    #[builder(into)]
    pub email: String,

    #[builder(into)]
    pub phone_number: String,

    /// Payer may change the amount
    #[builder(default)]
    pub is_open: bool,

    #[builder(default)]
    pub step: CheckoutStep,

    #[builder(default)]
    pub include_admin_fee: bool,

    /// Comma separated, e.g. "VA,CREDIT_CARD"
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_disabled_payment_methods: Option<String>,

    #[builder(into, default = String::from(DEFAULT_ENABLED_BANKS))]
    pub list_enabled_banks: String,

    #[builder(into, default = String::from(DEFAULT_ENABLED_EWALLETS))]
    pub list_enabled_ewallet: String,

    #[serde(
        serialize_with = "crate::model::oy_datetime::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration: Option<NaiveDateTime>,

    #[serde(
        serialize_with = "crate::model::oy_datetime::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDateTime>,

    /// Name shown on the VA, defaults to the partner's brand on the provider side
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub va_display_name: Option<String>,
}

/// A line on an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
pub struct InvoiceItem {
    #[builder(into)]
    pub item: String,

    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub quantity: u32,

    pub date_of_purchase: NaiveDate,

    pub price_per_item: Amount,
}

/// Create an invoice link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
pub struct CheckoutInvoice {
    #[serde(flatten)]
    pub checkout: PaymentCheckout,

    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_user_id: Option<String>,

    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[builder(default)]
    pub is_va_lifetime: bool,

    #[builder(default)]
    pub invoice_items: Vec<InvoiceItem>,

    /// Base64 encoded PDF
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}
