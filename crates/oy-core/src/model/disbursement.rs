//! # Disbursement
//!
//! Body of `POST /remit`.

use crate::amount::Amount;
use bon::Builder;
use serde::Serialize;

/// Send money to a beneficiary bank account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
pub struct Disbursement {
    /// Beneficiary bank code (e.g. "014")
    #[builder(into)]
    pub recipient_bank: String,

    /// Beneficiary account number
    #[builder(into)]
    pub recipient_account: String,

    /// Whole rupiah, minimum 10.000
    pub amount: Amount,

    /// Unique transaction id on the partner side
    #[builder(into)]
    pub partner_trx_id: String,

    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Beneficiary email for the transfer receipt
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
