//! # Disbursement
//!
//! Instant transfers to a beneficiary bank account and their status.

use crate::client::OyClient;
use crate::response::ApiResponse;
use oy_core::{Disbursement, OyResult};
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct DisbursementStatusBody<'a> {
    partner_trx_id: &'a str,
    send_callback: bool,
}

impl OyClient {
    /// Start a disbursement to a beneficiary account
    #[instrument(skip(self, remit), fields(partner_trx_id = %remit.partner_trx_id, amount = %remit.amount))]
    pub async fn disbursement(&self, remit: &Disbursement) -> OyResult<ApiResponse> {
        self.execute(self.request(Method::POST, "/remit").json(remit))
            .await
    }

    /// Status of a disbursement.
    ///
    /// Poll until the status is final. With `send_callback` OY! also posts
    /// the status to the partner's registered callback URL.
    #[instrument(skip(self))]
    pub async fn disbursement_status(
        &self,
        partner_trx_id: &str,
        send_callback: bool,
    ) -> OyResult<ApiResponse> {
        let body = DisbursementStatusBody {
            partner_trx_id,
            send_callback,
        };
        self.execute(self.request(Method::POST, "/remit-status").json(&body))
            .await
    }
}
