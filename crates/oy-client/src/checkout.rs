//! # Payment Checkout and Invoice Links
//!
//! Hosted payment pages. `id` arguments accept either the `payment_link_id`
//! or the `partner_trx_id` of the link.

use crate::client::OyClient;
use crate::response::ApiResponse;
use oy_core::{CheckoutInvoice, OyResult, PaymentCheckout};
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct PaymentStatusQuery<'a> {
    partner_trx_id: &'a str,
    send_callback: bool,
}

impl OyClient {
    #[instrument(skip(self, checkout), fields(partner_trx_id = %checkout.partner_trx_id, amount = %checkout.amount))]
    pub async fn create_payment_checkout(
        &self,
        checkout: &PaymentCheckout,
    ) -> OyResult<ApiResponse> {
        self.execute(
            self.request(Method::POST, "/payment-checkout/create-v2")
                .json(checkout),
        )
        .await
    }

    #[instrument(skip(self, invoice), fields(partner_trx_id = %invoice.checkout.partner_trx_id))]
    pub async fn create_invoice(&self, invoice: &CheckoutInvoice) -> OyResult<ApiResponse> {
        self.execute(
            self.request(Method::POST, "/payment-checkout/create-invoice")
                .json(invoice),
        )
        .await
    }

    /// Latest status of a link, optionally re-sending the callback
    #[instrument(skip(self))]
    pub async fn get_payment_status(
        &self,
        partner_trx_id: &str,
        send_callback: bool,
    ) -> OyResult<ApiResponse> {
        let query = PaymentStatusQuery {
            partner_trx_id,
            send_callback,
        };
        self.execute(
            self.request(Method::GET, "/payment-checkout/status")
                .query(&query),
        )
        .await
    }

    /// Delete a link that is still active and has no payment method selected
    #[instrument(skip(self))]
    pub async fn delete_payment_link(&self, id: &str) -> OyResult<ApiResponse> {
        let request = self.request_with_id(Method::DELETE, "/payment-checkout", id)?;
        self.execute(request).await
    }

    #[instrument(skip(self))]
    pub async fn get_payment_link(&self, id: &str) -> OyResult<ApiResponse> {
        let request = self.request_with_id(Method::GET, "/payment-checkout", id)?;
        self.execute(request).await
    }
}
