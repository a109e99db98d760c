//! # Balance, Account Inquiry and Inquiry Invoices

use crate::client::OyClient;
use crate::response::ApiResponse;
use oy_core::OyResult;
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct AccountInquiryBody<'a> {
    bank_code: &'a str,
    account_number: &'a str,
}

#[derive(Debug, Serialize)]
struct InvoiceQuery<'a> {
    offset: u32,
    limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct PayInvoiceBody<'a> {
    invoice_id: &'a str,
}

impl OyClient {
    /// Partner balance
    #[instrument(skip(self))]
    pub async fn get_balance(&self) -> OyResult<ApiResponse> {
        self.execute(self.request(Method::GET, "/balance")).await
    }

    /// Beneficiary account details for a bank account
    #[instrument(skip(self))]
    pub async fn account_inquiry(
        &self,
        bank_code: &str,
        account_number: &str,
    ) -> OyResult<ApiResponse> {
        let body = AccountInquiryBody {
            bank_code,
            account_number,
        };
        self.execute(self.request(Method::POST, "/account-inquiry").json(&body))
            .await
    }

    /// List inquiry invoices.
    ///
    /// `status` is `PAID` or `UNPAID`; an empty string lists all invoices.
    #[instrument(skip(self))]
    pub async fn get_invoices(
        &self,
        offset: u32,
        limit: u32,
        status: &str,
    ) -> OyResult<ApiResponse> {
        let query = InvoiceQuery {
            offset,
            limit,
            status: Some(status).filter(|s| !s.is_empty()),
        };
        self.execute(
            self.request(Method::GET, "/account-inquiry/invoices")
                .query(&query),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_invoice_by_id(&self, id: &str) -> OyResult<ApiResponse> {
        let request = self.request_with_id(Method::GET, "/account-inquiry/invoices", id)?;
        self.execute(request).await
    }

    #[instrument(skip(self))]
    pub async fn pay_invoice(&self, invoice_id: &str) -> OyResult<ApiResponse> {
        let body = PayInvoiceBody { invoice_id };
        self.execute(
            self.request(Method::POST, "/account-inquiry/invoices/pay")
                .json(&body),
        )
        .await
    }
}
