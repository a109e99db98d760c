//! # Static Virtual Accounts
//!
//! VA aggregator: create, inspect and update static VAs and list the
//! payments they received.

use crate::client::OyClient;
use crate::response::ApiResponse;
use oy_core::{CreateVirtualAccount, OyResult, UpdateVirtualAccount};
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

/// `offset` / `limit` query string of the VA list endpoints
#[derive(Debug, Serialize)]
struct Page {
    offset: u32,
    limit: u32,
}

impl OyClient {
    #[instrument(skip(self, va), fields(partner_user_id = %va.partner_user_id, bank_code = %va.bank_code))]
    pub async fn create_virtual_account(
        &self,
        va: &CreateVirtualAccount,
    ) -> OyResult<ApiResponse> {
        self.execute(self.request(Method::POST, "/generate-static-va").json(va))
            .await
    }

    /// VA info by its unique id
    #[instrument(skip(self))]
    pub async fn get_virtual_account_info(&self, id: &str) -> OyResult<ApiResponse> {
        let request = self.request_with_id(Method::GET, "/static-virtual-account", id)?;
        self.execute(request).await
    }

    #[instrument(skip(self, update), fields(partner_trx_id = %update.partner_trx_id))]
    pub async fn update_virtual_account_info(
        &self,
        id: &str,
        update: &UpdateVirtualAccount,
    ) -> OyResult<ApiResponse> {
        let request = self.request_with_id(Method::PUT, "/static-virtual-account", id)?;
        self.execute(request.json(update)).await
    }

    #[instrument(skip(self))]
    pub async fn get_list_virtual_account(
        &self,
        offset: u32,
        limit: u32,
    ) -> OyResult<ApiResponse> {
        self.execute(
            self.request(Method::GET, "/static-virtual-account")
                .query(&Page { offset, limit }),
        )
        .await
    }

    /// Incoming transactions of one VA
    #[instrument(skip(self))]
    pub async fn get_list_va_transaction(
        &self,
        id: &str,
        offset: u32,
        limit: u32,
    ) -> OyResult<ApiResponse> {
        let request = self.request_with_id(Method::GET, "/va-tx-history", id)?;
        self.execute(request.query(&Page { offset, limit })).await
    }
}
