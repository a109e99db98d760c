//! # Scheduled Disbursement
//!
//! Create, inspect, reschedule, cancel and retry scheduled disbursements.
//! Updates and cancellations are accepted up to a day before the scheduled
//! date.

use crate::client::OyClient;
use crate::response::ApiResponse;
use oy_core::{
    OyResult, ScheduledDisbursement, ScheduledDisbursementFilter, ScheduledDisbursementRetry,
    ScheduledDisbursementUpdate,
};
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct PartnerTrxId<'a> {
    partner_trx_id: &'a str,
}

impl OyClient {
    #[instrument(
        skip(self, remit),
        fields(
            partner_trx_id = %remit.partner_trx_id,
            trigger_based = remit.schedule.is_trigger_based()
        )
    )]
    pub async fn scheduled_disbursement(
        &self,
        remit: &ScheduledDisbursement,
    ) -> OyResult<ApiResponse> {
        self.execute(self.request(Method::POST, "/scheduled-remit").json(remit))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_detail_scheduled_disbursement(
        &self,
        partner_trx_id: &str,
    ) -> OyResult<ApiResponse> {
        self.execute(
            self.request(Method::GET, "/scheduled-remit")
                .query(&PartnerTrxId { partner_trx_id }),
        )
        .await
    }

    /// List scheduled disbursements, optionally filtered by status and
    /// processing date
    #[instrument(skip(self))]
    pub async fn get_list_scheduled_disbursement(
        &self,
        filter: &ScheduledDisbursementFilter,
    ) -> OyResult<ApiResponse> {
        self.execute(
            self.request(Method::POST, "/scheduled-remit/list")
                .json(filter),
        )
        .await
    }

    #[instrument(skip(self, update), fields(partner_trx_id = %update.partner_trx_id))]
    pub async fn update_scheduled_disbursement(
        &self,
        update: &ScheduledDisbursementUpdate,
    ) -> OyResult<ApiResponse> {
        self.execute(self.request(Method::PUT, "/scheduled-remit").json(update))
            .await
    }

    #[instrument(skip(self))]
    pub async fn cancel_scheduled_disbursement(
        &self,
        partner_trx_id: &str,
    ) -> OyResult<ApiResponse> {
        self.execute(
            self.request(Method::DELETE, "/scheduled-remit")
                .json(&PartnerTrxId { partner_trx_id }),
        )
        .await
    }

    /// Re-create a failed or cancelled scheduled disbursement under a new id
    #[instrument(
        skip(self, retry),
        fields(
            old_partner_trx_id = %retry.old_partner_trx_id,
            new_partner_trx_id = %retry.new_partner_trx_id
        )
    )]
    pub async fn retry_scheduled_disbursement(
        &self,
        retry: &ScheduledDisbursementRetry,
    ) -> OyResult<ApiResponse> {
        self.execute(
            self.request(Method::POST, "/scheduled-remit/retry")
                .json(retry),
        )
        .await
    }
}
