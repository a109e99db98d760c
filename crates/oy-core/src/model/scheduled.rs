//! # Scheduled Disbursement
//!
//! Two kinds of scheduled disbursement exist:
//!
//! - **Date based**: OY! executes the transfer on `schedule_date`.
//! - **Trigger based**: OY! emails the beneficiary at `trigger_email`; the
//!   beneficiary executes the transfer from that email on or after
//!   `trigger_date`.
//!
//! The provider requires `trigger_email`, `cs_phone_number` and `cs_email` for
//! trigger-based schedules. The client does not check this and leaves the
//! validation to the provider.

use crate::amount::Amount;
use bon::Builder;
use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// When a scheduled disbursement runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    /// Executed automatically on the given date
    Date(NaiveDate),
    /// Executed by the beneficiary after the trigger email
    Trigger(TriggerSchedule),
}

impl Schedule {
    pub fn is_trigger_based(&self) -> bool {
        matches!(self, Schedule::Trigger(_))
    }
}

impl From<NaiveDate> for Schedule {
    fn from(date: NaiveDate) -> Self {
        Schedule::Date(date)
    }
}

impl From<TriggerSchedule> for Schedule {
    fn from(trigger: TriggerSchedule) -> Self {
        Schedule::Trigger(trigger)
    }
}

/// Trigger-based schedule details
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct TriggerSchedule {
    pub trigger_date: NaiveDate,
    #[builder(into)]
    pub trigger_email: Option<String>,
    #[builder(into)]
    pub cs_phone_number: Option<String>,
    #[builder(into)]
    pub cs_email: Option<String>,
}

impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Schedule::Date(date) => {
                map.serialize_entry("is_trigger_based", &false)?;
                map.serialize_entry("schedule_date", date)?;
            }
            Schedule::Trigger(trigger) => {
                map.serialize_entry("is_trigger_based", &true)?;
                map.serialize_entry("trigger_date", &trigger.trigger_date)?;
                if let Some(ref email) = trigger.trigger_email {
                    map.serialize_entry("trigger_email", email)?;
                }
                if let Some(ref phone) = trigger.cs_phone_number {
                    map.serialize_entry("cs_phone_number", phone)?;
                }
                if let Some(ref email) = trigger.cs_email {
                    map.serialize_entry("cs_email", email)?;
                }
            }
        }
        map.end()
    }
}

/// Body of `POST /scheduled-remit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
pub struct ScheduledDisbursement {
    #[builder(into)]
    pub recipient_bank: String,

    #[builder(into)]
    pub recipient_account: String,

    pub amount: Amount,

    #[builder(into)]
    pub partner_trx_id: String,

    #[builder(into)]
    #[serde(flatten)]
    pub schedule: Schedule,

    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Body of `POST /scheduled-remit/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
pub struct ScheduledDisbursementFilter {
    /// Lower bound on schedule_date / trigger_date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Upper bound on schedule_date / trigger_date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Scheduled transaction status (e.g. "WAITING", "CANCELLED")
    #[builder(into)]
    #[serde(
        rename = "scheduled_trx_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,

    #[builder(default)]
    pub offset: u32,

    #[builder(default = 100)]
    pub limit: u32,
}

impl Default for ScheduledDisbursementFilter {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Body of `PUT /scheduled-remit`.
///
/// Date-based schedules may only change `schedule_date`; trigger-based ones
/// only `trigger_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
pub struct ScheduledDisbursementUpdate {
    #[builder(into)]
    pub partner_trx_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_date: Option<NaiveDate>,
}

/// Body of `POST /scheduled-remit/retry`.
///
/// Creates a new scheduled disbursement from a failed or cancelled one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
pub struct ScheduledDisbursementRetry {
    #[builder(into)]
    pub old_partner_trx_id: String,

    #[builder(into)]
    pub new_partner_trx_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_date: Option<NaiveDate>,
}
