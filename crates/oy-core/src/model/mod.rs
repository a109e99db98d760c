//! # Request Models
//!
//! Typed request bodies for the OY! endpoints that take more than a couple of
//! parameters. Each model is built with a `bon` builder and serialized to the
//! provider's snake_case JSON. Optional fields left unset are omitted from the
//! body.

pub mod checkout;
pub mod disbursement;
pub mod scheduled;
pub mod virtual_account;

use uuid::Uuid;

/// Generate a unique `partner_trx_id`.
///
/// OY! requires the id to be unique per partner for every disbursement and
/// payment link.
pub fn new_partner_trx_id() -> String {
    format!("trx_{}", Uuid::new_v4().simple())
}

/// `YYYY-MM-DD HH:MM:SS`, the datetime format the checkout API expects.
pub(crate) mod oy_datetime {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.collect_str(&dt.format(FORMAT)),
            None => serializer.serialize_none(),
        }
    }
}
