//! Parcel domain model.
//!
//! # Responsibility
//! - Define the canonical parcel record persisted by the record store.
//! - Define the delivery status labels and their forward order.
//!
//! # Invariants
//! - `number` is assigned by storage and never reused for another parcel.
//! - `created_at` is RFC3339 UTC with second precision and a `Z` suffix.
//! - Status order is `registered -> sent -> delivered`.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Storage-assigned parcel identifier. `0` means "not persisted yet".
pub type ParcelNumber = i64;

/// Identifier of the party owning a parcel.
pub type ClientId = i64;

/// Delivery state of a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelStatus {
    /// Accepted but not dispatched. Address changes and deletion are allowed.
    Registered,
    /// Handed over to delivery.
    Sent,
    /// Received by the addressee. Terminal.
    Delivered,
}

impl ParcelStatus {
    /// Stable text label stored in `parcel.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
        }
    }

    /// Parses a stored label. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "registered" => Some(Self::Registered),
            "sent" => Some(Self::Sent),
            "delivered" => Some(Self::Delivered),
            _ => None,
        }
    }

    /// Forward successor, `None` once delivered.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Registered => Some(Self::Sent),
            Self::Sent => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }
}

impl Display for ParcelStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a text label is not a known parcel status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl Display for UnknownStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown parcel status `{}`; expected registered|sent|delivered",
            self.0
        )
    }
}

impl Error for UnknownStatus {}

impl FromStr for ParcelStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

/// Tracked shipment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Assigned by the store on insert; ignored by `add`.
    pub number: ParcelNumber,
    pub client: ClientId,
    pub status: ParcelStatus,
    /// Free-text destination.
    pub address: String,
    /// RFC3339 UTC creation timestamp.
    pub created_at: String,
}

impl Parcel {
    /// Creates an unsaved `registered` parcel stamped with the current time.
    pub fn new(client: ClientId, address: impl Into<String>) -> Self {
        Self::registered_at(client, address, now_rfc3339())
    }

    /// Creates an unsaved `registered` parcel with a caller-provided timestamp.
    ///
    /// Used by imports and tests where the creation time is already known.
    pub fn registered_at(
        client: ClientId,
        address: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            number: 0,
            client,
            status: ParcelStatus::Registered,
            address: address.into(),
            created_at: created_at.into(),
        }
    }

    /// Whether the parcel still allows address changes and deletion.
    pub fn is_registered(&self) -> bool {
        self.status == ParcelStatus::Registered
    }
}

/// Current UTC time in the sortable format stored in `parcel.created_at`.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::{now_rfc3339, Parcel, ParcelStatus};
    use chrono::DateTime;

    #[test]
    fn status_labels_parse_back() {
        for status in [
            ParcelStatus::Registered,
            ParcelStatus::Sent,
            ParcelStatus::Delivered,
        ] {
            assert_eq!(status.as_str().parse::<ParcelStatus>().unwrap(), status);
        }
        assert!("lost".parse::<ParcelStatus>().is_err());
    }

    #[test]
    fn status_moves_forward_only() {
        assert_eq!(ParcelStatus::Registered.next(), Some(ParcelStatus::Sent));
        assert_eq!(ParcelStatus::Sent.next(), Some(ParcelStatus::Delivered));
        assert_eq!(ParcelStatus::Delivered.next(), None);
    }

    #[test]
    fn status_serializes_as_snake_case_label() {
        let json = serde_json::to_string(&ParcelStatus::Delivered).unwrap();
        assert_eq!(json, "\"delivered\"");
    }

    #[test]
    fn new_parcel_is_unsaved_and_registered() {
        let parcel = Parcel::new(7, "Main St 1");
        assert_eq!(parcel.number, 0);
        assert!(parcel.is_registered());
        assert!(DateTime::parse_from_rfc3339(&parcel.created_at).is_ok());
    }

    #[test]
    fn timestamp_is_utc_seconds_with_z_suffix() {
        let stamp = now_rfc3339();
        assert!(stamp.ends_with('Z'));
        assert_eq!(stamp.len(), "2024-01-01T00:00:00Z".len());
    }
}
