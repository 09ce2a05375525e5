//! Parcel use-case service.
//!
//! # Responsibility
//! - Provide registration and lifecycle entry points for core callers.
//! - Enforce the delivery policy the record store leaves to callers.
//!
//! # Invariants
//! - Status only moves forward: `registered -> sent -> delivered`.
//! - Address changes and deletion are accepted only while `registered`.
//! - Service layer remains storage-agnostic.

use crate::model::parcel::{ClientId, Parcel, ParcelNumber, ParcelStatus};
use crate::repo::parcel_repo::{ParcelRepository, RepoError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Lifecycle action rejected by the delivery policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParcelAction {
    Advance,
    ChangeAddress,
    Delete,
}

impl ParcelAction {
    fn as_str(self) -> &'static str {
        match self {
            Self::Advance => "advance",
            Self::ChangeAddress => "change_address",
            Self::Delete => "delete",
        }
    }
}

/// Errors returned by `ParcelService`.
#[derive(Debug)]
pub enum ServiceError {
    Repo(RepoError),
    /// The parcel's current status does not allow the requested action.
    InvalidState {
        number: ParcelNumber,
        status: ParcelStatus,
        action: ParcelAction,
    },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::InvalidState {
                number,
                status,
                action,
            } => write!(
                f,
                "parcel {number} is {status}; {} is not allowed",
                action.as_str()
            ),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::InvalidState { .. } => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service wrapper around a parcel repository.
pub struct ParcelService<R: ParcelRepository> {
    repo: R,
}

impl<R: ParcelRepository> ParcelService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new parcel for `client` and returns it with its number.
    ///
    /// # Contract
    /// - Status is `registered`.
    /// - `created_at` is the current UTC time.
    pub fn register(&self, client: ClientId, address: impl Into<String>) -> ServiceResult<Parcel> {
        let mut parcel = Parcel::new(client, address);
        parcel.number = self.repo.add(&parcel)?;
        info!(
            "event=parcel_register module=service status=ok number={} client={client}",
            parcel.number
        );
        Ok(parcel)
    }

    pub fn get(&self, number: ParcelNumber) -> ServiceResult<Parcel> {
        Ok(self.repo.get(number)?)
    }

    /// Lists all parcels owned by `client`.
    pub fn client_parcels(&self, client: ClientId) -> ServiceResult<Vec<Parcel>> {
        Ok(self.repo.get_by_client(client)?)
    }

    /// Moves the parcel to the next delivery status and returns it.
    ///
    /// Fails with `InvalidState` for delivered parcels.
    pub fn next_status(&self, number: ParcelNumber) -> ServiceResult<ParcelStatus> {
        let parcel = self.repo.get(number)?;
        let Some(next) = parcel.status.next() else {
            return Err(reject(&parcel, ParcelAction::Advance));
        };

        self.repo.set_status(number, next)?;
        info!(
            "event=parcel_advance module=service status=ok number={number} from={} to={next}",
            parcel.status
        );
        Ok(next)
    }

    /// Replaces the destination of a parcel that has not been sent yet.
    pub fn change_address(&self, number: ParcelNumber, address: &str) -> ServiceResult<()> {
        let parcel = self.repo.get(number)?;
        if !parcel.is_registered() {
            return Err(reject(&parcel, ParcelAction::ChangeAddress));
        }
        self.repo.set_address(number, address)?;
        Ok(())
    }

    /// Deletes a parcel that has not been sent yet.
    pub fn delete(&self, number: ParcelNumber) -> ServiceResult<()> {
        let parcel = self.repo.get(number)?;
        if !parcel.is_registered() {
            return Err(reject(&parcel, ParcelAction::Delete));
        }
        self.repo.delete(number)?;
        Ok(())
    }
}

fn reject(parcel: &Parcel, action: ParcelAction) -> ServiceError {
    warn!(
        "event=parcel_reject module=service status=error number={} parcel_status={} action={}",
        parcel.number,
        parcel.status,
        action.as_str()
    );
    ServiceError::InvalidState {
        number: parcel.number,
        status: parcel.status,
        action,
    }
}
