use async_trait::async_trait;

use crate::database::Database;
use crate::error::AppResult;
use crate::models::{Booker, Reservation};

/// Read access to reservations and their bookers.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// The reservation with the lowest id, if any exist.
    async fn first_reservation(&self) -> AppResult<Option<Reservation>>;
    async fn find_booker(&self, id: i32) -> AppResult<Option<Booker>>;
    async fn ping(&self) -> AppResult<()>;
}

#[async_trait]
impl ReservationStore for Database {
    async fn first_reservation(&self) -> AppResult<Option<Reservation>> {
        Ok(Reservation::first(self).await?)
    }

    async fn find_booker(&self, id: i32) -> AppResult<Option<Booker>> {
        Ok(Booker::find_by_id(id, self).await?)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(Database::ping(self).await?)
    }
}
