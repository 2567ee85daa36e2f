use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

use crate::error::{AppError, AppResult};
use crate::i18n::{self, CountryCode};
use crate::store::ReservationStore;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Reservation {
    pub id: i32,
    pub booker_id: i32,
    pub checkin: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Reservation {
    // Первая бронь по первичному ключу
    pub async fn first(db: &crate::database::Database) -> Result<Option<Reservation>, sqlx::Error> {
        sqlx::query_as::<_, Reservation>(
            "SELECT id, booker_id, checkin, created_at, updated_at
             FROM reservations
             ORDER BY id ASC
             LIMIT 1"
        )
        .fetch_optional(&db.pool)
        .await
    }

    /// Localized display name of this reservation's booker.
    ///
    /// Fails with [`AppError::BookerNotFound`] when the booker row is gone;
    /// returns `Ok(None)` when `country_code` has no formatting rule.
    pub async fn booker_name_i18n(
        &self,
        store: &dyn ReservationStore,
        country_code: CountryCode,
    ) -> AppResult<Option<String>> {
        let booker = store
            .find_booker(self.booker_id)
            .await?
            .ok_or(AppError::BookerNotFound(self.booker_id))?;

        Ok(i18n::translate_name(
            booker.name.as_deref().unwrap_or_default(),
            &country_code,
        ))
    }
}
