use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Booker {
    pub id: i32,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Booker {
    // Найти букера по id
    pub async fn find_by_id(id: i32, db: &crate::database::Database) -> Result<Option<Booker>, sqlx::Error> {
        sqlx::query_as::<_, Booker>(
            "SELECT id, name, phone, created_at, updated_at FROM bookers WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&db.pool)
        .await
    }
}
