use seatwise_core::booking::Booking;
use seatwise_core::{BookingError, BookingResult};
use sqlx::error::ErrorKind;
use sqlx::{Pool, Sqlite, Transaction};

pub struct BookingRepository;

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i64,
    first_name: String,
}

impl BookingRepository {
    /// Inserts a single row inside the caller's transaction.
    ///
    /// The table grows by one row, or by zero rows if the value violates the
    /// NOT NULL or length constraint.
    pub async fn insert_one(
        tx: &mut Transaction<'_, Sqlite>,
        first_name: Option<&str>,
    ) -> BookingResult<()> {
        let result = sqlx::query("INSERT INTO bookings (first_name) VALUES (?1)")
            .bind(first_name)
            .execute(&mut **tx)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err))
                if matches!(
                    db_err.kind(),
                    ErrorKind::CheckViolation | ErrorKind::NotNullViolation
                ) =>
            {
                Err(BookingError::ConstraintViolation {
                    value: first_name.map(str::to_string),
                })
            }
            Err(e) => Err(BookingError::Database(e)),
        }
    }

    /// Snapshot of every FIRST_NAME currently persisted, in insertion order.
    pub async fn list_first_names(pool: &Pool<Sqlite>) -> BookingResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>("SELECT first_name FROM bookings ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(names)
    }

    /// Full rows, id ascending.
    pub async fn list_all(pool: &Pool<Sqlite>) -> BookingResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>("SELECT id, first_name FROM bookings ORDER BY id")
            .fetch_all(pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Booking {
                id: row.id,
                first_name: row.first_name,
            })
            .collect())
    }
}
