use seatwise_core::booking::Booking;
use seatwise_core::BookingResult;
use seatwise_store::{BookingRepository, DbClient};
use tracing::{info, warn};

/// Books seats in batches; each batch is one transaction.
pub struct BookingService {
    db: DbClient,
}

impl BookingService {
    pub fn new(db: DbClient) -> Self {
        Self { db }
    }

    /// Inserts every name in the batch as a single atomic unit of work.
    ///
    /// Begins a transaction, attempts each insert in order, and commits only
    /// if all of them succeed. The first constraint violation rolls back every
    /// insert made in this call and propagates to the caller. The batch is
    /// never retried.
    pub async fn book(&self, first_names: &[Option<&str>]) -> BookingResult<()> {
        let mut tx = self.db.pool.begin().await?;

        for first_name in first_names {
            info!("Booking {} in a seat...", first_name.unwrap_or("<missing>"));
            if let Err(err) = BookingRepository::insert_one(&mut tx, *first_name).await {
                warn!("Dropping batch of {}: {}", first_names.len(), err);
                if let Err(rb_err) = tx.rollback().await {
                    warn!("Rollback failed: {}", rb_err);
                }
                return Err(err);
            }
        }

        tx.commit().await?;
        Ok(())
    }

    /// Every booked FIRST_NAME, in insertion order. Read-only, no transaction.
    pub async fn find_all_bookings(&self) -> BookingResult<Vec<String>> {
        BookingRepository::list_first_names(&self.db.pool).await
    }

    /// Full booking rows, id ascending.
    pub async fn find_all(&self) -> BookingResult<Vec<Booking>> {
        BookingRepository::list_all(&self.db.pool).await
    }
}
