pub mod booking;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Constraint violation on FIRST_NAME: offending value {value:?}")]
    ConstraintViolation { value: Option<String> },
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl BookingError {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, BookingError::ConstraintViolation { .. })
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
