use serde::{Deserialize, Serialize};

/// FIRST_NAME column width, enforced by the table schema.
pub const MAX_FIRST_NAME_LEN: usize = 5;

/// One reserved seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub first_name: String,
}
