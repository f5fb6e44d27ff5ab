use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A booking references its user by name only. The directory entry is
/// checked at creation time and never afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub user_name: String,
    pub booking_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_name: String,
    pub booking_date: DateTime<Utc>,
}
