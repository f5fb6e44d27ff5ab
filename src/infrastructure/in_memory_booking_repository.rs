use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{
        booking::{Booking, NewBooking},
        errors::DomainError,
    },
    infrastructure::BookingRepository,
};

#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn add(&self, booking: NewBooking) -> Result<Booking, DomainError> {
        let created = Booking {
            user_name: booking.user_name,
            booking_date: booking.booking_date,
        };

        self.bookings.write().await.push(created.clone());
        Ok(created)
    }

    async fn list_by_user(&self, user_name: &str) -> Result<Vec<Booking>, DomainError> {
        Ok(self
            .bookings
            .read()
            .await
            .iter()
            .filter(|booking| booking.user_name == user_name)
            .cloned()
            .collect())
    }
}
