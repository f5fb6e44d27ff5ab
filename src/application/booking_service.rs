use std::sync::Arc;

use crate::{
    application::dto::{BookingListResponse, BookingResponse, CreateBookingRequest},
    domain::{booking::NewBooking, errors::DomainError},
    infrastructure::{BookingRepository, UserRepository},
};

/// Holds a directory handle alongside the ledger: a booking may only
/// be created while a user with that name exists, checked strictly
/// before the insert.
#[derive(Clone)]
pub struct BookingService {
    repository: Arc<dyn BookingRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl BookingService {
    pub fn new(
        repository: Arc<dyn BookingRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            repository,
            user_repository,
        }
    }

    pub async fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> Result<BookingResponse, DomainError> {
        request.validate()?;

        if self
            .user_repository
            .find_by_name(&request.user_name)
            .await?
            .is_none()
        {
            return Err(DomainError::user_not_found("user does not exist"));
        }

        let created = self
            .repository
            .add(NewBooking {
                user_name: request.user_name,
                booking_date: request.booking_date,
            })
            .await?;

        Ok(BookingResponse::from(created))
    }

    pub async fn list_bookings(&self, user_name: &str) -> Result<BookingListResponse, DomainError> {
        let items = self
            .repository
            .list_by_user(user_name)
            .await?
            .into_iter()
            .map(BookingResponse::from)
            .collect::<Vec<_>>();

        Ok(BookingListResponse { items })
    }
}
