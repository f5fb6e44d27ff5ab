use async_trait::async_trait;

use crate::domain::{
    booking::{Booking, NewBooking},
    errors::DomainError,
    user::{NewUser, User},
};

pub mod in_memory_booking_repository;
pub mod in_memory_user_repository;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn add(&self, user: NewUser) -> Result<User, DomainError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, DomainError>;
    async fn update_age(&self, name: &str, new_age: u32) -> Result<Option<User>, DomainError>;
    async fn delete(&self, name: &str) -> Result<bool, DomainError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn add(&self, booking: NewBooking) -> Result<Booking, DomainError>;
    async fn list_by_user(&self, user_name: &str) -> Result<Vec<Booking>, DomainError>;
}
