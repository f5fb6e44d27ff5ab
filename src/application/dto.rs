use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    booking::Booking,
    errors::DomainError,
    user::{MINIMUM_AGE, User},
};

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub age: u32,
}

impl RegisterUserRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name must not be blank"));
        }
        validate_age(self.age)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserAgeRequest {
    pub age: u32,
}

impl UpdateUserAgeRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_age(self.age)
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub name: String,
    pub age: u32,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            name: value.name,
            age: value.age,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub user_name: String,
    pub booking_date: DateTime<Utc>,
}

impl CreateBookingRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.user_name.trim().is_empty() {
            return Err(DomainError::validation("user_name must not be blank"));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub user_name: String,
    pub booking_date: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        Self {
            user_name: value.user_name,
            booking_date: value.booking_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    pub items: Vec<BookingResponse>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

fn validate_age(age: u32) -> Result<(), DomainError> {
    if age < MINIMUM_AGE {
        return Err(DomainError::validation(format!(
            "age must be at least {MINIMUM_AGE}"
        )));
    }
    Ok(())
}
