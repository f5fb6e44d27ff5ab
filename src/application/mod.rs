pub mod booking_service;
pub mod dto;
pub mod user_service;
