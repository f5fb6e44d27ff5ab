use std::sync::Arc;

use crate::application::{booking_service::BookingService, user_service::UserService};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub booking_service: Arc<BookingService>,
}

impl AppState {
    pub fn new(user_service: Arc<UserService>, booking_service: Arc<BookingService>) -> Self {
        Self {
            user_service,
            booking_service,
        }
    }
}
