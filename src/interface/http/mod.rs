pub mod bookings_handler;
pub mod problem;
pub mod users_handler;
