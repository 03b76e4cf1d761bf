pub mod orders;
pub mod reviews;
pub mod users;
