pub mod orders;
pub mod reviews;
pub mod users;

pub use orders::Entity as Orders;
pub use reviews::Entity as Reviews;
pub use users::Entity as Users;
