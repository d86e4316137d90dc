pub mod record;
pub mod book;

// Re-exports for convenience
pub use record::{Birthday, Name, Phone, Record};
pub use book::{AddressBook, UpcomingBirthday};
