use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("invalid birthday '{value}': expected DD.MM.YYYY")]
    InvalidBirthday { value: String },

    #[error("Contact not found: {name}")]
    ContactNotFound { name: String },

    #[error("Phone number {phone} not found in the contact {name}")]
    PhoneNotFound { name: String, phone: String },

    #[error("Contact {name} already exists with phone {phone}")]
    AlreadyExists { name: String, phone: String },

    #[error("{name} has no existing birthday to update")]
    NoBirthdaySet { name: String },

    #[error("{0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BookResult<T> = Result<T, BookError>;
