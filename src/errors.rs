use thiserror::Error;

/// Why a typed length was refused by the prompt loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LengthError {
    #[error("length {length} is below the minimum of {minimum}")]
    TooShort { length: i64, minimum: usize },
    #[error("not a whole number: {input:?}")]
    Malformed { input: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("cannot build a password of length {length}: at least {minimum} characters are required")]
    InvalidLength { length: usize, minimum: usize },
    #[error("cannot allocate a password of length {length}")]
    TooLarge { length: usize },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Password(#[from] PasswordError),
}
