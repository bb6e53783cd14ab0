use alloc::borrow::Cow;
use alloc::string::String;
use thiserror::Error;

/// Returned by the `unwrap`/`expect` family when the container is empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EmptyValueError {
    message: Cow<'static, str>,
}

impl EmptyValueError {
    pub const DEFAULT_MESSAGE: &'static str = "container is empty";

    pub fn new() -> Self {
        Self {
            message: Cow::Borrowed(Self::DEFAULT_MESSAGE),
        }
    }

    pub fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message.into_owned()
    }
}

impl Default for EmptyValueError {
    fn default() -> Self {
        Self::new()
    }
}

pub type Result<T, E = EmptyValueError> = core::result::Result<T, E>;
