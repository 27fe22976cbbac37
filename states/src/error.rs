use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("State runtime disconnected, context: {context}")]
    Disconnected { context: String },
}

impl Error {
    pub fn disconnected(context: impl Into<String>) -> Self {
        Self::Disconnected {
            context: context.into(),
        }
    }
}
