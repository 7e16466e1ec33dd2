mod metadata;

pub use metadata::{WardenErrorCode, WardenErrorMetadata, WardenErrorSuggestion};

pub type WardenResult<T> = std::result::Result<T, WardenError>;

use std::borrow::BorrowMut;
use std::fmt::{self, Debug, Display};
use std::io;

use calm_io::stderr;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{Value, json};
use warden_std::Style;

/// A specialized `Error` type for Warden that wraps `anyhow`
/// and provides some extra `Metadata` for end users depending
/// on the specific error they encountered.
#[derive(Serialize, Debug)]
pub struct WardenError {
    #[serde(flatten, serialize_with = "serialize_anyhow")]
    error: anyhow::Error,

    #[serde(flatten)]
    metadata: WardenErrorMetadata,
}

fn serialize_anyhow<S>(error: &anyhow::Error, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut data = serializer.serialize_struct("error", 1)?;
    data.serialize_field("message", &error.to_string())?;
    data.end()
}

impl WardenError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let mut error = error.into();
        let metadata = WardenErrorMetadata::from(error.borrow_mut());

        Self { error, metadata }
    }

    pub fn set_suggestion(&mut self, suggestion: WardenErrorSuggestion) {
        self.metadata.suggestion = Some(suggestion);
    }

    pub fn suggestion(&self) -> Option<WardenErrorSuggestion> {
        self.metadata.suggestion.clone()
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    pub fn code(&self) -> Option<WardenErrorCode> {
        self.metadata.code.clone()
    }

    pub fn print(&self) -> io::Result<()> {
        stderr!("{}", self)?;
        Ok(())
    }

    pub(crate) fn get_internal_error_json(&self) -> Value {
        json!(self)
    }
}

impl Display for WardenError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error_descriptor_message = if let Some(code) = &self.metadata.code {
            format!("error[{}]:", code)
        } else {
            "error:".to_string()
        };
        let error_descriptor = Style::ErrorPrefix.paint(&error_descriptor_message);

        if self.metadata.skip_printing_cause {
            writeln!(formatter, "{} {}", error_descriptor, &self.error)?;
        } else {
            writeln!(formatter, "{} {:?}", error_descriptor, &self.error)?;
        }

        if let Some(suggestion) = &self.metadata.suggestion {
            writeln!(formatter, "        {}", suggestion)?;
        }
        Ok(())
    }
}

impl<E: Into<anyhow::Error>> From<E> for WardenError {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}
