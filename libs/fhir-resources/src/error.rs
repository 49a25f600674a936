//! Error types for FHIR resource models

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required element: '{element}'")]
    MissingElement { element: &'static str },

    #[error("Missing required element: '{element}' (at least one value is required)")]
    EmptyList { element: &'static str },

    #[error("Invalid type: {found} for choice element: '{element}' must be one of: {allowed:?}")]
    InvalidChoiceType {
        element: &'static str,
        found: &'static str,
        allowed: Vec<&'static str>,
    },

    #[error("Invalid reference value or resource type not found in reference value: '{reference}' for element: '{element}'")]
    ReferenceTypeNotFound {
        element: &'static str,
        reference: String,
    },

    #[error("Resource type '{resource_type}' found in reference for element: '{element}' must be a valid resource type name")]
    UnknownResourceType {
        element: &'static str,
        resource_type: String,
    },

    #[error("Resource type '{resource_type}' found in reference for element: '{element}' must be one of: {allowed:?}")]
    DisallowedReferenceTarget {
        element: &'static str,
        resource_type: String,
        allowed: Vec<&'static str>,
    },

    #[error("Resource type found in reference value: '{reference}' for element: '{element}' does not match Reference.type: {reference_type}")]
    ReferenceTypeMismatch {
        element: &'static str,
        reference: String,
        reference_type: String,
    },

    #[error("ele-1: All FHIR elements must have a @value or children ({element})")]
    EmptyElement { element: &'static str },

    #[error("Invalid {kind} value '{value}': {reason}")]
    InvalidPrimitive {
        kind: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unknown code '{code}' for value set {value_set}")]
    UnknownCode { value_set: &'static str, code: String },

    #[error("ext-1: Extension '{url}' must have either extensions or value[x], not both")]
    InvalidExtension { url: String },

    #[error("Invalid model configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// Name of the element the error refers to, when there is one.
    pub fn element(&self) -> Option<&'static str> {
        match self {
            Self::MissingElement { element }
            | Self::EmptyList { element }
            | Self::InvalidChoiceType { element, .. }
            | Self::ReferenceTypeNotFound { element, .. }
            | Self::UnknownResourceType { element, .. }
            | Self::DisallowedReferenceTarget { element, .. }
            | Self::ReferenceTypeMismatch { element, .. }
            | Self::EmptyElement { element } => Some(*element),
            _ => None,
        }
    }

    pub(crate) fn invalid_primitive(
        kind: &'static str,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidPrimitive {
            kind,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
