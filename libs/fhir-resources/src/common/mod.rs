//! Types shared by all resource models

pub mod base;
pub mod datatypes;
pub mod primitives;
pub mod support;

pub use base::{BackboneElement, ContainedResource, HasExtensions, Resource, ResourceBase};
pub use datatypes::{
    Attachment, ChoiceValue, CodeableConcept, Coding, ContactDetail, ContactPoint, Extension,
    Identifier, Meta, Narrative, Period, Quantity, Range, Ratio, Reference, UsageContext,
    ValueKind,
};
pub use primitives::{
    Base64Binary, Canonical, Code, DateTime, FhirString, Id, Instant, Markdown, Uri, Url, Xhtml,
};
pub use support::Validate;
