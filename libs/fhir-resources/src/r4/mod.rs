//! FHIR R4 resource models

pub mod codes;
pub mod implementation_guide;
mod spdx;
pub mod substance_specification;

pub use codes::{
    FhirVersion, GuidePageGeneration, GuideParameterCode, NarrativeStatus, PublicationStatus,
    ResourceType, SpdxLicense,
};
pub use implementation_guide::*;
pub use substance_specification::*;
