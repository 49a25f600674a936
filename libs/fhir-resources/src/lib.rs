//! FHIR R4 ImplementationGuide and SubstanceSpecification models
//!
//! Every resource and backbone element is an immutable value produced by a
//! builder. `build()` checks cardinality, choice types, reference targets and
//! `ele-1`, and the resulting node caches its structural hash.
//!
//! # Module Organization
//!
//! - `common`: primitives, general-purpose data types and the resource base
//! - `r4`: the two resources, their backbone elements and the closed code systems
//! - `visitor`: depth-first traversal over any node
//! - `model_info`: element cardinality, choice types, reference targets and invariants
//! - `constraints`: on-demand evaluation of ImplementationGuide invariants
//! - `json`: FHIR JSON output
//!
//! # Example
//!
//! ```rust
//! use ferrum_resources::common::{FhirString, Id, Uri};
//! use ferrum_resources::r4::{FhirVersion, ImplementationGuideBuilder, PublicationStatus};
//! use ferrum_resources::{constraints, json};
//!
//! let ig = ImplementationGuideBuilder {
//!     url: Some(Uri::new("http://example.org/fhir/ImplementationGuide/example").unwrap()),
//!     name: Some(FhirString::new("ExampleGuide").unwrap()),
//!     status: Some(PublicationStatus::Draft),
//!     package_id: Some(Id::new("example.fhir").unwrap()),
//!     fhir_version: vec![FhirVersion::V4_0_1],
//!     ..Default::default()
//! }
//! .build()
//! .unwrap();
//!
//! assert!(constraints::evaluate(&ig).valid);
//! assert_eq!(json::resource_to_json(&ig)["resourceType"], "ImplementationGuide");
//! ```

pub mod common;
pub mod config;
pub mod constraints;
pub mod error;
pub mod json;
pub mod model_info;
pub mod r4;
pub mod visitor;

pub use common::{HasExtensions, Resource, Validate};
pub use config::ModelConfig;
pub use error::{Error, Result};
pub use visitor::{Node, NodeKind, Visitor};
