//! Elements shared by every resource and backbone element

use super::datatypes::{Extension, Meta, Narrative};
use super::primitives::{Code, Id, Uri};
use super::support::{self, Validate};
use crate::config::ModelConfig;
use crate::error::Result;
use crate::r4::codes::ResourceType;
use crate::r4::implementation_guide::ImplementationGuide;
use crate::r4::substance_specification::SubstanceSpecification;
use crate::visitor::Node;

/// Base fields of a backbone element (`id`, `extension`, `modifierExtension`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BackboneElement {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
}

impl BackboneElement {
    pub fn has_extensions(&self) -> bool {
        !self.extension.is_empty() || !self.modifier_extension.is_empty()
    }
}

impl Validate for BackboneElement {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::check_element_id(self.id.as_deref(), config)?;
        support::validate_all(&self.extension, config)?;
        support::validate_all(&self.modifier_extension, config)
    }
}

/// Base fields of a domain resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResourceBase {
    /// Logical id of this artifact
    pub id: Option<Id>,

    /// Metadata about the resource
    pub meta: Option<Meta>,

    /// A set of rules under which this content was created
    pub implicit_rules: Option<Uri>,

    /// Language of the resource content
    pub language: Option<Code>,

    /// Text summary of the resource, for human interpretation
    pub text: Option<Narrative>,

    /// Contained, inline resources
    pub contained: Vec<ContainedResource>,

    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
}

impl ResourceBase {
    pub fn has_children(&self) -> bool {
        self.id.is_some()
            || self.meta.is_some()
            || self.implicit_rules.is_some()
            || self.language.is_some()
            || self.text.is_some()
            || !self.contained.is_empty()
            || !self.extension.is_empty()
            || !self.modifier_extension.is_empty()
    }
}

impl Validate for ResourceBase {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::validate_opt(self.meta.as_ref(), config)?;
        support::validate_opt(self.text.as_ref(), config)?;
        support::validate_all(&self.extension, config)?;
        support::validate_all(&self.modifier_extension, config)
    }
}

/// Access to the extension elements every resource and backbone element carries
pub trait HasExtensions {
    /// `id` of the element (for resources, the logical id)
    fn element_id(&self) -> Option<&str>;

    fn extension(&self) -> &[Extension];

    fn modifier_extension(&self) -> &[Extension];

    /// Extensions with the given URL, modifier extensions included
    fn extensions_by_url(&self, url: &str) -> Vec<&Extension> {
        self.extension()
            .iter()
            .chain(self.modifier_extension())
            .filter(|ext| ext.url.as_str() == url)
            .collect()
    }
}

impl HasExtensions for BackboneElement {
    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }
}

impl HasExtensions for ResourceBase {
    fn element_id(&self) -> Option<&str> {
        self.id.as_ref().map(Id::as_str)
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }
}

/// Delegate [`HasExtensions`] to a node's `base` field.
macro_rules! impl_has_extensions {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::common::base::HasExtensions for $ty {
                fn element_id(&self) -> Option<&str> {
                    $crate::common::base::HasExtensions::element_id(&self.base)
                }

                fn extension(&self) -> &[$crate::common::datatypes::Extension] {
                    &self.base.extension
                }

                fn modifier_extension(&self) -> &[$crate::common::datatypes::Extension] {
                    &self.base.modifier_extension
                }
            }
        )+
    };
}

pub(crate) use impl_has_extensions;

/// A FHIR resource model
pub trait Resource: HasExtensions {
    const RESOURCE_TYPE: ResourceType;

    fn resource_base(&self) -> &ResourceBase;

    /// View of the resource for traversal
    fn as_node(&self) -> Node<'_>;

    fn id(&self) -> Option<&Id> {
        self.resource_base().id.as_ref()
    }

    fn meta(&self) -> Option<&Meta> {
        self.resource_base().meta.as_ref()
    }
}

/// A resource held in `contained`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContainedResource {
    ImplementationGuide(Box<ImplementationGuide>),
    SubstanceSpecification(Box<SubstanceSpecification>),
}

impl ContainedResource {
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Self::ImplementationGuide(_) => ResourceType::ImplementationGuide,
            Self::SubstanceSpecification(_) => ResourceType::SubstanceSpecification,
        }
    }

    pub fn id(&self) -> Option<&Id> {
        match self {
            Self::ImplementationGuide(r) => r.id(),
            Self::SubstanceSpecification(r) => r.id(),
        }
    }

    pub fn as_node(&self) -> Node<'_> {
        match self {
            Self::ImplementationGuide(r) => Node::ImplementationGuide(r),
            Self::SubstanceSpecification(r) => Node::SubstanceSpecification(r),
        }
    }
}

impl From<ImplementationGuide> for ContainedResource {
    fn from(resource: ImplementationGuide) -> Self {
        Self::ImplementationGuide(Box::new(resource))
    }
}

impl From<SubstanceSpecification> for ContainedResource {
    fn from(resource: SubstanceSpecification) -> Self {
        Self::SubstanceSpecification(Box::new(resource))
    }
}
