//! ImplementationGuide resource
//!
//! A set of rules of how a particular interoperability or standards problem is
//! solved, gathering the parts of an implementation guide into a logical whole.
//!
//! Every type comes as a pair: a mutable `*Builder` with public fields and an
//! immutable node produced by `build()`. Required elements are checked when the
//! node is built; the declared invariants (`ig-0`, `ig-1`, `ig-2`) are evaluated
//! separately by [`crate::constraints`].

use crate::common::base::{impl_has_extensions, BackboneElement, Resource, ResourceBase};
use crate::common::datatypes::{
    ChoiceValue, CodeableConcept, ContactDetail, Reference, UsageContext, ValueKind,
};
use crate::common::primitives::{Canonical, Code, DateTime, FhirString, Id, Markdown, Uri, Url};
use crate::common::support::{self, impl_cached_hash, Validate};
use crate::config::ModelConfig;
use crate::error::Result;
use crate::r4::codes::{
    FhirVersion, GuidePageGeneration, GuideParameterCode, PublicationStatus, ResourceType,
    SpdxLicense,
};
use crate::visitor::{Children, Node};

/// Builder for [`ImplementationGuide`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImplementationGuideBuilder {
    pub base: ResourceBase,

    /// Canonical identifier for this implementation guide, represented as a URI (globally
    /// unique)
    pub url: Option<Uri>,

    /// Business version of the implementation guide
    pub version: Option<FhirString>,

    /// Name for this implementation guide (computer friendly)
    pub name: Option<FhirString>,

    /// Name for this implementation guide (human friendly)
    pub title: Option<FhirString>,

    /// draft | active | retired | unknown
    pub status: Option<PublicationStatus>,

    /// For testing purposes, not real usage
    pub experimental: Option<bool>,

    /// Date last changed
    pub date: Option<DateTime>,

    /// Name of the publisher (organization or individual)
    pub publisher: Option<FhirString>,

    /// Contact details for the publisher
    pub contact: Vec<ContactDetail>,

    /// Natural language description of the implementation guide
    pub description: Option<Markdown>,

    /// The context that the content is intended to support
    pub use_context: Vec<UsageContext>,

    /// Intended jurisdiction for implementation guide (if applicable)
    pub jurisdiction: Vec<CodeableConcept>,

    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,

    /// NPM Package name for IG
    pub package_id: Option<Id>,

    /// SPDX license code for this IG (or not-open-source)
    pub license: Option<SpdxLicense>,

    /// FHIR Version(s) this Implementation Guide targets
    pub fhir_version: Vec<FhirVersion>,

    /// Another Implementation guide this depends on
    pub depends_on: Vec<ImplementationGuideDependsOn>,

    /// Profiles that apply globally
    pub global: Vec<ImplementationGuideGlobal>,

    /// Information needed to build the IG
    pub definition: Option<ImplementationGuideDefinition>,

    /// Information about an assembled IG
    pub manifest: Option<ImplementationGuideManifest>,
}

impl ImplementationGuideBuilder {
    pub fn build(self) -> Result<ImplementationGuide> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<ImplementationGuide> {
        support::log_rejection("ImplementationGuide", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<ImplementationGuide> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        let url = support::require(self.url, "url")?;
        let name = support::require(self.name, "name")?;
        let status = support::require(self.status, "status")?;
        let package_id = support::require(self.package_id, "packageId")?;
        support::require_non_empty(&self.fhir_version, "fhirVersion")?;
        support::validate_all(&self.contact, config)?;
        support::validate_all(&self.use_context, config)?;
        support::validate_all(&self.jurisdiction, config)?;

        Ok(ImplementationGuide {
            hash,
            base: self.base,
            url,
            version: self.version,
            name,
            title: self.title,
            status,
            experimental: self.experimental,
            date: self.date,
            publisher: self.publisher,
            contact: self.contact,
            description: self.description,
            use_context: self.use_context,
            jurisdiction: self.jurisdiction,
            copyright: self.copyright,
            package_id,
            license: self.license,
            fhir_version: self.fhir_version,
            depends_on: self.depends_on,
            global: self.global,
            definition: self.definition,
            manifest: self.manifest,
        })
    }
}

/// A set of rules of how a particular interoperability or standards problem is solved -
/// typically through the use of FHIR resources. This resource is used to gather all the
/// parts of an implementation guide into a logical whole and to publish a computable
/// definition of all the parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementationGuide {
    hash: u64,
    base: ResourceBase,
    url: Uri,
    version: Option<FhirString>,
    name: FhirString,
    title: Option<FhirString>,
    status: PublicationStatus,
    experimental: Option<bool>,
    date: Option<DateTime>,
    publisher: Option<FhirString>,
    contact: Vec<ContactDetail>,
    description: Option<Markdown>,
    use_context: Vec<UsageContext>,
    jurisdiction: Vec<CodeableConcept>,
    copyright: Option<Markdown>,
    package_id: Id,
    license: Option<SpdxLicense>,
    fhir_version: Vec<FhirVersion>,
    depends_on: Vec<ImplementationGuideDependsOn>,
    global: Vec<ImplementationGuideGlobal>,
    definition: Option<ImplementationGuideDefinition>,
    manifest: Option<ImplementationGuideManifest>,
}

impl ImplementationGuide {
    pub fn builder() -> ImplementationGuideBuilder {
        ImplementationGuideBuilder::default()
    }

    pub fn base(&self) -> &ResourceBase {
        &self.base
    }

    pub fn url(&self) -> &Uri {
        &self.url
    }

    pub fn version(&self) -> Option<&FhirString> {
        self.version.as_ref()
    }

    pub fn name(&self) -> &FhirString {
        &self.name
    }

    pub fn title(&self) -> Option<&FhirString> {
        self.title.as_ref()
    }

    pub fn status(&self) -> &PublicationStatus {
        &self.status
    }

    pub fn experimental(&self) -> Option<bool> {
        self.experimental
    }

    pub fn date(&self) -> Option<&DateTime> {
        self.date.as_ref()
    }

    pub fn publisher(&self) -> Option<&FhirString> {
        self.publisher.as_ref()
    }

    pub fn contact(&self) -> &[ContactDetail] {
        &self.contact
    }

    pub fn description(&self) -> Option<&Markdown> {
        self.description.as_ref()
    }

    pub fn use_context(&self) -> &[UsageContext] {
        &self.use_context
    }

    pub fn jurisdiction(&self) -> &[CodeableConcept] {
        &self.jurisdiction
    }

    pub fn copyright(&self) -> Option<&Markdown> {
        self.copyright.as_ref()
    }

    pub fn package_id(&self) -> &Id {
        &self.package_id
    }

    pub fn license(&self) -> Option<&SpdxLicense> {
        self.license.as_ref()
    }

    pub fn fhir_version(&self) -> &[FhirVersion] {
        &self.fhir_version
    }

    pub fn depends_on(&self) -> &[ImplementationGuideDependsOn] {
        &self.depends_on
    }

    pub fn global(&self) -> &[ImplementationGuideGlobal] {
        &self.global
    }

    pub fn definition(&self) -> Option<&ImplementationGuideDefinition> {
        self.definition.as_ref()
    }

    pub fn manifest(&self) -> Option<&ImplementationGuideManifest> {
        self.manifest.as_ref()
    }

    pub fn has_children(&self) -> bool {
        // required elements are always present
        true
    }

    pub fn to_builder(&self) -> ImplementationGuideBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> ImplementationGuideBuilder {
        ImplementationGuideBuilder {
            base: self.base,
            url: Some(self.url),
            version: self.version,
            name: Some(self.name),
            title: self.title,
            status: Some(self.status),
            experimental: self.experimental,
            date: self.date,
            publisher: self.publisher,
            contact: self.contact,
            description: self.description,
            use_context: self.use_context,
            jurisdiction: self.jurisdiction,
            copyright: self.copyright,
            package_id: Some(self.package_id),
            license: self.license,
            fhir_version: self.fhir_version,
            depends_on: self.depends_on,
            global: self.global,
            definition: self.definition,
            manifest: self.manifest,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.resource(&self.base)
            .one("url", Node::Uri(&self.url))
            .opt("version", self.version.as_ref(), Node::String)
            .one("name", Node::String(&self.name))
            .opt("title", self.title.as_ref(), Node::String)
            .one("status", Node::PublicationStatus(&self.status))
            .opt("experimental", self.experimental.as_ref(), Node::Boolean)
            .opt("date", self.date.as_ref(), Node::DateTime)
            .opt("publisher", self.publisher.as_ref(), Node::String)
            .many("contact", &self.contact, Node::ContactDetail)
            .opt("description", self.description.as_ref(), Node::Markdown)
            .many("useContext", &self.use_context, Node::UsageContext)
            .many("jurisdiction", &self.jurisdiction, Node::CodeableConcept)
            .opt("copyright", self.copyright.as_ref(), Node::Markdown)
            .one("packageId", Node::Id(&self.package_id))
            .opt("license", self.license.as_ref(), Node::SpdxLicense)
            .many("fhirVersion", &self.fhir_version, Node::FhirVersion)
            .many("dependsOn", &self.depends_on, Node::ImplementationGuideDependsOn)
            .many("global", &self.global, Node::ImplementationGuideGlobal)
            .opt("definition", self.definition.as_ref(), Node::ImplementationGuideDefinition)
            .opt("manifest", self.manifest.as_ref(), Node::ImplementationGuideManifest);
    }
}

impl Resource for ImplementationGuide {
    const RESOURCE_TYPE: ResourceType = ResourceType::ImplementationGuide;

    fn resource_base(&self) -> &ResourceBase {
        &self.base
    }

    fn as_node(&self) -> Node<'_> {
        Node::ImplementationGuide(self)
    }
}

/// Builder for [`ImplementationGuideDependsOn`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImplementationGuideDependsOnBuilder {
    pub base: BackboneElement,

    /// Identity of the IG that this depends on
    pub uri: Option<Canonical>,

    /// NPM Package name for IG this depends on
    pub package_id: Option<Id>,

    /// Version of the IG
    pub version: Option<FhirString>,
}

impl ImplementationGuideDependsOnBuilder {
    pub fn build(self) -> Result<ImplementationGuideDependsOn> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<ImplementationGuideDependsOn> {
        support::log_rejection("ImplementationGuide.dependsOn", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<ImplementationGuideDependsOn> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        let uri = support::require(self.uri, "uri")?;

        Ok(ImplementationGuideDependsOn {
            hash,
            base: self.base,
            uri,
            package_id: self.package_id,
            version: self.version,
        })
    }
}

/// Another implementation guide that this implementation depends on. Typically, an
/// implementation guide uses value sets, profiles etc. defined in other implementation guides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementationGuideDependsOn {
    hash: u64,
    base: BackboneElement,
    uri: Canonical,
    package_id: Option<Id>,
    version: Option<FhirString>,
}

impl ImplementationGuideDependsOn {
    pub fn builder() -> ImplementationGuideDependsOnBuilder {
        ImplementationGuideDependsOnBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn uri(&self) -> &Canonical {
        &self.uri
    }

    pub fn package_id(&self) -> Option<&Id> {
        self.package_id.as_ref()
    }

    pub fn version(&self) -> Option<&FhirString> {
        self.version.as_ref()
    }

    pub fn has_children(&self) -> bool {
        // required elements are always present
        true
    }

    pub fn to_builder(&self) -> ImplementationGuideDependsOnBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> ImplementationGuideDependsOnBuilder {
        ImplementationGuideDependsOnBuilder {
            base: self.base,
            uri: Some(self.uri),
            package_id: self.package_id,
            version: self.version,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .one("uri", Node::Canonical(&self.uri))
            .opt("packageId", self.package_id.as_ref(), Node::Id)
            .opt("version", self.version.as_ref(), Node::String);
    }
}

/// Builder for [`ImplementationGuideGlobal`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImplementationGuideGlobalBuilder {
    pub base: BackboneElement,

    /// Type this profile applies to
    pub type_: Option<ResourceType>,

    /// Profile that all resources must conform to
    pub profile: Option<Canonical>,
}

impl ImplementationGuideGlobalBuilder {
    pub fn build(self) -> Result<ImplementationGuideGlobal> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<ImplementationGuideGlobal> {
        support::log_rejection("ImplementationGuide.global", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<ImplementationGuideGlobal> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        let type_ = support::require(self.type_, "type")?;
        let profile = support::require(self.profile, "profile")?;

        Ok(ImplementationGuideGlobal {
            hash,
            base: self.base,
            type_,
            profile,
        })
    }
}

/// A set of profiles that all resources covered by this implementation guide must conform to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementationGuideGlobal {
    hash: u64,
    base: BackboneElement,
    type_: ResourceType,
    profile: Canonical,
}

impl ImplementationGuideGlobal {
    pub fn builder() -> ImplementationGuideGlobalBuilder {
        ImplementationGuideGlobalBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn type_(&self) -> &ResourceType {
        &self.type_
    }

    pub fn profile(&self) -> &Canonical {
        &self.profile
    }

    pub fn has_children(&self) -> bool {
        // required elements are always present
        true
    }

    pub fn to_builder(&self) -> ImplementationGuideGlobalBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> ImplementationGuideGlobalBuilder {
        ImplementationGuideGlobalBuilder {
            base: self.base,
            type_: Some(self.type_),
            profile: Some(self.profile),
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .one("type", Node::ResourceType(&self.type_))
            .one("profile", Node::Canonical(&self.profile));
    }
}

/// Builder for [`ImplementationGuideDefinition`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImplementationGuideDefinitionBuilder {
    pub base: BackboneElement,

    /// Grouping used to present related resources in the IG
    pub grouping: Vec<ImplementationGuideDefinitionGrouping>,

    /// Resource in the implementation guide
    pub resource: Vec<ImplementationGuideDefinitionResource>,

    /// Page/Section in the Guide
    pub page: Option<ImplementationGuideDefinitionPage>,

    /// Defines how IG is built by tools
    pub parameter: Vec<ImplementationGuideDefinitionParameter>,

    /// A template for building resources
    pub template: Vec<ImplementationGuideDefinitionTemplate>,
}

impl ImplementationGuideDefinitionBuilder {
    pub fn build(self) -> Result<ImplementationGuideDefinition> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<ImplementationGuideDefinition> {
        support::log_rejection("ImplementationGuide.definition", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<ImplementationGuideDefinition> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        support::require_non_empty(&self.resource, "resource")?;

        let node = ImplementationGuideDefinition {
            hash,
            base: self.base,
            grouping: self.grouping,
            resource: self.resource,
            page: self.page,
            parameter: self.parameter,
            template: self.template,
        };
        support::require_value_or_children(node.has_children(), "ImplementationGuide.definition")?;
        Ok(node)
    }
}

/// The information needed by an IG publisher tool to publish the whole implementation guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementationGuideDefinition {
    hash: u64,
    base: BackboneElement,
    grouping: Vec<ImplementationGuideDefinitionGrouping>,
    resource: Vec<ImplementationGuideDefinitionResource>,
    page: Option<ImplementationGuideDefinitionPage>,
    parameter: Vec<ImplementationGuideDefinitionParameter>,
    template: Vec<ImplementationGuideDefinitionTemplate>,
}

impl ImplementationGuideDefinition {
    pub fn builder() -> ImplementationGuideDefinitionBuilder {
        ImplementationGuideDefinitionBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn grouping(&self) -> &[ImplementationGuideDefinitionGrouping] {
        &self.grouping
    }

    pub fn resource(&self) -> &[ImplementationGuideDefinitionResource] {
        &self.resource
    }

    pub fn page(&self) -> Option<&ImplementationGuideDefinitionPage> {
        self.page.as_ref()
    }

    pub fn parameter(&self) -> &[ImplementationGuideDefinitionParameter] {
        &self.parameter
    }

    pub fn template(&self) -> &[ImplementationGuideDefinitionTemplate] {
        &self.template
    }

    pub fn has_children(&self) -> bool {
        self.base.has_extensions()
            || !self.grouping.is_empty()
            || !self.resource.is_empty()
            || self.page.is_some()
            || !self.parameter.is_empty()
            || !self.template.is_empty()
    }

    pub fn to_builder(&self) -> ImplementationGuideDefinitionBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> ImplementationGuideDefinitionBuilder {
        ImplementationGuideDefinitionBuilder {
            base: self.base,
            grouping: self.grouping,
            resource: self.resource,
            page: self.page,
            parameter: self.parameter,
            template: self.template,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .many("grouping", &self.grouping, Node::ImplementationGuideDefinitionGrouping)
            .many("resource", &self.resource, Node::ImplementationGuideDefinitionResource)
            .opt("page", self.page.as_ref(), Node::ImplementationGuideDefinitionPage)
            .many("parameter", &self.parameter, Node::ImplementationGuideDefinitionParameter)
            .many("template", &self.template, Node::ImplementationGuideDefinitionTemplate);
    }
}

/// Builder for [`ImplementationGuideDefinitionGrouping`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImplementationGuideDefinitionGroupingBuilder {
    pub base: BackboneElement,

    /// Descriptive name for the package
    pub name: Option<FhirString>,

    /// Human readable text describing the package
    pub description: Option<FhirString>,
}

impl ImplementationGuideDefinitionGroupingBuilder {
    pub fn build(self) -> Result<ImplementationGuideDefinitionGrouping> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<ImplementationGuideDefinitionGrouping> {
        support::log_rejection("ImplementationGuide.definition.grouping", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<ImplementationGuideDefinitionGrouping> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        let name = support::require(self.name, "name")?;

        Ok(ImplementationGuideDefinitionGrouping {
            hash,
            base: self.base,
            name,
            description: self.description,
        })
    }
}

/// A logical group of resources. Logical groups can be used when building pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementationGuideDefinitionGrouping {
    hash: u64,
    base: BackboneElement,
    name: FhirString,
    description: Option<FhirString>,
}

impl ImplementationGuideDefinitionGrouping {
    pub fn builder() -> ImplementationGuideDefinitionGroupingBuilder {
        ImplementationGuideDefinitionGroupingBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn name(&self) -> &FhirString {
        &self.name
    }

    pub fn description(&self) -> Option<&FhirString> {
        self.description.as_ref()
    }

    pub fn has_children(&self) -> bool {
        // required elements are always present
        true
    }

    pub fn to_builder(&self) -> ImplementationGuideDefinitionGroupingBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> ImplementationGuideDefinitionGroupingBuilder {
        ImplementationGuideDefinitionGroupingBuilder {
            base: self.base,
            name: Some(self.name),
            description: self.description,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .one("name", Node::String(&self.name))
            .opt("description", self.description.as_ref(), Node::String);
    }
}

/// Builder for [`ImplementationGuideDefinitionResource`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImplementationGuideDefinitionResourceBuilder {
    pub base: BackboneElement,

    /// Location of the resource
    pub reference: Option<Reference>,

    /// Versions this applies to (if different to IG)
    pub fhir_version: Vec<FhirVersion>,

    /// Human Name for the resource
    pub name: Option<FhirString>,

    /// Reason why included in guide
    pub description: Option<FhirString>,

    /// Is an example/What is this an example of?
    pub example: Option<ChoiceValue>,

    /// Grouping this is part of
    pub grouping_id: Option<Id>,
}

impl ImplementationGuideDefinitionResourceBuilder {
    pub fn build(self) -> Result<ImplementationGuideDefinitionResource> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<ImplementationGuideDefinitionResource> {
        support::log_rejection("ImplementationGuide.definition.resource", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<ImplementationGuideDefinitionResource> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        let reference = support::require(self.reference, "reference")?;
        support::check_choice(
            self.example.as_ref(),
            "example",
            ImplementationGuideDefinitionResource::EXAMPLE_TYPES,
        )?;
        reference.validate(config)?;
        support::validate_opt(self.example.as_ref(), config)?;

        Ok(ImplementationGuideDefinitionResource {
            hash,
            base: self.base,
            reference,
            fhir_version: self.fhir_version,
            name: self.name,
            description: self.description,
            example: self.example,
            grouping_id: self.grouping_id,
        })
    }
}

/// A resource that is part of the implementation guide. Conformance resources (value set,
/// structure definition, capability statements etc.) are obvious candidates for inclusion,
/// but any kind of resource can be included as an example resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementationGuideDefinitionResource {
    hash: u64,
    base: BackboneElement,
    reference: Reference,
    fhir_version: Vec<FhirVersion>,
    name: Option<FhirString>,
    description: Option<FhirString>,
    example: Option<ChoiceValue>,
    grouping_id: Option<Id>,
}

impl ImplementationGuideDefinitionResource {
    pub const EXAMPLE_TYPES: &'static [ValueKind] = &[ValueKind::Boolean, ValueKind::Canonical];

    pub fn builder() -> ImplementationGuideDefinitionResourceBuilder {
        ImplementationGuideDefinitionResourceBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    pub fn fhir_version(&self) -> &[FhirVersion] {
        &self.fhir_version
    }

    pub fn name(&self) -> Option<&FhirString> {
        self.name.as_ref()
    }

    pub fn description(&self) -> Option<&FhirString> {
        self.description.as_ref()
    }

    pub fn example(&self) -> Option<&ChoiceValue> {
        self.example.as_ref()
    }

    pub fn grouping_id(&self) -> Option<&Id> {
        self.grouping_id.as_ref()
    }

    pub fn has_children(&self) -> bool {
        // required elements are always present
        true
    }

    pub fn to_builder(&self) -> ImplementationGuideDefinitionResourceBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> ImplementationGuideDefinitionResourceBuilder {
        ImplementationGuideDefinitionResourceBuilder {
            base: self.base,
            reference: Some(self.reference),
            fhir_version: self.fhir_version,
            name: self.name,
            description: self.description,
            example: self.example,
            grouping_id: self.grouping_id,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .one("reference", Node::Reference(&self.reference))
            .many("fhirVersion", &self.fhir_version, Node::FhirVersion)
            .opt("name", self.name.as_ref(), Node::String)
            .opt("description", self.description.as_ref(), Node::String)
            .choice("example", self.example.as_ref())
            .opt("groupingId", self.grouping_id.as_ref(), Node::Id);
    }
}

/// Builder for [`ImplementationGuideDefinitionPage`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImplementationGuideDefinitionPageBuilder {
    pub base: BackboneElement,

    /// Where to find that page
    pub name: Option<ChoiceValue>,

    /// Short title shown for navigational assistance
    pub title: Option<FhirString>,

    /// html | markdown | xml | generated
    pub generation: Option<GuidePageGeneration>,

    /// Nested Pages / Sections
    pub page: Vec<ImplementationGuideDefinitionPage>,
}

impl ImplementationGuideDefinitionPageBuilder {
    pub fn build(self) -> Result<ImplementationGuideDefinitionPage> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<ImplementationGuideDefinitionPage> {
        support::log_rejection("ImplementationGuide.definition.page", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<ImplementationGuideDefinitionPage> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        let name = support::require_choice(
            self.name,
            "name",
            ImplementationGuideDefinitionPage::NAME_TYPES,
        )?;
        let title = support::require(self.title, "title")?;
        let generation = support::require(self.generation, "generation")?;
        name.validate(config)?;
        support::check_choice_reference(
            Some(&name),
            "name",
            ImplementationGuideDefinitionPage::NAME_TARGETS,
            config,
        )?;

        Ok(ImplementationGuideDefinitionPage {
            hash,
            base: self.base,
            name,
            title,
            generation,
            page: self.page,
        })
    }
}

/// A page / section in the implementation guide. The root page is the implementation guide home
/// page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementationGuideDefinitionPage {
    hash: u64,
    base: BackboneElement,
    name: ChoiceValue,
    title: FhirString,
    generation: GuidePageGeneration,
    page: Vec<ImplementationGuideDefinitionPage>,
}

impl ImplementationGuideDefinitionPage {
    pub const NAME_TYPES: &'static [ValueKind] = &[ValueKind::Url, ValueKind::Reference];
    pub const NAME_TARGETS: &'static [&'static str] = &["Binary"];

    pub fn builder() -> ImplementationGuideDefinitionPageBuilder {
        ImplementationGuideDefinitionPageBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn name(&self) -> &ChoiceValue {
        &self.name
    }

    pub fn title(&self) -> &FhirString {
        &self.title
    }

    pub fn generation(&self) -> &GuidePageGeneration {
        &self.generation
    }

    pub fn page(&self) -> &[ImplementationGuideDefinitionPage] {
        &self.page
    }

    pub fn has_children(&self) -> bool {
        // required elements are always present
        true
    }

    pub fn to_builder(&self) -> ImplementationGuideDefinitionPageBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> ImplementationGuideDefinitionPageBuilder {
        ImplementationGuideDefinitionPageBuilder {
            base: self.base,
            name: Some(self.name),
            title: Some(self.title),
            generation: Some(self.generation),
            page: self.page,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .choice("name", Some(&self.name))
            .one("title", Node::String(&self.title))
            .one("generation", Node::GuidePageGeneration(&self.generation))
            .many("page", &self.page, Node::ImplementationGuideDefinitionPage);
    }
}

/// Builder for [`ImplementationGuideDefinitionParameter`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImplementationGuideDefinitionParameterBuilder {
    pub base: BackboneElement,

    pub code: Option<GuideParameterCode>,

    /// Value for named type
    pub value: Option<FhirString>,
}

impl ImplementationGuideDefinitionParameterBuilder {
    pub fn build(self) -> Result<ImplementationGuideDefinitionParameter> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(
        self,
        config: &ModelConfig,
    ) -> Result<ImplementationGuideDefinitionParameter> {
        support::log_rejection("ImplementationGuide.definition.parameter", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<ImplementationGuideDefinitionParameter> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        let code = support::require(self.code, "code")?;
        let value = support::require(self.value, "value")?;

        Ok(ImplementationGuideDefinitionParameter {
            hash,
            base: self.base,
            code,
            value,
        })
    }
}

/// Defines how IG is built by tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementationGuideDefinitionParameter {
    hash: u64,
    base: BackboneElement,
    code: GuideParameterCode,
    value: FhirString,
}

impl ImplementationGuideDefinitionParameter {
    pub fn builder() -> ImplementationGuideDefinitionParameterBuilder {
        ImplementationGuideDefinitionParameterBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn code(&self) -> &GuideParameterCode {
        &self.code
    }

    pub fn value(&self) -> &FhirString {
        &self.value
    }

    pub fn has_children(&self) -> bool {
        // required elements are always present
        true
    }

    pub fn to_builder(&self) -> ImplementationGuideDefinitionParameterBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> ImplementationGuideDefinitionParameterBuilder {
        ImplementationGuideDefinitionParameterBuilder {
            base: self.base,
            code: Some(self.code),
            value: Some(self.value),
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .one("code", Node::GuideParameterCode(&self.code))
            .one("value", Node::String(&self.value));
    }
}

/// Builder for [`ImplementationGuideDefinitionTemplate`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImplementationGuideDefinitionTemplateBuilder {
    pub base: BackboneElement,

    /// Type of template specified
    pub code: Option<Code>,

    /// The source location for the template
    pub source: Option<FhirString>,

    /// The scope in which the template applies
    pub scope: Option<FhirString>,
}

impl ImplementationGuideDefinitionTemplateBuilder {
    pub fn build(self) -> Result<ImplementationGuideDefinitionTemplate> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<ImplementationGuideDefinitionTemplate> {
        support::log_rejection("ImplementationGuide.definition.template", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<ImplementationGuideDefinitionTemplate> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        let code = support::require(self.code, "code")?;
        let source = support::require(self.source, "source")?;

        Ok(ImplementationGuideDefinitionTemplate {
            hash,
            base: self.base,
            code,
            source,
            scope: self.scope,
        })
    }
}

/// A template for building resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementationGuideDefinitionTemplate {
    hash: u64,
    base: BackboneElement,
    code: Code,
    source: FhirString,
    scope: Option<FhirString>,
}

impl ImplementationGuideDefinitionTemplate {
    pub fn builder() -> ImplementationGuideDefinitionTemplateBuilder {
        ImplementationGuideDefinitionTemplateBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn source(&self) -> &FhirString {
        &self.source
    }

    pub fn scope(&self) -> Option<&FhirString> {
        self.scope.as_ref()
    }

    pub fn has_children(&self) -> bool {
        // required elements are always present
        true
    }

    pub fn to_builder(&self) -> ImplementationGuideDefinitionTemplateBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> ImplementationGuideDefinitionTemplateBuilder {
        ImplementationGuideDefinitionTemplateBuilder {
            base: self.base,
            code: Some(self.code),
            source: Some(self.source),
            scope: self.scope,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .one("code", Node::Code(&self.code))
            .one("source", Node::String(&self.source))
            .opt("scope", self.scope.as_ref(), Node::String);
    }
}

/// Builder for [`ImplementationGuideManifest`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImplementationGuideManifestBuilder {
    pub base: BackboneElement,

    /// Location of rendered implementation guide
    pub rendering: Option<Url>,

    /// Resource in the implementation guide
    pub resource: Vec<ImplementationGuideManifestResource>,

    /// HTML page within the parent IG
    pub page: Vec<ImplementationGuideManifestPage>,

    /// Image within the IG
    pub image: Vec<FhirString>,

    /// Additional linkable file in IG
    pub other: Vec<FhirString>,
}

impl ImplementationGuideManifestBuilder {
    pub fn build(self) -> Result<ImplementationGuideManifest> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<ImplementationGuideManifest> {
        support::log_rejection("ImplementationGuide.manifest", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<ImplementationGuideManifest> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        support::require_non_empty(&self.resource, "resource")?;

        let node = ImplementationGuideManifest {
            hash,
            base: self.base,
            rendering: self.rendering,
            resource: self.resource,
            page: self.page,
            image: self.image,
            other: self.other,
        };
        support::require_value_or_children(node.has_children(), "ImplementationGuide.manifest")?;
        Ok(node)
    }
}

/// Information about an assembled implementation guide, created by the publication tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementationGuideManifest {
    hash: u64,
    base: BackboneElement,
    rendering: Option<Url>,
    resource: Vec<ImplementationGuideManifestResource>,
    page: Vec<ImplementationGuideManifestPage>,
    image: Vec<FhirString>,
    other: Vec<FhirString>,
}

impl ImplementationGuideManifest {
    pub fn builder() -> ImplementationGuideManifestBuilder {
        ImplementationGuideManifestBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn rendering(&self) -> Option<&Url> {
        self.rendering.as_ref()
    }

    pub fn resource(&self) -> &[ImplementationGuideManifestResource] {
        &self.resource
    }

    pub fn page(&self) -> &[ImplementationGuideManifestPage] {
        &self.page
    }

    pub fn image(&self) -> &[FhirString] {
        &self.image
    }

    pub fn other(&self) -> &[FhirString] {
        &self.other
    }

    pub fn has_children(&self) -> bool {
        self.base.has_extensions()
            || self.rendering.is_some()
            || !self.resource.is_empty()
            || !self.page.is_empty()
            || !self.image.is_empty()
            || !self.other.is_empty()
    }

    pub fn to_builder(&self) -> ImplementationGuideManifestBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> ImplementationGuideManifestBuilder {
        ImplementationGuideManifestBuilder {
            base: self.base,
            rendering: self.rendering,
            resource: self.resource,
            page: self.page,
            image: self.image,
            other: self.other,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .opt("rendering", self.rendering.as_ref(), Node::Url)
            .many("resource", &self.resource, Node::ImplementationGuideManifestResource)
            .many("page", &self.page, Node::ImplementationGuideManifestPage)
            .many("image", &self.image, Node::String)
            .many("other", &self.other, Node::String);
    }
}

/// Builder for [`ImplementationGuideManifestResource`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImplementationGuideManifestResourceBuilder {
    pub base: BackboneElement,

    /// Location of the resource
    pub reference: Option<Reference>,

    /// Is an example/What is this an example of?
    pub example: Option<ChoiceValue>,

    /// Relative path for page in IG
    pub relative_path: Option<Url>,
}

impl ImplementationGuideManifestResourceBuilder {
    pub fn build(self) -> Result<ImplementationGuideManifestResource> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<ImplementationGuideManifestResource> {
        support::log_rejection("ImplementationGuide.manifest.resource", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<ImplementationGuideManifestResource> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        let reference = support::require(self.reference, "reference")?;
        support::check_choice(
            self.example.as_ref(),
            "example",
            ImplementationGuideManifestResource::EXAMPLE_TYPES,
        )?;
        reference.validate(config)?;
        support::validate_opt(self.example.as_ref(), config)?;

        Ok(ImplementationGuideManifestResource {
            hash,
            base: self.base,
            reference,
            example: self.example,
            relative_path: self.relative_path,
        })
    }
}

/// A resource that is part of the implementation guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementationGuideManifestResource {
    hash: u64,
    base: BackboneElement,
    reference: Reference,
    example: Option<ChoiceValue>,
    relative_path: Option<Url>,
}

impl ImplementationGuideManifestResource {
    pub const EXAMPLE_TYPES: &'static [ValueKind] = &[ValueKind::Boolean, ValueKind::Canonical];

    pub fn builder() -> ImplementationGuideManifestResourceBuilder {
        ImplementationGuideManifestResourceBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    pub fn example(&self) -> Option<&ChoiceValue> {
        self.example.as_ref()
    }

    pub fn relative_path(&self) -> Option<&Url> {
        self.relative_path.as_ref()
    }

    pub fn has_children(&self) -> bool {
        // required elements are always present
        true
    }

    pub fn to_builder(&self) -> ImplementationGuideManifestResourceBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> ImplementationGuideManifestResourceBuilder {
        ImplementationGuideManifestResourceBuilder {
            base: self.base,
            reference: Some(self.reference),
            example: self.example,
            relative_path: self.relative_path,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .one("reference", Node::Reference(&self.reference))
            .choice("example", self.example.as_ref())
            .opt("relativePath", self.relative_path.as_ref(), Node::Url);
    }
}

/// Builder for [`ImplementationGuideManifestPage`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImplementationGuideManifestPageBuilder {
    pub base: BackboneElement,

    /// HTML page name
    pub name: Option<FhirString>,

    /// Title of the page, for references
    pub title: Option<FhirString>,

    /// Anchor available on the page
    pub anchor: Vec<FhirString>,
}

impl ImplementationGuideManifestPageBuilder {
    pub fn build(self) -> Result<ImplementationGuideManifestPage> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<ImplementationGuideManifestPage> {
        support::log_rejection("ImplementationGuide.manifest.page", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<ImplementationGuideManifestPage> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        let name = support::require(self.name, "name")?;

        Ok(ImplementationGuideManifestPage {
            hash,
            base: self.base,
            name,
            title: self.title,
            anchor: self.anchor,
        })
    }
}

/// Information about a page within the IG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementationGuideManifestPage {
    hash: u64,
    base: BackboneElement,
    name: FhirString,
    title: Option<FhirString>,
    anchor: Vec<FhirString>,
}

impl ImplementationGuideManifestPage {
    pub fn builder() -> ImplementationGuideManifestPageBuilder {
        ImplementationGuideManifestPageBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn name(&self) -> &FhirString {
        &self.name
    }

    pub fn title(&self) -> Option<&FhirString> {
        self.title.as_ref()
    }

    pub fn anchor(&self) -> &[FhirString] {
        &self.anchor
    }

    pub fn has_children(&self) -> bool {
        // required elements are always present
        true
    }

    pub fn to_builder(&self) -> ImplementationGuideManifestPageBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> ImplementationGuideManifestPageBuilder {
        ImplementationGuideManifestPageBuilder {
            base: self.base,
            name: Some(self.name),
            title: self.title,
            anchor: self.anchor,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .one("name", Node::String(&self.name))
            .opt("title", self.title.as_ref(), Node::String)
            .many("anchor", &self.anchor, Node::String);
    }
}

impl_cached_hash!(
    ImplementationGuide,
    ImplementationGuideDependsOn,
    ImplementationGuideGlobal,
    ImplementationGuideDefinition,
    ImplementationGuideDefinitionGrouping,
    ImplementationGuideDefinitionResource,
    ImplementationGuideDefinitionPage,
    ImplementationGuideDefinitionParameter,
    ImplementationGuideDefinitionTemplate,
    ImplementationGuideManifest,
    ImplementationGuideManifestResource,
    ImplementationGuideManifestPage,
);

impl_has_extensions!(
    ImplementationGuide,
    ImplementationGuideDependsOn,
    ImplementationGuideGlobal,
    ImplementationGuideDefinition,
    ImplementationGuideDefinitionGrouping,
    ImplementationGuideDefinitionResource,
    ImplementationGuideDefinitionPage,
    ImplementationGuideDefinitionParameter,
    ImplementationGuideDefinitionTemplate,
    ImplementationGuideManifest,
    ImplementationGuideManifestResource,
    ImplementationGuideManifestPage,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::datatypes::Extension;
    use crate::error::Error;
    use std::collections::HashSet;

    fn minimal() -> ImplementationGuideBuilder {
        ImplementationGuideBuilder {
            url: Some(Uri::new("http://example.org/ig").unwrap()),
            name: Some(FhirString::new("ExampleIG").unwrap()),
            status: Some(PublicationStatus::Active),
            package_id: Some(Id::new("example.ig").unwrap()),
            fhir_version: vec![FhirVersion::V4_3_0],
            ..Default::default()
        }
    }

    fn page(name: ChoiceValue) -> ImplementationGuideDefinitionPageBuilder {
        ImplementationGuideDefinitionPageBuilder {
            name: Some(name),
            title: Some(FhirString::new("Home").unwrap()),
            generation: Some(GuidePageGeneration::Markdown),
            ..Default::default()
        }
    }

    fn resource(reference: &str) -> ImplementationGuideDefinitionResource {
        ImplementationGuideDefinitionResourceBuilder {
            reference: Some(Reference::literal(reference).unwrap()),
            ..Default::default()
        }
        .build()
        .unwrap()
    }

    #[test]
    fn test_build_minimal() {
        let ig = minimal().build().unwrap();
        assert_eq!(ig.url().as_str(), "http://example.org/ig");
        assert_eq!(ig.name().as_str(), "ExampleIG");
        assert_eq!(*ig.status(), PublicationStatus::Active);
        assert_eq!(ig.package_id().as_str(), "example.ig");
        assert_eq!(ig.fhir_version(), &[FhirVersion::V4_3_0]);
        assert!(ig.version().is_none());
        assert!(ig.depends_on().is_empty());
        assert!(ig.has_children());
    }

    #[test]
    fn test_missing_package_id() {
        let builder = ImplementationGuideBuilder {
            package_id: None,
            ..minimal()
        };
        let err = builder.build().unwrap_err();
        assert!(matches!(err, Error::MissingElement { element: "packageId" }));
        assert_eq!(err.to_string(), "Missing required element: 'packageId'");
    }

    #[test]
    fn test_fhir_version_must_not_be_empty() {
        let builder = ImplementationGuideBuilder {
            fhir_version: Vec::new(),
            ..minimal()
        };
        assert!(matches!(
            builder.build(),
            Err(Error::EmptyList { element: "fhirVersion" })
        ));
    }

    #[test]
    fn test_depends_on_with_uri_only() {
        let depends_on = ImplementationGuideDependsOnBuilder {
            uri: Some(Canonical::new("http://hl7.org/fhir/us/core").unwrap()),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert!(depends_on.package_id().is_none());
        assert!(depends_on.version().is_none());

        let ig = ImplementationGuideBuilder {
            depends_on: vec![depends_on.clone()],
            ..minimal()
        }
        .build()
        .unwrap();
        assert_eq!(ig.depends_on(), &[depends_on]);
    }

    #[test]
    fn test_depends_on_requires_uri() {
        let err = ImplementationGuideDependsOn::builder().build().unwrap_err();
        assert_eq!(err.element(), Some("uri"));
    }

    #[test]
    fn test_global_requires_type_and_profile() {
        let global = ImplementationGuideGlobalBuilder {
            type_: Some(ResourceType::Patient),
            profile: Some(Canonical::new("http://example.org/StructureDefinition/pat").unwrap()),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(*global.type_(), ResourceType::Patient);

        let err = ImplementationGuideGlobalBuilder {
            type_: Some(ResourceType::Patient),
            ..Default::default()
        }
        .build()
        .unwrap_err();
        assert!(matches!(err, Error::MissingElement { element: "profile" }));
    }

    #[test]
    fn test_page_name_choice() {
        let url = page(Url::new("index.html").unwrap().into()).build().unwrap();
        assert_eq!(url.name().kind(), ValueKind::Url);

        let binary = page(Reference::literal("Binary/home").unwrap().into()).build();
        assert!(binary.is_ok());

        let err = page(ChoiceValue::Boolean(true)).build().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidChoiceType { element: "name", found: "Boolean", .. }
        ));

        let err = page(Reference::literal("Patient/1").unwrap().into())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DisallowedReferenceTarget { element: "name", .. }
        ));

        let err = ImplementationGuideDefinitionPageBuilder {
            name: None,
            ..page(ChoiceValue::Boolean(true))
        }
        .build()
        .unwrap_err();
        assert!(matches!(err, Error::MissingElement { element: "name" }));
    }

    #[test]
    fn test_page_reference_check_can_be_disabled() {
        let builder = page(Reference::literal("Patient/1").unwrap().into());
        assert!(builder
            .build_with(&ModelConfig::lenient_references())
            .is_ok());
    }

    #[test]
    fn test_nested_pages() {
        let child = page(Url::new("child.html").unwrap().into()).build().unwrap();
        let root = ImplementationGuideDefinitionPageBuilder {
            page: vec![child.clone(), child],
            ..page(Url::new("index.html").unwrap().into())
        }
        .build()
        .unwrap();
        assert_eq!(root.page().len(), 2);
        assert_eq!(root.page()[0].title().as_str(), "Home");
    }

    #[test]
    fn test_resource_example_choice() {
        let example = ImplementationGuideDefinitionResourceBuilder {
            reference: Some(Reference::literal("Patient/example").unwrap()),
            example: Some(
                Canonical::new("http://example.org/StructureDefinition/pat")
                    .unwrap()
                    .into(),
            ),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(example.example().map(ChoiceValue::kind), Some(ValueKind::Canonical));

        let err = ImplementationGuideDefinitionResourceBuilder {
            reference: Some(Reference::literal("Patient/example").unwrap()),
            example: Some(FhirString::new("yes").unwrap().into()),
            ..Default::default()
        }
        .build()
        .unwrap_err();
        assert!(matches!(err, Error::InvalidChoiceType { element: "example", .. }));
    }

    #[test]
    fn test_definition_requires_resource() {
        let err = ImplementationGuideDefinition::builder().build().unwrap_err();
        assert!(matches!(err, Error::EmptyList { element: "resource" }));

        let definition = ImplementationGuideDefinitionBuilder {
            resource: vec![resource("StructureDefinition/a")],
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(definition.resource().len(), 1);
        assert!(definition.page().is_none());
    }

    #[test]
    fn test_manifest_requires_resource() {
        let err = ImplementationGuideManifestBuilder {
            image: vec![FhirString::new("logo.png").unwrap()],
            ..Default::default()
        }
        .build()
        .unwrap_err();
        assert!(matches!(err, Error::EmptyList { element: "resource" }));
    }

    #[test]
    fn test_invalid_extension_fails_build() {
        let mut builder = ImplementationGuideDependsOnBuilder {
            uri: Some(Canonical::new("http://example.org/dep").unwrap()),
            ..Default::default()
        };
        builder.base.extension.push(Extension::with_extensions(
            Uri::new("http://example.org/empty").unwrap(),
            Vec::new(),
        ));
        assert!(matches!(builder.build(), Err(Error::InvalidExtension { .. })));
    }

    #[test]
    fn test_equality_and_hash() {
        let a = minimal().build().unwrap();
        let b = minimal().build().unwrap();
        assert_eq!(a, b);

        let c = ImplementationGuideBuilder {
            version: Some(FhirString::new("1.0.0").unwrap()),
            ..minimal()
        }
        .build()
        .unwrap();
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_to_builder_round_trip() {
        let ig = ImplementationGuideBuilder {
            title: Some(FhirString::new("Example").unwrap()),
            depends_on: vec![ImplementationGuideDependsOnBuilder {
                uri: Some(Canonical::new("http://example.org/dep").unwrap()),
                ..Default::default()
            }
            .build()
            .unwrap()],
            ..minimal()
        }
        .build()
        .unwrap();

        let copy = ig.to_builder().build().unwrap();
        assert_eq!(ig, copy);

        let mut builder = ig.to_builder();
        builder.title = Some(FhirString::new("Changed").unwrap());
        let changed = builder.build().unwrap();
        assert_ne!(ig, changed);
        assert_eq!(ig.title().map(FhirString::as_str), Some("Example"));
    }

    #[test]
    fn test_contained_resources() {
        let inner = ImplementationGuideBuilder {
            base: ResourceBase {
                id: Some(Id::new("inner").unwrap()),
                ..Default::default()
            },
            ..minimal()
        }
        .build()
        .unwrap();

        let outer = ImplementationGuideBuilder {
            base: ResourceBase {
                contained: vec![inner.into()],
                ..Default::default()
            },
            ..minimal()
        }
        .build()
        .unwrap();

        let contained = &outer.base().contained;
        assert_eq!(contained.len(), 1);
        assert_eq!(contained[0].resource_type(), ResourceType::ImplementationGuide);
        assert_eq!(contained[0].id().map(Id::as_str), Some("inner"));
    }

    #[test]
    fn test_resource_trait() {
        let ig = ImplementationGuideBuilder {
            base: ResourceBase {
                id: Some(Id::new("ig1").unwrap()),
                ..Default::default()
            },
            ..minimal()
        }
        .build()
        .unwrap();
        assert_eq!(ImplementationGuide::RESOURCE_TYPE, ResourceType::ImplementationGuide);
        assert_eq!(ig.id().map(Id::as_str), Some("ig1"));
        assert!(matches!(ig.as_node(), Node::ImplementationGuide(_)));
    }
}
