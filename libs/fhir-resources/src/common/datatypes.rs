//! FHIR complex data types
//!
//! Reusable structures referenced by the resource models. Unlike resources and
//! backbone elements these are plain structs with public fields; they are checked
//! through [`Validate`] when the resource or backbone element that owns them is
//! built.

use super::primitives::{
    Base64Binary, Canonical, Code, DateTime, FhirString, Id, Instant, Uri, Url, Xhtml,
};
use super::support::{self, Validate};
use crate::config::ModelConfig;
use crate::error::{Error, Result};
use crate::r4::codes::NarrativeStatus;
use rust_decimal::Decimal;
use std::fmt;

/// Runtime type of a [`ChoiceValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    Boolean,
    Integer,
    Decimal,
    String,
    Uri,
    Url,
    Canonical,
    Code,
    DateTime,
    Coding,
    CodeableConcept,
    Identifier,
    Reference,
    Quantity,
    Range,
    Ratio,
    Period,
    Attachment,
}

impl ValueKind {
    pub const ALL: &'static [ValueKind] = &[
        ValueKind::Boolean,
        ValueKind::Integer,
        ValueKind::Decimal,
        ValueKind::String,
        ValueKind::Uri,
        ValueKind::Url,
        ValueKind::Canonical,
        ValueKind::Code,
        ValueKind::DateTime,
        ValueKind::Coding,
        ValueKind::CodeableConcept,
        ValueKind::Identifier,
        ValueKind::Reference,
        ValueKind::Quantity,
        ValueKind::Range,
        ValueKind::Ratio,
        ValueKind::Period,
        ValueKind::Attachment,
    ];

    /// Type name as used in choice element suffixes (`valueQuantity`)
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Decimal => "Decimal",
            Self::String => "String",
            Self::Uri => "Uri",
            Self::Url => "Url",
            Self::Canonical => "Canonical",
            Self::Code => "Code",
            Self::DateTime => "DateTime",
            Self::Coding => "Coding",
            Self::CodeableConcept => "CodeableConcept",
            Self::Identifier => "Identifier",
            Self::Reference => "Reference",
            Self::Quantity => "Quantity",
            Self::Range => "Range",
            Self::Ratio => "Ratio",
            Self::Period => "Period",
            Self::Attachment => "Attachment",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Value of a choice element (`value[x]`, `example[x]`, `amount[x]`, ...)
///
/// The union covers every type any choice element of these models may hold.
/// Which members a particular element accepts is declared next to the element
/// and checked when its owner is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChoiceValue {
    Boolean(bool),
    Integer(i32),
    Decimal(Decimal),
    String(FhirString),
    Uri(Uri),
    Url(Url),
    Canonical(Canonical),
    Code(Code),
    DateTime(DateTime),
    Coding(Coding),
    CodeableConcept(CodeableConcept),
    Identifier(Identifier),
    Reference(Reference),
    Quantity(Quantity),
    Range(Range),
    Ratio(Ratio),
    Period(Period),
    Attachment(Attachment),
}

impl ChoiceValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::String(_) => ValueKind::String,
            Self::Uri(_) => ValueKind::Uri,
            Self::Url(_) => ValueKind::Url,
            Self::Canonical(_) => ValueKind::Canonical,
            Self::Code(_) => ValueKind::Code,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::Coding(_) => ValueKind::Coding,
            Self::CodeableConcept(_) => ValueKind::CodeableConcept,
            Self::Identifier(_) => ValueKind::Identifier,
            Self::Reference(_) => ValueKind::Reference,
            Self::Quantity(_) => ValueKind::Quantity,
            Self::Range(_) => ValueKind::Range,
            Self::Ratio(_) => ValueKind::Ratio,
            Self::Period(_) => ValueKind::Period,
            Self::Attachment(_) => ValueKind::Attachment,
        }
    }

    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Self::Reference(reference) => Some(reference),
            _ => None,
        }
    }
}

impl Validate for ChoiceValue {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        match self {
            Self::Coding(v) => v.validate(config),
            Self::CodeableConcept(v) => v.validate(config),
            Self::Identifier(v) => v.validate(config),
            Self::Reference(v) => v.validate(config),
            Self::Quantity(v) => v.validate(config),
            Self::Range(v) => v.validate(config),
            Self::Ratio(v) => v.validate(config),
            Self::Period(v) => v.validate(config),
            Self::Attachment(v) => v.validate(config),
            _ => Ok(()),
        }
    }
}

macro_rules! choice_from {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for ChoiceValue {
                fn from(value: $ty) -> Self {
                    ChoiceValue::$variant(value)
                }
            }
        )+
    };
}

choice_from!(
    Boolean(bool),
    Integer(i32),
    Decimal(Decimal),
    String(FhirString),
    Uri(Uri),
    Url(Url),
    Canonical(Canonical),
    Code(Code),
    DateTime(DateTime),
    Coding(Coding),
    CodeableConcept(CodeableConcept),
    Identifier(Identifier),
    Reference(Reference),
    Quantity(Quantity),
    Range(Range),
    Ratio(Ratio),
    Period(Period),
    Attachment(Attachment),
);

/// Optional extension element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension {
    pub id: Option<String>,

    /// Identifies the meaning of the extension
    pub url: Uri,

    /// Value of extension
    pub value: Option<Box<ChoiceValue>>,

    /// Nested extensions
    pub extension: Vec<Extension>,
}

impl Extension {
    /// Create a simple extension carrying a value
    pub fn with_value(url: Uri, value: impl Into<ChoiceValue>) -> Self {
        Self {
            id: None,
            url,
            value: Some(Box::new(value.into())),
            extension: Vec::new(),
        }
    }

    /// Create a complex extension made of nested extensions
    pub fn with_extensions(url: Uri, extension: Vec<Extension>) -> Self {
        Self {
            id: None,
            url,
            value: None,
            extension,
        }
    }
}

impl Drop for Extension {
    fn drop(&mut self) {
        // unlink nested extensions first so deep chains drop without recursion
        let mut pending = std::mem::take(&mut self.extension);
        while let Some(mut nested) = pending.pop() {
            pending.append(&mut nested.extension);
        }
    }
}

impl Validate for Extension {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::check_element_id(self.id.as_deref(), config)?;
        // ext-1: either nested extensions or a value, never both
        if self.value.is_some() == !self.extension.is_empty() {
            return Err(Error::InvalidExtension {
                url: self.url.to_string(),
            });
        }
        support::validate_all(&self.extension, config)?;
        if let Some(value) = &self.value {
            value.validate(config)?;
        }
        Ok(())
    }
}

/// A reference to a code defined by a terminology system
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coding {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub system: Option<Uri>,
    pub version: Option<FhirString>,
    pub code: Option<Code>,
    pub display: Option<FhirString>,
    pub user_selected: Option<bool>,
}

impl Coding {
    pub fn new(system: Uri, code: Code) -> Self {
        Self {
            system: Some(system),
            code: Some(code),
            ..Default::default()
        }
    }

    pub fn has_children(&self) -> bool {
        !self.extension.is_empty()
            || self.system.is_some()
            || self.version.is_some()
            || self.code.is_some()
            || self.display.is_some()
            || self.user_selected.is_some()
    }
}

impl Validate for Coding {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::check_element_id(self.id.as_deref(), config)?;
        support::validate_all(&self.extension, config)?;
        support::require_value_or_children(self.has_children(), "Coding")
    }
}

/// Concept - reference to a terminology or just text
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodeableConcept {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub coding: Vec<Coding>,
    pub text: Option<FhirString>,
}

impl CodeableConcept {
    pub fn from_coding(coding: Coding) -> Self {
        Self {
            coding: vec![coding],
            ..Default::default()
        }
    }

    pub fn from_text(text: FhirString) -> Self {
        Self {
            text: Some(text),
            ..Default::default()
        }
    }

    pub fn has_children(&self) -> bool {
        !self.extension.is_empty() || !self.coding.is_empty() || self.text.is_some()
    }
}

impl Validate for CodeableConcept {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::check_element_id(self.id.as_deref(), config)?;
        support::validate_all(&self.extension, config)?;
        support::validate_all(&self.coding, config)?;
        support::require_value_or_children(self.has_children(), "CodeableConcept")
    }
}

/// An identifier intended for computation
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// usual | official | temp | secondary | old
    pub use_: Option<Code>,
    pub type_: Option<CodeableConcept>,
    pub system: Option<Uri>,
    pub value: Option<FhirString>,
    pub period: Option<Period>,
    pub assigner: Option<Box<Reference>>,
}

impl Identifier {
    pub const ASSIGNER_TARGETS: &'static [&'static str] = &["Organization"];

    pub fn new(system: Uri, value: FhirString) -> Self {
        Self {
            system: Some(system),
            value: Some(value),
            ..Default::default()
        }
    }

    pub fn has_children(&self) -> bool {
        !self.extension.is_empty()
            || self.use_.is_some()
            || self.type_.is_some()
            || self.system.is_some()
            || self.value.is_some()
            || self.period.is_some()
            || self.assigner.is_some()
    }
}

impl Validate for Identifier {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::check_element_id(self.id.as_deref(), config)?;
        support::validate_all(&self.extension, config)?;
        support::validate_opt(self.type_.as_ref(), config)?;
        support::validate_opt(self.period.as_ref(), config)?;
        if let Some(assigner) = &self.assigner {
            assigner.validate(config)?;
            support::check_reference(assigner, "assigner", Self::ASSIGNER_TARGETS, config)?;
        }
        support::require_value_or_children(self.has_children(), "Identifier")
    }
}

/// A reference from one resource to another
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Reference {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// Literal reference, relative, internal or absolute URL
    pub reference: Option<FhirString>,
    /// Type the reference refers to (e.g. "Patient")
    pub type_: Option<Uri>,
    /// Logical reference, when literal reference is not known
    pub identifier: Option<Box<Identifier>>,
    pub display: Option<FhirString>,
}

impl Reference {
    /// Create a literal reference such as `Binary/123`
    pub fn literal(reference: &str) -> Result<Self> {
        Ok(Self {
            reference: Some(FhirString::new(reference)?),
            ..Default::default()
        })
    }

    /// Set the explicit `Reference.type`
    pub fn with_type(mut self, type_: &str) -> Result<Self> {
        self.type_ = Some(Uri::new(type_)?);
        Ok(self)
    }

    pub fn has_children(&self) -> bool {
        !self.extension.is_empty()
            || self.reference.is_some()
            || self.type_.is_some()
            || self.identifier.is_some()
            || self.display.is_some()
    }
}

impl Validate for Reference {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::check_element_id(self.id.as_deref(), config)?;
        support::validate_all(&self.extension, config)?;
        if let Some(identifier) = &self.identifier {
            identifier.validate(config)?;
        }
        support::require_value_or_children(self.has_children(), "Reference")
    }
}

/// Time range defined by start and end date/time
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Period {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub start: Option<DateTime>,
    pub end: Option<DateTime>,
}

impl Period {
    pub fn has_children(&self) -> bool {
        !self.extension.is_empty() || self.start.is_some() || self.end.is_some()
    }
}

impl Validate for Period {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::check_element_id(self.id.as_deref(), config)?;
        support::validate_all(&self.extension, config)?;
        support::require_value_or_children(self.has_children(), "Period")
    }
}

/// A measured or measurable amount
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Quantity {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub value: Option<Decimal>,
    /// < | <= | >= | >
    pub comparator: Option<Code>,
    pub unit: Option<FhirString>,
    pub system: Option<Uri>,
    pub code: Option<Code>,
}

impl Quantity {
    /// A UCUM quantity such as `12.5 mg`
    pub fn ucum(value: Decimal, unit: &str) -> Result<Self> {
        Ok(Self {
            value: Some(value),
            unit: Some(FhirString::new(unit)?),
            system: Some(Uri::new("http://unitsofmeasure.org")?),
            code: Some(Code::new(unit)?),
            ..Default::default()
        })
    }

    pub fn has_children(&self) -> bool {
        !self.extension.is_empty()
            || self.value.is_some()
            || self.comparator.is_some()
            || self.unit.is_some()
            || self.system.is_some()
            || self.code.is_some()
    }
}

impl Validate for Quantity {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::check_element_id(self.id.as_deref(), config)?;
        support::validate_all(&self.extension, config)?;
        support::require_value_or_children(self.has_children(), "Quantity")
    }
}

/// Set of values bounded by low and high
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub low: Option<Quantity>,
    pub high: Option<Quantity>,
}

impl Range {
    pub fn has_children(&self) -> bool {
        !self.extension.is_empty() || self.low.is_some() || self.high.is_some()
    }
}

impl Validate for Range {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::check_element_id(self.id.as_deref(), config)?;
        support::validate_all(&self.extension, config)?;
        support::validate_opt(self.low.as_ref(), config)?;
        support::validate_opt(self.high.as_ref(), config)?;
        support::require_value_or_children(self.has_children(), "Range")
    }
}

/// A ratio of two Quantity values - a numerator and a denominator
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Ratio {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub numerator: Option<Quantity>,
    pub denominator: Option<Quantity>,
}

impl Ratio {
    pub fn has_children(&self) -> bool {
        !self.extension.is_empty() || self.numerator.is_some() || self.denominator.is_some()
    }
}

impl Validate for Ratio {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::check_element_id(self.id.as_deref(), config)?;
        support::validate_all(&self.extension, config)?;
        support::validate_opt(self.numerator.as_ref(), config)?;
        support::validate_opt(self.denominator.as_ref(), config)?;
        support::require_value_or_children(self.has_children(), "Ratio")
    }
}

/// Content in a format defined elsewhere
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Attachment {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub content_type: Option<Code>,
    pub language: Option<Code>,
    pub data: Option<Base64Binary>,
    pub url: Option<Url>,
    pub size: Option<u32>,
    pub hash: Option<Base64Binary>,
    pub title: Option<FhirString>,
    pub creation: Option<DateTime>,
}

impl Attachment {
    pub fn has_children(&self) -> bool {
        !self.extension.is_empty()
            || self.content_type.is_some()
            || self.language.is_some()
            || self.data.is_some()
            || self.url.is_some()
            || self.size.is_some()
            || self.hash.is_some()
            || self.title.is_some()
            || self.creation.is_some()
    }
}

impl Validate for Attachment {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::check_element_id(self.id.as_deref(), config)?;
        support::validate_all(&self.extension, config)?;
        support::require_value_or_children(self.has_children(), "Attachment")
    }
}

/// Details of a technology mediated contact point (phone, fax, email, etc.)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContactPoint {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// phone | fax | email | pager | url | sms | other
    pub system: Option<Code>,
    pub value: Option<FhirString>,
    /// home | work | temp | old | mobile
    pub use_: Option<Code>,
    /// Specify preferred order of use (1 = highest)
    pub rank: Option<u32>,
    pub period: Option<Period>,
}

impl ContactPoint {
    pub fn has_children(&self) -> bool {
        !self.extension.is_empty()
            || self.system.is_some()
            || self.value.is_some()
            || self.use_.is_some()
            || self.rank.is_some()
            || self.period.is_some()
    }
}

impl Validate for ContactPoint {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::check_element_id(self.id.as_deref(), config)?;
        support::validate_all(&self.extension, config)?;
        support::validate_opt(self.period.as_ref(), config)?;
        if self.rank == Some(0) {
            return Err(Error::invalid_primitive(
                "positiveInt",
                "0",
                "must be greater than or equal to 1",
            ));
        }
        support::require_value_or_children(self.has_children(), "ContactPoint")
    }
}

/// Contact information
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContactDetail {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub name: Option<FhirString>,
    pub telecom: Vec<ContactPoint>,
}

impl ContactDetail {
    pub fn has_children(&self) -> bool {
        !self.extension.is_empty() || self.name.is_some() || !self.telecom.is_empty()
    }
}

impl Validate for ContactDetail {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::check_element_id(self.id.as_deref(), config)?;
        support::validate_all(&self.extension, config)?;
        support::validate_all(&self.telecom, config)?;
        support::require_value_or_children(self.has_children(), "ContactDetail")
    }
}

/// Describes the context of use for a conformance or knowledge resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UsageContext {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// Type of context being specified
    pub code: Coding,
    /// Value that defines the context
    pub value: ChoiceValue,
}

impl UsageContext {
    pub const VALUE_TYPES: &'static [ValueKind] = &[
        ValueKind::CodeableConcept,
        ValueKind::Quantity,
        ValueKind::Range,
        ValueKind::Reference,
    ];

    pub const VALUE_TARGETS: &'static [&'static str] = &[
        "PlanDefinition",
        "ResearchStudy",
        "InsurancePlan",
        "HealthcareService",
        "Group",
        "Location",
        "Organization",
    ];

    pub fn new(code: Coding, value: impl Into<ChoiceValue>) -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            code,
            value: value.into(),
        }
    }
}

impl Validate for UsageContext {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::check_element_id(self.id.as_deref(), config)?;
        support::validate_all(&self.extension, config)?;
        self.code.validate(config)?;
        support::check_choice(Some(&self.value), "value", Self::VALUE_TYPES)?;
        self.value.validate(config)?;
        support::check_choice_reference(Some(&self.value), "value", Self::VALUE_TARGETS, config)
    }
}

/// Metadata about a resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Meta {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub version_id: Option<Id>,
    pub last_updated: Option<Instant>,
    pub source: Option<Uri>,
    pub profile: Vec<Canonical>,
    pub security: Vec<Coding>,
    pub tag: Vec<Coding>,
}

impl Meta {
    pub fn has_children(&self) -> bool {
        !self.extension.is_empty()
            || self.version_id.is_some()
            || self.last_updated.is_some()
            || self.source.is_some()
            || !self.profile.is_empty()
            || !self.security.is_empty()
            || !self.tag.is_empty()
    }
}

impl Validate for Meta {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::check_element_id(self.id.as_deref(), config)?;
        support::validate_all(&self.extension, config)?;
        support::validate_all(&self.security, config)?;
        support::validate_all(&self.tag, config)?;
        support::require_value_or_children(self.has_children(), "Meta")
    }
}

/// Human-readable summary of the resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Narrative {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub status: NarrativeStatus,
    pub div: Xhtml,
}

impl Narrative {
    pub fn new(status: NarrativeStatus, div: Xhtml) -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            status,
            div,
        }
    }
}

impl Validate for Narrative {
    fn validate(&self, config: &ModelConfig) -> Result<()> {
        support::check_element_id(self.id.as_deref(), config)?;
        support::validate_all(&self.extension, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(value: &str) -> Uri {
        Uri::new(value).unwrap()
    }

    #[test]
    fn test_deep_extension_chain_drops() {
        let url = uri("http://example.org/nested");
        let mut ext = Extension::with_value(url.clone(), true);
        for _ in 0..200_000 {
            ext = Extension::with_extensions(url.clone(), vec![ext]);
        }
        drop(ext);
    }

    #[test]
    fn test_element_id_is_checked() {
        let config = ModelConfig::default();
        let mut coding = Coding::new(uri("http://loinc.org"), Code::new("1").unwrap());
        coding.id = Some(String::new());
        assert!(matches!(
            coding.validate(&config),
            Err(Error::InvalidPrimitive { kind: "string", .. })
        ));

        let mut ext = Extension::with_value(uri("http://example.org/ext"), true);
        ext.id = Some("ctl\u{2}".to_string());
        assert!(ext.validate(&config).is_err());
        ext.id = Some("ext-1".to_string());
        assert!(ext.validate(&config).is_ok());
    }

    #[test]
    fn test_extension_requires_value_or_nested() {
        let config = ModelConfig::default();
        let ext = Extension::with_value(uri("http://example.org/ext"), true);
        assert!(ext.validate(&config).is_ok());

        let empty = Extension::with_extensions(uri("http://example.org/ext"), Vec::new());
        assert!(matches!(
            empty.validate(&config),
            Err(Error::InvalidExtension { .. })
        ));

        let mut both = Extension::with_value(uri("http://example.org/ext"), true);
        both.extension
            .push(Extension::with_value(uri("http://example.org/inner"), 1));
        assert!(matches!(
            both.validate(&config),
            Err(Error::InvalidExtension { .. })
        ));
    }

    #[test]
    fn test_empty_coding_is_rejected() {
        let err = Coding::default()
            .validate(&ModelConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::EmptyElement { element: "Coding" }));
    }

    #[test]
    fn test_identifier_assigner_target() {
        let config = ModelConfig::default();
        let mut identifier = Identifier::new(
            uri("http://example.org/ids"),
            FhirString::new("42").unwrap(),
        );
        identifier.assigner = Some(Box::new(Reference::literal("Organization/acme").unwrap()));
        assert!(identifier.validate(&config).is_ok());

        identifier.assigner = Some(Box::new(Reference::literal("Patient/p1").unwrap()));
        assert!(matches!(
            identifier.validate(&config),
            Err(Error::DisallowedReferenceTarget { element: "assigner", .. })
        ));
    }

    #[test]
    fn test_usage_context_value_types() {
        let config = ModelConfig::default();
        let code = Coding::new(
            uri("http://terminology.hl7.org/CodeSystem/usage-context-type"),
            Code::new("focus").unwrap(),
        );

        let ok = UsageContext::new(
            code.clone(),
            CodeableConcept::from_text(FhirString::new("oncology").unwrap()),
        );
        assert!(ok.validate(&config).is_ok());

        let bad = UsageContext::new(code.clone(), true);
        assert!(matches!(
            bad.validate(&config),
            Err(Error::InvalidChoiceType { element: "value", found: "Boolean", .. })
        ));

        let bad_target = UsageContext::new(code, Reference::literal("Patient/1").unwrap());
        assert!(bad_target.validate(&config).is_err());
    }

    #[test]
    fn test_contact_point_rank_is_positive() {
        let point = ContactPoint {
            rank: Some(0),
            ..Default::default()
        };
        assert!(point.validate(&ModelConfig::default()).is_err());
    }

    #[test]
    fn test_choice_value_kind() {
        assert_eq!(ChoiceValue::from(true).kind(), ValueKind::Boolean);
        assert_eq!(
            ChoiceValue::from(Quantity::default()).kind().type_name(),
            "Quantity"
        );
        assert!(ChoiceValue::from(Reference::default()).as_reference().is_some());
    }
}
