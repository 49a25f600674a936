//! SubstanceSpecification resource
//!
//! The detailed description of a substance, typically at a level beyond what is
//! used for prescribing. All elements are optional apart from `name.name`, so
//! most backbone elements rely on the "value or children" rule (ele-1) alone.

use crate::common::base::{impl_has_extensions, BackboneElement, Resource, ResourceBase};
use crate::common::datatypes::{
    Attachment, ChoiceValue, CodeableConcept, Identifier, Quantity, Ratio, Reference, ValueKind,
};
use crate::common::primitives::{DateTime, FhirString};
use crate::common::support::{self, impl_cached_hash, Validate};
use crate::config::ModelConfig;
use crate::error::Result;
use crate::r4::codes::ResourceType;
use crate::visitor::{Children, Node};

/// Builder for [`SubstanceSpecification`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SubstanceSpecificationBuilder {
    pub base: ResourceBase,

    /// Identifier by which this substance is known
    pub identifier: Option<Identifier>,

    /// High level categorization, e.g. polymer or nucleic acid
    pub type_: Option<CodeableConcept>,

    /// Status of substance within the catalogue e.g. approved
    pub status: Option<CodeableConcept>,

    /// If the substance applies to only human or veterinary use
    pub domain: Option<CodeableConcept>,

    /// Textual description of the substance
    pub description: Option<FhirString>,

    /// Supporting literature
    pub source: Vec<Reference>,

    /// Textual comment about this record of a substance
    pub comment: Option<FhirString>,

    /// Moiety, for structural modifications
    pub moiety: Vec<SubstanceSpecificationMoiety>,

    /// General specifications for this substance, including how it is related to other
    /// substances
    pub property: Vec<SubstanceSpecificationProperty>,

    /// General information detailing this substance
    pub reference_information: Option<Reference>,

    /// Structural information
    pub structure: Option<SubstanceSpecificationStructure>,

    /// Codes associated with the substance
    pub code: Vec<SubstanceSpecificationCode>,

    /// Names applicable to this substance
    pub name: Vec<SubstanceSpecificationName>,

    /// The molecular weight or weight range (for proteins, polymers or nucleic acids)
    pub molecular_weight: Vec<SubstanceSpecificationStructureIsotopeMolecularWeight>,

    /// A link between this substance and another, with details of the relationship
    pub relationship: Vec<SubstanceSpecificationRelationship>,

    /// Data items specific to nucleic acids
    pub nucleic_acid: Option<Reference>,

    /// Data items specific to polymers
    pub polymer: Option<Reference>,

    /// Data items specific to proteins
    pub protein: Option<Reference>,

    /// Material or taxonomic/anatomical source for the substance
    pub source_material: Option<Reference>,
}

impl SubstanceSpecificationBuilder {
    pub fn build(self) -> Result<SubstanceSpecification> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<SubstanceSpecification> {
        support::log_rejection("SubstanceSpecification", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<SubstanceSpecification> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        support::validate_opt(self.identifier.as_ref(), config)?;
        support::validate_opt(self.type_.as_ref(), config)?;
        support::validate_opt(self.status.as_ref(), config)?;
        support::validate_opt(self.domain.as_ref(), config)?;
        support::validate_all(&self.source, config)?;
        support::check_references(
            &self.source,
            "source",
            SubstanceSpecification::SOURCE_TARGETS,
            config,
        )?;
        support::validate_opt(self.reference_information.as_ref(), config)?;
        support::check_optional_reference(
            self.reference_information.as_ref(),
            "referenceInformation",
            SubstanceSpecification::REFERENCE_INFORMATION_TARGETS,
            config,
        )?;
        support::validate_opt(self.nucleic_acid.as_ref(), config)?;
        support::check_optional_reference(
            self.nucleic_acid.as_ref(),
            "nucleicAcid",
            SubstanceSpecification::NUCLEIC_ACID_TARGETS,
            config,
        )?;
        support::validate_opt(self.polymer.as_ref(), config)?;
        support::check_optional_reference(
            self.polymer.as_ref(),
            "polymer",
            SubstanceSpecification::POLYMER_TARGETS,
            config,
        )?;
        support::validate_opt(self.protein.as_ref(), config)?;
        support::check_optional_reference(
            self.protein.as_ref(),
            "protein",
            SubstanceSpecification::PROTEIN_TARGETS,
            config,
        )?;
        support::validate_opt(self.source_material.as_ref(), config)?;
        support::check_optional_reference(
            self.source_material.as_ref(),
            "sourceMaterial",
            SubstanceSpecification::SOURCE_MATERIAL_TARGETS,
            config,
        )?;

        Ok(SubstanceSpecification {
            hash,
            base: self.base,
            identifier: self.identifier,
            type_: self.type_,
            status: self.status,
            domain: self.domain,
            description: self.description,
            source: self.source,
            comment: self.comment,
            moiety: self.moiety,
            property: self.property,
            reference_information: self.reference_information,
            structure: self.structure,
            code: self.code,
            name: self.name,
            molecular_weight: self.molecular_weight,
            relationship: self.relationship,
            nucleic_acid: self.nucleic_acid,
            polymer: self.polymer,
            protein: self.protein,
            source_material: self.source_material,
        })
    }
}

/// The detailed description of a substance, typically at a level beyond what is used for
/// prescribing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstanceSpecification {
    hash: u64,
    base: ResourceBase,
    identifier: Option<Identifier>,
    type_: Option<CodeableConcept>,
    status: Option<CodeableConcept>,
    domain: Option<CodeableConcept>,
    description: Option<FhirString>,
    source: Vec<Reference>,
    comment: Option<FhirString>,
    moiety: Vec<SubstanceSpecificationMoiety>,
    property: Vec<SubstanceSpecificationProperty>,
    reference_information: Option<Reference>,
    structure: Option<SubstanceSpecificationStructure>,
    code: Vec<SubstanceSpecificationCode>,
    name: Vec<SubstanceSpecificationName>,
    molecular_weight: Vec<SubstanceSpecificationStructureIsotopeMolecularWeight>,
    relationship: Vec<SubstanceSpecificationRelationship>,
    nucleic_acid: Option<Reference>,
    polymer: Option<Reference>,
    protein: Option<Reference>,
    source_material: Option<Reference>,
}

impl SubstanceSpecification {
    pub const SOURCE_TARGETS: &'static [&'static str] = &["DocumentReference"];
    pub const REFERENCE_INFORMATION_TARGETS: &'static [&'static str] = &[
        "SubstanceReferenceInformation",
    ];
    pub const NUCLEIC_ACID_TARGETS: &'static [&'static str] = &["SubstanceNucleicAcid"];
    pub const POLYMER_TARGETS: &'static [&'static str] = &["SubstancePolymer"];
    pub const PROTEIN_TARGETS: &'static [&'static str] = &["SubstanceProtein"];
    pub const SOURCE_MATERIAL_TARGETS: &'static [&'static str] = &["SubstanceSourceMaterial"];

    pub fn builder() -> SubstanceSpecificationBuilder {
        SubstanceSpecificationBuilder::default()
    }

    pub fn base(&self) -> &ResourceBase {
        &self.base
    }

    pub fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_ref()
    }

    pub fn type_(&self) -> Option<&CodeableConcept> {
        self.type_.as_ref()
    }

    pub fn status(&self) -> Option<&CodeableConcept> {
        self.status.as_ref()
    }

    pub fn domain(&self) -> Option<&CodeableConcept> {
        self.domain.as_ref()
    }

    pub fn description(&self) -> Option<&FhirString> {
        self.description.as_ref()
    }

    pub fn source(&self) -> &[Reference] {
        &self.source
    }

    pub fn comment(&self) -> Option<&FhirString> {
        self.comment.as_ref()
    }

    pub fn moiety(&self) -> &[SubstanceSpecificationMoiety] {
        &self.moiety
    }

    pub fn property(&self) -> &[SubstanceSpecificationProperty] {
        &self.property
    }

    pub fn reference_information(&self) -> Option<&Reference> {
        self.reference_information.as_ref()
    }

    pub fn structure(&self) -> Option<&SubstanceSpecificationStructure> {
        self.structure.as_ref()
    }

    pub fn code(&self) -> &[SubstanceSpecificationCode] {
        &self.code
    }

    pub fn name(&self) -> &[SubstanceSpecificationName] {
        &self.name
    }

    pub fn molecular_weight(&self) -> &[SubstanceSpecificationStructureIsotopeMolecularWeight] {
        &self.molecular_weight
    }

    pub fn relationship(&self) -> &[SubstanceSpecificationRelationship] {
        &self.relationship
    }

    pub fn nucleic_acid(&self) -> Option<&Reference> {
        self.nucleic_acid.as_ref()
    }

    pub fn polymer(&self) -> Option<&Reference> {
        self.polymer.as_ref()
    }

    pub fn protein(&self) -> Option<&Reference> {
        self.protein.as_ref()
    }

    pub fn source_material(&self) -> Option<&Reference> {
        self.source_material.as_ref()
    }

    pub fn has_children(&self) -> bool {
        self.base.has_children()
            || self.identifier.is_some()
            || self.type_.is_some()
            || self.status.is_some()
            || self.domain.is_some()
            || self.description.is_some()
            || !self.source.is_empty()
            || self.comment.is_some()
            || !self.moiety.is_empty()
            || !self.property.is_empty()
            || self.reference_information.is_some()
            || self.structure.is_some()
            || !self.code.is_empty()
            || !self.name.is_empty()
            || !self.molecular_weight.is_empty()
            || !self.relationship.is_empty()
            || self.nucleic_acid.is_some()
            || self.polymer.is_some()
            || self.protein.is_some()
            || self.source_material.is_some()
    }

    pub fn to_builder(&self) -> SubstanceSpecificationBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> SubstanceSpecificationBuilder {
        SubstanceSpecificationBuilder {
            base: self.base,
            identifier: self.identifier,
            type_: self.type_,
            status: self.status,
            domain: self.domain,
            description: self.description,
            source: self.source,
            comment: self.comment,
            moiety: self.moiety,
            property: self.property,
            reference_information: self.reference_information,
            structure: self.structure,
            code: self.code,
            name: self.name,
            molecular_weight: self.molecular_weight,
            relationship: self.relationship,
            nucleic_acid: self.nucleic_acid,
            polymer: self.polymer,
            protein: self.protein,
            source_material: self.source_material,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.resource(&self.base)
            .opt("identifier", self.identifier.as_ref(), Node::Identifier)
            .opt("type", self.type_.as_ref(), Node::CodeableConcept)
            .opt("status", self.status.as_ref(), Node::CodeableConcept)
            .opt("domain", self.domain.as_ref(), Node::CodeableConcept)
            .opt("description", self.description.as_ref(), Node::String)
            .many("source", &self.source, Node::Reference)
            .opt("comment", self.comment.as_ref(), Node::String)
            .many("moiety", &self.moiety, Node::SubstanceSpecificationMoiety)
            .many("property", &self.property, Node::SubstanceSpecificationProperty)
            .opt("referenceInformation", self.reference_information.as_ref(), Node::Reference)
            .opt("structure", self.structure.as_ref(), Node::SubstanceSpecificationStructure)
            .many("code", &self.code, Node::SubstanceSpecificationCode)
            .many("name", &self.name, Node::SubstanceSpecificationName)
            .many(
                "molecularWeight",
                &self.molecular_weight,
                Node::SubstanceSpecificationStructureIsotopeMolecularWeight,
            )
            .many("relationship", &self.relationship, Node::SubstanceSpecificationRelationship)
            .opt("nucleicAcid", self.nucleic_acid.as_ref(), Node::Reference)
            .opt("polymer", self.polymer.as_ref(), Node::Reference)
            .opt("protein", self.protein.as_ref(), Node::Reference)
            .opt("sourceMaterial", self.source_material.as_ref(), Node::Reference);
    }
}

impl Resource for SubstanceSpecification {
    const RESOURCE_TYPE: ResourceType = ResourceType::SubstanceSpecification;

    fn resource_base(&self) -> &ResourceBase {
        &self.base
    }

    fn as_node(&self) -> Node<'_> {
        Node::SubstanceSpecification(self)
    }
}

/// Builder for [`SubstanceSpecificationMoiety`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SubstanceSpecificationMoietyBuilder {
    pub base: BackboneElement,

    /// Role that the moiety is playing
    pub role: Option<CodeableConcept>,

    /// Identifier by which this moiety substance is known
    pub identifier: Option<Identifier>,

    /// Textual name for this moiety substance
    pub name: Option<FhirString>,

    /// Stereochemistry type
    pub stereochemistry: Option<CodeableConcept>,

    /// Optical activity type
    pub optical_activity: Option<CodeableConcept>,

    /// Molecular formula
    pub molecular_formula: Option<FhirString>,

    /// Quantitative value for this moiety
    pub amount: Option<ChoiceValue>,
}

impl SubstanceSpecificationMoietyBuilder {
    pub fn build(self) -> Result<SubstanceSpecificationMoiety> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<SubstanceSpecificationMoiety> {
        support::log_rejection("SubstanceSpecification.moiety", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<SubstanceSpecificationMoiety> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        support::check_choice(
            self.amount.as_ref(),
            "amount",
            SubstanceSpecificationMoiety::AMOUNT_TYPES,
        )?;
        support::validate_opt(self.role.as_ref(), config)?;
        support::validate_opt(self.identifier.as_ref(), config)?;
        support::validate_opt(self.stereochemistry.as_ref(), config)?;
        support::validate_opt(self.optical_activity.as_ref(), config)?;
        support::validate_opt(self.amount.as_ref(), config)?;

        let node = SubstanceSpecificationMoiety {
            hash,
            base: self.base,
            role: self.role,
            identifier: self.identifier,
            name: self.name,
            stereochemistry: self.stereochemistry,
            optical_activity: self.optical_activity,
            molecular_formula: self.molecular_formula,
            amount: self.amount,
        };
        support::require_value_or_children(node.has_children(), "SubstanceSpecification.moiety")?;
        Ok(node)
    }
}

/// Moiety, for structural modifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstanceSpecificationMoiety {
    hash: u64,
    base: BackboneElement,
    role: Option<CodeableConcept>,
    identifier: Option<Identifier>,
    name: Option<FhirString>,
    stereochemistry: Option<CodeableConcept>,
    optical_activity: Option<CodeableConcept>,
    molecular_formula: Option<FhirString>,
    amount: Option<ChoiceValue>,
}

impl SubstanceSpecificationMoiety {
    pub const AMOUNT_TYPES: &'static [ValueKind] = &[ValueKind::Quantity, ValueKind::String];

    pub fn builder() -> SubstanceSpecificationMoietyBuilder {
        SubstanceSpecificationMoietyBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn role(&self) -> Option<&CodeableConcept> {
        self.role.as_ref()
    }

    pub fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_ref()
    }

    pub fn name(&self) -> Option<&FhirString> {
        self.name.as_ref()
    }

    pub fn stereochemistry(&self) -> Option<&CodeableConcept> {
        self.stereochemistry.as_ref()
    }

    pub fn optical_activity(&self) -> Option<&CodeableConcept> {
        self.optical_activity.as_ref()
    }

    pub fn molecular_formula(&self) -> Option<&FhirString> {
        self.molecular_formula.as_ref()
    }

    pub fn amount(&self) -> Option<&ChoiceValue> {
        self.amount.as_ref()
    }

    pub fn has_children(&self) -> bool {
        self.base.has_extensions()
            || self.role.is_some()
            || self.identifier.is_some()
            || self.name.is_some()
            || self.stereochemistry.is_some()
            || self.optical_activity.is_some()
            || self.molecular_formula.is_some()
            || self.amount.is_some()
    }

    pub fn to_builder(&self) -> SubstanceSpecificationMoietyBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> SubstanceSpecificationMoietyBuilder {
        SubstanceSpecificationMoietyBuilder {
            base: self.base,
            role: self.role,
            identifier: self.identifier,
            name: self.name,
            stereochemistry: self.stereochemistry,
            optical_activity: self.optical_activity,
            molecular_formula: self.molecular_formula,
            amount: self.amount,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .opt("role", self.role.as_ref(), Node::CodeableConcept)
            .opt("identifier", self.identifier.as_ref(), Node::Identifier)
            .opt("name", self.name.as_ref(), Node::String)
            .opt("stereochemistry", self.stereochemistry.as_ref(), Node::CodeableConcept)
            .opt("opticalActivity", self.optical_activity.as_ref(), Node::CodeableConcept)
            .opt("molecularFormula", self.molecular_formula.as_ref(), Node::String)
            .choice("amount", self.amount.as_ref());
    }
}

/// Builder for [`SubstanceSpecificationProperty`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SubstanceSpecificationPropertyBuilder {
    pub base: BackboneElement,

    /// A category for this property, e.g. Physical, Chemical, Enzymatic
    pub category: Option<CodeableConcept>,

    /// Property type e.g. viscosity, pH, isoelectric point
    pub code: Option<CodeableConcept>,

    /// Parameters that were used in the measurement of a property (e.g. for viscosity: measured
    /// at 20C with a pH of 7.1)
    pub parameters: Option<FhirString>,

    /// A substance upon which a defining property depends (e.g. for solubility: in water, in
    /// alcohol)
    pub defining_substance: Option<ChoiceValue>,

    /// Quantitative value for this property
    pub amount: Option<ChoiceValue>,
}

impl SubstanceSpecificationPropertyBuilder {
    pub fn build(self) -> Result<SubstanceSpecificationProperty> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<SubstanceSpecificationProperty> {
        support::log_rejection("SubstanceSpecification.property", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<SubstanceSpecificationProperty> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        support::check_choice(
            self.defining_substance.as_ref(),
            "definingSubstance",
            SubstanceSpecificationProperty::DEFINING_SUBSTANCE_TYPES,
        )?;
        support::check_choice(
            self.amount.as_ref(),
            "amount",
            SubstanceSpecificationProperty::AMOUNT_TYPES,
        )?;
        support::validate_opt(self.category.as_ref(), config)?;
        support::validate_opt(self.code.as_ref(), config)?;
        support::validate_opt(self.defining_substance.as_ref(), config)?;
        support::check_choice_reference(
            self.defining_substance.as_ref(),
            "definingSubstance",
            SubstanceSpecificationProperty::DEFINING_SUBSTANCE_TARGETS,
            config,
        )?;
        support::validate_opt(self.amount.as_ref(), config)?;

        let node = SubstanceSpecificationProperty {
            hash,
            base: self.base,
            category: self.category,
            code: self.code,
            parameters: self.parameters,
            defining_substance: self.defining_substance,
            amount: self.amount,
        };
        support::require_value_or_children(node.has_children(), "SubstanceSpecification.property")?;
        Ok(node)
    }
}

/// General specifications for this substance, including how it is related to other substances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstanceSpecificationProperty {
    hash: u64,
    base: BackboneElement,
    category: Option<CodeableConcept>,
    code: Option<CodeableConcept>,
    parameters: Option<FhirString>,
    defining_substance: Option<ChoiceValue>,
    amount: Option<ChoiceValue>,
}

impl SubstanceSpecificationProperty {
    pub const DEFINING_SUBSTANCE_TYPES: &'static [ValueKind] = &[
        ValueKind::Reference,
        ValueKind::CodeableConcept,
    ];
    pub const DEFINING_SUBSTANCE_TARGETS: &'static [&'static str] = &[
        "SubstanceSpecification",
        "Substance",
    ];
    pub const AMOUNT_TYPES: &'static [ValueKind] = &[ValueKind::Quantity, ValueKind::String];

    pub fn builder() -> SubstanceSpecificationPropertyBuilder {
        SubstanceSpecificationPropertyBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn category(&self) -> Option<&CodeableConcept> {
        self.category.as_ref()
    }

    pub fn code(&self) -> Option<&CodeableConcept> {
        self.code.as_ref()
    }

    pub fn parameters(&self) -> Option<&FhirString> {
        self.parameters.as_ref()
    }

    pub fn defining_substance(&self) -> Option<&ChoiceValue> {
        self.defining_substance.as_ref()
    }

    pub fn amount(&self) -> Option<&ChoiceValue> {
        self.amount.as_ref()
    }

    pub fn has_children(&self) -> bool {
        self.base.has_extensions()
            || self.category.is_some()
            || self.code.is_some()
            || self.parameters.is_some()
            || self.defining_substance.is_some()
            || self.amount.is_some()
    }

    pub fn to_builder(&self) -> SubstanceSpecificationPropertyBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> SubstanceSpecificationPropertyBuilder {
        SubstanceSpecificationPropertyBuilder {
            base: self.base,
            category: self.category,
            code: self.code,
            parameters: self.parameters,
            defining_substance: self.defining_substance,
            amount: self.amount,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .opt("category", self.category.as_ref(), Node::CodeableConcept)
            .opt("code", self.code.as_ref(), Node::CodeableConcept)
            .opt("parameters", self.parameters.as_ref(), Node::String)
            .choice("definingSubstance", self.defining_substance.as_ref())
            .choice("amount", self.amount.as_ref());
    }
}

/// Builder for [`SubstanceSpecificationStructure`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SubstanceSpecificationStructureBuilder {
    pub base: BackboneElement,

    /// Stereochemistry type
    pub stereochemistry: Option<CodeableConcept>,

    /// Optical activity type
    pub optical_activity: Option<CodeableConcept>,

    /// Molecular formula
    pub molecular_formula: Option<FhirString>,

    /// Specified per moiety according to the Hill system, i.e. first C, then H, then
    /// alphabetical, each moiety separated by a dot
    pub molecular_formula_by_moiety: Option<FhirString>,

    /// Applicable for single substances that contain a radionuclide or a non-natural isotopic
    /// ratio
    pub isotope: Vec<SubstanceSpecificationStructureIsotope>,

    /// The molecular weight or weight range (for proteins, polymers or nucleic acids)
    pub molecular_weight: Option<SubstanceSpecificationStructureIsotopeMolecularWeight>,

    /// Supporting literature
    pub source: Vec<Reference>,

    /// Molecular structural representation
    pub representation: Vec<SubstanceSpecificationStructureRepresentation>,
}

impl SubstanceSpecificationStructureBuilder {
    pub fn build(self) -> Result<SubstanceSpecificationStructure> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<SubstanceSpecificationStructure> {
        support::log_rejection("SubstanceSpecification.structure", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<SubstanceSpecificationStructure> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        support::validate_opt(self.stereochemistry.as_ref(), config)?;
        support::validate_opt(self.optical_activity.as_ref(), config)?;
        support::validate_all(&self.source, config)?;
        support::check_references(
            &self.source,
            "source",
            SubstanceSpecificationStructure::SOURCE_TARGETS,
            config,
        )?;

        let node = SubstanceSpecificationStructure {
            hash,
            base: self.base,
            stereochemistry: self.stereochemistry,
            optical_activity: self.optical_activity,
            molecular_formula: self.molecular_formula,
            molecular_formula_by_moiety: self.molecular_formula_by_moiety,
            isotope: self.isotope,
            molecular_weight: self.molecular_weight,
            source: self.source,
            representation: self.representation,
        };
        support::require_value_or_children(
            node.has_children(),
            "SubstanceSpecification.structure",
        )?;
        Ok(node)
    }
}

/// Structural information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstanceSpecificationStructure {
    hash: u64,
    base: BackboneElement,
    stereochemistry: Option<CodeableConcept>,
    optical_activity: Option<CodeableConcept>,
    molecular_formula: Option<FhirString>,
    molecular_formula_by_moiety: Option<FhirString>,
    isotope: Vec<SubstanceSpecificationStructureIsotope>,
    molecular_weight: Option<SubstanceSpecificationStructureIsotopeMolecularWeight>,
    source: Vec<Reference>,
    representation: Vec<SubstanceSpecificationStructureRepresentation>,
}

impl SubstanceSpecificationStructure {
    pub const SOURCE_TARGETS: &'static [&'static str] = &["DocumentReference"];

    pub fn builder() -> SubstanceSpecificationStructureBuilder {
        SubstanceSpecificationStructureBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn stereochemistry(&self) -> Option<&CodeableConcept> {
        self.stereochemistry.as_ref()
    }

    pub fn optical_activity(&self) -> Option<&CodeableConcept> {
        self.optical_activity.as_ref()
    }

    pub fn molecular_formula(&self) -> Option<&FhirString> {
        self.molecular_formula.as_ref()
    }

    pub fn molecular_formula_by_moiety(&self) -> Option<&FhirString> {
        self.molecular_formula_by_moiety.as_ref()
    }

    pub fn isotope(&self) -> &[SubstanceSpecificationStructureIsotope] {
        &self.isotope
    }

    pub fn molecular_weight(
        &self,
    ) -> Option<&SubstanceSpecificationStructureIsotopeMolecularWeight> {
        self.molecular_weight.as_ref()
    }

    pub fn source(&self) -> &[Reference] {
        &self.source
    }

    pub fn representation(&self) -> &[SubstanceSpecificationStructureRepresentation] {
        &self.representation
    }

    pub fn has_children(&self) -> bool {
        self.base.has_extensions()
            || self.stereochemistry.is_some()
            || self.optical_activity.is_some()
            || self.molecular_formula.is_some()
            || self.molecular_formula_by_moiety.is_some()
            || !self.isotope.is_empty()
            || self.molecular_weight.is_some()
            || !self.source.is_empty()
            || !self.representation.is_empty()
    }

    pub fn to_builder(&self) -> SubstanceSpecificationStructureBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> SubstanceSpecificationStructureBuilder {
        SubstanceSpecificationStructureBuilder {
            base: self.base,
            stereochemistry: self.stereochemistry,
            optical_activity: self.optical_activity,
            molecular_formula: self.molecular_formula,
            molecular_formula_by_moiety: self.molecular_formula_by_moiety,
            isotope: self.isotope,
            molecular_weight: self.molecular_weight,
            source: self.source,
            representation: self.representation,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .opt("stereochemistry", self.stereochemistry.as_ref(), Node::CodeableConcept)
            .opt("opticalActivity", self.optical_activity.as_ref(), Node::CodeableConcept)
            .opt("molecularFormula", self.molecular_formula.as_ref(), Node::String)
            .opt(
                "molecularFormulaByMoiety",
                self.molecular_formula_by_moiety.as_ref(),
                Node::String,
            )
            .many("isotope", &self.isotope, Node::SubstanceSpecificationStructureIsotope)
            .opt(
                "molecularWeight",
                self.molecular_weight.as_ref(),
                Node::SubstanceSpecificationStructureIsotopeMolecularWeight,
            )
            .many("source", &self.source, Node::Reference)
            .many(
                "representation",
                &self.representation,
                Node::SubstanceSpecificationStructureRepresentation,
            );
    }
}

/// Builder for [`SubstanceSpecificationStructureIsotope`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SubstanceSpecificationStructureIsotopeBuilder {
    pub base: BackboneElement,

    /// Substance identifier for each non-natural or radioisotope
    pub identifier: Option<Identifier>,

    /// Substance name for each non-natural or radioisotope
    pub name: Option<CodeableConcept>,

    /// The type of isotopic substitution present in a single substance
    pub substitution: Option<CodeableConcept>,

    /// Half life - for a non-natural nuclide
    pub half_life: Option<Quantity>,

    /// The molecular weight or weight range (for proteins, polymers or nucleic acids)
    pub molecular_weight: Option<SubstanceSpecificationStructureIsotopeMolecularWeight>,
}

impl SubstanceSpecificationStructureIsotopeBuilder {
    pub fn build(self) -> Result<SubstanceSpecificationStructureIsotope> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(
        self,
        config: &ModelConfig,
    ) -> Result<SubstanceSpecificationStructureIsotope> {
        support::log_rejection("SubstanceSpecification.structure.isotope", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<SubstanceSpecificationStructureIsotope> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        support::validate_opt(self.identifier.as_ref(), config)?;
        support::validate_opt(self.name.as_ref(), config)?;
        support::validate_opt(self.substitution.as_ref(), config)?;
        support::validate_opt(self.half_life.as_ref(), config)?;

        let node = SubstanceSpecificationStructureIsotope {
            hash,
            base: self.base,
            identifier: self.identifier,
            name: self.name,
            substitution: self.substitution,
            half_life: self.half_life,
            molecular_weight: self.molecular_weight,
        };
        support::require_value_or_children(
            node.has_children(),
            "SubstanceSpecification.structure.isotope",
        )?;
        Ok(node)
    }
}

/// Applicable for single substances that contain a radionuclide or a non-natural isotopic
/// ratio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstanceSpecificationStructureIsotope {
    hash: u64,
    base: BackboneElement,
    identifier: Option<Identifier>,
    name: Option<CodeableConcept>,
    substitution: Option<CodeableConcept>,
    half_life: Option<Quantity>,
    molecular_weight: Option<SubstanceSpecificationStructureIsotopeMolecularWeight>,
}

impl SubstanceSpecificationStructureIsotope {
    pub fn builder() -> SubstanceSpecificationStructureIsotopeBuilder {
        SubstanceSpecificationStructureIsotopeBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_ref()
    }

    pub fn name(&self) -> Option<&CodeableConcept> {
        self.name.as_ref()
    }

    pub fn substitution(&self) -> Option<&CodeableConcept> {
        self.substitution.as_ref()
    }

    pub fn half_life(&self) -> Option<&Quantity> {
        self.half_life.as_ref()
    }

    pub fn molecular_weight(
        &self,
    ) -> Option<&SubstanceSpecificationStructureIsotopeMolecularWeight> {
        self.molecular_weight.as_ref()
    }

    pub fn has_children(&self) -> bool {
        self.base.has_extensions()
            || self.identifier.is_some()
            || self.name.is_some()
            || self.substitution.is_some()
            || self.half_life.is_some()
            || self.molecular_weight.is_some()
    }

    pub fn to_builder(&self) -> SubstanceSpecificationStructureIsotopeBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> SubstanceSpecificationStructureIsotopeBuilder {
        SubstanceSpecificationStructureIsotopeBuilder {
            base: self.base,
            identifier: self.identifier,
            name: self.name,
            substitution: self.substitution,
            half_life: self.half_life,
            molecular_weight: self.molecular_weight,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .opt("identifier", self.identifier.as_ref(), Node::Identifier)
            .opt("name", self.name.as_ref(), Node::CodeableConcept)
            .opt("substitution", self.substitution.as_ref(), Node::CodeableConcept)
            .opt("halfLife", self.half_life.as_ref(), Node::Quantity)
            .opt(
                "molecularWeight",
                self.molecular_weight.as_ref(),
                Node::SubstanceSpecificationStructureIsotopeMolecularWeight,
            );
    }
}

/// Builder for [`SubstanceSpecificationStructureIsotopeMolecularWeight`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SubstanceSpecificationStructureIsotopeMolecularWeightBuilder {
    pub base: BackboneElement,

    /// The method by which the molecular weight was determined
    pub method: Option<CodeableConcept>,

    /// Type of molecular weight such as exact, average (also known as. number average), weight
    /// average
    pub type_: Option<CodeableConcept>,

    /// Used to capture quantitative values for a variety of elements. If only limits are given,
    /// the arithmetic mean would be the average. If only a single definite value for a given
    /// element is given, it would be captured in this field
    pub amount: Option<Quantity>,
}

impl SubstanceSpecificationStructureIsotopeMolecularWeightBuilder {
    pub fn build(self) -> Result<SubstanceSpecificationStructureIsotopeMolecularWeight> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(
        self,
        config: &ModelConfig,
    ) -> Result<SubstanceSpecificationStructureIsotopeMolecularWeight> {
        support::log_rejection(
            "SubstanceSpecification.structure.isotope.molecularWeight",
            self.freeze(config),
        )
    }

    fn freeze(
        self,
        config: &ModelConfig,
    ) -> Result<SubstanceSpecificationStructureIsotopeMolecularWeight> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        support::validate_opt(self.method.as_ref(), config)?;
        support::validate_opt(self.type_.as_ref(), config)?;
        support::validate_opt(self.amount.as_ref(), config)?;

        let node = SubstanceSpecificationStructureIsotopeMolecularWeight {
            hash,
            base: self.base,
            method: self.method,
            type_: self.type_,
            amount: self.amount,
        };
        support::require_value_or_children(
            node.has_children(),
            "SubstanceSpecification.structure.isotope.molecularWeight",
        )?;
        Ok(node)
    }
}

/// The molecular weight or weight range (for proteins, polymers or nucleic acids).
///
/// Also used directly by `SubstanceSpecification.molecularWeight` and
/// `SubstanceSpecification.structure.molecularWeight`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstanceSpecificationStructureIsotopeMolecularWeight {
    hash: u64,
    base: BackboneElement,
    method: Option<CodeableConcept>,
    type_: Option<CodeableConcept>,
    amount: Option<Quantity>,
}

impl SubstanceSpecificationStructureIsotopeMolecularWeight {
    pub fn builder() -> SubstanceSpecificationStructureIsotopeMolecularWeightBuilder {
        SubstanceSpecificationStructureIsotopeMolecularWeightBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn method(&self) -> Option<&CodeableConcept> {
        self.method.as_ref()
    }

    pub fn type_(&self) -> Option<&CodeableConcept> {
        self.type_.as_ref()
    }

    pub fn amount(&self) -> Option<&Quantity> {
        self.amount.as_ref()
    }

    pub fn has_children(&self) -> bool {
        self.base.has_extensions()
            || self.method.is_some()
            || self.type_.is_some()
            || self.amount.is_some()
    }

    pub fn to_builder(&self) -> SubstanceSpecificationStructureIsotopeMolecularWeightBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> SubstanceSpecificationStructureIsotopeMolecularWeightBuilder {
        SubstanceSpecificationStructureIsotopeMolecularWeightBuilder {
            base: self.base,
            method: self.method,
            type_: self.type_,
            amount: self.amount,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .opt("method", self.method.as_ref(), Node::CodeableConcept)
            .opt("type", self.type_.as_ref(), Node::CodeableConcept)
            .opt("amount", self.amount.as_ref(), Node::Quantity);
    }
}

/// Builder for [`SubstanceSpecificationStructureRepresentation`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SubstanceSpecificationStructureRepresentationBuilder {
    pub base: BackboneElement,

    /// The type of structure (e.g. Full, Partial, Representative)
    pub type_: Option<CodeableConcept>,

    /// The structural representation as text string in a format e.g. InChI, SMILES, MOLFILE,
    /// CDX
    pub representation: Option<FhirString>,

    /// An attached file with the structural representation
    pub attachment: Option<Attachment>,
}

impl SubstanceSpecificationStructureRepresentationBuilder {
    pub fn build(self) -> Result<SubstanceSpecificationStructureRepresentation> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(
        self,
        config: &ModelConfig,
    ) -> Result<SubstanceSpecificationStructureRepresentation> {
        support::log_rejection(
            "SubstanceSpecification.structure.representation",
            self.freeze(config),
        )
    }

    fn freeze(self, config: &ModelConfig) -> Result<SubstanceSpecificationStructureRepresentation> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        support::validate_opt(self.type_.as_ref(), config)?;
        support::validate_opt(self.attachment.as_ref(), config)?;

        let node = SubstanceSpecificationStructureRepresentation {
            hash,
            base: self.base,
            type_: self.type_,
            representation: self.representation,
            attachment: self.attachment,
        };
        support::require_value_or_children(
            node.has_children(),
            "SubstanceSpecification.structure.representation",
        )?;
        Ok(node)
    }
}

/// Molecular structural representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstanceSpecificationStructureRepresentation {
    hash: u64,
    base: BackboneElement,
    type_: Option<CodeableConcept>,
    representation: Option<FhirString>,
    attachment: Option<Attachment>,
}

impl SubstanceSpecificationStructureRepresentation {
    pub fn builder() -> SubstanceSpecificationStructureRepresentationBuilder {
        SubstanceSpecificationStructureRepresentationBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn type_(&self) -> Option<&CodeableConcept> {
        self.type_.as_ref()
    }

    pub fn representation(&self) -> Option<&FhirString> {
        self.representation.as_ref()
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn has_children(&self) -> bool {
        self.base.has_extensions()
            || self.type_.is_some()
            || self.representation.is_some()
            || self.attachment.is_some()
    }

    pub fn to_builder(&self) -> SubstanceSpecificationStructureRepresentationBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> SubstanceSpecificationStructureRepresentationBuilder {
        SubstanceSpecificationStructureRepresentationBuilder {
            base: self.base,
            type_: self.type_,
            representation: self.representation,
            attachment: self.attachment,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .opt("type", self.type_.as_ref(), Node::CodeableConcept)
            .opt("representation", self.representation.as_ref(), Node::String)
            .opt("attachment", self.attachment.as_ref(), Node::Attachment);
    }
}

/// Builder for [`SubstanceSpecificationCode`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SubstanceSpecificationCodeBuilder {
    pub base: BackboneElement,

    /// The specific code
    pub code: Option<CodeableConcept>,

    /// Status of the code assignment
    pub status: Option<CodeableConcept>,

    /// The date at which the code status is changed as part of the terminology maintenance
    pub status_date: Option<DateTime>,

    /// Any comment can be provided in this field, if necessary
    pub comment: Option<FhirString>,

    /// Supporting literature
    pub source: Vec<Reference>,
}

impl SubstanceSpecificationCodeBuilder {
    pub fn build(self) -> Result<SubstanceSpecificationCode> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<SubstanceSpecificationCode> {
        support::log_rejection("SubstanceSpecification.code", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<SubstanceSpecificationCode> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        support::validate_opt(self.code.as_ref(), config)?;
        support::validate_opt(self.status.as_ref(), config)?;
        support::validate_all(&self.source, config)?;
        support::check_references(
            &self.source,
            "source",
            SubstanceSpecificationCode::SOURCE_TARGETS,
            config,
        )?;

        let node = SubstanceSpecificationCode {
            hash,
            base: self.base,
            code: self.code,
            status: self.status,
            status_date: self.status_date,
            comment: self.comment,
            source: self.source,
        };
        support::require_value_or_children(node.has_children(), "SubstanceSpecification.code")?;
        Ok(node)
    }
}

/// Codes associated with the substance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstanceSpecificationCode {
    hash: u64,
    base: BackboneElement,
    code: Option<CodeableConcept>,
    status: Option<CodeableConcept>,
    status_date: Option<DateTime>,
    comment: Option<FhirString>,
    source: Vec<Reference>,
}

impl SubstanceSpecificationCode {
    pub const SOURCE_TARGETS: &'static [&'static str] = &["DocumentReference"];

    pub fn builder() -> SubstanceSpecificationCodeBuilder {
        SubstanceSpecificationCodeBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn code(&self) -> Option<&CodeableConcept> {
        self.code.as_ref()
    }

    pub fn status(&self) -> Option<&CodeableConcept> {
        self.status.as_ref()
    }

    pub fn status_date(&self) -> Option<&DateTime> {
        self.status_date.as_ref()
    }

    pub fn comment(&self) -> Option<&FhirString> {
        self.comment.as_ref()
    }

    pub fn source(&self) -> &[Reference] {
        &self.source
    }

    pub fn has_children(&self) -> bool {
        self.base.has_extensions()
            || self.code.is_some()
            || self.status.is_some()
            || self.status_date.is_some()
            || self.comment.is_some()
            || !self.source.is_empty()
    }

    pub fn to_builder(&self) -> SubstanceSpecificationCodeBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> SubstanceSpecificationCodeBuilder {
        SubstanceSpecificationCodeBuilder {
            base: self.base,
            code: self.code,
            status: self.status,
            status_date: self.status_date,
            comment: self.comment,
            source: self.source,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .opt("code", self.code.as_ref(), Node::CodeableConcept)
            .opt("status", self.status.as_ref(), Node::CodeableConcept)
            .opt("statusDate", self.status_date.as_ref(), Node::DateTime)
            .opt("comment", self.comment.as_ref(), Node::String)
            .many("source", &self.source, Node::Reference);
    }
}

/// Builder for [`SubstanceSpecificationName`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SubstanceSpecificationNameBuilder {
    pub base: BackboneElement,

    /// The actual name
    pub name: Option<FhirString>,

    /// Name type
    pub type_: Option<CodeableConcept>,

    /// The status of the name
    pub status: Option<CodeableConcept>,

    /// If this is the preferred name for this substance
    pub preferred: Option<bool>,

    /// Language of the name
    pub language: Vec<CodeableConcept>,

    /// The use context of this name for example if there is a different name a drug active
    /// ingredient as opposed to a food colour additive
    pub domain: Vec<CodeableConcept>,

    /// The jurisdiction where this name applies
    pub jurisdiction: Vec<CodeableConcept>,

    /// A synonym of this name
    pub synonym: Vec<SubstanceSpecificationName>,

    /// A translation for this name
    pub translation: Vec<SubstanceSpecificationName>,

    /// Details of the official nature of this name
    pub official: Vec<SubstanceSpecificationNameOfficial>,

    /// Supporting literature
    pub source: Vec<Reference>,
}

impl SubstanceSpecificationNameBuilder {
    pub fn build(self) -> Result<SubstanceSpecificationName> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<SubstanceSpecificationName> {
        support::log_rejection("SubstanceSpecification.name", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<SubstanceSpecificationName> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        let name = support::require(self.name, "name")?;
        support::validate_opt(self.type_.as_ref(), config)?;
        support::validate_opt(self.status.as_ref(), config)?;
        support::validate_all(&self.language, config)?;
        support::validate_all(&self.domain, config)?;
        support::validate_all(&self.jurisdiction, config)?;
        support::validate_all(&self.source, config)?;
        support::check_references(
            &self.source,
            "source",
            SubstanceSpecificationName::SOURCE_TARGETS,
            config,
        )?;

        Ok(SubstanceSpecificationName {
            hash,
            base: self.base,
            name,
            type_: self.type_,
            status: self.status,
            preferred: self.preferred,
            language: self.language,
            domain: self.domain,
            jurisdiction: self.jurisdiction,
            synonym: self.synonym,
            translation: self.translation,
            official: self.official,
            source: self.source,
        })
    }
}

/// Names applicable to this substance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstanceSpecificationName {
    hash: u64,
    base: BackboneElement,
    name: FhirString,
    type_: Option<CodeableConcept>,
    status: Option<CodeableConcept>,
    preferred: Option<bool>,
    language: Vec<CodeableConcept>,
    domain: Vec<CodeableConcept>,
    jurisdiction: Vec<CodeableConcept>,
    synonym: Vec<SubstanceSpecificationName>,
    translation: Vec<SubstanceSpecificationName>,
    official: Vec<SubstanceSpecificationNameOfficial>,
    source: Vec<Reference>,
}

impl SubstanceSpecificationName {
    pub const SOURCE_TARGETS: &'static [&'static str] = &["DocumentReference"];

    pub fn builder() -> SubstanceSpecificationNameBuilder {
        SubstanceSpecificationNameBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn name(&self) -> &FhirString {
        &self.name
    }

    pub fn type_(&self) -> Option<&CodeableConcept> {
        self.type_.as_ref()
    }

    pub fn status(&self) -> Option<&CodeableConcept> {
        self.status.as_ref()
    }

    pub fn preferred(&self) -> Option<bool> {
        self.preferred
    }

    pub fn language(&self) -> &[CodeableConcept] {
        &self.language
    }

    pub fn domain(&self) -> &[CodeableConcept] {
        &self.domain
    }

    pub fn jurisdiction(&self) -> &[CodeableConcept] {
        &self.jurisdiction
    }

    pub fn synonym(&self) -> &[SubstanceSpecificationName] {
        &self.synonym
    }

    pub fn translation(&self) -> &[SubstanceSpecificationName] {
        &self.translation
    }

    pub fn official(&self) -> &[SubstanceSpecificationNameOfficial] {
        &self.official
    }

    pub fn source(&self) -> &[Reference] {
        &self.source
    }

    pub fn has_children(&self) -> bool {
        // required elements are always present
        true
    }

    pub fn to_builder(&self) -> SubstanceSpecificationNameBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> SubstanceSpecificationNameBuilder {
        SubstanceSpecificationNameBuilder {
            base: self.base,
            name: Some(self.name),
            type_: self.type_,
            status: self.status,
            preferred: self.preferred,
            language: self.language,
            domain: self.domain,
            jurisdiction: self.jurisdiction,
            synonym: self.synonym,
            translation: self.translation,
            official: self.official,
            source: self.source,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .one("name", Node::String(&self.name))
            .opt("type", self.type_.as_ref(), Node::CodeableConcept)
            .opt("status", self.status.as_ref(), Node::CodeableConcept)
            .opt("preferred", self.preferred.as_ref(), Node::Boolean)
            .many("language", &self.language, Node::CodeableConcept)
            .many("domain", &self.domain, Node::CodeableConcept)
            .many("jurisdiction", &self.jurisdiction, Node::CodeableConcept)
            .many("synonym", &self.synonym, Node::SubstanceSpecificationName)
            .many("translation", &self.translation, Node::SubstanceSpecificationName)
            .many("official", &self.official, Node::SubstanceSpecificationNameOfficial)
            .many("source", &self.source, Node::Reference);
    }
}

/// Builder for [`SubstanceSpecificationNameOfficial`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SubstanceSpecificationNameOfficialBuilder {
    pub base: BackboneElement,

    /// Which authority uses this official name
    pub authority: Option<CodeableConcept>,

    /// The status of the official name
    pub status: Option<CodeableConcept>,

    /// Date of official name change
    pub date: Option<DateTime>,
}

impl SubstanceSpecificationNameOfficialBuilder {
    pub fn build(self) -> Result<SubstanceSpecificationNameOfficial> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<SubstanceSpecificationNameOfficial> {
        support::log_rejection("SubstanceSpecification.name.official", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<SubstanceSpecificationNameOfficial> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        support::validate_opt(self.authority.as_ref(), config)?;
        support::validate_opt(self.status.as_ref(), config)?;

        let node = SubstanceSpecificationNameOfficial {
            hash,
            base: self.base,
            authority: self.authority,
            status: self.status,
            date: self.date,
        };
        support::require_value_or_children(
            node.has_children(),
            "SubstanceSpecification.name.official",
        )?;
        Ok(node)
    }
}

/// Details of the official nature of this name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstanceSpecificationNameOfficial {
    hash: u64,
    base: BackboneElement,
    authority: Option<CodeableConcept>,
    status: Option<CodeableConcept>,
    date: Option<DateTime>,
}

impl SubstanceSpecificationNameOfficial {
    pub fn builder() -> SubstanceSpecificationNameOfficialBuilder {
        SubstanceSpecificationNameOfficialBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn authority(&self) -> Option<&CodeableConcept> {
        self.authority.as_ref()
    }

    pub fn status(&self) -> Option<&CodeableConcept> {
        self.status.as_ref()
    }

    pub fn date(&self) -> Option<&DateTime> {
        self.date.as_ref()
    }

    pub fn has_children(&self) -> bool {
        self.base.has_extensions()
            || self.authority.is_some()
            || self.status.is_some()
            || self.date.is_some()
    }

    pub fn to_builder(&self) -> SubstanceSpecificationNameOfficialBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> SubstanceSpecificationNameOfficialBuilder {
        SubstanceSpecificationNameOfficialBuilder {
            base: self.base,
            authority: self.authority,
            status: self.status,
            date: self.date,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .opt("authority", self.authority.as_ref(), Node::CodeableConcept)
            .opt("status", self.status.as_ref(), Node::CodeableConcept)
            .opt("date", self.date.as_ref(), Node::DateTime);
    }
}

/// Builder for [`SubstanceSpecificationRelationship`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SubstanceSpecificationRelationshipBuilder {
    pub base: BackboneElement,

    /// A pointer to another substance, as a resource or just a representational code
    pub substance: Option<ChoiceValue>,

    /// For example "salt to parent", "active moiety", "starting material"
    pub relationship: Option<CodeableConcept>,

    /// For example where an enzyme strongly bonds with a particular substance, this is a
    /// defining relationship for that enzyme, out of several possible substance relationships
    pub is_defining: Option<bool>,

    /// A numeric factor for the relationship, for instance to express that the salt of a
    /// substance has some percentage of the active substance in relation to some other
    pub amount: Option<ChoiceValue>,

    /// For use when the numeric
    pub amount_ratio_low_limit: Option<Ratio>,

    /// An operator for the amount, for example "average", "approximately", "less than"
    pub amount_type: Option<CodeableConcept>,

    /// Supporting literature
    pub source: Vec<Reference>,
}

impl SubstanceSpecificationRelationshipBuilder {
    pub fn build(self) -> Result<SubstanceSpecificationRelationship> {
        self.build_with(&ModelConfig::default())
    }

    pub fn build_with(self, config: &ModelConfig) -> Result<SubstanceSpecificationRelationship> {
        support::log_rejection("SubstanceSpecification.relationship", self.freeze(config))
    }

    fn freeze(self, config: &ModelConfig) -> Result<SubstanceSpecificationRelationship> {
        let hash = support::fingerprint(&self);
        self.base.validate(config)?;
        support::check_choice(
            self.substance.as_ref(),
            "substance",
            SubstanceSpecificationRelationship::SUBSTANCE_TYPES,
        )?;
        support::check_choice(
            self.amount.as_ref(),
            "amount",
            SubstanceSpecificationRelationship::AMOUNT_TYPES,
        )?;
        support::validate_opt(self.substance.as_ref(), config)?;
        support::check_choice_reference(
            self.substance.as_ref(),
            "substance",
            SubstanceSpecificationRelationship::SUBSTANCE_TARGETS,
            config,
        )?;
        support::validate_opt(self.relationship.as_ref(), config)?;
        support::validate_opt(self.amount.as_ref(), config)?;
        support::validate_opt(self.amount_ratio_low_limit.as_ref(), config)?;
        support::validate_opt(self.amount_type.as_ref(), config)?;
        support::validate_all(&self.source, config)?;
        support::check_references(
            &self.source,
            "source",
            SubstanceSpecificationRelationship::SOURCE_TARGETS,
            config,
        )?;

        let node = SubstanceSpecificationRelationship {
            hash,
            base: self.base,
            substance: self.substance,
            relationship: self.relationship,
            is_defining: self.is_defining,
            amount: self.amount,
            amount_ratio_low_limit: self.amount_ratio_low_limit,
            amount_type: self.amount_type,
            source: self.source,
        };
        support::require_value_or_children(
            node.has_children(),
            "SubstanceSpecification.relationship",
        )?;
        Ok(node)
    }
}

/// A link between this substance and another, with details of the relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstanceSpecificationRelationship {
    hash: u64,
    base: BackboneElement,
    substance: Option<ChoiceValue>,
    relationship: Option<CodeableConcept>,
    is_defining: Option<bool>,
    amount: Option<ChoiceValue>,
    amount_ratio_low_limit: Option<Ratio>,
    amount_type: Option<CodeableConcept>,
    source: Vec<Reference>,
}

impl SubstanceSpecificationRelationship {
    pub const SUBSTANCE_TYPES: &'static [ValueKind] = &[
        ValueKind::Reference,
        ValueKind::CodeableConcept,
    ];
    pub const SUBSTANCE_TARGETS: &'static [&'static str] = &["SubstanceSpecification"];
    pub const AMOUNT_TYPES: &'static [ValueKind] = &[
        ValueKind::Quantity,
        ValueKind::Range,
        ValueKind::Ratio,
        ValueKind::String,
    ];
    pub const SOURCE_TARGETS: &'static [&'static str] = &["DocumentReference"];

    pub fn builder() -> SubstanceSpecificationRelationshipBuilder {
        SubstanceSpecificationRelationshipBuilder::default()
    }

    pub fn base(&self) -> &BackboneElement {
        &self.base
    }

    pub fn substance(&self) -> Option<&ChoiceValue> {
        self.substance.as_ref()
    }

    pub fn relationship(&self) -> Option<&CodeableConcept> {
        self.relationship.as_ref()
    }

    pub fn is_defining(&self) -> Option<bool> {
        self.is_defining
    }

    pub fn amount(&self) -> Option<&ChoiceValue> {
        self.amount.as_ref()
    }

    pub fn amount_ratio_low_limit(&self) -> Option<&Ratio> {
        self.amount_ratio_low_limit.as_ref()
    }

    pub fn amount_type(&self) -> Option<&CodeableConcept> {
        self.amount_type.as_ref()
    }

    pub fn source(&self) -> &[Reference] {
        &self.source
    }

    pub fn has_children(&self) -> bool {
        self.base.has_extensions()
            || self.substance.is_some()
            || self.relationship.is_some()
            || self.is_defining.is_some()
            || self.amount.is_some()
            || self.amount_ratio_low_limit.is_some()
            || self.amount_type.is_some()
            || !self.source.is_empty()
    }

    pub fn to_builder(&self) -> SubstanceSpecificationRelationshipBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> SubstanceSpecificationRelationshipBuilder {
        SubstanceSpecificationRelationshipBuilder {
            base: self.base,
            substance: self.substance,
            relationship: self.relationship,
            is_defining: self.is_defining,
            amount: self.amount,
            amount_ratio_low_limit: self.amount_ratio_low_limit,
            amount_type: self.amount_type,
            source: self.source,
        }
    }

    pub(crate) fn push_children<'a>(&'a self, out: &mut Children<'a>) {
        out.backbone(&self.base)
            .choice("substance", self.substance.as_ref())
            .opt("relationship", self.relationship.as_ref(), Node::CodeableConcept)
            .opt("isDefining", self.is_defining.as_ref(), Node::Boolean)
            .choice("amount", self.amount.as_ref())
            .opt("amountRatioLowLimit", self.amount_ratio_low_limit.as_ref(), Node::Ratio)
            .opt("amountType", self.amount_type.as_ref(), Node::CodeableConcept)
            .many("source", &self.source, Node::Reference);
    }
}

impl_cached_hash!(
    SubstanceSpecification,
    SubstanceSpecificationMoiety,
    SubstanceSpecificationProperty,
    SubstanceSpecificationStructure,
    SubstanceSpecificationStructureIsotope,
    SubstanceSpecificationStructureIsotopeMolecularWeight,
    SubstanceSpecificationStructureRepresentation,
    SubstanceSpecificationCode,
    SubstanceSpecificationName,
    SubstanceSpecificationNameOfficial,
    SubstanceSpecificationRelationship,
);

impl_has_extensions!(
    SubstanceSpecification,
    SubstanceSpecificationMoiety,
    SubstanceSpecificationProperty,
    SubstanceSpecificationStructure,
    SubstanceSpecificationStructureIsotope,
    SubstanceSpecificationStructureIsotopeMolecularWeight,
    SubstanceSpecificationStructureRepresentation,
    SubstanceSpecificationCode,
    SubstanceSpecificationName,
    SubstanceSpecificationNameOfficial,
    SubstanceSpecificationRelationship,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rust_decimal::Decimal;

    fn text(value: &str) -> CodeableConcept {
        CodeableConcept::from_text(FhirString::new(value).unwrap())
    }

    fn name(value: &str) -> SubstanceSpecificationNameBuilder {
        SubstanceSpecificationNameBuilder {
            name: Some(FhirString::new(value).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_resource_builds() {
        let substance = SubstanceSpecification::builder().build().unwrap();
        assert!(!substance.has_children());
        assert!(substance.name().is_empty());
    }

    #[test]
    fn test_empty_backbone_is_rejected() {
        let err = SubstanceSpecificationMoiety::builder().build().unwrap_err();
        assert!(matches!(
            err,
            Error::EmptyElement { element: "SubstanceSpecification.moiety" }
        ));

        let err = SubstanceSpecificationNameOfficial::builder()
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::EmptyElement { .. }));
    }

    #[test]
    fn test_backbone_with_only_extension_is_not_empty() {
        let mut builder = SubstanceSpecificationStructureIsotope::builder();
        builder.base.modifier_extension.push(crate::common::datatypes::Extension::with_value(
            crate::common::primitives::Uri::new("http://example.org/flag").unwrap(),
            true,
        ));
        let isotope = builder.build().unwrap();
        assert!(isotope.has_children());
    }

    #[test]
    fn test_name_requires_name() {
        let err = SubstanceSpecificationNameBuilder {
            preferred: Some(true),
            ..Default::default()
        }
        .build()
        .unwrap_err();
        assert!(matches!(err, Error::MissingElement { element: "name" }));
    }

    #[test]
    fn test_recursive_names() {
        let synonym = name("Paracetamol").build().unwrap();
        let translation = name("Paracétamol").build().unwrap();
        let primary = SubstanceSpecificationNameBuilder {
            preferred: Some(true),
            synonym: vec![synonym],
            translation: vec![translation],
            ..name("Acetaminophen")
        }
        .build()
        .unwrap();
        assert_eq!(primary.preferred(), Some(true));
        assert_eq!(primary.synonym()[0].name().as_str(), "Paracetamol");
        assert_eq!(primary.translation()[0].name().as_str(), "Paracétamol");
    }

    #[test]
    fn test_source_reference_targets() {
        let ok = SubstanceSpecificationCodeBuilder {
            code: Some(text("approved")),
            source: vec![Reference::literal("DocumentReference/doc1").unwrap()],
            ..Default::default()
        }
        .build();
        assert!(ok.is_ok());

        let err = SubstanceSpecificationCodeBuilder {
            code: Some(text("approved")),
            source: vec![Reference::literal("Patient/p1").unwrap()],
            ..Default::default()
        }
        .build()
        .unwrap_err();
        assert!(matches!(
            err,
            Error::DisallowedReferenceTarget { element: "source", .. }
        ));
    }

    #[test]
    fn test_single_reference_targets() {
        let substance = SubstanceSpecificationBuilder {
            polymer: Some(Reference::literal("SubstancePolymer/p").unwrap()),
            ..Default::default()
        }
        .build();
        assert!(substance.is_ok());

        let err = SubstanceSpecificationBuilder {
            protein: Some(Reference::literal("SubstancePolymer/p").unwrap()),
            ..Default::default()
        }
        .build()
        .unwrap_err();
        assert_eq!(err.element(), Some("protein"));
    }

    #[test]
    fn test_property_defining_substance() {
        let property = SubstanceSpecificationPropertyBuilder {
            defining_substance: Some(Reference::literal("Substance/water").unwrap().into()),
            amount: Some(FhirString::new("soluble").unwrap().into()),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(
            property.defining_substance().map(ChoiceValue::kind),
            Some(ValueKind::Reference)
        );

        let err = SubstanceSpecificationPropertyBuilder {
            defining_substance: Some(FhirString::new("water").unwrap().into()),
            ..Default::default()
        }
        .build()
        .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidChoiceType { element: "definingSubstance", found: "String", .. }
        ));

        let err = SubstanceSpecificationPropertyBuilder {
            defining_substance: Some(Reference::literal("Medication/m").unwrap().into()),
            ..Default::default()
        }
        .build()
        .unwrap_err();
        assert!(matches!(err, Error::DisallowedReferenceTarget { .. }));
    }

    #[test]
    fn test_relationship_amount_types() {
        let range = crate::common::datatypes::Range {
            low: Some(Quantity::ucum(Decimal::new(5, 1), "mg").unwrap()),
            high: Some(Quantity::ucum(Decimal::new(15, 1), "mg").unwrap()),
            ..Default::default()
        };
        let relationship = SubstanceSpecificationRelationshipBuilder {
            substance: Some(text("parent").into()),
            amount: Some(range.into()),
            is_defining: Some(false),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(relationship.is_defining(), Some(false));

        let err = SubstanceSpecificationRelationshipBuilder {
            amount: Some(ChoiceValue::Boolean(true)),
            ..Default::default()
        }
        .build()
        .unwrap_err();
        assert!(matches!(err, Error::InvalidChoiceType { element: "amount", .. }));
    }

    #[test]
    fn test_empty_data_type_is_rejected() {
        let err = SubstanceSpecificationStructureIsotopeMolecularWeightBuilder {
            amount: Some(Quantity::default()),
            ..Default::default()
        }
        .build()
        .unwrap_err();
        assert!(matches!(err, Error::EmptyElement { element: "Quantity" }));
    }

    #[test]
    fn test_molecular_weight_is_shared() {
        let weight = SubstanceSpecificationStructureIsotopeMolecularWeightBuilder {
            type_: Some(text("exact")),
            amount: Some(Quantity::ucum(Decimal::new(15116, 2), "g/mol").unwrap()),
            ..Default::default()
        }
        .build()
        .unwrap();

        let structure = SubstanceSpecificationStructureBuilder {
            molecular_formula: Some(FhirString::new("C8H9NO2").unwrap()),
            molecular_weight: Some(weight.clone()),
            ..Default::default()
        }
        .build()
        .unwrap();

        let substance = SubstanceSpecificationBuilder {
            structure: Some(structure),
            molecular_weight: vec![weight.clone()],
            ..Default::default()
        }
        .build()
        .unwrap();

        assert_eq!(substance.molecular_weight(), &[weight.clone()]);
        assert_eq!(
            substance.structure().and_then(|s| s.molecular_weight()),
            Some(&weight)
        );
    }

    #[test]
    fn test_to_builder_round_trip() {
        let substance = SubstanceSpecificationBuilder {
            description: Some(FhirString::new("analgesic").unwrap()),
            name: vec![name("Acetaminophen").build().unwrap()],
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(substance.to_builder().build().unwrap(), substance);

        let mut builder = substance.to_builder();
        builder.name.clear();
        assert_ne!(builder.build().unwrap(), substance);
    }
}
