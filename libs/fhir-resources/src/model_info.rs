//! Reflective model metadata
//!
//! Declared cardinality, summary flags, choice types, reference targets,
//! terminology bindings and invariants for every resource and backbone element.
//! Rule engines and serializers read this instead of re-deriving it from the
//! Rust types. The choice and target tables are the same constants the builders
//! check against.

use crate::common::datatypes::ValueKind;
use crate::r4::implementation_guide::*;
use crate::r4::substance_specification::*;
use crate::visitor::NodeKind;
use std::fmt;

/// Upper bound of an element's cardinality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Max {
    One,
    Unbounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingStrength {
    Required,
    Extensible,
    Preferred,
    Example,
}

/// Terminology binding of a coded element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingInfo {
    pub name: &'static str,
    pub strength: BindingStrength,
    pub value_set: &'static str,
}

/// Metadata for one element of a type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementInfo {
    /// JSON element name; choice elements carry no type suffix
    pub name: &'static str,
    pub min: u32,
    pub max: Max,
    /// FHIR type code; empty for choice elements
    pub type_code: &'static str,
    pub summary: bool,
    pub choice: &'static [ValueKind],
    /// Allowed reference targets; [`ANY_RESOURCE`] when unrestricted
    pub targets: &'static [&'static str],
    pub binding: Option<BindingInfo>,
}

/// Reference target list of `Reference(Any)` elements
pub const ANY_RESOURCE: &[&str] = &["Resource"];

impl ElementInfo {
    const fn new(name: &'static str, min: u32, max: Max, type_code: &'static str) -> Self {
        Self {
            name,
            min,
            max,
            type_code,
            summary: false,
            choice: &[],
            targets: &[],
            binding: None,
        }
    }

    const fn summary(mut self) -> Self {
        self.summary = true;
        self
    }

    const fn choice(mut self, kinds: &'static [ValueKind]) -> Self {
        self.choice = kinds;
        self
    }

    const fn targets(mut self, targets: &'static [&'static str]) -> Self {
        self.targets = targets;
        self
    }

    const fn binding(
        mut self,
        name: &'static str,
        strength: BindingStrength,
        value_set: &'static str,
    ) -> Self {
        self.binding = Some(BindingInfo {
            name,
            strength,
            value_set,
        });
        self
    }

    pub fn is_required(&self) -> bool {
        self.min > 0
    }

    pub fn is_repeating(&self) -> bool {
        self.max == Max::Unbounded
    }

    pub fn is_choice(&self) -> bool {
        !self.choice.is_empty()
    }

    /// JSON name of a choice element holding a value of `kind` (`exampleBoolean`)
    pub fn choice_name(&self, kind: ValueKind) -> String {
        format!("{}{}", self.name, kind.type_name())
    }
}

impl fmt::Display for ElementInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Max::One => write!(f, "{} {}..1", self.name, self.min),
            Max::Unbounded => write!(f, "{} {}..*", self.name, self.min),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintLevel {
    Rule,
    Warning,
}

/// A declared invariant (FHIRPath expression) of a type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintInfo {
    pub id: &'static str,
    pub level: ConstraintLevel,
    /// Element the expression is evaluated on; `(base)` for the type itself
    pub location: &'static str,
    pub description: &'static str,
    pub expression: &'static str,
    pub source: &'static str,
}

/// The structure a type is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseKind {
    DomainResource,
    BackboneElement,
}

impl BaseKind {
    /// Elements inherited from the base structure, in declaration order
    pub fn elements(&self) -> &'static [ElementInfo] {
        match self {
            BaseKind::DomainResource => DOMAIN_RESOURCE_ELEMENTS,
            BaseKind::BackboneElement => BACKBONE_ELEMENT_ELEMENTS,
        }
    }
}

static DOMAIN_RESOURCE_ELEMENTS: &[ElementInfo] = &[
    ElementInfo::new("id", 0, Max::One, "id").summary(),
    ElementInfo::new("meta", 0, Max::One, "Meta").summary(),
    ElementInfo::new("implicitRules", 0, Max::One, "uri").summary(),
    ElementInfo::new("language", 0, Max::One, "code"),
    ElementInfo::new("text", 0, Max::One, "Narrative"),
    ElementInfo::new("contained", 0, Max::Unbounded, "Resource"),
    ElementInfo::new("extension", 0, Max::Unbounded, "Extension"),
    ElementInfo::new("modifierExtension", 0, Max::Unbounded, "Extension").summary(),
];

static BACKBONE_ELEMENT_ELEMENTS: &[ElementInfo] = &[
    ElementInfo::new("id", 0, Max::One, "string"),
    ElementInfo::new("extension", 0, Max::Unbounded, "Extension"),
    ElementInfo::new("modifierExtension", 0, Max::Unbounded, "Extension").summary(),
];

/// Metadata for a resource or backbone element type
#[derive(Debug)]
pub struct TypeInfo {
    pub kind: NodeKind,
    /// Element path (`ImplementationGuide.definition.page`)
    pub path: &'static str,
    pub base: BaseKind,
    /// Declared elements, excluding the inherited base elements
    pub elements: &'static [ElementInfo],
    pub constraints: &'static [ConstraintInfo],
}

impl TypeInfo {
    /// Look up a declared or inherited element by JSON name.
    pub fn element(&self, name: &str) -> Option<&'static ElementInfo> {
        self.elements
            .iter()
            .chain(self.base.elements())
            .find(|element| element.name == name)
    }

    /// Base elements followed by declared elements
    pub fn all_elements(&self) -> impl Iterator<Item = &'static ElementInfo> {
        self.base.elements().iter().chain(self.elements.iter())
    }

    pub fn required_elements(&self) -> impl Iterator<Item = &'static ElementInfo> {
        self.elements.iter().filter(|element| element.is_required())
    }

    pub fn constraint(&self, id: &str) -> Option<&'static ConstraintInfo> {
        self.constraints.iter().find(|constraint| constraint.id == id)
    }
}

const IMPLEMENTATION_GUIDE_SOURCE: &str = "http://hl7.org/fhir/StructureDefinition/ImplementationGuide";

pub const IG_0: ConstraintInfo = ConstraintInfo {
    id: "ig-0",
    level: ConstraintLevel::Warning,
    location: "(base)",
    description: "Name should be usable as an identifier for the module by machine processing applications such as code generation",
    expression: "name.matches('[A-Z]([A-Za-z0-9_]){0,254}')",
    source: IMPLEMENTATION_GUIDE_SOURCE,
};

pub const IG_1: ConstraintInfo = ConstraintInfo {
    id: "ig-1",
    level: ConstraintLevel::Rule,
    location: "ImplementationGuide.definition",
    description: "If a resource has a groupingId, it must refer to a grouping defined in the Implementation Guide",
    expression: "resource.groupingId.all(%context.grouping.id contains $this)",
    source: IMPLEMENTATION_GUIDE_SOURCE,
};

pub const IG_2: ConstraintInfo = ConstraintInfo {
    id: "ig-2",
    level: ConstraintLevel::Rule,
    location: "(base)",
    description: "If a resource has a fhirVersion, it must be one of the versions defined for the Implementation Guide",
    expression: "definition.resource.fhirVersion.all(%context.fhirVersion contains $this)",
    source: IMPLEMENTATION_GUIDE_SOURCE,
};

pub const IMPLEMENTATION_GUIDE_3: ConstraintInfo = ConstraintInfo {
    id: "implementationGuide-3",
    level: ConstraintLevel::Warning,
    location: "(base)",
    description: "SHALL, if possible, contain a code from value set http://hl7.org/fhir/ValueSet/jurisdiction",
    expression: "jurisdiction.exists() implies (jurisdiction.all(memberOf('http://hl7.org/fhir/ValueSet/jurisdiction', 'extensible')))",
    source: IMPLEMENTATION_GUIDE_SOURCE,
};

static IMPLEMENTATION_GUIDE_CONSTRAINTS: &[ConstraintInfo] =
    &[IG_0, IG_1, IG_2, IMPLEMENTATION_GUIDE_3];

static IMPLEMENTATION_GUIDE: TypeInfo = TypeInfo {
    kind: NodeKind::ImplementationGuide,
    path: "ImplementationGuide",
    base: BaseKind::DomainResource,
    elements: &[
        ElementInfo::new("url", 1, Max::One, "uri").summary(),
        ElementInfo::new("version", 0, Max::One, "string").summary(),
        ElementInfo::new("name", 1, Max::One, "string").summary(),
        ElementInfo::new("title", 0, Max::One, "string").summary(),
        ElementInfo::new("status", 1, Max::One, "code")
            .summary()
            .binding(
                "PublicationStatus",
                BindingStrength::Required,
                "http://hl7.org/fhir/ValueSet/publication-status",
            ),
        ElementInfo::new("experimental", 0, Max::One, "boolean").summary(),
        ElementInfo::new("date", 0, Max::One, "dateTime").summary(),
        ElementInfo::new("publisher", 0, Max::One, "string").summary(),
        ElementInfo::new("contact", 0, Max::Unbounded, "ContactDetail").summary(),
        ElementInfo::new("description", 0, Max::One, "markdown"),
        ElementInfo::new("useContext", 0, Max::Unbounded, "UsageContext").summary(),
        ElementInfo::new("jurisdiction", 0, Max::Unbounded, "CodeableConcept")
            .summary()
            .binding(
                "Jurisdiction",
                BindingStrength::Extensible,
                "http://hl7.org/fhir/ValueSet/jurisdiction",
            ),
        ElementInfo::new("copyright", 0, Max::One, "markdown"),
        ElementInfo::new("packageId", 1, Max::One, "id").summary(),
        ElementInfo::new("license", 0, Max::One, "code")
            .summary()
            .binding(
                "SPDXLicense",
                BindingStrength::Required,
                "http://hl7.org/fhir/ValueSet/spdx-license",
            ),
        ElementInfo::new("fhirVersion", 1, Max::Unbounded, "code")
            .summary()
            .binding(
                "FHIRVersion",
                BindingStrength::Required,
                "http://hl7.org/fhir/ValueSet/FHIR-version",
            ),
        ElementInfo::new("dependsOn", 0, Max::Unbounded, "BackboneElement").summary(),
        ElementInfo::new("global", 0, Max::Unbounded, "BackboneElement").summary(),
        ElementInfo::new("definition", 0, Max::One, "BackboneElement"),
        ElementInfo::new("manifest", 0, Max::One, "BackboneElement"),
    ],
    constraints: IMPLEMENTATION_GUIDE_CONSTRAINTS,
};

static IMPLEMENTATION_GUIDE_DEPENDS_ON: TypeInfo = TypeInfo {
    kind: NodeKind::ImplementationGuideDependsOn,
    path: "ImplementationGuide.dependsOn",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("uri", 1, Max::One, "canonical").summary(),
        ElementInfo::new("packageId", 0, Max::One, "id").summary(),
        ElementInfo::new("version", 0, Max::One, "string").summary(),
    ],
    constraints: &[],
};

static IMPLEMENTATION_GUIDE_GLOBAL: TypeInfo = TypeInfo {
    kind: NodeKind::ImplementationGuideGlobal,
    path: "ImplementationGuide.global",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("type", 1, Max::One, "code")
            .summary()
            .binding(
                "ResourceType",
                BindingStrength::Required,
                "http://hl7.org/fhir/ValueSet/resource-types",
            ),
        ElementInfo::new("profile", 1, Max::One, "canonical").summary(),
    ],
    constraints: &[],
};

static IMPLEMENTATION_GUIDE_DEFINITION: TypeInfo = TypeInfo {
    kind: NodeKind::ImplementationGuideDefinition,
    path: "ImplementationGuide.definition",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("grouping", 0, Max::Unbounded, "BackboneElement"),
        ElementInfo::new("resource", 1, Max::Unbounded, "BackboneElement"),
        ElementInfo::new("page", 0, Max::One, "BackboneElement"),
        ElementInfo::new("parameter", 0, Max::Unbounded, "BackboneElement"),
        ElementInfo::new("template", 0, Max::Unbounded, "BackboneElement"),
    ],
    constraints: &[],
};

static IMPLEMENTATION_GUIDE_DEFINITION_GROUPING: TypeInfo = TypeInfo {
    kind: NodeKind::ImplementationGuideDefinitionGrouping,
    path: "ImplementationGuide.definition.grouping",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("name", 1, Max::One, "string"),
        ElementInfo::new("description", 0, Max::One, "string"),
    ],
    constraints: &[],
};

static IMPLEMENTATION_GUIDE_DEFINITION_RESOURCE: TypeInfo = TypeInfo {
    kind: NodeKind::ImplementationGuideDefinitionResource,
    path: "ImplementationGuide.definition.resource",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("reference", 1, Max::One, "Reference").targets(ANY_RESOURCE),
        ElementInfo::new("fhirVersion", 0, Max::Unbounded, "code")
            .binding(
                "FHIRVersion",
                BindingStrength::Required,
                "http://hl7.org/fhir/ValueSet/FHIR-version",
            ),
        ElementInfo::new("name", 0, Max::One, "string"),
        ElementInfo::new("description", 0, Max::One, "string"),
        ElementInfo::new("example", 0, Max::One, "")
            .choice(ImplementationGuideDefinitionResource::EXAMPLE_TYPES),
        ElementInfo::new("groupingId", 0, Max::One, "id"),
    ],
    constraints: &[],
};

static IMPLEMENTATION_GUIDE_DEFINITION_PAGE: TypeInfo = TypeInfo {
    kind: NodeKind::ImplementationGuideDefinitionPage,
    path: "ImplementationGuide.definition.page",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("name", 1, Max::One, "")
            .choice(ImplementationGuideDefinitionPage::NAME_TYPES)
            .targets(ImplementationGuideDefinitionPage::NAME_TARGETS),
        ElementInfo::new("title", 1, Max::One, "string"),
        ElementInfo::new("generation", 1, Max::One, "code")
            .binding(
                "GuidePageGeneration",
                BindingStrength::Required,
                "http://hl7.org/fhir/ValueSet/guide-page-generation",
            ),
        ElementInfo::new("page", 0, Max::Unbounded, "BackboneElement"),
    ],
    constraints: &[],
};

static IMPLEMENTATION_GUIDE_DEFINITION_PARAMETER: TypeInfo = TypeInfo {
    kind: NodeKind::ImplementationGuideDefinitionParameter,
    path: "ImplementationGuide.definition.parameter",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("code", 1, Max::One, "code")
            .binding(
                "GuideParameterCode",
                BindingStrength::Required,
                "http://hl7.org/fhir/ValueSet/guide-parameter-code",
            ),
        ElementInfo::new("value", 1, Max::One, "string"),
    ],
    constraints: &[],
};

static IMPLEMENTATION_GUIDE_DEFINITION_TEMPLATE: TypeInfo = TypeInfo {
    kind: NodeKind::ImplementationGuideDefinitionTemplate,
    path: "ImplementationGuide.definition.template",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("code", 1, Max::One, "code"),
        ElementInfo::new("source", 1, Max::One, "string"),
        ElementInfo::new("scope", 0, Max::One, "string"),
    ],
    constraints: &[],
};

static IMPLEMENTATION_GUIDE_MANIFEST: TypeInfo = TypeInfo {
    kind: NodeKind::ImplementationGuideManifest,
    path: "ImplementationGuide.manifest",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("rendering", 0, Max::One, "url").summary(),
        ElementInfo::new("resource", 1, Max::Unbounded, "BackboneElement").summary(),
        ElementInfo::new("page", 0, Max::Unbounded, "BackboneElement"),
        ElementInfo::new("image", 0, Max::Unbounded, "string"),
        ElementInfo::new("other", 0, Max::Unbounded, "string"),
    ],
    constraints: &[],
};

static IMPLEMENTATION_GUIDE_MANIFEST_RESOURCE: TypeInfo = TypeInfo {
    kind: NodeKind::ImplementationGuideManifestResource,
    path: "ImplementationGuide.manifest.resource",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("reference", 1, Max::One, "Reference").summary().targets(ANY_RESOURCE),
        ElementInfo::new("example", 0, Max::One, "")
            .choice(ImplementationGuideManifestResource::EXAMPLE_TYPES),
        ElementInfo::new("relativePath", 0, Max::One, "url"),
    ],
    constraints: &[],
};

static IMPLEMENTATION_GUIDE_MANIFEST_PAGE: TypeInfo = TypeInfo {
    kind: NodeKind::ImplementationGuideManifestPage,
    path: "ImplementationGuide.manifest.page",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("name", 1, Max::One, "string"),
        ElementInfo::new("title", 0, Max::One, "string"),
        ElementInfo::new("anchor", 0, Max::Unbounded, "string"),
    ],
    constraints: &[],
};

static SUBSTANCE_SPECIFICATION: TypeInfo = TypeInfo {
    kind: NodeKind::SubstanceSpecification,
    path: "SubstanceSpecification",
    base: BaseKind::DomainResource,
    elements: &[
        ElementInfo::new("identifier", 0, Max::One, "Identifier").summary(),
        ElementInfo::new("type", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("status", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("domain", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("description", 0, Max::One, "string").summary(),
        ElementInfo::new("source", 0, Max::Unbounded, "Reference")
            .summary()
            .targets(SubstanceSpecification::SOURCE_TARGETS),
        ElementInfo::new("comment", 0, Max::One, "string").summary(),
        ElementInfo::new("moiety", 0, Max::Unbounded, "BackboneElement").summary(),
        ElementInfo::new("property", 0, Max::Unbounded, "BackboneElement").summary(),
        ElementInfo::new("referenceInformation", 0, Max::One, "Reference")
            .summary()
            .targets(SubstanceSpecification::REFERENCE_INFORMATION_TARGETS),
        ElementInfo::new("structure", 0, Max::One, "BackboneElement").summary(),
        ElementInfo::new("code", 0, Max::Unbounded, "BackboneElement").summary(),
        ElementInfo::new("name", 0, Max::Unbounded, "BackboneElement").summary(),
        ElementInfo::new("molecularWeight", 0, Max::Unbounded, "BackboneElement").summary(),
        ElementInfo::new("relationship", 0, Max::Unbounded, "BackboneElement").summary(),
        ElementInfo::new("nucleicAcid", 0, Max::One, "Reference")
            .summary()
            .targets(SubstanceSpecification::NUCLEIC_ACID_TARGETS),
        ElementInfo::new("polymer", 0, Max::One, "Reference")
            .summary()
            .targets(SubstanceSpecification::POLYMER_TARGETS),
        ElementInfo::new("protein", 0, Max::One, "Reference")
            .summary()
            .targets(SubstanceSpecification::PROTEIN_TARGETS),
        ElementInfo::new("sourceMaterial", 0, Max::One, "Reference")
            .summary()
            .targets(SubstanceSpecification::SOURCE_MATERIAL_TARGETS),
    ],
    constraints: &[],
};

static SUBSTANCE_SPECIFICATION_MOIETY: TypeInfo = TypeInfo {
    kind: NodeKind::SubstanceSpecificationMoiety,
    path: "SubstanceSpecification.moiety",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("role", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("identifier", 0, Max::One, "Identifier").summary(),
        ElementInfo::new("name", 0, Max::One, "string").summary(),
        ElementInfo::new("stereochemistry", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("opticalActivity", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("molecularFormula", 0, Max::One, "string").summary(),
        ElementInfo::new("amount", 0, Max::One, "")
            .summary()
            .choice(SubstanceSpecificationMoiety::AMOUNT_TYPES),
    ],
    constraints: &[],
};

static SUBSTANCE_SPECIFICATION_PROPERTY: TypeInfo = TypeInfo {
    kind: NodeKind::SubstanceSpecificationProperty,
    path: "SubstanceSpecification.property",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("category", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("code", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("parameters", 0, Max::One, "string").summary(),
        ElementInfo::new("definingSubstance", 0, Max::One, "")
            .summary()
            .choice(SubstanceSpecificationProperty::DEFINING_SUBSTANCE_TYPES)
            .targets(SubstanceSpecificationProperty::DEFINING_SUBSTANCE_TARGETS),
        ElementInfo::new("amount", 0, Max::One, "")
            .summary()
            .choice(SubstanceSpecificationProperty::AMOUNT_TYPES),
    ],
    constraints: &[],
};

static SUBSTANCE_SPECIFICATION_STRUCTURE: TypeInfo = TypeInfo {
    kind: NodeKind::SubstanceSpecificationStructure,
    path: "SubstanceSpecification.structure",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("stereochemistry", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("opticalActivity", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("molecularFormula", 0, Max::One, "string").summary(),
        ElementInfo::new("molecularFormulaByMoiety", 0, Max::One, "string").summary(),
        ElementInfo::new("isotope", 0, Max::Unbounded, "BackboneElement").summary(),
        ElementInfo::new("molecularWeight", 0, Max::One, "BackboneElement").summary(),
        ElementInfo::new("source", 0, Max::Unbounded, "Reference")
            .summary()
            .targets(SubstanceSpecificationStructure::SOURCE_TARGETS),
        ElementInfo::new("representation", 0, Max::Unbounded, "BackboneElement").summary(),
    ],
    constraints: &[],
};

static SUBSTANCE_SPECIFICATION_STRUCTURE_ISOTOPE: TypeInfo = TypeInfo {
    kind: NodeKind::SubstanceSpecificationStructureIsotope,
    path: "SubstanceSpecification.structure.isotope",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("identifier", 0, Max::One, "Identifier").summary(),
        ElementInfo::new("name", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("substitution", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("halfLife", 0, Max::One, "Quantity").summary(),
        ElementInfo::new("molecularWeight", 0, Max::One, "BackboneElement").summary(),
    ],
    constraints: &[],
};

static SUBSTANCE_SPECIFICATION_STRUCTURE_ISOTOPE_MOLECULAR_WEIGHT: TypeInfo = TypeInfo {
    kind: NodeKind::SubstanceSpecificationStructureIsotopeMolecularWeight,
    path: "SubstanceSpecification.structure.isotope.molecularWeight",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("method", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("type", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("amount", 0, Max::One, "Quantity").summary(),
    ],
    constraints: &[],
};

static SUBSTANCE_SPECIFICATION_STRUCTURE_REPRESENTATION: TypeInfo = TypeInfo {
    kind: NodeKind::SubstanceSpecificationStructureRepresentation,
    path: "SubstanceSpecification.structure.representation",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("type", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("representation", 0, Max::One, "string").summary(),
        ElementInfo::new("attachment", 0, Max::One, "Attachment").summary(),
    ],
    constraints: &[],
};

static SUBSTANCE_SPECIFICATION_CODE: TypeInfo = TypeInfo {
    kind: NodeKind::SubstanceSpecificationCode,
    path: "SubstanceSpecification.code",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("code", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("status", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("statusDate", 0, Max::One, "dateTime").summary(),
        ElementInfo::new("comment", 0, Max::One, "string").summary(),
        ElementInfo::new("source", 0, Max::Unbounded, "Reference")
            .summary()
            .targets(SubstanceSpecificationCode::SOURCE_TARGETS),
    ],
    constraints: &[],
};

static SUBSTANCE_SPECIFICATION_NAME: TypeInfo = TypeInfo {
    kind: NodeKind::SubstanceSpecificationName,
    path: "SubstanceSpecification.name",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("name", 1, Max::One, "string").summary(),
        ElementInfo::new("type", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("status", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("preferred", 0, Max::One, "boolean").summary(),
        ElementInfo::new("language", 0, Max::Unbounded, "CodeableConcept").summary(),
        ElementInfo::new("domain", 0, Max::Unbounded, "CodeableConcept").summary(),
        ElementInfo::new("jurisdiction", 0, Max::Unbounded, "CodeableConcept").summary(),
        ElementInfo::new("synonym", 0, Max::Unbounded, "BackboneElement").summary(),
        ElementInfo::new("translation", 0, Max::Unbounded, "BackboneElement").summary(),
        ElementInfo::new("official", 0, Max::Unbounded, "BackboneElement").summary(),
        ElementInfo::new("source", 0, Max::Unbounded, "Reference")
            .summary()
            .targets(SubstanceSpecificationName::SOURCE_TARGETS),
    ],
    constraints: &[],
};

static SUBSTANCE_SPECIFICATION_NAME_OFFICIAL: TypeInfo = TypeInfo {
    kind: NodeKind::SubstanceSpecificationNameOfficial,
    path: "SubstanceSpecification.name.official",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("authority", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("status", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("date", 0, Max::One, "dateTime").summary(),
    ],
    constraints: &[],
};

static SUBSTANCE_SPECIFICATION_RELATIONSHIP: TypeInfo = TypeInfo {
    kind: NodeKind::SubstanceSpecificationRelationship,
    path: "SubstanceSpecification.relationship",
    base: BaseKind::BackboneElement,
    elements: &[
        ElementInfo::new("substance", 0, Max::One, "")
            .summary()
            .choice(SubstanceSpecificationRelationship::SUBSTANCE_TYPES)
            .targets(SubstanceSpecificationRelationship::SUBSTANCE_TARGETS),
        ElementInfo::new("relationship", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("isDefining", 0, Max::One, "boolean").summary(),
        ElementInfo::new("amount", 0, Max::One, "")
            .summary()
            .choice(SubstanceSpecificationRelationship::AMOUNT_TYPES),
        ElementInfo::new("amountRatioLowLimit", 0, Max::One, "Ratio").summary(),
        ElementInfo::new("amountType", 0, Max::One, "CodeableConcept").summary(),
        ElementInfo::new("source", 0, Max::Unbounded, "Reference")
            .summary()
            .targets(SubstanceSpecificationRelationship::SOURCE_TARGETS),
    ],
    constraints: &[],
};

/// Every resource and backbone element type with metadata
pub static TYPES: [&TypeInfo; 23] = [
    &IMPLEMENTATION_GUIDE,
    &IMPLEMENTATION_GUIDE_DEPENDS_ON,
    &IMPLEMENTATION_GUIDE_GLOBAL,
    &IMPLEMENTATION_GUIDE_DEFINITION,
    &IMPLEMENTATION_GUIDE_DEFINITION_GROUPING,
    &IMPLEMENTATION_GUIDE_DEFINITION_RESOURCE,
    &IMPLEMENTATION_GUIDE_DEFINITION_PAGE,
    &IMPLEMENTATION_GUIDE_DEFINITION_PARAMETER,
    &IMPLEMENTATION_GUIDE_DEFINITION_TEMPLATE,
    &IMPLEMENTATION_GUIDE_MANIFEST,
    &IMPLEMENTATION_GUIDE_MANIFEST_RESOURCE,
    &IMPLEMENTATION_GUIDE_MANIFEST_PAGE,
    &SUBSTANCE_SPECIFICATION,
    &SUBSTANCE_SPECIFICATION_MOIETY,
    &SUBSTANCE_SPECIFICATION_PROPERTY,
    &SUBSTANCE_SPECIFICATION_STRUCTURE,
    &SUBSTANCE_SPECIFICATION_STRUCTURE_ISOTOPE,
    &SUBSTANCE_SPECIFICATION_STRUCTURE_ISOTOPE_MOLECULAR_WEIGHT,
    &SUBSTANCE_SPECIFICATION_STRUCTURE_REPRESENTATION,
    &SUBSTANCE_SPECIFICATION_CODE,
    &SUBSTANCE_SPECIFICATION_NAME,
    &SUBSTANCE_SPECIFICATION_NAME_OFFICIAL,
    &SUBSTANCE_SPECIFICATION_RELATIONSHIP,
];

/// Metadata for a resource or backbone element kind
pub fn type_info(kind: NodeKind) -> Option<&'static TypeInfo> {
    match kind {
        NodeKind::ImplementationGuide => Some(&IMPLEMENTATION_GUIDE),
        NodeKind::ImplementationGuideDependsOn => Some(&IMPLEMENTATION_GUIDE_DEPENDS_ON),
        NodeKind::ImplementationGuideGlobal => Some(&IMPLEMENTATION_GUIDE_GLOBAL),
        NodeKind::ImplementationGuideDefinition => Some(&IMPLEMENTATION_GUIDE_DEFINITION),
        NodeKind::ImplementationGuideDefinitionGrouping => {
            Some(&IMPLEMENTATION_GUIDE_DEFINITION_GROUPING)
        }
        NodeKind::ImplementationGuideDefinitionResource => {
            Some(&IMPLEMENTATION_GUIDE_DEFINITION_RESOURCE)
        }
        NodeKind::ImplementationGuideDefinitionPage => Some(&IMPLEMENTATION_GUIDE_DEFINITION_PAGE),
        NodeKind::ImplementationGuideDefinitionParameter => {
            Some(&IMPLEMENTATION_GUIDE_DEFINITION_PARAMETER)
        }
        NodeKind::ImplementationGuideDefinitionTemplate => {
            Some(&IMPLEMENTATION_GUIDE_DEFINITION_TEMPLATE)
        }
        NodeKind::ImplementationGuideManifest => Some(&IMPLEMENTATION_GUIDE_MANIFEST),
        NodeKind::ImplementationGuideManifestResource => {
            Some(&IMPLEMENTATION_GUIDE_MANIFEST_RESOURCE)
        }
        NodeKind::ImplementationGuideManifestPage => Some(&IMPLEMENTATION_GUIDE_MANIFEST_PAGE),
        NodeKind::SubstanceSpecification => Some(&SUBSTANCE_SPECIFICATION),
        NodeKind::SubstanceSpecificationMoiety => Some(&SUBSTANCE_SPECIFICATION_MOIETY),
        NodeKind::SubstanceSpecificationProperty => Some(&SUBSTANCE_SPECIFICATION_PROPERTY),
        NodeKind::SubstanceSpecificationStructure => Some(&SUBSTANCE_SPECIFICATION_STRUCTURE),
        NodeKind::SubstanceSpecificationStructureIsotope => {
            Some(&SUBSTANCE_SPECIFICATION_STRUCTURE_ISOTOPE)
        }
        NodeKind::SubstanceSpecificationStructureIsotopeMolecularWeight => {
            Some(&SUBSTANCE_SPECIFICATION_STRUCTURE_ISOTOPE_MOLECULAR_WEIGHT)
        }
        NodeKind::SubstanceSpecificationStructureRepresentation => {
            Some(&SUBSTANCE_SPECIFICATION_STRUCTURE_REPRESENTATION)
        }
        NodeKind::SubstanceSpecificationCode => Some(&SUBSTANCE_SPECIFICATION_CODE),
        NodeKind::SubstanceSpecificationName => Some(&SUBSTANCE_SPECIFICATION_NAME),
        NodeKind::SubstanceSpecificationNameOfficial => {
            Some(&SUBSTANCE_SPECIFICATION_NAME_OFFICIAL)
        }
        NodeKind::SubstanceSpecificationRelationship => Some(&SUBSTANCE_SPECIFICATION_RELATIONSHIP),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_type_is_registered() {
        for info in TYPES {
            let found = type_info(info.kind).unwrap();
            assert_eq!(found.path, info.kind.type_name());
        }
        assert!(type_info(NodeKind::Coding).is_none());
    }

    #[test]
    fn test_element_names_are_unique() {
        for info in TYPES {
            let mut seen = HashSet::new();
            for element in info.all_elements() {
                assert!(seen.insert(element.name), "{} repeats {}", info.path, element.name);
            }
        }
    }

    #[test]
    fn test_implementation_guide_required_elements() {
        let info = type_info(NodeKind::ImplementationGuide).unwrap();
        let required: Vec<_> = info.required_elements().map(|e| e.name).collect();
        assert_eq!(required, vec!["url", "name", "status", "packageId", "fhirVersion"]);

        let fhir_version = info.element("fhirVersion").unwrap();
        assert!(fhir_version.is_repeating());
        assert_eq!(fhir_version.to_string(), "fhirVersion 1..*");
        assert_eq!(
            fhir_version.binding.map(|b| b.strength),
            Some(BindingStrength::Required)
        );
    }

    #[test]
    fn test_choice_and_reference_metadata() {
        let page = type_info(NodeKind::ImplementationGuideDefinitionPage).unwrap();
        let name = page.element("name").unwrap();
        assert!(name.is_choice());
        assert_eq!(name.type_code, "");
        assert_eq!(name.targets, &["Binary"]);
        assert_eq!(name.choice_name(ValueKind::Url), "nameUrl");

        let resource = type_info(NodeKind::ImplementationGuideDefinitionResource).unwrap();
        assert_eq!(resource.element("reference").unwrap().targets, ANY_RESOURCE);

        let relationship = type_info(NodeKind::SubstanceSpecificationRelationship).unwrap();
        assert_eq!(relationship.element("amount").unwrap().choice.len(), 4);
    }

    #[test]
    fn test_base_elements() {
        let depends_on = type_info(NodeKind::ImplementationGuideDependsOn).unwrap();
        assert_eq!(depends_on.element("modifierExtension").unwrap().type_code, "Extension");
        assert!(depends_on.element("meta").is_none());

        let substance = type_info(NodeKind::SubstanceSpecification).unwrap();
        assert_eq!(substance.element("contained").unwrap().type_code, "Resource");
    }

    #[test]
    fn test_declared_constraints() {
        let info = type_info(NodeKind::ImplementationGuide).unwrap();
        let ids: Vec<_> = info.constraints.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["ig-0", "ig-1", "ig-2", "implementationGuide-3"]);
        assert_eq!(info.constraint("ig-1").unwrap().location, "ImplementationGuide.definition");
        assert_eq!(info.constraint("ig-0").unwrap().level, ConstraintLevel::Warning);
    }
}
