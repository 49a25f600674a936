//! Shared fixtures for the integration tests

#![allow(dead_code)]

use ferrum_resources::common::*;
use ferrum_resources::r4::*;
use rust_decimal::Decimal;

pub fn uri(value: &str) -> Uri {
    Uri::new(value).unwrap()
}

pub fn string(value: &str) -> FhirString {
    FhirString::new(value).unwrap()
}

pub fn id(value: &str) -> Id {
    Id::new(value).unwrap()
}

pub fn reference(value: &str) -> Reference {
    Reference::literal(value).unwrap()
}

pub fn concept(code: &str) -> CodeableConcept {
    CodeableConcept::from_coding(Coding::new(
        uri("http://example.org/codes"),
        Code::new(code).unwrap(),
    ))
}

pub fn milligrams(value: i64) -> Quantity {
    Quantity::ucum(Decimal::new(value, 0), "mg").unwrap()
}

/// The minimal guide: url, name, status, packageId and fhirVersion
pub fn guide_builder() -> ImplementationGuideBuilder {
    ImplementationGuideBuilder {
        url: Some(uri("http://example.org/ig")),
        name: Some(string("ExampleIG")),
        status: Some(PublicationStatus::Active),
        package_id: Some(id("example.ig")),
        fhir_version: vec![FhirVersion::V4_3_0],
        ..Default::default()
    }
}

pub fn grouping(element_id: &str, name: &str) -> ImplementationGuideDefinitionGrouping {
    ImplementationGuideDefinitionGroupingBuilder {
        base: BackboneElement {
            id: Some(element_id.to_string()),
            ..Default::default()
        },
        name: Some(string(name)),
        ..Default::default()
    }
    .build()
    .unwrap()
}

pub fn page(name: impl Into<ChoiceValue>, title: &str) -> ImplementationGuideDefinitionPageBuilder {
    ImplementationGuideDefinitionPageBuilder {
        name: Some(name.into()),
        title: Some(string(title)),
        generation: Some(GuidePageGeneration::Html),
        ..Default::default()
    }
}

/// A guide with a grouped example resource and a two-level page tree
pub fn full_guide() -> ImplementationGuide {
    let resource = ImplementationGuideDefinitionResourceBuilder {
        reference: Some(reference("StructureDefinition/example-profile")),
        example: Some(true.into()),
        grouping_id: Some(id("profiles")),
        ..Default::default()
    }
    .build()
    .unwrap();

    let child = ImplementationGuideDefinitionPageBuilder {
        generation: Some(GuidePageGeneration::Markdown),
        ..page(reference("Binary/background"), "Background")
    }
    .build()
    .unwrap();
    let root_page = ImplementationGuideDefinitionPageBuilder {
        page: vec![child],
        ..page(Url::new("index.html").unwrap(), "Home")
    }
    .build()
    .unwrap();

    let definition = ImplementationGuideDefinitionBuilder {
        grouping: vec![grouping("profiles", "Profiles")],
        resource: vec![resource],
        page: Some(root_page),
        ..Default::default()
    }
    .build()
    .unwrap();

    ImplementationGuideBuilder {
        definition: Some(definition),
        ..guide_builder()
    }
    .build()
    .unwrap()
}

pub fn substance_name(name: &str) -> SubstanceSpecificationNameBuilder {
    SubstanceSpecificationNameBuilder {
        name: Some(string(name)),
        ..Default::default()
    }
}

/// A specification touching most backbone types
pub fn full_substance() -> SubstanceSpecification {
    let weight = SubstanceSpecificationStructureIsotopeMolecularWeightBuilder {
        method: Some(concept("calculated")),
        amount: Some(milligrams(180)),
        ..Default::default()
    }
    .build()
    .unwrap();

    let isotope = SubstanceSpecificationStructureIsotopeBuilder {
        name: Some(concept("C-13")),
        molecular_weight: Some(weight.clone()),
        ..Default::default()
    }
    .build()
    .unwrap();

    let structure = SubstanceSpecificationStructureBuilder {
        molecular_formula: Some(string("C6H12O6")),
        isotope: vec![isotope],
        source: vec![reference("DocumentReference/structure-source")],
        ..Default::default()
    }
    .build()
    .unwrap();

    let name = SubstanceSpecificationNameBuilder {
        preferred: Some(true),
        synonym: vec![substance_name("Dextrose").build().unwrap()],
        ..substance_name("Glucose")
    }
    .build()
    .unwrap();

    let moiety = SubstanceSpecificationMoietyBuilder {
        name: Some(string("glucose moiety")),
        amount: Some(string("1 per molecule").into()),
        ..Default::default()
    }
    .build()
    .unwrap();

    let property = SubstanceSpecificationPropertyBuilder {
        category: Some(concept("physical")),
        defining_substance: Some(concept("water").into()),
        ..Default::default()
    }
    .build()
    .unwrap();

    let relationship = SubstanceSpecificationRelationshipBuilder {
        substance: Some(reference("SubstanceSpecification/fructose").into()),
        relationship: Some(concept("isomer")),
        amount: Some(milligrams(5).into()),
        ..Default::default()
    }
    .build()
    .unwrap();

    SubstanceSpecificationBuilder {
        base: ResourceBase {
            id: Some(id("glucose")),
            ..Default::default()
        },
        type_: Some(concept("chemical")),
        source: vec![reference("DocumentReference/monograph")],
        moiety: vec![moiety],
        property: vec![property],
        structure: Some(structure),
        name: vec![name],
        molecular_weight: vec![weight],
        relationship: vec![relationship],
        ..Default::default()
    }
    .build()
    .unwrap()
}
