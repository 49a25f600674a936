//! SubstanceSpecification trees: optional-only resources, shared nodes, reference targets

use ferrum_resources::common::*;
use ferrum_resources::constraints;
use ferrum_resources::r4::*;
use ferrum_resources::visitor::{collect, collect_references, NodeKind};
use ferrum_resources::{Error, Resource};

mod test_support;

use test_support::*;

#[test]
fn test_full_substance() {
    let substance = full_substance();

    assert_eq!(substance.id().map(Id::as_str), Some("glucose"));
    assert_eq!(substance.name()[0].name().as_str(), "Glucose");
    assert_eq!(substance.name()[0].synonym()[0].name().as_str(), "Dextrose");
    assert_eq!(substance.name()[0].preferred(), Some(true));

    let structure = substance.structure().unwrap();
    assert_eq!(structure.molecular_formula().map(FhirString::as_str), Some("C6H12O6"));
    assert_eq!(structure.isotope().len(), 1);
}

#[test]
fn test_molecular_weight_type_is_shared() {
    let substance = full_substance();
    let top_level = &substance.molecular_weight()[0];
    let nested = substance.structure().unwrap().isotope()[0]
        .molecular_weight()
        .unwrap();
    assert_eq!(top_level, nested);

    let weights = collect(
        substance.as_node(),
        NodeKind::SubstanceSpecificationStructureIsotopeMolecularWeight,
    );
    assert_eq!(weights.len(), 2);
}

#[test]
fn test_empty_backbones_are_rejected() {
    let err = SubstanceSpecificationMoietyBuilder::default().build().unwrap_err();
    assert!(matches!(err, Error::EmptyElement { .. }));

    let err = SubstanceSpecificationStructureBuilder::default().build().unwrap_err();
    assert!(matches!(err, Error::EmptyElement { .. }));
}

#[test]
fn test_reference_targets() {
    let wrong_source = SubstanceSpecificationBuilder {
        source: vec![reference("Patient/1")],
        ..Default::default()
    }
    .build();
    assert!(matches!(
        wrong_source,
        Err(Error::DisallowedReferenceTarget { element: "source", .. })
    ));

    let wrong_polymer = SubstanceSpecificationBuilder {
        polymer: Some(reference("SubstanceProtein/p1")),
        ..Default::default()
    }
    .build();
    assert!(matches!(
        wrong_polymer,
        Err(Error::DisallowedReferenceTarget { element: "polymer", .. })
    ));

    let typed = SubstanceSpecificationBuilder {
        protein: Some(reference("SubstanceProtein/p1").with_type("SubstancePolymer").unwrap()),
        ..Default::default()
    }
    .build();
    assert!(typed.is_err());
}

#[test]
fn test_relationship_substance_choice() {
    let by_reference = SubstanceSpecificationRelationshipBuilder {
        substance: Some(reference("Substance/1").into()),
        ..Default::default()
    }
    .build();
    assert!(matches!(
        by_reference,
        Err(Error::DisallowedReferenceTarget { element: "substance", .. })
    ));

    let wrong_type = SubstanceSpecificationRelationshipBuilder {
        substance: Some(string("fructose").into()),
        ..Default::default()
    }
    .build();
    assert!(matches!(
        wrong_type,
        Err(Error::InvalidChoiceType { element: "substance", found: "String", .. })
    ));
}

#[test]
fn test_references_in_document_order() {
    let substance = full_substance();
    let references: Vec<_> = collect_references(substance.as_node())
        .into_iter()
        .filter_map(|r| r.reference.as_ref().map(FhirString::as_str))
        .collect();
    assert_eq!(
        references,
        vec![
            "DocumentReference/monograph",
            "DocumentReference/structure-source",
            "SubstanceSpecification/fructose",
        ]
    );
}

#[test]
fn test_no_declared_invariants() {
    let outcome = constraints::evaluate(&full_substance());
    assert!(outcome.valid);
    assert!(outcome.issues.is_empty());
    assert_eq!(outcome.resource_type, ResourceType::SubstanceSpecification);
}

#[test]
fn test_contained_guide_inside_substance() {
    let guide = ImplementationGuideBuilder {
        name: Some(string("not an identifier")),
        ..guide_builder()
    }
    .build()
    .unwrap();

    let substance = SubstanceSpecificationBuilder {
        base: ResourceBase {
            contained: vec![guide.into()],
            ..Default::default()
        },
        ..full_substance().into_builder()
    }
    .build()
    .unwrap();

    assert_eq!(
        substance.base().contained[0].resource_type(),
        ResourceType::ImplementationGuide
    );
    let outcome = constraints::evaluate(&substance);
    assert_eq!(outcome.warning_count(), 1);
    assert_eq!(
        outcome.issues[0].expression,
        Some(vec!["SubstanceSpecification.contained[0].name".to_string()])
    );
}
