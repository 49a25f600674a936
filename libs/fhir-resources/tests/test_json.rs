//! FHIR JSON output of whole resources

use ferrum_resources::json::{resource_to_json, to_json, to_json_string};
use ferrum_resources::r4::*;
use ferrum_resources::{ModelConfig, Resource};
use serde_json::json;

mod test_support;

use test_support::*;

#[test]
fn test_minimal_guide() {
    let ig = guide_builder().build().unwrap();
    assert_eq!(
        resource_to_json(&ig),
        json!({
            "resourceType": "ImplementationGuide",
            "url": "http://example.org/ig",
            "name": "ExampleIG",
            "status": "active",
            "packageId": "example.ig",
            "fhirVersion": ["4.3.0"]
        })
    );
}

#[test]
fn test_guide_choice_suffixes() {
    let value = resource_to_json(&full_guide());
    assert_eq!(
        value["definition"],
        json!({
            "grouping": [{"id": "profiles", "name": "Profiles"}],
            "resource": [{
                "reference": {"reference": "StructureDefinition/example-profile"},
                "exampleBoolean": true,
                "groupingId": "profiles"
            }],
            "page": {
                "nameUrl": "index.html",
                "title": "Home",
                "generation": "html",
                "page": [{
                    "nameReference": {"reference": "Binary/background"},
                    "title": "Background",
                    "generation": "markdown"
                }]
            }
        })
    );
}

#[test]
fn test_member_order_follows_declaration() {
    let text = to_json_string(full_guide().as_node(), &ModelConfig::default()).unwrap();
    let position = |key: &str| text.find(&format!("\"{key}\"")).unwrap();

    assert_eq!(position("resourceType"), 1);
    assert!(position("url") < position("name"));
    assert!(position("packageId") < position("fhirVersion"));
    assert!(position("fhirVersion") < position("definition"));
    assert!(position("grouping") < position("exampleBoolean"));
}

#[test]
fn test_substance_specification() {
    let value = resource_to_json(&full_substance());

    assert_eq!(value["resourceType"], "SubstanceSpecification");
    assert_eq!(value["id"], "glucose");
    assert_eq!(value["moiety"][0]["amountString"], "1 per molecule");
    assert_eq!(
        value["property"][0]["definingSubstanceCodeableConcept"]["coding"][0]["code"],
        "water"
    );
    assert_eq!(
        value["relationship"][0]["substanceReference"],
        json!({"reference": "SubstanceSpecification/fructose"})
    );
    assert_eq!(value["relationship"][0]["amountQuantity"]["value"], json!(5));
    assert_eq!(value["name"][0]["synonym"][0], json!({"name": "Dextrose"}));
    assert_eq!(
        value["structure"]["isotope"][0]["molecularWeight"],
        value["molecularWeight"][0]
    );
}

#[test]
fn test_contained_resources_carry_resource_type() {
    let inner = guide_builder().build().unwrap();
    let outer = SubstanceSpecificationBuilder {
        base: ferrum_resources::common::ResourceBase {
            contained: vec![inner.clone().into()],
            ..Default::default()
        },
        ..Default::default()
    }
    .build()
    .unwrap();

    let value = resource_to_json(&outer);
    assert_eq!(value["contained"][0], to_json(inner.as_node()));
    assert_eq!(value["contained"][0]["resourceType"], "ImplementationGuide");
}
