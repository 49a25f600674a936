//! ImplementationGuide invariants
//!
//! Builders only enforce element-level rules. The cross-element invariants
//! declared in [`crate::model_info`] are checked here, on demand, and reported as
//! issues rather than errors:
//!
//! - `ig-0` (warning): `name` is usable as a machine identifier
//! - `ig-1` (rule): every `definition.resource.groupingId` names a `definition.grouping` id
//! - `ig-2` (rule): every `definition.resource.fhirVersion` is one of the guide's versions
//!
//! `implementationGuide-3` needs a terminology service; when a guide carries a
//! jurisdiction it is reported as not evaluated.
//!
//! Contained guides are checked too, with their own element paths.

use crate::common::base::Resource;
use crate::model_info::{ConstraintInfo, ConstraintLevel, IG_0, IG_1, IG_2, IMPLEMENTATION_GUIDE_3};
use crate::r4::codes::ResourceType;
use crate::r4::implementation_guide::ImplementationGuide;
use crate::visitor::{Node, Visitor};
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Constraint evaluation result for a single resource
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub resource_type: ResourceType,
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationOutcome {
    fn new(resource_type: ResourceType, issues: Vec<ValidationIssue>) -> Self {
        let valid = !issues.iter().any(|i| i.severity == IssueSeverity::Error);
        Self {
            resource_type,
            valid,
            issues,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.valid
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
            .count()
    }

    /// Issues raised by one constraint
    pub fn issues_for<'a>(&'a self, constraint: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.issues
            .iter()
            .filter(move |i| i.constraint == Some(constraint))
    }

    pub fn to_operation_outcome(&self) -> Value {
        serde_json::json!({
            "resourceType": "OperationOutcome",
            "issue": self.issues.iter().map(|i| i.to_json()).collect::<Vec<_>>()
        })
    }
}

/// Individual constraint issue
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: IssueCode,
    pub diagnostics: String,
    /// Path of the offending element (`ImplementationGuide.definition.resource[0].groupingId`)
    pub expression: Option<Vec<String>>,
    /// Id of the violated constraint
    pub constraint: Option<&'static str>,
}

impl ValidationIssue {
    fn violation(constraint: &ConstraintInfo, detail: String, path: String) -> Self {
        let severity = match constraint.level {
            ConstraintLevel::Rule => IssueSeverity::Error,
            ConstraintLevel::Warning => IssueSeverity::Warning,
        };
        Self {
            severity,
            code: IssueCode::Invariant,
            diagnostics: format!("{}: {} ({})", constraint.id, constraint.description, detail),
            expression: Some(vec![path]),
            constraint: Some(constraint.id),
        }
    }

    fn not_evaluated(constraint: &ConstraintInfo, path: String) -> Self {
        Self {
            severity: IssueSeverity::Information,
            code: IssueCode::NotSupported,
            diagnostics: format!(
                "{}: not evaluated, requires terminology services: {}",
                constraint.id, constraint.expression
            ),
            expression: Some(vec![path]),
            constraint: Some(constraint.id),
        }
    }

    fn to_json(&self) -> Value {
        let mut issue = serde_json::json!({
            "severity": self.severity.to_string().to_lowercase(),
            "code": self.code.to_string(),
            "diagnostics": self.diagnostics,
        });

        if let Some(ref expr) = self.expression {
            issue["expression"] = serde_json::json!(expr);
        }

        issue
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
    Information,
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "Error"),
            Self::Warning => write!(f, "Warning"),
            Self::Information => write!(f, "Information"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCode {
    Invariant,
    NotSupported,
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Invariant => "invariant",
            Self::NotSupported => "not-supported",
        };
        write!(f, "{}", s)
    }
}

/// Finds implementation guides (the root and any contained ones) with their paths.
#[derive(Default)]
struct GuideFinder<'a> {
    path: Vec<String>,
    found: Vec<(String, &'a ImplementationGuide)>,
}

impl<'a> Visitor<'a> for GuideFinder<'a> {
    fn visit_start(&mut self, name: &'static str, index: Option<usize>, node: Node<'a>) {
        self.path.push(match index {
            Some(i) => format!("{name}[{i}]"),
            None => name.to_string(),
        });
        if let Node::ImplementationGuide(guide) = node {
            self.found.push((self.path.join("."), guide));
        }
    }

    // Guides only occur as the root or under `contained`.
    fn visit(&mut self, _name: &'static str, _index: Option<usize>, node: Node<'a>) -> bool {
        node.is_resource()
    }

    fn visit_end(&mut self, _name: &'static str, _index: Option<usize>, _node: Node<'a>) {
        self.path.pop();
    }
}

fn identifier_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Z]([A-Za-z0-9_]){0,254}$").expect("ig-0 regex must compile")
    })
}

fn check_guide(guide: &ImplementationGuide, path: &str, issues: &mut Vec<ValidationIssue>) {
    // ig-0
    let name = guide.name().as_str();
    if !identifier_pattern().is_match(name) {
        issues.push(ValidationIssue::violation(
            &IG_0,
            format!("name '{name}'"),
            format!("{path}.name"),
        ));
    }

    if let Some(definition) = guide.definition() {
        let definition_path = format!("{path}.definition");

        // ig-1
        let grouping_ids: HashSet<&str> = definition
            .grouping()
            .iter()
            .filter_map(|grouping| grouping.base().id.as_deref())
            .collect();
        for (i, resource) in definition.resource().iter().enumerate() {
            if let Some(grouping_id) = resource.grouping_id() {
                if !grouping_ids.contains(grouping_id.as_str()) {
                    issues.push(ValidationIssue::violation(
                        &IG_1,
                        format!("groupingId '{grouping_id}' is not defined"),
                        format!("{definition_path}.resource[{i}].groupingId"),
                    ));
                }
            }
        }

        // ig-2
        for (i, resource) in definition.resource().iter().enumerate() {
            for (j, version) in resource.fhir_version().iter().enumerate() {
                if !guide.fhir_version().contains(version) {
                    issues.push(ValidationIssue::violation(
                        &IG_2,
                        format!("fhirVersion '{version}' is not declared by the guide"),
                        format!("{definition_path}.resource[{i}].fhirVersion[{j}]"),
                    ));
                }
            }
        }
    }

    if !guide.jurisdiction().is_empty() {
        issues.push(ValidationIssue::not_evaluated(
            &IMPLEMENTATION_GUIDE_3,
            format!("{path}.jurisdiction"),
        ));
    }
}

/// Evaluate the declared invariants of `resource` and of the resources it contains.
pub fn evaluate<R: Resource>(resource: &R) -> ValidationOutcome {
    let mut finder = GuideFinder::default();
    resource.as_node().accept(&mut finder);

    let mut issues = Vec::new();
    for (path, guide) in &finder.found {
        check_guide(guide, path, &mut issues);
    }

    let outcome = ValidationOutcome::new(R::RESOURCE_TYPE, issues);
    tracing::debug!(
        resource_type = %outcome.resource_type,
        guides = finder.found.len(),
        errors = outcome.error_count(),
        warnings = outcome.warning_count(),
        "constraint evaluation finished"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::base::BackboneElement;
    use crate::common::datatypes::Reference;
    use crate::common::primitives::{FhirString, Id, Uri};
    use crate::r4::codes::{FhirVersion, PublicationStatus};
    use crate::r4::implementation_guide::*;

    fn guide(name: &str, definition: Option<ImplementationGuideDefinition>) -> ImplementationGuide {
        ImplementationGuideBuilder {
            url: Some(Uri::new("http://example.org/ig").unwrap()),
            name: Some(FhirString::new(name).unwrap()),
            status: Some(PublicationStatus::Draft),
            package_id: Some(Id::new("example.ig").unwrap()),
            fhir_version: vec![FhirVersion::V4_0_1],
            definition,
            ..Default::default()
        }
        .build()
        .unwrap()
    }

    fn grouping(id: &str) -> ImplementationGuideDefinitionGrouping {
        ImplementationGuideDefinitionGroupingBuilder {
            base: BackboneElement {
                id: Some(id.to_string()),
                ..Default::default()
            },
            name: Some(FhirString::new(id).unwrap()),
            ..Default::default()
        }
        .build()
        .unwrap()
    }

    fn resource(
        grouping_id: Option<&str>,
        fhir_version: Vec<FhirVersion>,
    ) -> ImplementationGuideDefinitionResource {
        ImplementationGuideDefinitionResourceBuilder {
            reference: Some(Reference::literal("StructureDefinition/sd").unwrap()),
            grouping_id: grouping_id.map(|id| Id::new(id).unwrap()),
            fhir_version,
            ..Default::default()
        }
        .build()
        .unwrap()
    }

    fn definition(
        grouping: Vec<ImplementationGuideDefinitionGrouping>,
        resource: Vec<ImplementationGuideDefinitionResource>,
    ) -> ImplementationGuideDefinition {
        ImplementationGuideDefinitionBuilder {
            grouping,
            resource,
            ..Default::default()
        }
        .build()
        .unwrap()
    }

    #[test]
    fn test_valid_guide() {
        let ig = guide(
            "ExampleIG",
            Some(definition(
                vec![grouping("profiles")],
                vec![resource(Some("profiles"), vec![FhirVersion::V4_0_1])],
            )),
        );
        let outcome = evaluate(&ig);
        assert!(outcome.valid);
        assert!(outcome.issues.is_empty());
        assert_eq!(outcome.resource_type, ResourceType::ImplementationGuide);
    }

    #[test]
    fn test_ig0_is_a_warning() {
        let outcome = evaluate(&guide("example-ig", None));
        assert!(outcome.valid);
        assert_eq!(outcome.warning_count(), 1);
        let issue = outcome.issues_for("ig-0").next().unwrap();
        assert_eq!(issue.expression, Some(vec!["ImplementationGuide.name".to_string()]));
    }

    #[test]
    fn test_ig1_unknown_grouping() {
        let ig = guide(
            "ExampleIG",
            Some(definition(
                vec![grouping("profiles")],
                vec![
                    resource(Some("profiles"), Vec::new()),
                    resource(Some("examples"), Vec::new()),
                ],
            )),
        );
        let outcome = evaluate(&ig);
        assert!(!outcome.valid);
        assert_eq!(outcome.error_count(), 1);
        let issue = outcome.issues_for("ig-1").next().unwrap();
        assert_eq!(issue.severity, IssueSeverity::Error);
        assert_eq!(
            issue.expression,
            Some(vec!["ImplementationGuide.definition.resource[1].groupingId".to_string()])
        );
    }

    #[test]
    fn test_ig2_undeclared_version() {
        let ig = guide(
            "ExampleIG",
            Some(definition(
                Vec::new(),
                vec![resource(None, vec![FhirVersion::V4_0_1, FhirVersion::V3_0_1])],
            )),
        );
        let outcome = evaluate(&ig);
        assert_eq!(outcome.error_count(), 1);
        let issue = outcome.issues_for("ig-2").next().unwrap();
        assert!(issue.diagnostics.contains("3.0.1"));
    }

    #[test]
    fn test_contained_guides_are_checked() {
        let inner = guide("bad name", None);
        let outer = ImplementationGuideBuilder {
            base: crate::common::base::ResourceBase {
                contained: vec![inner.into()],
                ..Default::default()
            },
            ..guide("ExampleIG", None).into_builder()
        }
        .build()
        .unwrap();

        let outcome = evaluate(&outer);
        let issue = outcome.issues_for("ig-0").next().unwrap();
        assert_eq!(
            issue.expression,
            Some(vec!["ImplementationGuide.contained[0].name".to_string()])
        );
    }

    #[test]
    fn test_operation_outcome() {
        let outcome = evaluate(&guide("lowercase", None));
        let json = outcome.to_operation_outcome();
        assert_eq!(json["resourceType"], "OperationOutcome");
        assert_eq!(json["issue"][0]["severity"], "warning");
        assert_eq!(json["issue"][0]["code"], "invariant");
    }
}
