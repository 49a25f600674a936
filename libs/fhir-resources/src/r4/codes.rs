//! Closed FHIR R4 code systems used by the resource models

use super::spdx::SPDX_LICENSE_CODES;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

macro_rules! value_set {
    ($(#[$doc:meta])* $name:ident, $url:literal { $($variant:ident => $code:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Canonical URL of the bound value set
            pub const VALUE_SET: &'static str = $url;

            /// Every code of the value set, in definition order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::from_code(s).ok_or_else(|| Error::UnknownCode {
                    value_set: Self::VALUE_SET,
                    code: s.to_string(),
                })
            }
        }
    };
}

value_set!(
    /// The lifecycle status of an artifact
    PublicationStatus,
    "http://hl7.org/fhir/ValueSet/publication-status" {
        Draft => "draft",
        Active => "active",
        Retired => "retired",
        Unknown => "unknown",
    }
);

value_set!(
    /// All published FHIR versions
    FhirVersion,
    "http://hl7.org/fhir/ValueSet/FHIR-version" {
        V0_01 => "0.01",
        V0_05 => "0.05",
        V0_06 => "0.06",
        V0_11 => "0.11",
        V0_0_80 => "0.0.80",
        V0_0_81 => "0.0.81",
        V0_0_82 => "0.0.82",
        V0_4_0 => "0.4.0",
        V0_5_0 => "0.5.0",
        V1_0_0 => "1.0.0",
        V1_0_1 => "1.0.1",
        V1_0_2 => "1.0.2",
        V1_1_0 => "1.1.0",
        V1_4_0 => "1.4.0",
        V1_6_0 => "1.6.0",
        V1_8_0 => "1.8.0",
        V3_0_0 => "3.0.0",
        V3_0_1 => "3.0.1",
        V3_3_0 => "3.3.0",
        V3_5_0 => "3.5.0",
        V4_0_0 => "4.0.0",
        V4_0_1 => "4.0.1",
        V4_1_0 => "4.1.0",
        V4_3_0 => "4.3.0",
    }
);

value_set!(
    /// How a page in an implementation guide is produced
    GuidePageGeneration,
    "http://hl7.org/fhir/ValueSet/guide-page-generation" {
        Html => "html",
        Markdown => "markdown",
        Xml => "xml",
        Generated => "generated",
    }
);

value_set!(
    /// Parameters that control the implementation guide build
    GuideParameterCode,
    "http://hl7.org/fhir/ValueSet/guide-parameter-code" {
        Apply => "apply",
        PathResource => "path-resource",
        PathPages => "path-pages",
        PathTxCache => "path-tx-cache",
        ExpansionParameter => "expansion-parameter",
        RuleBrokenLinks => "rule-broken-links",
        GenerateXml => "generate-xml",
        GenerateJson => "generate-json",
        GenerateTurtle => "generate-turtle",
        HtmlTemplate => "html-template",
    }
);

value_set!(
    /// The status of a resource narrative
    NarrativeStatus,
    "http://hl7.org/fhir/ValueSet/narrative-status" {
        Generated => "generated",
        Extensions => "extensions",
        Additional => "additional",
        Empty => "empty",
    }
);

value_set!(
    /// FHIR R4 resource type names
    ResourceType,
    "http://hl7.org/fhir/ValueSet/resource-types" {
        Account => "Account",
        ActivityDefinition => "ActivityDefinition",
        AdverseEvent => "AdverseEvent",
        AllergyIntolerance => "AllergyIntolerance",
        Appointment => "Appointment",
        AppointmentResponse => "AppointmentResponse",
        AuditEvent => "AuditEvent",
        Basic => "Basic",
        Binary => "Binary",
        BiologicallyDerivedProduct => "BiologicallyDerivedProduct",
        BodyStructure => "BodyStructure",
        Bundle => "Bundle",
        CapabilityStatement => "CapabilityStatement",
        CarePlan => "CarePlan",
        CareTeam => "CareTeam",
        CatalogEntry => "CatalogEntry",
        ChargeItem => "ChargeItem",
        ChargeItemDefinition => "ChargeItemDefinition",
        Claim => "Claim",
        ClaimResponse => "ClaimResponse",
        ClinicalImpression => "ClinicalImpression",
        CodeSystem => "CodeSystem",
        Communication => "Communication",
        CommunicationRequest => "CommunicationRequest",
        CompartmentDefinition => "CompartmentDefinition",
        Composition => "Composition",
        ConceptMap => "ConceptMap",
        Condition => "Condition",
        Consent => "Consent",
        Contract => "Contract",
        Coverage => "Coverage",
        CoverageEligibilityRequest => "CoverageEligibilityRequest",
        CoverageEligibilityResponse => "CoverageEligibilityResponse",
        DetectedIssue => "DetectedIssue",
        Device => "Device",
        DeviceDefinition => "DeviceDefinition",
        DeviceMetric => "DeviceMetric",
        DeviceRequest => "DeviceRequest",
        DeviceUseStatement => "DeviceUseStatement",
        DiagnosticReport => "DiagnosticReport",
        DocumentManifest => "DocumentManifest",
        DocumentReference => "DocumentReference",
        DomainResource => "DomainResource",
        EffectEvidenceSynthesis => "EffectEvidenceSynthesis",
        Encounter => "Encounter",
        Endpoint => "Endpoint",
        EnrollmentRequest => "EnrollmentRequest",
        EnrollmentResponse => "EnrollmentResponse",
        EpisodeOfCare => "EpisodeOfCare",
        EventDefinition => "EventDefinition",
        Evidence => "Evidence",
        EvidenceVariable => "EvidenceVariable",
        ExampleScenario => "ExampleScenario",
        ExplanationOfBenefit => "ExplanationOfBenefit",
        FamilyMemberHistory => "FamilyMemberHistory",
        Flag => "Flag",
        Goal => "Goal",
        GraphDefinition => "GraphDefinition",
        Group => "Group",
        GuidanceResponse => "GuidanceResponse",
        HealthcareService => "HealthcareService",
        ImagingStudy => "ImagingStudy",
        Immunization => "Immunization",
        ImmunizationEvaluation => "ImmunizationEvaluation",
        ImmunizationRecommendation => "ImmunizationRecommendation",
        ImplementationGuide => "ImplementationGuide",
        InsurancePlan => "InsurancePlan",
        Invoice => "Invoice",
        Library => "Library",
        Linkage => "Linkage",
        List => "List",
        Location => "Location",
        Measure => "Measure",
        MeasureReport => "MeasureReport",
        Media => "Media",
        Medication => "Medication",
        MedicationAdministration => "MedicationAdministration",
        MedicationDispense => "MedicationDispense",
        MedicationKnowledge => "MedicationKnowledge",
        MedicationRequest => "MedicationRequest",
        MedicationStatement => "MedicationStatement",
        MedicinalProduct => "MedicinalProduct",
        MedicinalProductAuthorization => "MedicinalProductAuthorization",
        MedicinalProductContraindication => "MedicinalProductContraindication",
        MedicinalProductIndication => "MedicinalProductIndication",
        MedicinalProductIngredient => "MedicinalProductIngredient",
        MedicinalProductInteraction => "MedicinalProductInteraction",
        MedicinalProductManufactured => "MedicinalProductManufactured",
        MedicinalProductPackaged => "MedicinalProductPackaged",
        MedicinalProductPharmaceutical => "MedicinalProductPharmaceutical",
        MedicinalProductUndesirableEffect => "MedicinalProductUndesirableEffect",
        MessageDefinition => "MessageDefinition",
        MessageHeader => "MessageHeader",
        MolecularSequence => "MolecularSequence",
        NamingSystem => "NamingSystem",
        NutritionOrder => "NutritionOrder",
        Observation => "Observation",
        ObservationDefinition => "ObservationDefinition",
        OperationDefinition => "OperationDefinition",
        OperationOutcome => "OperationOutcome",
        Organization => "Organization",
        OrganizationAffiliation => "OrganizationAffiliation",
        Parameters => "Parameters",
        Patient => "Patient",
        PaymentNotice => "PaymentNotice",
        PaymentReconciliation => "PaymentReconciliation",
        Person => "Person",
        PlanDefinition => "PlanDefinition",
        Practitioner => "Practitioner",
        PractitionerRole => "PractitionerRole",
        Procedure => "Procedure",
        Provenance => "Provenance",
        Questionnaire => "Questionnaire",
        QuestionnaireResponse => "QuestionnaireResponse",
        RelatedPerson => "RelatedPerson",
        RequestGroup => "RequestGroup",
        ResearchDefinition => "ResearchDefinition",
        ResearchElementDefinition => "ResearchElementDefinition",
        ResearchStudy => "ResearchStudy",
        ResearchSubject => "ResearchSubject",
        Resource => "Resource",
        RiskAssessment => "RiskAssessment",
        RiskEvidenceSynthesis => "RiskEvidenceSynthesis",
        Schedule => "Schedule",
        SearchParameter => "SearchParameter",
        ServiceRequest => "ServiceRequest",
        Slot => "Slot",
        Specimen => "Specimen",
        SpecimenDefinition => "SpecimenDefinition",
        StructureDefinition => "StructureDefinition",
        StructureMap => "StructureMap",
        Subscription => "Subscription",
        Substance => "Substance",
        SubstanceNucleicAcid => "SubstanceNucleicAcid",
        SubstancePolymer => "SubstancePolymer",
        SubstanceProtein => "SubstanceProtein",
        SubstanceReferenceInformation => "SubstanceReferenceInformation",
        SubstanceSourceMaterial => "SubstanceSourceMaterial",
        SubstanceSpecification => "SubstanceSpecification",
        SupplyDelivery => "SupplyDelivery",
        SupplyRequest => "SupplyRequest",
        Task => "Task",
        TerminologyCapabilities => "TerminologyCapabilities",
        TestReport => "TestReport",
        TestScript => "TestScript",
        ValueSet => "ValueSet",
        VerificationResult => "VerificationResult",
        VisionPrescription => "VisionPrescription",
    }
);

impl ResourceType {
    /// Whether `name` is a known resource type name.
    pub fn is_resource_type(name: &str) -> bool {
        Self::from_code(name).is_some()
    }
}

/// An SPDX license identifier (`ImplementationGuide.license`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpdxLicense(String);

impl SpdxLicense {
    pub const VALUE_SET: &'static str = "http://hl7.org/fhir/ValueSet/spdx-license";

    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        if SPDX_LICENSE_CODES.contains(code.as_str()) {
            Ok(Self(code))
        } else {
            Err(Error::UnknownCode {
                value_set: Self::VALUE_SET,
                code,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpdxLicense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SpdxLicense {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publication_status_codes() {
        assert_eq!(PublicationStatus::Active.as_str(), "active");
        assert_eq!("retired".parse::<PublicationStatus>().unwrap(), PublicationStatus::Retired);
        assert!("Active".parse::<PublicationStatus>().is_err());
    }

    #[test]
    fn test_fhir_version_codes() {
        assert_eq!(FhirVersion::V4_3_0.as_str(), "4.3.0");
        assert_eq!(FhirVersion::from_code("4.0.1"), Some(FhirVersion::V4_0_1));
        assert_eq!(FhirVersion::from_code("0.0.80"), Some(FhirVersion::V0_0_80));
        assert_eq!(FhirVersion::from_code("9.9.9"), None);
    }

    #[test]
    fn test_resource_type_lookup() {
        assert!(ResourceType::is_resource_type("Binary"));
        assert!(ResourceType::is_resource_type("SubstanceSpecification"));
        assert!(!ResourceType::is_resource_type("binary"));
        assert!(!ResourceType::is_resource_type("NotAResource"));
        assert_eq!(ResourceType::List.to_string(), "List");
    }

    #[test]
    fn test_unknown_code_error() {
        let err = "wiki".parse::<GuidePageGeneration>().unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownCode { value_set, ref code }
                if value_set == GuidePageGeneration::VALUE_SET && code == "wiki"
        ));
    }

    #[test]
    fn test_spdx_license() {
        assert_eq!(SpdxLicense::new("Apache-2.0").unwrap().as_str(), "Apache-2.0");
        assert!(SpdxLicense::new("not-open-source").is_ok());
        assert!(SpdxLicense::new("Proprietary-1.0").is_err());
    }
}
