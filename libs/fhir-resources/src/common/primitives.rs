//! FHIR primitive types
//!
//! String-backed primitives are newtypes that can only be obtained through a
//! checked constructor, so every value reachable from a built model already
//! satisfies the lexical rules of its FHIR type.

use crate::config::ModelConfig;
use crate::error::{Error, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const MAX_STRING_LENGTH: usize = 1_048_576;
const MAX_ID_LENGTH: usize = 64;

macro_rules! primitive {
    ($(#[$doc:meta])* $name:ident, $kind:literal, $check:path) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// FHIR type name
            pub const KIND: &'static str = $kind;

            /// Create a checked value using the default [`ModelConfig`].
            pub fn new(value: impl Into<String>) -> Result<Self> {
                Self::with_config(value, &ModelConfig::default())
            }

            /// Create a checked value using an explicit configuration.
            pub fn with_config(value: impl Into<String>, config: &ModelConfig) -> Result<Self> {
                let value = value.into();
                $check(&value, config)?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = Error;

            fn try_from(value: &str) -> Result<Self> {
                Self::new(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

primitive!(
    /// A sequence of Unicode characters (`string`)
    FhirString,
    "string",
    check_string
);

primitive!(
    /// Markdown-formatted text (`markdown`)
    Markdown,
    "markdown",
    check_string
);

primitive!(
    /// A code from a code system (`code`)
    Code,
    "code",
    check_code
);

primitive!(
    /// Logical id (`id`): `[A-Za-z0-9\-\.]{1,64}`
    Id,
    "id",
    check_id
);

primitive!(
    /// Uniform resource identifier (`uri`)
    Uri,
    "uri",
    check_uri
);

primitive!(
    /// Uniform resource locator (`url`)
    Url,
    "url",
    check_uri
);

primitive!(
    /// Canonical reference to a definitional resource (`canonical`)
    Canonical,
    "canonical",
    check_uri
);

primitive!(
    /// Date, date-time or partial date (`dateTime`)
    DateTime,
    "dateTime",
    check_date_time
);

primitive!(
    /// An instant in time, to at least the second, with a time zone (`instant`)
    Instant,
    "instant",
    check_instant
);

primitive!(
    /// Base64 encoded content (`base64Binary`)
    Base64Binary,
    "base64Binary",
    check_base64
);

primitive!(
    /// Limited XHTML content (`xhtml`)
    Xhtml,
    "xhtml",
    check_xhtml
);

fn is_unsupported_control_char(ch: char) -> bool {
    matches!(ch, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}')
}

fn check_control_char(kind: &'static str, value: &str, ch: char, config: &ModelConfig) -> Result<()> {
    if config.check_control_chars && is_unsupported_control_char(ch) {
        return Err(Error::invalid_primitive(
            kind,
            value,
            "contains unsupported control characters",
        ));
    }
    Ok(())
}

fn check_string(value: &str, config: &ModelConfig) -> Result<()> {
    if value.chars().count() > MAX_STRING_LENGTH {
        return Err(Error::invalid_primitive(
            "string",
            value,
            format!("length is greater than maximum allowed length: {MAX_STRING_LENGTH}"),
        ));
    }

    let mut non_whitespace = 0usize;
    for ch in value.chars() {
        if !ch.is_whitespace() {
            check_control_char("string", value, ch, config)?;
            non_whitespace += 1;
        } else if !matches!(ch, ' ' | '\t' | '\r' | '\n') {
            return Err(Error::invalid_primitive(
                "string",
                value,
                r"is not valid with respect to pattern: [ \r\n\t\S]+",
            ));
        }
    }

    if non_whitespace == 0 {
        return Err(Error::invalid_primitive(
            "string",
            value,
            "must contain at least one non-whitespace character",
        ));
    }
    Ok(())
}

pub(crate) fn check_element_id(value: &str, config: &ModelConfig) -> Result<()> {
    check_string(value, config)
}

fn check_code(value: &str, config: &ModelConfig) -> Result<()> {
    let first = value.chars().next();
    let last = value.chars().next_back();
    match (first, last) {
        (Some(f), Some(l)) if !f.is_whitespace() && !l.is_whitespace() => {}
        _ => {
            return Err(Error::invalid_primitive(
                "code",
                value,
                "must begin and end with a non-whitespace character",
            ))
        }
    }

    let mut previous_is_space = false;
    for ch in value.chars() {
        if ch.is_whitespace() {
            if ch != ' ' {
                return Err(Error::invalid_primitive(
                    "code",
                    value,
                    "must not contain whitespace other than a single space",
                ));
            }
            if previous_is_space {
                return Err(Error::invalid_primitive(
                    "code",
                    value,
                    "must not contain consecutive spaces",
                ));
            }
            previous_is_space = true;
        } else {
            check_control_char("code", value, ch, config)?;
            previous_is_space = false;
        }
    }
    Ok(())
}

fn check_id(value: &str, _config: &ModelConfig) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid_primitive("id", value, "must not be empty"));
    }
    if value.len() > MAX_ID_LENGTH {
        return Err(Error::invalid_primitive(
            "id",
            value,
            format!("length is greater than maximum allowed length: {MAX_ID_LENGTH}"),
        ));
    }
    if let Some(ch) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '.'))
    {
        return Err(Error::invalid_primitive(
            "id",
            value,
            format!("contains invalid character '{ch}'"),
        ));
    }
    Ok(())
}

fn check_uri(value: &str, _config: &ModelConfig) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid_primitive("uri", value, "must not be empty"));
    }
    if value.len() > MAX_STRING_LENGTH {
        return Err(Error::invalid_primitive(
            "uri",
            value,
            format!("length is greater than maximum allowed length: {MAX_STRING_LENGTH}"),
        ));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(Error::invalid_primitive(
            "uri",
            value,
            "must not contain whitespace",
        ));
    }
    Ok(())
}

fn date_time_pattern() -> &'static Regex {
    static DATE_TIME_RE: OnceLock<Regex> = OnceLock::new();
    DATE_TIME_RE.get_or_init(|| {
        Regex::new(
            r"^([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1])(T([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]{1,9})?(Z|(\+|-)((0[0-9]|1[0-3]):[0-5][0-9]|14:00)))?)?)?$",
        )
        .expect("dateTime regex must compile")
    })
}

fn instant_pattern() -> &'static Regex {
    static INSTANT_RE: OnceLock<Regex> = OnceLock::new();
    INSTANT_RE.get_or_init(|| {
        Regex::new(
            r"^([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)-(0[1-9]|1[0-2])-(0[1-9]|[1-2][0-9]|3[0-1])T([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]{1,9})?(Z|(\+|-)((0[0-9]|1[0-3]):[0-5][0-9]|14:00))$",
        )
        .expect("instant regex must compile")
    })
}

/// Full dates and date-times must also name a real calendar day.
fn check_calendar(kind: &'static str, value: &str) -> Result<()> {
    let parsed = match value.len() {
        0..=9 => return Ok(()),
        10 => NaiveDate::parse_from_str(value, "%Y-%m-%d").map(|_| ()),
        _ => chrono::DateTime::parse_from_rfc3339(value).map(|_| ()),
    };
    parsed.map_err(|e| {
        Error::invalid_primitive(kind, value, format!("is not a valid calendar date: {e}"))
    })
}

fn check_date_time(value: &str, _config: &ModelConfig) -> Result<()> {
    if !date_time_pattern().is_match(value) {
        return Err(Error::invalid_primitive(
            "dateTime",
            value,
            "is not a valid FHIR dateTime",
        ));
    }
    check_calendar("dateTime", value)
}

fn check_instant(value: &str, _config: &ModelConfig) -> Result<()> {
    if !instant_pattern().is_match(value) {
        return Err(Error::invalid_primitive(
            "instant",
            value,
            "is not a valid FHIR instant",
        ));
    }
    check_calendar("instant", value)
}

fn check_base64(value: &str, _config: &ModelConfig) -> Result<()> {
    let compact: Vec<u8> = value
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if compact.is_empty() || compact.len() % 4 != 0 {
        return Err(Error::invalid_primitive(
            "base64Binary",
            value,
            format!("invalid base64 length: {}", compact.len()),
        ));
    }

    let padding = compact.iter().rev().take_while(|b| **b == b'=').count();
    if padding > 2 {
        return Err(Error::invalid_primitive(
            "base64Binary",
            value,
            "too much padding",
        ));
    }
    let body = &compact[..compact.len() - padding];
    if let Some(b) = body
        .iter()
        .find(|b| !(b.is_ascii_alphanumeric() || **b == b'+' || **b == b'/'))
    {
        return Err(Error::invalid_primitive(
            "base64Binary",
            value,
            format!("invalid base64 character '{}'", *b as char),
        ));
    }
    Ok(())
}

fn check_xhtml(value: &str, _config: &ModelConfig) -> Result<()> {
    let trimmed = value.trim();
    let opens_div = trimmed
        .strip_prefix("<div")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|ch| ch == '>' || ch.is_whitespace());
    if !opens_div || !trimmed.ends_with("</div>") {
        return Err(Error::invalid_primitive(
            "xhtml",
            value,
            "must be a single <div> element",
        ));
    }
    if trimmed.to_ascii_lowercase().contains("<script") {
        return Err(Error::invalid_primitive(
            "xhtml",
            value,
            "must not contain script elements",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_rules() {
        assert!(FhirString::new("Example guide").is_ok());
        assert!(FhirString::new("line one\nline two").is_ok());
        assert!(FhirString::new("   ").is_err());
        assert!(FhirString::new("").is_err());
        assert!(FhirString::new("bell\u{7}").is_err());
    }

    #[test]
    fn test_control_chars_can_be_allowed() {
        let config = ModelConfig {
            check_control_chars: false,
            ..ModelConfig::default()
        };
        assert!(FhirString::with_config("bell\u{7}", &config).is_ok());
    }

    #[test]
    fn test_code_rules() {
        assert!(Code::new("active").is_ok());
        assert!(Code::new("two words").is_ok());
        assert!(Code::new(" leading").is_err());
        assert!(Code::new("trailing ").is_err());
        assert!(Code::new("double  space").is_err());
        assert!(Code::new("tab\there").is_err());
    }

    #[test]
    fn test_id_rules() {
        assert!(Id::new("example.ig").is_ok());
        assert!(Id::new("hl7.fhir-us.core").is_ok());
        assert!(Id::new("").is_err());
        assert!(Id::new("has space").is_err());
        assert!(Id::new("a".repeat(65)).is_err());

        let err = Id::new("under_score").unwrap_err();
        assert!(err.to_string().contains("invalid character '_'"));
    }

    #[test]
    fn test_uri_rules() {
        assert!(Uri::new("http://example.org/ig").is_ok());
        assert!(Canonical::new("http://hl7.org/fhir/StructureDefinition/Patient|4.0.1").is_ok());
        assert!(Url::new("http://example.org/a b").is_err());
        assert!(Uri::new("").is_err());
    }

    #[test]
    fn test_date_time_rules() {
        assert!(DateTime::new("2021").is_ok());
        assert!(DateTime::new("2021-03").is_ok());
        assert!(DateTime::new("2021-03-14").is_ok());
        assert!(DateTime::new("2021-03-14T10:15:00Z").is_ok());
        assert!(DateTime::new("2021-03-14T10:15:00.123+05:30").is_ok());
        assert!(DateTime::new("2021-13-01").is_err());
        assert!(DateTime::new("2021-03-14T10:15").is_err());
    }

    #[test]
    fn test_date_time_must_exist() {
        assert!(DateTime::new("2020-02-29").is_ok());
        assert!(DateTime::new("2021-02-29").is_err());
        assert!(DateTime::new("2021-02-30").is_err());
        assert!(DateTime::new("2021-04-31T10:00:00Z").is_err());
        assert!(Instant::new("2021-02-30T00:00:00Z").is_err());
        assert!(Instant::new("2024-02-29T23:59:59.5+14:00").is_ok());

        let err = DateTime::new("2021-04-31").unwrap_err();
        assert!(err.to_string().contains("calendar date"));
    }

    #[test]
    fn test_xhtml_rules() {
        assert!(Xhtml::new("<div xmlns=\"http://www.w3.org/1999/xhtml\">Guide</div>").is_ok());
        assert!(Xhtml::new("<div>Guide</div>").is_ok());
        assert!(Xhtml::new("<divx>Guide</divx>").is_err());
        assert!(Xhtml::new("<div>Guide").is_err());
        assert!(Xhtml::new("<div><script>alert(1)</script></div>").is_err());
        assert!(Xhtml::new("<p>Guide</p>").is_err());
    }

    #[test]
    fn test_element_id_rules() {
        let config = ModelConfig::default();
        assert!(check_element_id("page-1", &config).is_ok());
        assert!(check_element_id("", &config).is_err());
        assert!(check_element_id("bad\u{1}id", &config).is_err());
    }

    #[test]
    fn test_instant_requires_time_zone() {
        assert!(Instant::new("2021-03-14T10:15:00Z").is_ok());
        assert!(Instant::new("2021-03-14T10:15:00").is_err());
        assert!(Instant::new("2021-03-14").is_err());
    }

    #[test]
    fn test_base64_rules() {
        assert!(Base64Binary::new("aGVsbG8=").is_ok());
        assert!(Base64Binary::new("aGVs bG8=").is_ok());
        assert!(Base64Binary::new("aGVsbG8").is_err());
        assert!(Base64Binary::new("a===").is_err());
        assert!(Base64Binary::new("aGV*bG8=").is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let uri: Uri = "http://example.org".parse().unwrap();
        assert_eq!(uri.to_string(), "http://example.org");
        assert_eq!(uri.as_str(), "http://example.org");
        assert_eq!(Uri::KIND, "uri");
    }
}
