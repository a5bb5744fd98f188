use serde::Deserialize;
use serde_json::{Map, Value};

/// A captured HTTP request as handed over by the host application.
///
/// Field names follow the host's camelCase wire format. Optional fields
/// are simply absent for requests that do not carry them; generators
/// treat absence as an empty mapping, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestDescriptor {
    /// HTTP verb. The host may leave this empty for drafts.
    #[serde(default)]
    pub method: String,

    /// Full request URL, scheme included.
    #[serde(rename = "urlBase")]
    pub url_base: String,

    /// Query/form parameters, string-valued as captured off the wire.
    #[serde(rename = "urlParameters", default)]
    pub url_parameters: Option<Map<String, Value>>,

    /// Parsed JSON body, present for body-bearing methods.
    #[serde(rename = "jsonBody", default)]
    pub json_body: Option<Map<String, Value>>,
}

/// Opaque host context passed through to generators.
///
/// The current generators do not read it; it exists so the call boundary
/// matches what the host supplies.
#[derive(Debug, Clone, Default)]
pub struct GenerateContext;

/// Free-form options mapping supplied by the host alongside the requests.
pub type GenerateOptions = Map<String, Value>;

/// Static registration metadata describing one generator.
///
/// Exposed via [`crate::CodeGenerator::info`] so the invoking harness can
/// pull metadata explicitly instead of generators pushing themselves into
/// a global registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorInfo {
    /// Unique reverse-DNS identifier.
    pub identifier: &'static str,
    /// Human-readable title shown by the host.
    pub title: &'static str,
    /// File extension of the generated snippet, without the dot.
    pub file_extension: &'static str,
    /// Syntax-highlighting language tag for display.
    pub language_highlighter: &'static str,
}
