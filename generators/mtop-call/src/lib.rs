//! Mtop call code generator.
//!
//! Turns a captured HTTP request into a JavaScript snippet invoking the
//! mtop RPC client: global-config assignments derived from the request
//! host, plus an `mtop.request` call carrying the typed request config.
//!
//! The pipeline is a handful of pure transformations (scalar type
//! coercion, body extraction, transient-key stripping, hostname
//! decomposition) feeding one fixed-shape template. Every generation
//! call is independent and stateless.

use mtopgen_sdk::prelude::*;
use serde_json::Value;

mod body;
mod domain;
mod normalize;
mod template;

pub use domain::{extract_global_config, GlobalConfig};
pub use normalize::{coerce_scalar_types, strip_transient_keys};

/// Registration metadata for [`MtopCallGenerator`].
pub const INFO: GeneratorInfo = GeneratorInfo {
    identifier: "dev.anuragsaini.MtopCallGenerator",
    title: "Mtop Call",
    file_extension: "js",
    language_highlighter: "javascript",
};

/// Generator producing mtop client call snippets.
#[derive(Debug, Clone, Copy, Default)]
pub struct MtopCallGenerator;

impl CodeGenerator for MtopCallGenerator {
    fn info(&self) -> &'static GeneratorInfo {
        &INFO
    }

    /// Render the snippet for the first captured request.
    ///
    /// `context` and `options` are host plumbing this generator ignores.
    fn generate(
        &self,
        _context: &GenerateContext,
        requests: &[RequestDescriptor],
        _options: &GenerateOptions,
    ) -> Result<String, GenerateError> {
        let request = requests.first().ok_or(GenerateError::NoRequest)?;

        // Config keys render in insertion order: type, passthrough
        // parameters, data.
        let mut request_config = serde_json::Map::new();
        let method = if request.method.is_empty() {
            "GET"
        } else {
            request.method.as_str()
        };
        request_config.insert("type".to_string(), Value::String(method.to_string()));
        if let Some(params) = &request.url_parameters {
            // The method always wins over a captured parameter named "type".
            request_config.extend(
                params
                    .iter()
                    .filter(|(key, _)| key.as_str() != "type")
                    .map(|(key, value)| (key.clone(), value.clone())),
            );
        }

        normalize::coerce_config_types(&mut request_config);
        request_config.insert("data".to_string(), body::extract_body(request)?);
        normalize::strip_transient_keys(&mut request_config);

        let global_config = domain::extract_global_config(&request.url_base)?;
        tracing::debug!(
            method = %method,
            main_domain = %global_config.main_domain,
            "rendering mtop call snippet"
        );

        template::render(&request_config, &global_config)
    }
}
