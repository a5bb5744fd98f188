//! SDK for building mtopgen code generators.
//!
//! Provides the `RequestDescriptor` type handed over by the host
//! application, the `CodeGenerator` trait every generator implements,
//! and its registration metadata.
//!
//! # Example
//!
//! ```ignore
//! use mtopgen_sdk::prelude::*;
//!
//! struct CurlGenerator;
//!
//! impl CodeGenerator for CurlGenerator {
//!     fn info(&self) -> &'static GeneratorInfo {
//!         &GeneratorInfo {
//!             identifier: "dev.example.CurlGenerator",
//!             title: "cURL",
//!             file_extension: "sh",
//!             language_highlighter: "shell",
//!         }
//!     }
//!
//!     fn generate(
//!         &self,
//!         _context: &GenerateContext,
//!         requests: &[RequestDescriptor],
//!         _options: &GenerateOptions,
//!     ) -> Result<String, GenerateError> {
//!         let request = requests.first().ok_or(GenerateError::NoRequest)?;
//!         Ok(format!("curl {}", request.url_base))
//!     }
//! }
//! ```

pub mod error;
pub mod types;

pub use error::GenerateError;
pub use types::{GenerateContext, GenerateOptions, GeneratorInfo, RequestDescriptor};

/// A host-invokable source-code generator.
///
/// The host calls [`CodeGenerator::info`] once to learn what the generator
/// produces, and [`CodeGenerator::generate`] per export. Generators are
/// stateless: every call is independent and must not retain anything
/// between invocations.
pub trait CodeGenerator {
    /// Static registration metadata consumed by the invoking harness.
    fn info(&self) -> &'static GeneratorInfo;

    /// Render a code snippet for the given requests.
    ///
    /// The host passes every captured request; generators that only support
    /// single-request output use the first entry. `context` and `options`
    /// carry host-side state a generator may ignore.
    fn generate(
        &self,
        context: &GenerateContext,
        requests: &[RequestDescriptor],
        options: &GenerateOptions,
    ) -> Result<String, GenerateError>;
}

pub mod prelude {
    pub use crate::error::GenerateError;
    pub use crate::types::*;
    pub use crate::CodeGenerator;
}
