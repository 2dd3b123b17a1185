//! Resource parsing and validation.
//!
//! ## Submodules
//!
//! - [`json`]: JSON resources, deserialized with serde
//! - [`flat`]: flatbuffer resources, verified before any field is read
//!
//! Both paths validate everything up front and either return a complete
//! [`Pipeline`] or an error; nothing is half-loaded.

pub mod flat;
pub mod json;

use crate::core::{PipelineError, PipelineResult};
use crate::pipeline::Pipeline;

/// Parse a resource buffer into a pipeline for `locale`.
///
/// Buffers carrying the flatbuffer file identifier are parsed as
/// flatbuffers; anything else is parsed as JSON.
///
/// # Errors
/// - `InvalidResource` if the buffer is empty
/// - any validation error of [`json::parse`] or [`flat::parse`]
pub fn load_pipeline(buffer: &[u8], locale: &str) -> PipelineResult<Pipeline> {
    if buffer.is_empty() {
        return Err(PipelineError::InvalidResource("empty buffer".to_string()));
    }
    if flat::is_flatbuffer(buffer) {
        flat::parse(buffer, locale)
    } else {
        json::parse(buffer, locale)
    }
}

/// Compare a resource's locale against the runtime one, ignoring ASCII case.
pub(crate) fn check_locale(expected: &str, actual: &str) -> PipelineResult<()> {
    if actual.is_empty() {
        return Err(PipelineError::MissingField("locale".to_string()));
    }
    if !expected.eq_ignore_ascii_case(actual) {
        return Err(PipelineError::LocaleMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_locale() {
        assert!(check_locale("en", "en").is_ok());
        assert!(check_locale("en", "EN").is_ok());
        assert!(matches!(
            check_locale("en", "fr"),
            Err(PipelineError::LocaleMismatch { .. })
        ));
        assert!(matches!(
            check_locale("en", ""),
            Err(PipelineError::MissingField(_))
        ));
    }

    #[test]
    fn test_rejects_empty_buffer() {
        assert!(matches!(
            load_pipeline(&[], "en"),
            Err(PipelineError::InvalidResource(_))
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(load_pipeline(b"null", "en").is_err());
        assert!(load_pipeline(&[0xff, 0x00, 0x13], "en").is_err());
    }
}
