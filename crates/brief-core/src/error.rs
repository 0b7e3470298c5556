/// Errors raised when converting caller-supplied strings into typed values.
///
/// The parsers themselves never fail; these only surface at the edges where a
/// collaborator hands us a segment key, platform or age bracket by name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("unknown segment: {0}")]
    UnknownSegment(String),

    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("unknown age range: {0}")]
    UnknownAgeRange(String),
}
