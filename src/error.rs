use thiserror::Error;

/// Reasons a frame's visibility resolution can be skipped.
///
/// None of these are fatal: the systems log them and try again next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Exactly one of the top/bottom planes must be visible before labels are resolved.
    #[error("expected exactly one visible top/bottom plane, found {visible}")]
    MissingPrecondition { visible: usize },
}
