//! # Framework Errors

/// Errors raised by the actor runtime itself, plus a box for entity errors.
///
/// Entity errors travel as `EntityError` and can be recovered with
/// `Box::<dyn Error>::downcast` on the client side.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
