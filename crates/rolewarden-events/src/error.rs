//! Error types for event dispatch.

/// Errors returned when attaching or detaching handlers.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// A handler with this name is already attached for this event.
    #[error("handler {0:?} is already registered")]
    DuplicateHandler(String),

    /// No handler with this name is attached for this event.
    #[error("handler {0:?} is not registered")]
    HandlerNotFound(String),

    /// The dispatcher has shut down and accepts no new handlers.
    #[error("dispatcher is closed")]
    Closed,
}
