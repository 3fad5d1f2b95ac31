//! Startup errors
//!
//! Only bootstrapping can fail. Once the loop runs, frame-level problems are
//! logged and the next frame tries again.

/// Failure while wiring the game into the page
#[derive(Debug, Clone, thiserror::Error)]
pub enum StartupError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    /// A required element id is missing from the page
    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("#{0} is not a canvas element")]
    NotACanvas(String),

    #[error("failed to create surface: {0}")]
    Surface(String),

    #[error("no suitable GPU adapter: {0}")]
    NoAdapter(String),

    #[error("failed to create device: {0}")]
    Device(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_element() {
        let err = StartupError::MissingElement("canvas".into());
        assert_eq!(err.to_string(), "element #canvas not found");
        let err = StartupError::NotACanvas("score".into());
        assert_eq!(err.to_string(), "#score is not a canvas element");
    }
}
