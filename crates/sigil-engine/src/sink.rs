//! Render sink seam - where the resolved resource leaves the engine
//!
//! The sink is the document-side collaborator: it owns the indicator slot
//! (and creates it on first use if the host document lacks one) and accepts
//! resource locators. It must be idempotent; the engine may hand it the
//! same resource repeatedly.

use thiserror::Error;

use sigil_core::IconResource;

/// Sink-side render failure.
///
/// Caught and logged by the engine; never propagated. A failed render
/// leaves the previously rendered resource in place.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("render sink failure: {0}")]
    Failed(String),
}

/// Target for resolved resources.
pub trait RenderSink {
    fn render(&mut self, resource: &IconResource) -> Result<(), RenderError>;
}

/// Sink that accepts everything and renders nothing. For headless hosts.
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _resource: &IconResource) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Sink that records what it was asked to render, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    rendered: Vec<IconResource>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    /// All resources handed to the sink so far, oldest first.
    pub fn rendered(&self) -> &[IconResource] {
        &self.rendered
    }

    /// The most recently rendered resource, if any.
    pub fn last(&self) -> Option<&IconResource> {
        self.rendered.last()
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, resource: &IconResource) -> Result<(), RenderError> {
        self.rendered.push(resource.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sink_accepts_everything() {
        let mut sink = NullSink;
        assert!(sink.render(&IconResource::empty()).is_ok());
        assert!(sink.render(&"anything.ico".into()).is_ok());
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.render(&"a".into()).unwrap();
        sink.render(&"b".into()).unwrap();
        sink.render(&"b".into()).unwrap();

        assert_eq!(sink.rendered().len(), 3);
        assert_eq!(sink.last(), Some(&"b".into()));
    }
}
