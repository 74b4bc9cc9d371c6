/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Barcode renderer interface.
//!
//! Turning the encoded payload into a scannable image is delegated to an
//! external collaborator. This module defines the seam: implement
//! [`ImageRenderer`] with any QR library and feed it the encoded text.

use thiserror::Error;

/// Errors reported by an image renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The rendering backend rejected the payload.
    #[error("render failed: {0}")]
    Backend(String),
}

impl RenderError {
    /// Creates a backend error from any displayable cause.
    #[must_use]
    pub fn backend(cause: impl std::fmt::Display) -> Self {
        Self::Backend(cause.to_string())
    }
}

/// Interface for rendering an encoded payload as a barcode image.
///
/// Implementations receive the complete checksummed payload text and return
/// the binary image bytes in whatever format they produce (PNG, SVG, ...).
pub trait ImageRenderer {
    /// Renders the payload as an image.
    ///
    /// # Arguments
    /// * `payload` - The encoded, checksummed payload text
    ///
    /// # Errors
    /// Returns [`RenderError`] if the backend cannot produce an image.
    fn render(&self, payload: &str) -> Result<Vec<u8>, RenderError>;
}

/// Default renderer that produces no image.
#[derive(Debug, Default)]
pub struct NoOpRenderer;

impl ImageRenderer for NoOpRenderer {
    fn render(&self, _payload: &str) -> Result<Vec<u8>, RenderError> {
        Ok(Vec::new())
    }
}
