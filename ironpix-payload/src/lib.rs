/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # IronPix Payload
//!
//! High-level PIX payload construction for the IronPix BR Code encoder.
//!
//! This crate assembles the canonical BR Code field tree from application
//! parameters and exposes the renderer seam for downstream barcode image
//! generation.

pub mod builder;
pub mod render;

pub use builder::{
    AUTO_REFERENCE_LABEL, COUNTRY_BR, CURRENCY_BRL, DEFAULT_MCC, PIX_GUI, PixPayload,
};
pub use render::{ImageRenderer, NoOpRenderer, RenderError};
