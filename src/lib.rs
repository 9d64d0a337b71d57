#![deny(missing_docs)]

//! Generative photo editing on top of the Google Gemini image model.
//!
//! Images are sent inline with an instruction, and the model's answer is either
//! returned as a `data:` URL or classified into a diagnostic [`EditError`].

pub mod client;
pub mod config;
pub mod editor;
pub mod error;
pub mod image;
pub mod models;

pub use client::{ContentGenerator, GenerativeModel};
pub use config::Config;
pub use editor::{FilterPreset, Hotspot, Operation, PhotoEditor};
pub use error::{ApiError, EditError, EncodingError};
pub use self::image::{DataUrl, ImageResource};
