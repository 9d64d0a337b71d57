//! Generative photo edits: localized edits, global filters and logo swaps.

mod interpreter;
mod presets;
mod prompts;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    client::{ContentGenerator, GenerativeModel},
    config::Config,
    error::EditError,
    image::{encode_image, DataUrl, ImageResource},
    models::{Part, Request},
};

pub use interpreter::interpret_response;
pub use presets::FilterPreset;

/// Pixel coordinates a localized edit focuses on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotspot {
    /// Horizontal position
    pub x: u32,
    /// Vertical position
    pub y: u32,
}

impl Hotspot {
    /// Creates a hotspot at `(x, y)`.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// The kind of edit that produced a response, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// A localized edit around a hotspot.
    Edit,
    /// A filter applied to the whole image.
    Filter,
    /// A logo replacement using a second image.
    LogoSwap,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edit => write!(f, "edit"),
            Self::Filter => write!(f, "filter"),
            Self::LogoSwap => write!(f, "logo swap"),
        }
    }
}

/// Runs photo edits against a content generator.
///
/// Each call encodes its images, sends exactly one request and interprets the
/// response. Calls share no state and may run concurrently.
#[derive(Debug, Clone)]
pub struct PhotoEditor<G = GenerativeModel> {
    generator: G,
}

impl PhotoEditor<GenerativeModel> {
    /// Creates an editor talking to the Gemini API with the given configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(GenerativeModel::from_config(config))
    }
}

impl<G: ContentGenerator> PhotoEditor<G> {
    /// Creates an editor on top of any content generator.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// The underlying content generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Performs a natural, localized edit around `hotspot`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::Encoding`] without contacting the service if the
    /// image cannot be encoded, and any other [`EditError`] the response maps to.
    pub async fn edit_image(
        &self,
        image: &ImageResource,
        prompt: &str,
        hotspot: Hotspot,
    ) -> Result<DataUrl, EditError> {
        log::info!("Starting generative edit at ({}, {})", hotspot.x, hotspot.y);
        let image = encode_image(image).await?;

        let request = Request::image_edit([
            Part::from(image),
            Part::text(prompts::localized_edit(prompt, hotspot)),
        ]);
        self.run(request, Operation::Edit).await
    }

    /// Applies a stylistic filter to the whole image.
    ///
    /// # Errors
    ///
    /// See [`PhotoEditor::edit_image`].
    pub async fn apply_filter(
        &self,
        image: &ImageResource,
        prompt: &str,
    ) -> Result<DataUrl, EditError> {
        log::info!("Starting generative filter application");
        let image = encode_image(image).await?;

        let request = Request::image_edit([
            Part::from(image),
            Part::text(prompts::global_filter(prompt)),
        ]);
        self.run(request, Operation::Filter).await
    }

    /// Applies one of the ready-made filter styles.
    ///
    /// # Errors
    ///
    /// See [`PhotoEditor::edit_image`].
    pub async fn apply_filter_preset(
        &self,
        image: &ImageResource,
        preset: FilterPreset,
    ) -> Result<DataUrl, EditError> {
        log::info!("Applying {preset} filter preset");
        self.apply_filter(image, preset.prompt()).await
    }

    /// Replaces the footer logo of `image` with `logo`.
    ///
    /// # Errors
    ///
    /// See [`PhotoEditor::edit_image`]. Both images are encoded before anything
    /// is sent.
    pub async fn swap_logo(
        &self,
        image: &ImageResource,
        logo: &ImageResource,
    ) -> Result<DataUrl, EditError> {
        log::info!("Starting logo swap");
        let image = encode_image(image).await?;
        let logo = encode_image(logo).await?;

        let request = Request::image_edit([
            Part::from(image),
            Part::from(logo),
            Part::text(prompts::logo_swap()),
        ]);
        self.run(request, Operation::LogoSwap).await
    }

    async fn run(&self, request: Request, operation: Operation) -> Result<DataUrl, EditError> {
        log::debug!("Sending {operation} request to the model");
        let response = self.generator.generate_content(request).await?;
        log::debug!(
            "Received response from model {} for {operation} ({} tokens)",
            response.model_version.as_deref().unwrap_or("unknown"),
            response
                .usage_metadata
                .as_ref()
                .map_or(0, |usage| usage.total_token_count)
        );
        interpret_response(&response, operation)
    }
}
