use crate::styles::{self, GridShape};
use serde::{Deserialize, Serialize};

/// Raw fields collected by a UI layer, one interaction per value set.
///
/// Field defaults mirror the demo UI so a bare `{"prompt": "..."}` body is a
/// complete request.
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceInputs {
    pub prompt: String,
    /// Honored only insofar as the chosen style allows: every preset carries
    /// its own fixed negative prompt that replaces this value (the
    /// pass-through preset's is empty).
    #[serde(default)]
    pub negative_prompt: String,
    #[serde(default = "default_seed")]
    pub seed: u32,
    #[serde(default)]
    pub randomize_seed: bool,
    #[serde(default = "default_dimension")]
    pub width: u32,
    #[serde(default = "default_dimension")]
    pub height: u32,
    #[serde(default = "default_guidance_scale")]
    pub guidance_scale: f32,
    #[serde(default = "default_steps")]
    pub steps: u32,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_grid_size")]
    pub grid_size: String,
}

fn default_seed() -> u32 {
    42
}

fn default_dimension() -> u32 {
    1024
}

fn default_guidance_scale() -> f32 {
    7.5
}

fn default_steps() -> u32 {
    10
}

fn default_style() -> String {
    styles::DEFAULT_STYLE.to_string()
}

fn default_grid_size() -> String {
    styles::DEFAULT_GRID_SIZE.to_string()
}

impl InferenceInputs {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            negative_prompt: String::new(),
            seed: default_seed(),
            randomize_seed: false,
            width: default_dimension(),
            height: default_dimension(),
            guidance_scale: default_guidance_scale(),
            steps: default_steps(),
            style: default_style(),
            grid_size: default_grid_size(),
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_grid_size(mut self, grid_size: impl Into<String>) -> Self {
        self.grid_size = grid_size.into();
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self.randomize_seed = false;
        self
    }

    pub fn with_random_seed(mut self) -> Self {
        self.randomize_seed = true;
        self
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_sampler(mut self, guidance_scale: f32, steps: u32) -> Self {
        self.guidance_scale = guidance_scale;
        self.steps = steps;
        self
    }
}

/// Fully-resolved generation request handed to the backend. Built fresh per
/// interaction; nothing is remembered across requests beyond the echoed seed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub seed: u32,
    pub width: u32,
    pub height: u32,
    pub guidance_scale: f32,
    pub steps: u32,
    pub image_count: u32,
    pub grid: GridShape,
}
