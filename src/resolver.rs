//! Style and parameter resolution.
//!
//! Turns the raw fields a UI collects into a fully-populated
//! [`GenerationRequest`] plus the effective seed. Runs before any backend
//! call so a bad style name never costs a generation.

use crate::{
    error::{GridError, Result},
    models::{GenerationRequest, InferenceInputs},
    styles,
};
use rand::Rng;

/// Largest accepted seed (32-bit signed max, the usual backend limit).
pub const MAX_SEED: u32 = i32::MAX as u32;

/// Tile edges are clamped to this range.
pub const MIN_IMAGE_SIZE: u32 = 512;
pub const MAX_IMAGE_SIZE: u32 = 1024;

/// Tile edges are snapped down to a multiple of this.
pub const SIZE_STEP: u32 = 32;

/// Resolve raw inputs using the process-wide random source.
pub fn resolve(inputs: &InferenceInputs) -> Result<(GenerationRequest, u32)> {
    resolve_with_rng(inputs, &mut rand::thread_rng())
}

/// Resolve raw inputs with an injected random source.
///
/// The seed is returned separately from the request so callers can echo it
/// back: re-submitting the echoed value with `randomize_seed` off rebuilds
/// the exact same request.
pub fn resolve_with_rng<R: Rng>(
    inputs: &InferenceInputs,
    rng: &mut R,
) -> Result<(GenerationRequest, u32)> {
    let preset = styles::find_style(&inputs.style)
        .ok_or_else(|| GridError::UnknownStyle(inputs.style.clone()))?;

    let prompt = preset.apply(&inputs.prompt);
    // The preset's fixed negative prompt always replaces the user-supplied
    // one; the pass-through preset carries an empty negative prompt, so user
    // negatives are discarded there too.
    let negative_prompt = preset.negative_prompt.to_string();

    let seed = if inputs.randomize_seed {
        rng.gen_range(0..=MAX_SEED)
    } else {
        inputs.seed.min(MAX_SEED)
    };

    // Unknown grid names degrade to a single tile, never an error.
    let grid = styles::grid_shape(&inputs.grid_size);

    let request = GenerationRequest {
        prompt,
        negative_prompt,
        seed,
        width: quantize_size(inputs.width),
        height: quantize_size(inputs.height),
        guidance_scale: inputs.guidance_scale,
        steps: inputs.steps.max(1),
        image_count: grid.image_count(),
        grid,
    };

    Ok((request, seed))
}

fn quantize_size(size: u32) -> u32 {
    let clamped = size.clamp(MIN_IMAGE_SIZE, MAX_IMAGE_SIZE);
    (clamped / SIZE_STEP) * SIZE_STEP
}
