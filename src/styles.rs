//! Fixed style-preset catalog and grid-shape table.
//!
//! Both catalogs are closed sets known at build time, so they are plain
//! static tables rather than anything dynamically dispatched. Style lookup
//! is strict (a bad name is an error); grid lookup is lenient (a bad name
//! falls back to a single tile) so stale UI values keep working.

use serde::{Deserialize, Serialize};

/// Substitution slot consumed by the user prompt. Every template carries
/// exactly one of these.
pub const PROMPT_SLOT: &str = "{prompt}";

/// The identity preset: no prompt augmentation, no negative prompt.
pub const PASS_THROUGH_STYLE: &str = "Style Zero";

pub const DEFAULT_STYLE: &str = PASS_THROUGH_STYLE;
pub const DEFAULT_GRID_SIZE: &str = "1x1";

/// Named pair of a positive-prompt wrapper and a fixed negative prompt,
/// applied uniformly to whatever the user typed.
#[derive(Debug, Clone, Serialize)]
pub struct StylePreset {
    pub name: &'static str,
    pub prompt_template: &'static str,
    pub negative_prompt: &'static str,
}

impl StylePreset {
    /// Substitute the user prompt into the template's slot, exactly once.
    pub fn apply(&self, prompt: &str) -> String {
        self.prompt_template.replacen(PROMPT_SLOT, prompt, 1)
    }
}

pub const STYLE_PRESETS: &[StylePreset] = &[
    StylePreset {
        name: "3840 x 2160",
        prompt_template: "hyper-realistic 8K image of {prompt}. ultra-detailed, lifelike, high-resolution, sharp, vibrant colors, photorealistic",
        negative_prompt: "cartoonish, low resolution, blurry, simplistic, abstract, deformed, ugly",
    },
    StylePreset {
        name: "2560 x 1440",
        prompt_template: "hyper-realistic 4K image of {prompt}. ultra-detailed, lifelike, high-resolution, sharp, vibrant colors, photorealistic",
        negative_prompt: "cartoonish, low resolution, blurry, simplistic, abstract, deformed, ugly",
    },
    StylePreset {
        name: "HD+",
        prompt_template: "hyper-realistic 2K image of {prompt}. ultra-detailed, lifelike, high-resolution, sharp, vibrant colors, photorealistic",
        negative_prompt: "cartoonish, low resolution, blurry, simplistic, abstract, deformed, ugly",
    },
    StylePreset {
        name: "Style Zero",
        prompt_template: "{prompt}",
        negative_prompt: "",
    },
];

/// Exact-name lookup. Unknown names are the caller's problem.
pub fn find_style(name: &str) -> Option<&'static StylePreset> {
    STYLE_PRESETS.iter().find(|preset| preset.name == name)
}

pub fn style_names() -> Vec<&'static str> {
    STYLE_PRESETS.iter().map(|preset| preset.name).collect()
}

/// How many generated tiles go across and down one composed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub columns: u32,
    pub rows: u32,
}

impl GridShape {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    pub fn image_count(&self) -> u32 {
        self.columns * self.rows
    }
}

pub const GRID_SHAPES: &[(&str, GridShape)] = &[
    ("2x1", GridShape::new(2, 1)),
    ("1x2", GridShape::new(1, 2)),
    ("2x2", GridShape::new(2, 2)),
    ("2x3", GridShape::new(2, 3)),
    ("3x2", GridShape::new(3, 2)),
    ("1x1", GridShape::new(1, 1)),
];

pub const DEFAULT_GRID: GridShape = GridShape::new(1, 1);

/// Lenient lookup: unknown names degrade to a single tile instead of
/// failing, so newer UI values remain usable against older builds.
pub fn grid_shape(name: &str) -> GridShape {
    GRID_SHAPES
        .iter()
        .find(|(shape_name, _)| *shape_name == name)
        .map(|(_, shape)| *shape)
        .unwrap_or(DEFAULT_GRID)
}

pub fn grid_names() -> Vec<&'static str> {
    GRID_SHAPES.iter().map(|(name, _)| *name).collect()
}
