use std::{fmt, str::FromStr};

/// Ready-made filter styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPreset {
    /// 80s neon look with scan lines.
    Synthwave,
    /// Cel-shaded Japanese animation style.
    Anime,
    /// Cross-processed film with vignetting.
    Lomo,
    /// Glitchy holographic projection.
    Hologram,
}

impl FilterPreset {
    /// Every preset, in display order.
    pub const ALL: [FilterPreset; 4] = [Self::Synthwave, Self::Anime, Self::Lomo, Self::Hologram];

    /// The filter instruction this preset stands for.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Synthwave => "Apply a vibrant 80s synthwave aesthetic with neon magenta and cyan glows, and subtle scan lines.",
            Self::Anime => "Give the image a vibrant Japanese anime style, with bold outlines, cel-shading, and saturated colors.",
            Self::Lomo => "Apply a Lomography-style cross-processing film effect with high-contrast, oversaturated colors, and dark vignetting.",
            Self::Hologram => "Transform the image into a futuristic holographic projection with digital glitch effects and chromatic aberration.",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Synthwave => "synthwave",
            Self::Anime => "anime",
            Self::Lomo => "lomo",
            Self::Hologram => "hologram",
        }
    }
}

impl fmt::Display for FilterPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(ToString::to_string).collect();
                format!("unknown preset {s:?}, expected one of: {}", names.join(", "))
            })
    }
}
