use std::fmt;

/// Straight (non-premultiplied) RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Integer pixel rectangle, origin at the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Construct a rectangle from its origin and size.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of pixels covered.
    pub fn area(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Exclusive right edge, `None` on overflow.
    pub fn right(self) -> Option<u32> {
        self.x.checked_add(self.width)
    }

    /// Exclusive bottom edge, `None` on overflow.
    pub fn bottom(self) -> Option<u32> {
        self.y.checked_add(self.height)
    }

    /// Whether the rectangle lies fully inside a `width` x `height` image.
    pub fn fits_within(self, width: u32, height: u32) -> bool {
        matches!((self.right(), self.bottom()), (Some(r), Some(b)) if r <= width && b <= height)
    }
}

/// Character sex variant; selects the clean base image and the shoe-height table.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male base texture (`farmer_base`).
    Male,
    /// Female base texture (`farmer_girl_base`).
    Female,
}

impl Sex {
    /// Both variants, male first.
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Prefix used in asset keys and override file names.
    pub fn prefix(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Parse an exact `male` / `female` prefix.
    pub fn from_prefix(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            _ => None,
        }
    }

    /// Map a host-side "is male" flag.
    pub fn from_is_male(is_male: bool) -> Self {
        if is_male { Sex::Male } else { Sex::Female }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Discrete base-texture configuration: which face, nose, bottoms and shoes to splice in.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct AppearanceConfig {
    /// Face variant.
    #[serde(default)]
    pub face: u32,
    /// Nose variant.
    #[serde(default)]
    pub nose: u32,
    /// Bottoms sprite index within the bottoms sheet.
    #[serde(default)]
    pub bottoms: u32,
    /// Shoes variant.
    #[serde(default)]
    pub shoes: u32,
}

impl AppearanceConfig {
    /// Construct a configuration from its four components.
    pub const fn new(face: u32, nose: u32, bottoms: u32, shoes: u32) -> Self {
        Self {
            face,
            nose,
            bottoms,
            shoes,
        }
    }

    /// Components in key order: face, nose, bottoms, shoes.
    pub fn to_array(self) -> [u32; 4] {
        [self.face, self.nose, self.bottoms, self.shoes]
    }

    /// Inverse of [`AppearanceConfig::to_array`].
    pub fn from_array(v: [u32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
