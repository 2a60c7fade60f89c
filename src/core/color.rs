//! Colors and the palette they index into.
//!
//! A `Color` is an opaque index; the `Palette` gives each index a
//! human-readable name. The engine only compares colors, it never
//! interprets the names.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Index of a color in the game's palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    /// Create a new color index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw palette index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

/// Largest palette a `Color` can index.
pub const MAX_PALETTE: usize = u8::MAX as usize + 1;

/// Ordered list of distinct color names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    names: Vec<String>,
}

impl Palette {
    /// Create a palette from color names.
    ///
    /// Fails if the list is empty, has duplicates, or has more than
    /// [`MAX_PALETTE`] entries.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if names.len() > MAX_PALETTE {
            return Err(ConfigError::PaletteTooLarge(names.len()));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(ConfigError::DuplicateColor(name.clone()));
            }
        }

        Ok(Self { names })
    }

    /// Create an anonymous palette of `size` colors named "0", "1", ...
    pub fn with_size(size: usize) -> Result<Self, ConfigError> {
        Self::new((0..size).map(|i| i.to_string()))
    }

    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed palette; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check whether a color indexes into this palette.
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        color.index() < self.names.len()
    }

    /// Name of a color, if it is in range.
    #[must_use]
    pub fn name(&self, color: Color) -> Option<&str> {
        self.names.get(color.index()).map(String::as_str)
    }

    /// Iterate over every color in palette order.
    pub fn colors(&self) -> impl Iterator<Item = Color> {
        // len <= MAX_PALETTE, so every index fits in a u8
        (0..self.names.len()).map(|i| Color(i as u8))
    }
}

impl Default for Palette {
    /// The five colors of the classic board.
    fn default() -> Self {
        Self {
            names: ["red", "green", "blue", "yellow", "magenta"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = ConfigError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.names
    }
}
