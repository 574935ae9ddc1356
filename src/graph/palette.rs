use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// The reversed Cividis scale: light yellow for the root, darkening with depth.
pub const CIVIDIS_R: [&str; 18] = [
    "rgb(255,233,69)",
    "rgb(243,219,79)",
    "rgb(225,204,92)",
    "rgb(209,191,102)",
    "rgb(192,177,109)",
    "rgb(176,165,114)",
    "rgb(161,152,118)",
    "rgb(146,140,120)",
    "rgb(131,129,120)",
    "rgb(117,117,117)",
    "rgb(104,106,112)",
    "rgb(91,95,109)",
    "rgb(76,85,107)",
    "rgb(60,74,107)",
    "rgb(39,63,108)",
    "rgb(0,52,110)",
    "rgb(0,42,102)",
    "rgb(0,32,76)",
];

/// An ordered, non-empty list of node colors, applied cyclically by depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new<I, S>(colors: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// The color used for the root node.
    pub fn root(&self) -> &str {
        &self.colors[0]
    }

    /// The color for a node discovered at `depth`.
    pub fn for_depth(&self, depth: usize) -> &str {
        &self.colors[depth % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: CIVIDIS_R.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = ConfigError;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
