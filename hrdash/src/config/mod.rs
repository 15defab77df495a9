mod errors;
mod storage;

pub(crate) use errors::ConfigError;
use serde::{Deserialize, Serialize};
pub(crate) use storage::load_initial_config;

use crate::menu::{DEFAULT_SECTION, SectionId, find_section};
use crate::shared::ui::theme::{ColorPalette, parse_hex_color};

/// Raw settings file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) initial_section: String,
    pub(crate) sidebar_open: bool,
    pub(crate) palette: ColorPalette,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_section: DEFAULT_SECTION.as_str().to_string(),
            sidebar_open: true,
            palette: ColorPalette::default(),
        }
    }
}

/// Validated settings ready for app initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedConfig {
    pub(crate) initial_section: SectionId,
    pub(crate) sidebar_open: bool,
    pub(crate) palette: ColorPalette,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            initial_section: DEFAULT_SECTION,
            sidebar_open: true,
            palette: ColorPalette::default(),
        }
    }
}

impl AppConfig {
    /// Validate raw settings against the menu tree and color syntax.
    pub(crate) fn resolve(self) -> Result<ResolvedConfig, ConfigError> {
        let initial_section =
            find_section(&self.initial_section).ok_or_else(|| {
                ConfigError::UnknownSection {
                    id: self.initial_section.clone(),
                }
            })?;

        if let Some((field, value)) = self
            .palette
            .entries()
            .into_iter()
            .find(|(_, value)| parse_hex_color(value).is_none())
        {
            return Err(ConfigError::InvalidColor {
                field,
                value: value.to_string(),
            });
        }

        Ok(ResolvedConfig {
            initial_section,
            sidebar_open: self.sidebar_open,
            palette: self.palette,
        })
    }
}
