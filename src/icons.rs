//! Icon library loaded from a directory of SVG files
//!
//! Only the configured directory is scanned (no recursion). Each icon is kept
//! as a `data:image/svg+xml;base64,...` URI, which is the value stored in
//! [`Flow::icon`](crate::model::Flow::icon).

use base64::{engine::general_purpose::STANDARD, Engine};
use std::path::{Path, PathBuf};

use crate::constants::{ICON_NONE, ICON_UNKNOWN};

const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("Failed to read icon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not an SVG document: {0}")]
    NotSvg(PathBuf),
}

/// A named SVG glyph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: String,
    pub data_uri: String,
}

impl Icon {
    /// Build an icon from raw SVG markup
    pub fn from_svg(name: impl Into<String>, svg: &[u8]) -> Self {
        Self {
            name: name.into(),
            data_uri: format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(svg)),
        }
    }

    /// Read an icon from an `.svg` file, named after the file stem
    pub fn from_file(path: &Path) -> Result<Self, IconError> {
        let bytes = std::fs::read(path).map_err(|source| IconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if !String::from_utf8_lossy(&bytes).contains("<svg") {
            return Err(IconError::NotSvg(path.to_path_buf()));
        }

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::from_svg(name, &bytes))
    }
}

/// Icons available for flows, sorted by name
#[derive(Debug, Clone, Default)]
pub struct IconLibrary {
    icons: Vec<Icon>,
}

impl IconLibrary {
    /// Load every `.svg` file in `dir`. A missing directory gives an empty
    /// library; files that are not SVG documents are skipped.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, IconError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            log::debug!("Icon directory {} not found, no icons loaded", dir.display());
            return Ok(Self::default());
        }

        let entries = std::fs::read_dir(dir).map_err(|source| IconError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut icons = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| IconError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?
                .path();

            let is_svg = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
            if !path.is_file() || !is_svg {
                continue;
            }

            match Icon::from_file(&path) {
                Ok(icon) => icons.push(icon),
                Err(e) => log::warn!("Skipping icon: {}", e),
            }
        }

        icons.sort_by(|a, b| a.name.cmp(&b.name));
        log::info!("Loaded {} icons from {}", icons.len(), dir.display());
        Ok(Self { icons })
    }

    pub fn from_icons(mut icons: Vec<Icon>) -> Self {
        icons.sort_by(|a, b| a.name.cmp(&b.name));
        Self { icons }
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Icon> {
        self.icons.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Icon> {
        self.icons.iter()
    }

    /// Position of the icon with the given data URI
    pub fn position(&self, data_uri: &str) -> Option<usize> {
        self.icons.iter().position(|icon| icon.data_uri == data_uri)
    }

    /// Name of the icon with the given data URI
    pub fn name_for(&self, data_uri: &str) -> Option<&str> {
        self.icons
            .iter()
            .find(|icon| icon.data_uri == data_uri)
            .map(|icon| icon.name.as_str())
    }

    /// Short text shown in place of a flow's icon
    pub fn label_for(&self, icon: Option<&str>) -> String {
        match icon {
            None => ICON_NONE.to_string(),
            Some(data_uri) => match self.name_for(data_uri) {
                Some(name) => format!("[{}]", name),
                None => ICON_UNKNOWN.to_string(),
            },
        }
    }
}
