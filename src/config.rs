//! Configuration for a parameter reload.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Far clipping plane stored in the display state after a reload.
pub const INIT_FAR: f64 = -2.0;

/// Far clipping plane printed in the orthographic viewport line of the report.
///
/// This differs from [`INIT_FAR`]; both values are fixed display constants and
/// neither is read from the view data file.
pub const REPORT_FAR: f64 = 1000.0;

/// Element family the results were computed with.
///
/// The family only selects which view data file is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Four node quadrilateral elements.
    #[default]
    Quad,
    /// Three node triangle elements.
    Triangle,
}

impl ElementKind {
    /// Name of the view data file written for this element family.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            ElementKind::Quad => "qdview.dat",
            ElementKind::Triangle => "trview.dat",
        }
    }
}

/// Settings used by [`ParameterReloader`](crate::ParameterReloader).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReloadConfig {
    /// Element family, which selects the input file name.
    pub element: ElementKind,
    /// Directory containing the view data file.
    pub data_dir: PathBuf,
    /// Factor the displacements were multiplied by when the file was written.
    pub coord_rescale: f64,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            element: ElementKind::Quad,
            data_dir: PathBuf::from("."),
            coord_rescale: 1.0,
        }
    }
}

impl ReloadConfig {
    /// Replace the element family.
    #[must_use]
    pub fn with_element(mut self, element: ElementKind) -> Self {
        self.element = element;
        self
    }

    /// Replace the directory searched for the view data file.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.data_dir = data_dir.as_ref().to_path_buf();
        self
    }

    /// Replace the coordinate rescale factor.
    #[must_use]
    pub fn with_coord_rescale(mut self, coord_rescale: f64) -> Self {
        self.coord_rescale = coord_rescale;
        self
    }

    /// Full path of the view data file.
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use femview::{ElementKind, ReloadConfig};
    ///
    /// let config = ReloadConfig::default()
    ///     .with_element(ElementKind::Triangle)
    ///     .with_data_dir("results");
    /// assert_eq!(config.data_path(), Path::new("results").join("trview.dat"));
    /// ```
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.data_dir.join(self.element.file_name())
    }
}
