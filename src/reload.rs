//! Reload of view parameters into a [`DisplayState`].

use std::fs;
use std::io::{self, Write};

use tracing::{debug, info};

use crate::config::ReloadConfig;
use crate::errors::ReloadError;
use crate::parser::parse_view_data;
use crate::report::render_report;
use crate::state::DisplayState;

/// Reads the view data file selected by a [`ReloadConfig`] and publishes it.
///
/// Calls are synchronous and only ever touch the state they are handed.
#[derive(Clone, Debug, Default)]
pub struct ParameterReloader {
    /// Settings for every reload performed by this instance.
    config: ReloadConfig,
}

impl ParameterReloader {
    /// Create a reloader for the supplied configuration.
    #[must_use]
    pub fn new(config: ReloadConfig) -> Self {
        Self { config }
    }

    /// Configuration used by this reloader.
    #[must_use]
    pub fn config(&self) -> &ReloadConfig {
        &self.config
    }

    /// Parse the view data file and undo the coordinate rescaling.
    ///
    /// Displacement extrema are divided by the rescale factor. Stress, strain
    /// and viewport values are returned as written.
    ///
    /// # Errors
    ///
    /// Returns [`ReloadError::InvalidRescale`] for a zero or non-finite rescale
    /// factor, [`ReloadError::FileNotFound`] when the file cannot be opened or
    /// read, and [`ReloadError::MalformedRecord`] when its contents do not parse.
    pub fn load(&self) -> Result<DisplayState, ReloadError> {
        let rescale = self.config.coord_rescale;
        if !rescale.is_finite() || rescale == 0.0 {
            return Err(ReloadError::InvalidRescale(rescale));
        }

        let path = self.config.data_path();
        info!(path = %path.display(), element = ?self.config.element, "reloading view parameters");
        let bytes =
            fs::read(&path).map_err(|source| ReloadError::FileNotFound { path, source })?;

        // Header lines are never inspected, so stray non-UTF-8 bytes there are
        // harmless; in a data record they fail the field parse instead.
        let text = String::from_utf8_lossy(&bytes);
        let mut state = parse_view_data(&text)?;
        state.displacement = state.displacement.scaled_down(rescale);
        debug!(rescale, "rescaled displacement extrema");
        Ok(state)
    }

    /// Replace `state` with the contents of the view data file and print the
    /// summary report to standard output.
    ///
    /// `state` is left untouched when the file is missing or malformed.
    ///
    /// # Errors
    ///
    /// See [`ParameterReloader::load`]. [`ReloadError::Report`] is returned if
    /// standard output cannot be written.
    ///
    /// # Examples
    /// ```no_run
    /// use femview::{DisplayState, ParameterReloader, ReloadConfig};
    ///
    /// let reloader = ParameterReloader::new(ReloadConfig::default());
    /// let mut state = DisplayState::default();
    /// reloader.reload(&mut state)?;
    /// # Ok::<(), femview::ReloadError>(())
    /// ```
    pub fn reload(&self, state: &mut DisplayState) -> Result<(), ReloadError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.reload_to(state, &mut handle)
    }

    /// Same as [`ParameterReloader::reload`] but writes the report to `out`.
    ///
    /// # Errors
    ///
    /// See [`ParameterReloader::load`]. [`ReloadError::Report`] is returned if
    /// `out` fails, in which case `state` has already been replaced.
    pub fn reload_to<W: Write>(
        &self,
        state: &mut DisplayState,
        out: &mut W,
    ) -> Result<(), ReloadError> {
        *state = self.load()?;
        info!("view parameters reloaded");

        let report = render_report(state, self.config.coord_rescale);
        out.write_all(report.as_bytes())
            .and_then(|()| out.flush())
            .map_err(ReloadError::Report)
    }
}
