use crate::error::LoadError;
use crate::options::PuzzleOptions;
use crate::Puzzle;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    Pending,
    Ready,
    Failed,
}

/// Load lifecycle around a puzzle. Nothing is playable until the host
/// hands over the artwork; a failed load stays failed until the next
/// install.
#[derive(Clone, Debug, Default)]
pub struct Session {
    options: PuzzleOptions,
    puzzle: Option<Puzzle>,
    failure: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn with_options(options: PuzzleOptions) -> Result<Self, (&'static str, String)> {
        options.validate()?;
        Ok(Session { options, ..Session::default() })
    }

    pub fn options(&self) -> &PuzzleOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: PuzzleOptions) -> Result<(), (&'static str, String)> {
        options.validate()?;
        if let Some(p) = self.puzzle.as_mut() {
            p.set_pick_radius(options.pick_radius);
        }
        self.options = options;
        Ok(())
    }

    pub fn status(&self) -> LoadStatus {
        match (&self.puzzle, &self.failure) {
            (Some(_), _) => LoadStatus::Ready,
            (None, Some(_)) => LoadStatus::Failed,
            (None, None) => LoadStatus::Pending,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn install_svg(&mut self, svg: &str) -> Result<&Puzzle, LoadError> {
        match Puzzle::from_svg(svg, &self.options) {
            Ok(p) => {
                info!(vertices = p.vertex_count(), polygons = p.polygon_count(), "puzzle ready");
                self.failure = None;
                Ok(&*self.puzzle.insert(p))
            }
            Err(e) => {
                warn!(error = %e, "puzzle load failed");
                self.puzzle = None;
                self.failure = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Records a load failure reported by the host (e.g. the fetch failed).
    pub fn fail(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(%reason, "puzzle load failed");
        self.puzzle = None;
        self.failure = Some(reason);
    }

    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    pub fn puzzle_mut(&mut self) -> Option<&mut Puzzle> {
        self.puzzle.as_mut()
    }
}
