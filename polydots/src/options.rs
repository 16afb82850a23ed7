use crate::geometry::{limits, tolerance};
use serde::{Deserialize, Serialize};

/// What to do with path commands other than `M`, `L` and `Z`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandPolicy {
    #[default]
    Reject,
    Skip,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleOptions {
    pub unknown_commands: CommandPolicy,
    pub pick_radius: f32,
}

impl Default for PuzzleOptions {
    fn default() -> Self {
        PuzzleOptions {
            unknown_commands: CommandPolicy::Reject,
            pick_radius: tolerance::PICK_RADIUS,
        }
    }
}

impl PuzzleOptions {
    pub fn validate(&self) -> Result<(), (&'static str, String)> {
        if !limits::in_pick_bounds(self.pick_radius) {
            return Err((
                "out_of_range",
                format!("pick_radius must be in (0, {}]", limits::PICK_RADIUS_MAX),
            ));
        }
        Ok(())
    }

    pub fn from_json_value(v: serde_json::Value) -> Result<Self, (&'static str, String)> {
        let opts: PuzzleOptions =
            serde_json::from_value(v).map_err(|e| ("invalid_options", e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }
}
