use serde::{Deserialize, Serialize};

use crate::Square;

/// A user intent forwarded by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    CellClicked { square: Square },
    StepSelected { step: usize },
}

impl Event {
    pub fn cell_clicked(square: Square) -> Self {
        Event::CellClicked { square }
    }

    pub fn step_selected(step: usize) -> Self {
        Event::StepSelected { step }
    }
}

impl std::str::FromStr for Event {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
