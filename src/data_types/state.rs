use serde::{Deserialize, Serialize};

/// Size of the host window, injected by the host instead of read ad hoc.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// Which bar receives the emphasis color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BarHighlight {
    /// The band whose range contains this value is emphasized.
    pub user_value: Option<f64>,
    /// Band currently under the pointer.
    pub hovered: Option<usize>,
}

impl BarHighlight {
    pub fn user_value(value: f64) -> Self {
        Self {
            user_value: Some(value),
            hovered: None,
        }
    }
}
