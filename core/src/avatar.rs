use alloc::string::String;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvatarState {
    /// No custom asset configured, the built-in visual is used.
    Default,
    Loading,
    Loaded,
    /// Load failed, the built-in visual is used.
    Failed,
}

/// Custom visual for the player token. The engine only records whether one is
/// configured and loaded, drawing it is up to the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    asset: Option<String>,
    state: AvatarState,
}

impl Avatar {
    pub const fn builtin() -> Self {
        Self {
            asset: None,
            state: AvatarState::Default,
        }
    }

    pub fn custom(asset: impl Into<String>) -> Self {
        Self {
            asset: Some(asset.into()),
            state: AvatarState::Loading,
        }
    }

    pub fn asset(&self) -> Option<&str> {
        self.asset.as_deref()
    }

    pub const fn state(&self) -> AvatarState {
        self.state
    }

    pub fn mark_loaded(&mut self) {
        if self.asset.is_some() {
            self.state = AvatarState::Loaded;
        }
    }

    pub fn mark_failed(&mut self) {
        if let Some(asset) = &self.asset {
            log::warn!("Could not load avatar {:?}, using built-in visual", asset);
            self.state = AvatarState::Failed;
        }
    }

    pub const fn uses_custom(&self) -> bool {
        matches!(self.state, AvatarState::Loaded)
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::builtin()
    }
}
