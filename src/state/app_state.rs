use crate::state::settings::RenderRequest;
use crate::state::theme::Theme;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Parameters the controls panel edits in place.
    pub request: RenderRequest,
    pub theme: Theme,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every parameter to its default, keeping the theme.
    pub fn reset_parameters(&mut self) {
        self.request = RenderRequest::default();
    }
}
