// src/config/state.rs
use super::options::ClientOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// URL input field
    pub url_text: String,
    /// Word input field
    pub word_text: String,

    /// Word-count display is shown after a lookup, hidden when indexing starts
    pub word_count_visible: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            url_text: s!(),
            word_text: s!(),
            word_count_visible: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: ClientOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: ClientOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
