// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Saved page the user points the extractor at
    pub page_path_text: String,

    /// Optional location override when the saved page carries no canonical URL
    pub page_url_text: String,

    pub out_dir_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 720,
            window_h: 560,
            page_path_text: s!(),
            page_url_text: s!(),
            out_dir_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState {
            out_dir_text: options.export.out_dir.to_string_lossy().into_owned(),
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
