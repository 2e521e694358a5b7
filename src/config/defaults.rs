use super::models::{LogLevel, PanelChoice};

pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    860.0
}

pub(crate) fn default_backend_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

pub(crate) fn default_request_timeout_secs() -> u64 {
    120
}

pub(crate) fn default_open_panel() -> PanelChoice {
    PanelChoice::Chat
}

pub(crate) fn default_log_level() -> LogLevel {
    LogLevel::Info
}
