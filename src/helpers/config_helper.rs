use crate::config::constants::{
    DEFAULT_BAR_THICKNESS, DEFAULT_BASE_URL, DEFAULT_BORDER_RADIUS, DEFAULT_DATA_DIR,
    DEFAULT_GRADIENT_END, DEFAULT_GRADIENT_START, DEFAULT_TIMEOUT_SECS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn default_data_dir() -> String {
        DEFAULT_DATA_DIR.to_string()
    }

    pub fn default_bar_thickness() -> u32 {
        DEFAULT_BAR_THICKNESS
    }

    pub fn default_border_radius() -> u32 {
        DEFAULT_BORDER_RADIUS
    }

    pub fn default_gradient_start() -> String {
        DEFAULT_GRADIENT_START.to_string()
    }

    pub fn default_gradient_end() -> String {
        DEFAULT_GRADIENT_END.to_string()
    }
}
