pub mod category;
pub mod chart_orientation;
pub mod commands;
pub mod panel_status;
pub mod raw_key;
pub mod source_kind;
