pub mod bar_chart_data;
pub mod chart_surface;
pub mod color_stops;
pub mod linear_gradient;
pub mod word_cloud_entry;
