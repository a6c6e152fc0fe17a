pub mod aggregate_source;
pub mod label_resolver;
pub mod rendering_surface;
