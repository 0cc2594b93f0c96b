pub mod algorithm;
pub mod colour_mapping;
pub mod julia_config;
