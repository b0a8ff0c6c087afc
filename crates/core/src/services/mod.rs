pub mod date_service;
pub mod duration_service;
pub mod grouping_service;
pub mod placeholder_service;
pub mod section_service;
pub mod stats_service;
