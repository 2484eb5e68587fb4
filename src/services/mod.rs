pub mod alert_service;
pub mod chart_service;
pub mod debounce_service;
pub mod export_service;
pub mod filter_service;
pub mod generator_service;
pub mod kpi_service;
pub mod system_theme_service;
pub mod theme_service;
pub mod url_state_service;
