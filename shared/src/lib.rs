pub mod constants;
pub mod display;
pub mod embed;
pub mod lead;
pub mod prize_catalog;
pub mod spin_engine;
pub mod wheel_config;
pub mod wheel_layout;
