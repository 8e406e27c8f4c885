pub mod constants;
pub mod chain_config;
pub mod settings;
pub mod listing;
pub mod quantity;
pub mod price;
pub mod media;
pub mod claim;
pub mod lifecycle;
pub mod sdk;
pub mod bridge;
