pub mod config;
pub mod export;

pub use config::SiteConfig;
pub use export::PrintAdapter;
