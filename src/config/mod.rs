//! Site configuration loaded from `config.toml`.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    AdminConfig, CarouselConfig, Config, PreviewConfig, RevealConfig, ServerConfig, StorageConfig,
    TestimonialsConfig, ADMIN_PASSWORD_ENV,
};
