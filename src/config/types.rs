use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::carousel::{default_breakpoints, Breakpoint, Breakpoints, CarouselTiming};
use crate::ui::reveal::{RevealMotion, DEFAULT_THRESHOLD};

/// Environment variable that overrides `[admin] password`.
pub const ADMIN_PASSWORD_ENV: &str = "BUILDCHEM_ADMIN_PASSWORD";

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub admin: AdminConfig,
    pub carousel: CarouselConfig,
    pub testimonials: TestimonialsConfig,
    pub reveal: RevealConfig,
    pub preview: PreviewConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP server (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

/// Where content and uploaded media live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON snapshot of the content store. In-memory only when unset.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default = "default_media_dir")]
    pub media_dir: PathBuf,
    /// URL prefix under which `media_dir` is served.
    #[serde(default = "default_media_url_prefix")]
    pub media_url_prefix: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Admin endpoints are disabled when no password is configured.
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default = "default_carousel_interval_ms")]
    pub interval_ms: u64,
    #[serde(default = "default_resume_delay_ms")]
    pub resume_delay_ms: u64,
    #[serde(default = "default_breakpoints")]
    pub breakpoints: Vec<Breakpoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialsConfig {
    #[serde(default = "default_testimonials_interval_ms")]
    pub interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Visible fraction at which a block starts revealing.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Initial translate distance in px.
    #[serde(default = "default_offset")]
    pub offset: f32,
    #[serde(default = "default_scale")]
    pub scale: f32,
}

/// Terminal preview settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Pixels per terminal column when mapping widths onto breakpoints.
    #[serde(default = "default_column_width_px")]
    pub column_width_px: u32,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_media_dir() -> PathBuf {
    PathBuf::from("media")
}

fn default_media_url_prefix() -> String {
    "/media".to_string()
}

fn default_carousel_interval_ms() -> u64 {
    4000
}

fn default_resume_delay_ms() -> u64 {
    5000
}

fn default_testimonials_interval_ms() -> u64 {
    5000
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

fn default_transition_ms() -> u64 {
    700
}

fn default_offset() -> f32 {
    30.0
}

fn default_scale() -> f32 {
    0.92
}

fn default_column_width_px() -> u32 {
    10
}

fn default_tick_ms() -> u64 {
    100
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            media_dir: default_media_dir(),
            media_url_prefix: default_media_url_prefix(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_carousel_interval_ms(),
            resume_delay_ms: default_resume_delay_ms(),
            breakpoints: default_breakpoints(),
        }
    }
}

impl Default for TestimonialsConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_testimonials_interval_ms(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            transition_ms: default_transition_ms(),
            offset: default_offset(),
            scale: default_scale(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            column_width_px: default_column_width_px(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl AdminConfig {
    /// Password from the environment, falling back to the file value.
    /// Empty strings count as unset.
    pub fn effective_password(&self) -> Option<String> {
        std::env::var(ADMIN_PASSWORD_ENV)
            .ok()
            .filter(|p| !p.is_empty())
            .or_else(|| self.password.clone().filter(|p| !p.is_empty()))
    }
}

impl CarouselConfig {
    pub fn timing(&self) -> CarouselTiming {
        CarouselTiming {
            interval: Duration::from_millis(self.interval_ms),
            resume_delay: Duration::from_millis(self.resume_delay_ms),
        }
    }

    pub fn breakpoint_table(&self) -> Breakpoints {
        Breakpoints::new(self.breakpoints.clone())
    }
}

impl TestimonialsConfig {
    /// Testimonials show one at a time, so resuming after manual
    /// navigation waits a single interval.
    pub fn timing(&self) -> CarouselTiming {
        let interval = Duration::from_millis(self.interval_ms);
        CarouselTiming {
            interval,
            resume_delay: interval,
        }
    }
}

impl RevealConfig {
    pub fn motion(&self) -> RevealMotion {
        RevealMotion {
            offset: self.offset,
            scale: self.scale,
            duration: Duration::from_millis(self.transition_ms),
        }
    }
}

impl PreviewConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}
