use std::collections::HashMap;
use std::env;
use std::time::Duration;
use lazy_static::lazy_static;

pub const FOLDER_NAMESPACE: &str = "2am"; // storage-side prefix for every logical folder
pub const DEFAULT_MAX_RESULTS: u32 = 30;
pub const MAX_RESULTS_CAP: u32 = 100;
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com";
pub const DEFAULT_PORT: u16 = 3001;

pub const KNOWN_PATHS: [&str; 3] = ["/api/images", "/api/emailjs-config", "/api/health"];

lazy_static! {
    // Legacy gallery names kept for older frontend links. Every entry resolves
    // to the same path the namespace prefix rule would produce.
    pub static ref FOLDER_ALIASES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("wedding", "2am/wedding");
        m.insert("outdoor", "2am/outdoor");
        m.insert("sport", "2am/sport");
        m.insert("event", "2am/event");
        m.insert("indoor", "2am/indoor");
        m.insert("home", "2am/home");
        m
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    Error,
    Fallback,
}

impl FailurePolicy {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("fallback") => Self::Fallback,
            _ => Self::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub cloud_name: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub emailjs_public_key: String,
    pub on_upstream_failure: FailurePolicy,
    pub api_base: String,
    pub request_timeout: Duration,
    pub port: u16,
}

pub struct Credentials<'a> {
    pub cloud_name: &'a str,
    pub api_key: &'a str,
    pub api_secret: &'a str,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            cloud_name: non_empty("CLOUDINARY_CLOUD_NAME"),
            api_key: non_empty("CLOUDINARY_API_KEY"),
            api_secret: non_empty("CLOUDINARY_API_SECRET"),
            emailjs_public_key: env::var("EMAILJS_PUBLIC_KEY").unwrap_or_default(),
            on_upstream_failure: FailurePolicy::parse(
                env::var("ON_UPSTREAM_FAILURE").ok().as_deref(),
            ),
            api_base: env::var("CLOUDINARY_API_BASE")
                .unwrap_or_else(|_| CLOUDINARY_API_BASE.to_string()),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    // Returns the names of the unset variables, never their values.
    pub fn credentials(&self) -> Result<Credentials<'_>, Vec<&'static str>> {
        match (&self.cloud_name, &self.api_key, &self.api_secret) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Ok(Credentials {
                cloud_name,
                api_key,
                api_secret,
            }),
            _ => {
                let mut missing = Vec::new();
                if self.cloud_name.is_none() {
                    missing.push("CLOUDINARY_CLOUD_NAME");
                }
                if self.api_key.is_none() {
                    missing.push("CLOUDINARY_API_KEY");
                }
                if self.api_secret.is_none() {
                    missing.push("CLOUDINARY_API_SECRET");
                }
                Err(missing)
            }
        }
    }
}

fn non_empty(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.is_empty())
}
