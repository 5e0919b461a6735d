//! # config — runtime settings from environment variables
//!
//! | Variable            | Default        | Description                           |
//! |---------------------|----------------|---------------------------------------|
//! | `BIND_ADDR`         | `0.0.0.0:5000` | Address Axum listens on               |
//! | `PORT`              | —              | Port only; used when `BIND_ADDR` unset |
//! | `CORS_ALLOW_ORIGIN` | `*`            | Allowed browser origin (`*` = any)    |

use std::net::SocketAddr;

use anyhow::Context;
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr:   SocketAddr,
    /// `None` = allow any origin.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = match (lookup("BIND_ADDR"), lookup("PORT")) {
            (Some(addr), _) => addr
                .parse()
                .with_context(|| format!("BIND_ADDR is not a socket address: '{addr}'"))?,
            (None, Some(port)) => {
                let port: u16 = port
                    .trim()
                    .parse()
                    .with_context(|| format!("PORT must be a number: '{port}'"))?;
                SocketAddr::from(([0, 0, 0, 0], port))
            }
            (None, None) => DEFAULT_BIND_ADDR.parse()?,
        };

        let cors_origin = lookup("CORS_ALLOW_ORIGIN")
            .map(|o| o.trim().to_owned())
            .filter(|o| !o.is_empty() && o != "*");

        Ok(Self { bind_addr, cors_origin })
    }

    /// CORS layer for the browser client.
    pub fn cors_layer(&self) -> anyhow::Result<CorsLayer> {
        let origin = match &self.cors_origin {
            None => AllowOrigin::from(Any),
            Some(origin) => AllowOrigin::exact(
                HeaderValue::from_str(origin)
                    .with_context(|| format!("CORS_ALLOW_ORIGIN is not a valid header: '{origin}'"))?,
            ),
        };

        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any))
    }
}
