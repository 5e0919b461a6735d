//! # Expense Splitter — Shared-Expense Backend
//!
//! ## Architecture Overview
//!
//! ```text
//!  ┌──────────────┐  POST/GET/DELETE /api/expenses  ┌──────────────────────┐
//!  │  Web client  │ ──────────────────────────────▶ │  AppState            │
//!  │  (browser)   │                                 │  ExpenseStore        │
//!  └──────────────┘                                 │  RwLock<Vec<Expense>>│
//!         ▲                                         └──────────┬───────────┘
//!         │  GET /api/balances                                 │ snapshot
//!         │                                         ┌──────────▼───────────┐
//!         └──────────────────────────────────────── │  [Balance Engine]    │
//!                    [{ from, to, amount }]         │  net → settlements   │
//!                                                   └──────────────────────┘
//! ```
//!
//! ## Environment Variables
//!
//! | Variable            | Default                  | Description                 |
//! |---------------------|--------------------------|-----------------------------|
//! | `BIND_ADDR`         | `0.0.0.0:5000`           | Address Axum listens on     |
//! | `PORT`              | —                        | Port, if `BIND_ADDR` unset  |
//! | `CORS_ALLOW_ORIGIN` | `*`                      | Allowed browser origin      |
//! | `RUST_LOG`          | `expense_splitter=debug` | Tracing filter              |

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod engine;
mod error;
mod models;
mod routes;
mod state;
mod store;

use config::Config;
use state::build_state;

// ─── Entry Point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Load .env (optional — CI/prod can use real env vars) ──────────────
    dotenvy::dotenv().ok();

    // ── 2. Initialise structured logging ─────────────────────────────────────
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env()
            .add_directive("expense_splitter=debug".parse()?)
            .add_directive("tower_http=info".parse()?))
        .init();

    // ── 3. Configuration ─────────────────────────────────────────────────────
    let config = Config::from_env()?;
    let cors = config.cors_layer()?;

    // ── 4. Shared state + router ─────────────────────────────────────────────
    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(build_state());

    info!(addr = ?config.bind_addr, "💸 Expense Splitter API starting");

    // ── 5. Start the server ──────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
