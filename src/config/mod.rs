//! Catalog settings.
//!
//! [`Settings::load`] layers `config/default.toml`, then
//! `config/{RUN_ENV}.toml`, then `APP__`-prefixed variables (a
//! `.env` file is read first if present). The sections cover the listener,
//! storage backend selection, the PostgreSQL pool, paging limits and CORS
//! origins.

mod settings;

pub use settings::*;
