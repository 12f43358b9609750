//! A small Rust client for the Listen Notes podcast directory API.
//!
//! Two operations are exposed: fetch a page of the curated best-podcasts
//! listing, and fetch the episodes of one podcast, most recent first. Each
//! is a single GET round-trip whose JSON reply is strictly decoded and then
//! mapped into the domain types [`Podcast`] and [`Episode`].
//!
//! ## Quick start
//! - Configure authentication via environment variables (`LISTENAPI_URL`,
//!   `LISTENAPI_KEY`) or a `.listenapirc` file (supported in the current
//!   directory and in your home directory).
//! - Call [`Client::best_podcasts`] and [`Client::episodes`].
//!
//! ```no_run
//! use anyhow::Result;
//! use listenapi::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::from_env()?;
//!     let podcasts = client.best_podcasts(1).await?;
//!     for p in &podcasts {
//!         println!("{} ({} episodes)", p.title, p.total_episodes);
//!     }
//!     let episodes = client.episodes(&podcasts[0]).await?;
//!     println!("latest: {}", episodes[0].title);
//!     Ok(())
//! }
//! ```
//!
//! For full usage and configuration details, see the crate README.

#![forbid(unsafe_code)]

mod client;
mod config;
mod error;
mod model;
mod util;
mod wire;

pub use client::{Client, ClientConfig};
pub use error::Error;
pub use model::{Episode, Podcast};
