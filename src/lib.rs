//! Focusmix backend library.
//!
//! A small web backend that turns a Spotify playlist into a focus-session
//! mix: authenticate a user via OAuth2, read one of their playlists, pick a
//! random subset of tracks whose combined play time just reaches a requested
//! duration, and optionally save that subset back as a new private playlist.
//!
//! # Modules
//!
//! - `api` - HTTP request handlers, one per route
//! - `config` - Startup configuration from the environment
//! - `error` - Client-facing error taxonomy and its response mapping
//! - `selector` - The duration-constrained track selector
//! - `server` - Application state, router and serve loop
//! - `session` - Credential storage keyed by provider user id
//! - `spotify` - OAuth flow and Web API client
//! - `types` - Application and wire data structures

pub mod api;
pub mod config;
pub mod error;
pub mod selector;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
