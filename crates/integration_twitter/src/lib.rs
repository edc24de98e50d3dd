//! Twitter integration for WhatsAboveMe
//!
//! Provides the inbound message stream (newline-delimited JSON over a
//! long-lived HTTP response) and the outbound calls the bot needs: posting
//! replies, uploading an image, following and unfollowing.
//!
//! # Architecture
//!
//! [`TwitterClient`] defines the interface, implemented by
//! [`HttpTwitterClient`]. Stream payloads are decoded into
//! [`StreamRecord`]s; blank keep-alive lines and non-status objects become
//! records with no fields set.

mod client;
mod config;
mod error;
mod models;
mod stream;

pub use client::{HttpTwitterClient, TwitterClient};
pub use config::TwitterConfig;
pub use error::TwitterError;
pub use models::{StreamRecord, parse_line};
pub use stream::{LineBuffer, RecordStream, record_stream};
