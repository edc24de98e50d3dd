//! Tagger integration for WhatsAboveMe
//!
//! Sends message text to a tagging service and reads back one token per
//! line as `<token> <tag>`. Location tags follow the IOB scheme used by the
//! service (`B-GPE`, `I-LOC`, ...).

mod client;
mod config;
mod error;

pub use client::{HttpTaggerClient, Tag, TaggerClient, parse_tags};
pub use config::TaggerConfig;
pub use error::TaggerError;
