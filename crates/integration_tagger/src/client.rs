//! HTTP tagger client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, trace};

use crate::config::TaggerConfig;
use crate::error::TaggerError;

/// One tagged token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Token text as it appeared in the input
    pub token: String,
    /// Tag assigned by the service
    pub tag: String,
}

/// Trait for tagger clients
#[async_trait]
pub trait TaggerClient: Send + Sync {
    /// Tag every token of `text`, in input order
    async fn tag(&self, text: &str) -> Result<Vec<Tag>, TaggerError>;
}

/// Parse the line-oriented tagger output
///
/// Blank lines are skipped. The tag is the last whitespace-separated field.
pub fn parse_tags(body: &str) -> Result<Vec<Tag>, TaggerError> {
    body.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            trace!(line = %line, "Parsing tagger line");
            line.trim()
                .rsplit_once(char::is_whitespace)
                .map(|(token, tag)| Tag {
                    token: token.trim().to_string(),
                    tag: tag.to_string(),
                })
                .filter(|t| !t.token.is_empty())
                .ok_or_else(|| TaggerError::MalformedLine {
                    line: index + 1,
                    content: line.to_string(),
                })
        })
        .collect()
}

/// Tagger client over HTTP
#[derive(Debug)]
pub struct HttpTaggerClient {
    client: Client,
    config: TaggerConfig,
}

impl HttpTaggerClient {
    /// Create a new tagger client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &TaggerConfig) -> Result<Self, TaggerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TaggerError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl TaggerClient for HttpTaggerClient {
    #[instrument(skip(self, text), fields(len = text.len()))]
    async fn tag(&self, text: &str) -> Result<Vec<Tag>, TaggerError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .client
            .post(self.config.url())
            .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(text.to_string())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TaggerError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    TaggerError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(TaggerError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TaggerError::RequestFailed(e.to_string()))?;

        let tags = parse_tags(&body)?;
        debug!(tokens = tags.len(), "Tagged text");
        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lines() {
        let tags = parse_tags("I O\nam O\nin O\nNew B-GPE\nYork I-GPE\n").unwrap();
        assert_eq!(tags.len(), 5);
        assert_eq!(
            tags[3],
            Tag {
                token: "New".into(),
                tag: "B-GPE".into()
            }
        );
    }

    #[test]
    fn skips_blank_lines() {
        let tags = parse_tags("\nRome B-GPE\n\n   \nnext O\n").unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[1].token, "next");
    }

    #[test]
    fn punctuation_tokens() {
        let tags = parse_tags(", O\n, B-GPE\n").unwrap();
        assert_eq!(tags[0].token, ",");
        assert_eq!(tags[1].tag, "B-GPE");
    }

    #[test]
    fn line_without_tag_is_malformed() {
        let err = parse_tags("Paris B-GPE\nFrance\n").unwrap_err();
        assert!(matches!(err, TaggerError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn empty_body() {
        assert!(parse_tags("").unwrap().is_empty());
    }
}
