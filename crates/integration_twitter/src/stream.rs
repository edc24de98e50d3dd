//! Newline-delimited stream decoding
//!
//! Network chunks do not respect line boundaries, so partial lines are
//! carried over until their terminator arrives. A trailing unterminated
//! line is decoded when the body ends.

use std::{collections::VecDeque, fmt::Display, pin::Pin};

use bytes::Bytes;
use futures::stream::{self, Stream, StreamExt};
use tracing::trace;

use crate::error::TwitterError;
use crate::models::{StreamRecord, parse_line};

/// Boxed stream of decoded records
pub type RecordStream = Pin<Box<dyn Stream<Item = Result<StreamRecord, TwitterError>> + Send>>;

/// Accumulates bytes and hands out complete lines
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    /// Append a chunk and return every line it completes, without terminators
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            lines.push(decode(&line[..pos]));
        }
        lines
    }

    /// Take whatever is left once the input has ended
    pub fn finish(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        let rest = std::mem::take(&mut self.pending);
        Some(decode(&rest))
    }
}

fn decode(line: &[u8]) -> String {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

struct DecodeState<S> {
    chunks: Pin<Box<S>>,
    buffer: LineBuffer,
    lines: VecDeque<String>,
    finished: bool,
}

/// Decode a byte stream into records, one per line
///
/// A transport error is yielded once and ends the stream.
pub fn record_stream<S, E>(chunks: S) -> RecordStream
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: Display + Send + 'static,
{
    let state = DecodeState {
        chunks: Box::pin(chunks),
        buffer: LineBuffer::default(),
        lines: VecDeque::new(),
        finished: false,
    };

    let records = stream::unfold(state, |mut state| async move {
        loop {
            if let Some(line) = state.lines.pop_front() {
                trace!(line = %line, "Decoding stream line");
                return Some((parse_line(&line), state));
            }
            if state.finished {
                return None;
            }

            match state.chunks.next().await {
                Some(Ok(bytes)) => state.lines.extend(state.buffer.push(&bytes)),
                Some(Err(e)) => {
                    state.finished = true;
                    return Some((Err(TwitterError::StreamError(e.to_string())), state));
                },
                None => {
                    state.finished = true;
                    state.lines.extend(state.buffer.finish());
                },
            }
        }
    });

    Box::pin(records)
}
