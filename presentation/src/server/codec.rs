//! Line framing for telnet-style clients
//!
//! Clients send whatever bytes their terminal produces: CRLF line ends,
//! telnet negotiation, text in a legacy encoding. The codec never fails on
//! content. Bytes that are not UTF-8 are replaced, telnet commands are
//! dropped, and a line longer than the limit is reported once and then
//! discarded up to its newline.

use bytes::{Buf, BytesMut};
use std::io;
use tokio_util::codec::Decoder;

/// Longest accepted line, in bytes, line terminator included
pub const MAX_LINE_LENGTH: usize = 4096;

const IAC: u8 = 255;
const SB: u8 = 250;
const SE: u8 = 240;
const WILL: u8 = 251;
const DONT: u8 = 254;

/// One framed unit of client input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientLine {
    Text(String),
    /// The line exceeded the limit; its bytes were dropped
    TooLong,
}

/// Splits client input into lines
#[derive(Debug, Clone)]
pub struct ClientLineCodec {
    max_length: usize,
    /// Where the next newline search starts
    next_index: usize,
    discarding: bool,
}

impl ClientLineCodec {
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            next_index: 0,
            discarding: false,
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for ClientLineCodec {
    fn default() -> Self {
        Self::new(MAX_LINE_LENGTH)
    }
}

impl Decoder for ClientLineCodec {
    type Item = ClientLine;
    type Error = io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<ClientLine>, io::Error> {
        loop {
            let read_to = buf.len().min(self.max_length.saturating_add(1));
            let newline = buf[self.next_index..read_to]
                .iter()
                .position(|b| *b == b'\n')
                .map(|offset| self.next_index + offset);

            match (self.discarding, newline) {
                (true, Some(end)) => {
                    buf.advance(end + 1);
                    self.next_index = 0;
                    self.discarding = false;
                }
                (true, None) => {
                    buf.advance(read_to);
                    self.next_index = 0;
                    if buf.is_empty() {
                        return Ok(None);
                    }
                }
                (false, Some(end)) => {
                    let line = buf.split_to(end + 1);
                    self.next_index = 0;
                    return Ok(Some(ClientLine::Text(decode_line(&line[..end]))));
                }
                (false, None) if buf.len() > self.max_length => {
                    self.discarding = true;
                    self.next_index = 0;
                    return Ok(Some(ClientLine::TooLong));
                }
                (false, None) => {
                    self.next_index = read_to;
                    return Ok(None);
                }
            }
        }
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<ClientLine>, io::Error> {
        if let Some(line) = self.decode(buf)? {
            return Ok(Some(line));
        }
        self.next_index = 0;
        if self.discarding || buf.is_empty() {
            self.discarding = false;
            buf.clear();
            return Ok(None);
        }
        // Last line without a newline
        let line = buf.split();
        Ok(Some(ClientLine::Text(decode_line(&line))))
    }
}

/// Drop telnet commands and the trailing CR, then decode lossily
fn decode_line(raw: &[u8]) -> String {
    let mut bytes = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] != IAC {
            bytes.push(raw[i]);
            i += 1;
            continue;
        }
        match raw.get(i + 1) {
            // Escaped data byte
            Some(&IAC) => {
                bytes.push(IAC);
                i += 2;
            }
            Some(&SB) => {
                i = raw[i + 2..]
                    .windows(2)
                    .position(|w| *w == [IAC, SE])
                    .map_or(raw.len(), |p| i + 2 + p + 2);
            }
            // WILL, WONT, DO, DONT carry an option byte
            Some(&command) if (WILL..=DONT).contains(&command) => i += 3,
            _ => i += 2,
        }
    }
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
