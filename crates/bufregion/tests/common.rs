#![allow(dead_code)]

use std::io::{self, Read};

/// Hands out at most `limit` bytes per read from an in-memory payload.
pub struct Trickle<'a> {
    data: &'a [u8],
    limit: usize,
}

impl<'a> Trickle<'a> {
    pub fn new(data: &'a [u8], limit: usize) -> Self {
        assert!(limit > 0, "limit must be positive");
        Self { data, limit }
    }
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.limit).min(self.data.len());
        let (head, rest) = self.data.split_at(n);
        buf[..n].copy_from_slice(head);
        self.data = rest;
        Ok(n)
    }
}

/// Encodes `payloads` as frames with a big-endian `u16` length prefix.
pub fn encode_frames(payloads: &[&[u8]]) -> Vec<u8> {
    let mut out = Vec::new();
    for payload in payloads {
        let len = u16::try_from(payload.len()).expect("payload fits in u16");
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(payload);
    }
    out
}
