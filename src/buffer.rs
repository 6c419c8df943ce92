// src/buffer.rs

use crate::config::INITIAL_CAPACITY;
use crate::models::Payload;
use std::io::{self, Write};

/// Append-only store of parsed payloads with a separate read cursor.
///
/// Payloads are appended during ingestion and drained in FIFO order
/// afterwards. Draining does not remove anything: the buffer keeps owning
/// every payload until [`PayloadBuffer::destroy`] or drop.
#[derive(Debug)]
pub struct PayloadBuffer {
    payloads: Vec<Payload>,
    read_cursor: usize,
}

impl Default for PayloadBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadBuffer {
    pub fn new() -> Self {
        Self {
            payloads: Vec::with_capacity(INITIAL_CAPACITY),
            read_cursor: 0,
        }
    }

    /// Moves a payload into the buffer.
    pub fn append(&mut self, payload: Payload) {
        self.payloads.push(payload);
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    /// Index of the next payload to be drained.
    pub fn read_cursor(&self) -> usize {
        self.read_cursor
    }

    /// Number of payloads appended but not yet drained.
    pub fn pending(&self) -> usize {
        self.payloads.len() - self.read_cursor
    }

    /// Returns the payload at the read cursor and advances the cursor.
    ///
    /// # Panics
    ///
    /// Panics if every payload has already been drained.
    pub fn take_next(&mut self) -> &Payload {
        assert!(
            self.read_cursor < self.payloads.len(),
            "take_next called with read cursor {} at end of buffer (len {})",
            self.read_cursor,
            self.payloads.len()
        );
        let payload = &self.payloads[self.read_cursor];
        self.read_cursor += 1;
        payload
    }

    /// Drains the next payload and writes its rendering followed by a newline.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`PayloadBuffer::take_next`].
    pub fn process_next<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let payload = self.take_next();
        writeln!(out, "{}", payload)
    }

    /// Releases every payload and the backing storage.
    /// Returns the number of payloads released.
    pub fn destroy(self) -> usize {
        let count = self.payloads.len();
        for payload in self.payloads {
            payload.release();
        }
        count
    }
}
