//! The generic message envelope.
//!
//! Every frame starts with a fixed 16-byte header, always big-endian:
//!
//! ```text
//! offset 0  : u8  flags     bit 0 set => body is little-endian
//! offset 1  : u8  seq_nr
//! offset 2  : i8  msg_type
//! offset 3  : u8  priority
//! offset 4  : u32 dest
//! offset 8  : u32 src
//! offset 12 : u32 msg_len   header + body
//! ```
//!
//! The header knows nothing about bodies; it only tells the typed record which
//! byte order its body arrived in and how long the whole frame claims to be.

use tracing::trace;

use crate::byte_order::ByteOrder;
use crate::error::Error;
use crate::format::{self, header};

/// Bytes consumed by the envelope before the body.
pub const HEADER_SIZE: usize = format::fixed(header::SIZE);

/// Largest `msg_len` accepted from a peer.
pub const MAX_MSG_LEN: u32 = 64 * 1024;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Header {
    pub flags: u8,
    pub seq_nr: u8,
    pub msg_type: i8,
    pub priority: u8,
    /// Mailbox of the receiver.
    pub dest: u32,
    /// Mailbox of the sender.
    pub src: u32,
    pub msg_len: u32,
}

impl Header {
    /// A header for a body of `body_len` bytes in canonical order.
    pub fn new(msg_type: i8, body_len: usize) -> Self {
        Self {
            msg_type,
            msg_len: (HEADER_SIZE + body_len) as u32,
            ..Self::default()
        }
    }

    /// Reads a header from the front of `bytes`. Anything past the header is
    /// left alone.
    pub fn read(bytes: &[u8]) -> Result<Self, Error> {
        let raw = bytes.get(..HEADER_SIZE).ok_or(Error::TruncatedInput {
            needed: HEADER_SIZE,
            available: bytes.len(),
        })?;

        let view = header::View::new(raw);
        let header = Self {
            flags: view.flags().read(),
            seq_nr: view.seq_nr().read(),
            msg_type: view.msg_type().read(),
            priority: view.priority().read(),
            dest: view.dest().read(),
            src: view.src().read(),
            msg_len: view.msg_len().read(),
        };

        if header.msg_len < HEADER_SIZE as u32 || header.msg_len > MAX_MSG_LEN {
            return Err(Error::InvalidLength(header.msg_len));
        }

        trace!(
            msg_type = header.msg_type,
            seq_nr = header.seq_nr,
            msg_len = header.msg_len,
            "read header"
        );
        Ok(header)
    }

    pub fn write(&self) -> Vec<u8> {
        let mut view = header::View::new(vec![0u8; HEADER_SIZE]);
        view.flags_mut().write(self.flags);
        view.seq_nr_mut().write(self.seq_nr);
        view.msg_type_mut().write(self.msg_type);
        view.priority_mut().write(self.priority);
        view.dest_mut().write(self.dest);
        view.src_mut().write(self.src);
        view.msg_len_mut().write(self.msg_len);
        view.into_storage()
    }

    pub fn body_byte_order(&self) -> ByteOrder {
        ByteOrder::from_flags(self.flags)
    }

    pub fn set_body_byte_order(&mut self, order: ByteOrder) {
        self.flags = order.apply_to(self.flags);
    }

    /// Body length declared by `msg_len`.
    pub fn body_len(&self) -> usize {
        (self.msg_len as usize).saturating_sub(HEADER_SIZE)
    }
}
