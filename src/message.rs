//! Message types and the dispatch from a raw frame to a typed message.

use parse_display::Display;
use tracing::debug;

use crate::byte_order::ByteOrder;
use crate::envelope::{Header, HEADER_SIZE};
use crate::error::Error;
use crate::position_utm::PositionUtm;

/// Type tags known to this node.
#[repr(i8)]
#[derive(Display, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[display(style = "snake_case")]
pub enum MessageType {
    Ok = 0,
    Error = -1,
    Timeout = -2,
    NotAvailable = -3,
    PositionUtm = 34,
}

impl MessageType {
    pub fn from_i8(tag: i8) -> Option<Self> {
        match tag {
            0 => Some(Self::Ok),
            -1 => Some(Self::Error),
            -2 => Some(Self::Timeout),
            -3 => Some(Self::NotAvailable),
            34 => Some(Self::PositionUtm),
            _ => None,
        }
    }

    pub fn tag(self) -> i8 {
        self as i8
    }
}

/// Codec contract every typed record implements for the envelope.
pub trait Body: Sized {
    const TYPE: MessageType;
    const BODY_LEN: usize;

    fn body_len() -> usize {
        Self::BODY_LEN
    }

    /// Whether a header with this tag and total length describes `Self`.
    fn validate_header(msg_type: i8, msg_len: u32) -> bool {
        msg_type == Self::TYPE.tag() && msg_len as usize == HEADER_SIZE + Self::BODY_LEN
    }

    /// Parses `Self` from the front of `bytes`, read in `order`.
    fn decode_body(bytes: &[u8], order: ByteOrder) -> Result<Self, Error>;

    /// Writes exactly `BODY_LEN` bytes in canonical order.
    fn encode_body(&self) -> Vec<u8>;
}

/// Header-only replies.
#[derive(Display, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[display(style = "snake_case")]
pub enum Status {
    Ok,
    Error,
    Timeout,
    NotAvailable,
}

impl Status {
    pub fn msg_type(self) -> MessageType {
        match self {
            Status::Ok => MessageType::Ok,
            Status::Error => MessageType::Error,
            Status::Timeout => MessageType::Timeout,
            Status::NotAvailable => MessageType::NotAvailable,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Message {
    Status(Status),
    PositionUtm(PositionUtm),
}

impl Message {
    pub fn msg_type(&self) -> MessageType {
        match self {
            Message::Status(status) => status.msg_type(),
            Message::PositionUtm(_) => PositionUtm::TYPE,
        }
    }

    /// Decodes one complete frame. Bytes past the declared `msg_len` are ignored.
    pub fn decode(frame: &[u8]) -> Result<(Header, Message), Error> {
        let header = Header::read(frame)?;
        let msg_type =
            MessageType::from_i8(header.msg_type).ok_or(Error::UnknownType(header.msg_type))?;
        let mismatch = Error::HeaderMismatch {
            msg_type: header.msg_type,
            msg_len: header.msg_len,
        };
        let body = &frame[HEADER_SIZE..];

        let message = match msg_type {
            MessageType::Ok => Message::Status(Status::Ok),
            MessageType::Error => Message::Status(Status::Error),
            MessageType::Timeout => Message::Status(Status::Timeout),
            MessageType::NotAvailable => Message::Status(Status::NotAvailable),
            MessageType::PositionUtm => {
                if !PositionUtm::validate_header(header.msg_type, header.msg_len) {
                    return Err(mismatch);
                }
                let order = header.body_byte_order();
                Message::PositionUtm(PositionUtm::decode_body(body, order)?)
            }
        };

        if let Message::Status(_) = message {
            if header.body_len() != 0 {
                return Err(mismatch);
            }
        }

        debug!(%msg_type, seq_nr = header.seq_nr, src = header.src, "decoded message");
        Ok((header, message))
    }

    /// Encodes `self` behind `header`. Routing fields are taken from `header`;
    /// type, length and body order are overwritten to match the message.
    pub fn encode(&self, mut header: Header) -> Vec<u8> {
        let body = match self {
            Message::Status(_) => Vec::new(),
            Message::PositionUtm(position) => position.encode_body(),
        };

        header.msg_type = self.msg_type().tag();
        header.msg_len = (HEADER_SIZE + body.len()) as u32;
        header.set_body_byte_order(ByteOrder::CANONICAL);

        let mut frame = header.write();
        frame.extend_from_slice(&body);
        frame
    }
}
