//! Wire encoding for position samples in UTM coordinates.
//!
//! A frame is a 16-byte [`Header`] followed by a body whose layout depends on
//! the header's type tag. Typed records implement [`Body`]; [`Message`] is the
//! dispatch over every tag this node understands.

pub mod byte_order;
pub mod envelope;
pub mod error;
mod format;
pub mod message;
pub mod position_utm;
pub mod transport;

pub use byte_order::ByteOrder;
pub use envelope::{Header, HEADER_SIZE, MAX_MSG_LEN};
pub use error::Error;
pub use message::{Body, Message, MessageType, Status};
pub use position_utm::PositionUtm;
