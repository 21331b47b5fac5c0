//! Position in UTM coordinates.
//!
//! Body layout, 28 bytes, no padding:
//!
//! ```text
//! offset 0  : i32 zone
//! offset 4  : f64 northing   (mm)
//! offset 12 : f64 easting    (mm)
//! offset 20 : i32 altitude   (mm over mean sea level)
//! offset 24 : f32 heading    (rad)
//! ```
//!
//! Decoding honors the byte order announced by the envelope; encoding always
//! writes big-endian. Field values are never range-checked.

use tracing::trace;

use crate::byte_order::ByteOrder;
use crate::error::Error;
use crate::format::{self, position_utm_be, position_utm_le};
use crate::message::{Body, MessageType};

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct PositionUtm {
    pub zone: i32,
    /// mm
    pub northing: f64,
    /// mm
    pub easting: f64,
    /// mm over mean sea level
    pub altitude: i32,
    /// rad
    pub heading: f32,
    /// Order the in-memory value is considered to be in. Always canonical once
    /// decoded.
    pub byte_order: ByteOrder,
}

impl PositionUtm {
    pub fn new(zone: i32, northing: f64, easting: f64, altitude: i32, heading: f32) -> Self {
        Self {
            zone,
            northing,
            easting,
            altitude,
            heading,
            byte_order: ByteOrder::CANONICAL,
        }
    }
}

// Both layouts share field names, so one expansion reads either.
macro_rules! read_fields {
    ($layout:ident, $body:expr) => {{
        let view = $layout::View::new($body);
        PositionUtm {
            zone: view.zone().read(),
            northing: view.northing().read(),
            easting: view.easting().read(),
            altitude: view.altitude().read(),
            heading: view.heading().read(),
            byte_order: ByteOrder::CANONICAL,
        }
    }};
}

impl Body for PositionUtm {
    const TYPE: MessageType = MessageType::PositionUtm;
    const BODY_LEN: usize = format::fixed(position_utm_be::SIZE);

    fn decode_body(bytes: &[u8], order: ByteOrder) -> Result<Self, Error> {
        let body = bytes.get(..Self::BODY_LEN).ok_or(Error::TruncatedInput {
            needed: Self::BODY_LEN,
            available: bytes.len(),
        })?;

        let position = match order {
            ByteOrder::BigEndian => read_fields!(position_utm_be, body),
            ByteOrder::LittleEndian => read_fields!(position_utm_le, body),
        };
        trace!(%order, zone = position.zone, "decoded position_utm body");
        Ok(position)
    }

    fn encode_body(&self) -> Vec<u8> {
        let mut view = position_utm_be::View::new(vec![0u8; Self::BODY_LEN]);
        view.zone_mut().write(self.zone);
        view.northing_mut().write(self.northing);
        view.easting_mut().write(self.easting);
        view.altitude_mut().write(self.altitude);
        view.heading_mut().write(self.heading);
        view.into_storage()
    }
}
