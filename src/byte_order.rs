use parse_display::Display;

/// Byte order of a message body.
#[derive(Display, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[display(style = "snake_case")]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

/// Envelope flag bit marking a little-endian body.
pub(crate) const FLAG_BODY_LITTLE_ENDIAN: u8 = 0b0001;

impl ByteOrder {
    /// The order this node always encodes in.
    pub const CANONICAL: ByteOrder = ByteOrder::BigEndian;

    pub const fn native() -> ByteOrder {
        if cfg!(target_endian = "big") {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    pub(crate) fn from_flags(flags: u8) -> ByteOrder {
        if flags & FLAG_BODY_LITTLE_ENDIAN != 0 {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        }
    }

    /// Returns `flags` with the body order bit set to match `self`.
    pub(crate) fn apply_to(self, flags: u8) -> u8 {
        match self {
            ByteOrder::BigEndian => flags & !FLAG_BODY_LITTLE_ENDIAN,
            ByteOrder::LittleEndian => flags | FLAG_BODY_LITTLE_ENDIAN,
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        ByteOrder::CANONICAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_snake_case() {
        assert_eq!(ByteOrder::BigEndian.to_string(), "big_endian");
        assert_eq!(ByteOrder::LittleEndian.to_string(), "little_endian");
    }

    #[test]
    fn flag_bit_only_touches_order() {
        let flags = 0b1010;
        assert_eq!(ByteOrder::from_flags(flags), ByteOrder::BigEndian);

        let le = ByteOrder::LittleEndian.apply_to(flags);
        assert_eq!(le, 0b1011);
        assert_eq!(ByteOrder::from_flags(le), ByteOrder::LittleEndian);
        assert_eq!(ByteOrder::BigEndian.apply_to(le), flags);
    }

    #[test]
    fn native_matches_target() {
        let probe = 1u16.to_ne_bytes();
        let expected = if probe[0] == 1 {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        };
        assert_eq!(ByteOrder::native(), expected);
        assert_eq!(ByteOrder::default(), ByteOrder::BigEndian);
    }
}
