//! Raw wire layouts. Everything above this module works on typed values.

use binary_layout::define_layout;

// The envelope header is always big-endian; only the body order is negotiated.
define_layout!(header, BigEndian, {
    flags: u8,
    seq_nr: u8,
    msg_type: i8,
    priority: u8,
    dest: u32,
    src: u32,
    msg_len: u32,
});

define_layout!(position_utm_be, BigEndian, {
    zone: i32,
    northing: f64,
    easting: f64,
    altitude: i32,
    heading: f32,
});

define_layout!(position_utm_le, LittleEndian, {
    zone: i32,
    northing: f64,
    easting: f64,
    altitude: i32,
    heading: f32,
});

/// Unwraps a layout size at compile time. All layouts here are fixed-size.
pub(crate) const fn fixed(size: Option<usize>) -> usize {
    match size {
        Some(size) => size,
        None => panic!("layout is not fixed-size"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_sizes() {
        assert_eq!(fixed(header::SIZE), 16);
        assert_eq!(fixed(position_utm_be::SIZE), 28);
        assert_eq!(fixed(position_utm_le::SIZE), 28);
    }

    #[test]
    fn body_fields_have_no_padding() {
        let mut buf = vec![0u8; fixed(position_utm_be::SIZE)];
        let mut view = position_utm_be::View::new(&mut buf[..]);
        view.altitude_mut().write(0x0102_0304);
        view.heading_mut().write(f32::from_bits(0x0506_0708));
        assert_eq!(&buf[20..28], &[1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
