/// Returns the width in bytes of the UTF-8 character starting with `byte`.
///
/// The input is expected to be a leading byte of a character in a valid UTF-8
/// string; continuation bytes yield 1 so that iteration never stalls.
#[inline]
pub(crate) const fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 1,
    }
}
