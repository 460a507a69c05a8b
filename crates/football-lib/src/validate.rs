//! Identifier format check.

const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];
const VERSION_POSITION: usize = 14;
const VARIANT_POSITION: usize = 19;

/// Returns true when `candidate` is a hyphenated v4 UUID with the RFC 4122
/// variant (`8`, `9`, `a` or `b`). Hex digits may be upper or lower case.
///
/// Braced, URN and unhyphenated forms are rejected.
pub fn is_valid_id(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    if bytes.len() != 36 {
        return false;
    }

    bytes.iter().enumerate().all(|(idx, &b)| match idx {
        i if HYPHEN_POSITIONS.contains(&i) => b == b'-',
        VERSION_POSITION => b == b'4',
        VARIANT_POSITION => matches!(b, b'8' | b'9' | b'a' | b'A' | b'b' | b'B'),
        _ => b.is_ascii_hexdigit(),
    })
}
