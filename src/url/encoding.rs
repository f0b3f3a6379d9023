/// Decodes percent-encoded octets that stand for unreserved ASCII characters
///
/// A pattern such as `/foo` must match a request for `/f%6F%6f`, so both sides
/// of every comparison go through this function first. Only octets for
/// unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are decoded.
/// Reserved characters and non-ASCII octets stay encoded, with their hex
/// digits upper-cased so that `%3a` and `%3A` compare equal. Anything that is
/// not a `%` followed by two hex digits is copied unchanged.
///
/// # Examples
///
/// ```
/// use robots_rep::url::decode_unreserved;
///
/// assert_eq!(decode_unreserved("/f%6F%6f/b%61r"), "/foo/bar");
/// assert_eq!(decode_unreserved("/f%F6%F6/b%E4r"), "/f%F6%F6/b%E4r");
/// assert_eq!(decode_unreserved("/a%2fb"), "/a%2Fb");
/// ```
pub fn decode_unreserved(path: &str) -> String {
    let bytes = path.as_bytes();
    let mut decoded = String::with_capacity(path.len());
    let mut copied_up_to = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }

        let octet = match (bytes.get(i + 1), bytes.get(i + 2)) {
            (Some(&hi), Some(&lo)) => hex_value(hi).zip(hex_value(lo)).map(|(h, l)| h << 4 | l),
            _ => None,
        };

        let Some(octet) = octet else {
            i += 1;
            continue;
        };

        decoded.push_str(&path[copied_up_to..i]);
        if is_unreserved(octet) {
            decoded.push(char::from(octet));
        } else {
            decoded.push('%');
            decoded.push(char::from(HEX_UPPER[usize::from(octet >> 4)]));
            decoded.push(char::from(HEX_UPPER[usize::from(octet & 0x0F)]));
        }
        i += 3;
        copied_up_to = i;
    }

    decoded.push_str(&path[copied_up_to..]);
    decoded
}

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

fn hex_value(byte: u8) -> Option<u8> {
    char::from(byte).to_digit(16).map(|d| d as u8)
}

/// Unreserved characters per RFC 3986 section 2.3
fn is_unreserved(octet: u8) -> bool {
    octet.is_ascii_alphanumeric() || matches!(octet, b'-' | b'.' | b'_' | b'~')
}
