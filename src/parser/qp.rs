//! Quoted-printable body decoding.

use tracing::warn;

/// Decode a quoted-printable body.
///
/// Soft line breaks (`=\r\n` or `=\n`) are removed without inserting a line
/// break. Every remaining `=XX` with exactly two uppercase hex digits
/// becomes the byte with that value; anything else after `=` is left
/// untouched rather than guessed at. The resulting bytes are reassembled
/// as UTF-8 (so `=C3=A9` becomes `é`).
///
/// Not idempotent: a literal `=3D` in already-decoded text would be
/// mis-decoded on a second pass, so decode exactly once per part.
pub fn decode_qp(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'=' {
            // Soft line break: "=\r\n" or "=\n"
            if bytes.get(i + 1) == Some(&b'\r') && bytes.get(i + 2) == Some(&b'\n') {
                i += 3;
                continue;
            }
            if bytes.get(i + 1) == Some(&b'\n') {
                i += 2;
                continue;
            }
            // Hex escape: "=XX" with uppercase hex digits
            if i + 2 < bytes.len() {
                let (hi, lo) = (bytes[i + 1], bytes[i + 2]);
                if is_upper_hex(hi) && is_upper_hex(lo) {
                    out.push((hex_value(hi) << 4) | hex_value(lo));
                    i += 3;
                    continue;
                }
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    bytes_to_string(&out)
}

fn is_upper_hex(b: u8) -> bool {
    b.is_ascii_digit() || (b'A'..=b'F').contains(&b)
}

fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        _ => b - b'A' + 10,
    }
}

/// Interpret decoded bytes as a string.
///
/// Tries UTF-8 first, then falls back to Windows-1252 (which accepts every
/// byte) so Latin-1 quoted-printable mail does not turn into replacement
/// characters.
fn bytes_to_string(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            warn!("Decoded body is not valid UTF-8, falling back to Windows-1252");
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}
