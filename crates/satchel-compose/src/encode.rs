//! Transport encoding
//!
//! Base64 helpers for the attachment payload and its data-URI preview form.
//! The payload field always carries pure base64; any `data:` scheme prefix a
//! source hands over is stripped before the payload is stored.

use base64::{engine::general_purpose::STANDARD, DecodeError, Engine as _};

/// Encode raw file bytes as the transport payload (standard base64, padded).
pub fn encode_payload(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode a transport payload back into bytes.
pub fn decode_payload(payload: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD.decode(payload)
}

/// Build the self-contained renderable form of a payload.
pub fn data_uri(content_type: &str, payload: &str) -> String {
    format!("data:{};base64,{}", content_type, payload)
}

/// Strip a `data:{mime};base64,` prefix when present.
///
/// Sources that read through a platform data-URL primitive deliver the
/// payload with the scheme attached; everything after the first comma is the
/// actual base64 data. Input without the scheme is returned unchanged.
pub fn strip_data_uri(input: &str) -> &str {
    if input.starts_with("data:") {
        match input.find(',') {
            Some(idx) => &input[idx + 1..],
            None => input,
        }
    } else {
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let data = b"attachment bytes \x00\xff\x7f";
        let payload = encode_payload(data);
        assert_eq!(decode_payload(&payload).unwrap(), data);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_payload(b""), "");
        assert_eq!(decode_payload("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_data_uri_form() {
        assert_eq!(
            data_uri("image/png", "aGVsbG8="),
            "data:image/png;base64,aGVsbG8="
        );
    }

    #[test]
    fn test_strip_data_uri() {
        assert_eq!(strip_data_uri("data:image/png;base64,aGVsbG8="), "aGVsbG8=");
        assert_eq!(strip_data_uri("aGVsbG8="), "aGVsbG8=");
        assert_eq!(strip_data_uri("data:missing-comma"), "data:missing-comma");
    }

    #[test]
    fn test_strip_then_decode_matches_original() {
        let data = b"round trip";
        let uri = data_uri("text/plain", &encode_payload(data));
        assert_eq!(decode_payload(strip_data_uri(&uri)).unwrap(), data);
    }
}
