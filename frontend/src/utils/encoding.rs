use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Same unreserved set as `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    #[test]
    fn encodes_line_breaks_and_reserved_characters() {
        assert_eq!(encode_uri_component("a b\nc&d=e"), "a%20b%0Ac%26d%3De");
    }

    #[test]
    fn keeps_unreserved_characters() {
        assert_eq!(encode_uri_component("d@x.com"), "d%40x.com");
        assert_eq!(encode_uri_component("a-b_c.d~e"), "a-b_c.d~e");
    }

    #[test]
    fn hebrew_text_survives_decoding() {
        let encoded = encode_uri_component("תל אביב");
        assert!(encoded.is_ascii());
        let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
        assert_eq!(decoded, "תל אביב");
    }
}
