use super::{
    character_classes::FORM_NOT_PCT_ENCODED,
    percent_encoded_character_decoder::PercentEncodedCharacterDecoder,
};

// Undo form encoding: '+' is a space and "%XX" is a byte.  Escapes which
// don't hold two hexadecimal digits are kept as they were written, and the
// character which cut them short is decoded on its own.  Bytes which don't
// form valid UTF-8 are replaced with U+FFFD.
pub fn decode_form_component<T>(element: T) -> String
where
    T: AsRef<str>,
{
    let element = element.as_ref();
    let mut decoded = Vec::with_capacity(element.len());
    let mut escape: Option<String> = None;
    let mut pec_decoder = PercentEncodedCharacterDecoder::new();
    let mut utf8_buffer = [0; 4];
    for c in element.chars() {
        if let Some(mut pending) = escape.take() {
            match pec_decoder.next(c) {
                Ok(Some(ci)) => {
                    decoded.push(ci);
                    continue;
                },
                Ok(None) => {
                    pending.push(c);
                    escape = Some(pending);
                    continue;
                },
                Err(_) => decoded.extend_from_slice(pending.as_bytes()),
            }
        }
        if c == '%' {
            escape = Some(String::from("%"));
        } else if c == '+' {
            decoded.push(b' ');
        } else {
            decoded.extend_from_slice(c.encode_utf8(&mut utf8_buffer).as_bytes());
        }
    }
    if let Some(pending) = escape {
        decoded.extend_from_slice(pending.as_bytes());
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

pub fn encode_form_component<T>(element: T) -> String
where
    T: AsRef<str>,
{
    let element = element.as_ref();
    let mut encoding = String::with_capacity(element.len());
    for ci in element.bytes() {
        let c = char::from(ci);
        if ci == b' ' {
            encoding.push('+');
        } else if ci.is_ascii() && FORM_NOT_PCT_ENCODED.contains(&c) {
            encoding.push(c);
        } else {
            encoding.push_str(&format!("%{:02X}", ci));
        }
    }
    encoding
}
