use std::convert::TryFrom;

/// This is returned when a character which is not a hexadecimal digit shows
/// up where a percent-encoded character was expected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IllegalPercentEncoding;

pub struct PercentEncodedCharacterDecoder {
    decoded_character: u8,
    digits_left: usize,
}

impl PercentEncodedCharacterDecoder {
    pub fn new() -> Self {
        Self {
            decoded_character: 0,
            digits_left: 2,
        }
    }

    pub fn next(
        &mut self,
        c: char,
    ) -> Result<Option<u8>, IllegalPercentEncoding> {
        self.shift_in_hex_digit(c)?;
        self.digits_left -= 1;
        if self.digits_left == 0 {
            let output = self.decoded_character;
            self.reset();
            Ok(Some(output))
        } else {
            Ok(None)
        }
    }

    fn reset(&mut self) {
        self.decoded_character = 0;
        self.digits_left = 2;
    }

    fn shift_in_hex_digit(
        &mut self,
        c: char,
    ) -> Result<(), IllegalPercentEncoding> {
        match c.to_digit(16).map(u8::try_from) {
            Some(Ok(ci)) => {
                self.decoded_character <<= 4;
                self.decoded_character += ci;
                Ok(())
            },
            _ => {
                self.reset();
                Err(IllegalPercentEncoding)
            },
        }
    }
}
