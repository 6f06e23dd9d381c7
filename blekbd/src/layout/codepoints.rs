use core::str::{Chars, Utf8Chunks};

/// Characters of a UTF-8 buffer that may contain invalid sequences.
///
/// Valid 1-4 byte sequences decode to their scalar value. Bytes that do not
/// start or complete a valid sequence (stray continuation bytes, truncated
/// sequences, overlongs, surrogates) are dropped and decoding resumes with the
/// next byte that can start a character.
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    chunks: Utf8Chunks<'a>,
    chars: Chars<'a>,
}

impl<'a> Codepoints<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Codepoints {
            chunks: bytes.utf8_chunks(),
            chars: "".chars(),
        }
    }
}

impl<'a> Iterator for Codepoints<'a> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.chars.next() {
                return Some(c);
            }
            self.chars = self.chunks.next()?.valid().chars();
        }
    }
}
