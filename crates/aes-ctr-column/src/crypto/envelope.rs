//! Byte layout of a persisted value.

/// Borrowed view of `IV || ciphertext`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    iv: &'a [u8],
    ciphertext: &'a [u8],
}

impl<'a> Envelope<'a> {
    /// Pair an IV with its ciphertext.
    pub fn new(iv: &'a [u8], ciphertext: &'a [u8]) -> Self {
        Self { iv, ciphertext }
    }

    /// Split stored bytes at `iv_length`.
    ///
    /// Input shorter than `iv_length` yields a short IV and an empty
    /// ciphertext; rejecting it is left to the cipher.
    pub fn split(bytes: &'a [u8], iv_length: usize) -> Self {
        let (iv, ciphertext) = bytes.split_at(iv_length.min(bytes.len()));
        Self { iv, ciphertext }
    }

    pub fn iv(&self) -> &'a [u8] {
        self.iv
    }

    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }

    /// Total length in bytes.
    pub fn len(&self) -> usize {
        self.iv.len() + self.ciphertext.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenate into the stored representation, IV first.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(self.iv);
        out.extend_from_slice(self.ciphertext);
        out
    }
}
