//! Structural recognizer for bcrypt output: `$2b$12$` followed by 53
//! characters of bcrypt's base64 alphabet, 60 bytes in total.

pub const HASH_LEN: usize = 60;
pub const PAYLOAD_LEN: usize = 53;

const VARIANTS: [&str; 3] = ["2a", "2b", "2y"];
const PAYLOAD_START: usize = HASH_LEN - PAYLOAD_LEN;

/// Variant tag and cost factor of a bcrypt hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParts {
    variant: &'static str,
    cost: u32,
}

impl HashParts {
    /// Parse `candidate` as a whole; any leading or trailing byte fails the match.
    pub fn parse(candidate: &str) -> Option<Self> {
        let bytes = candidate.as_bytes();
        if bytes.len() != HASH_LEN {
            return None;
        }

        if bytes[0] != b'$' || bytes[3] != b'$' || bytes[6] != b'$' {
            return None;
        }

        let variant = VARIANTS
            .iter()
            .find(|tag| tag.as_bytes() == &bytes[1..3])
            .copied()?;

        let (tens, ones) = (bytes[4], bytes[5]);
        if !tens.is_ascii_digit() || !ones.is_ascii_digit() {
            return None;
        }

        if !bytes[PAYLOAD_START..].iter().all(|&b| is_payload_byte(b)) {
            return None;
        }

        Some(Self {
            variant,
            cost: u32::from(tens - b'0') * 10 + u32::from(ones - b'0'),
        })
    }

    pub fn variant(&self) -> &'static str {
        self.variant
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

/// True if `candidate` is exactly a bcrypt hash.
pub fn is_hash_format(candidate: &str) -> bool {
    HashParts::parse(candidate).is_some()
}

fn is_payload_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'.' || b == b'/'
}
