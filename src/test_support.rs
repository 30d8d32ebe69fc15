/// Shaped like bcrypt output, never produced from a known plaintext here.
pub(crate) const HASH_SHAPED: &str = "$2a$12$sWSdI13BJ5ipPca/f8KTF.k4eFKsUtobfWdTBoQdj9g9I8JfLmZty";
