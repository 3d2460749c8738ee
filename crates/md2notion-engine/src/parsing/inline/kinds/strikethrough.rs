/// Strikethrough, `~~text~~`.
pub struct Strikethrough;

impl Strikethrough {
    pub const DELIM: &'static [u8; 2] = b"~~";
}
