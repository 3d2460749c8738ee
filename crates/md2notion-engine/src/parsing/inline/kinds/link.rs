/// An inline Markdown link, `[label](target)`.
pub struct MdLink;

impl MdLink {
    pub const OPEN: u8 = b'[';
    pub const SEP: &'static [u8; 2] = b"](";
    pub const CLOSE: u8 = b')';
}
