/// Bold emphasis, `**text**`.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8; 2] = b"**";
}

/// Italic emphasis, `*text*`.
///
/// Checked after [`Strong`] so a `**` opener is never misread as an empty
/// italic span.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
}
