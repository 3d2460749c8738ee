/// Bulleted list marker recognition.
pub struct Bullet;

impl Bullet {
    /// Characters that open a bullet item when followed by a space.
    pub const MARKERS: [u8; 3] = [b'-', b'*', b'+'];

    /// Returns `(indent width, item text)` when `line` opens a bullet item.
    ///
    /// Indent width counts leading whitespace characters; the marker must be
    /// followed by a space, so emphasis at the start of a paragraph line
    /// (`*bold*`) is not misread as a list.
    pub fn scan(line: &str) -> Option<(usize, &str)> {
        let bytes = line.as_bytes();
        let indent = bytes
            .iter()
            .take_while(|b| **b == b' ' || **b == b'\t')
            .count();
        let marker = *bytes.get(indent)?;
        if !Self::MARKERS.contains(&marker) || bytes.get(indent + 1) != Some(&b' ') {
            return None;
        }
        Some((indent, line[indent + 2..].trim_start()))
    }
}
