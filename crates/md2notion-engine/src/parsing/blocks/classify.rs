use super::kinds::Bullet;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Set when the line opens a bulleted list item.
    pub bullet: Option<BulletLine>,
    /// Line text with the line ending stripped.
    pub text: String,
}

/// A recognized bullet line: indent width plus the item's own text.
#[derive(Debug, Clone)]
pub struct BulletLine {
    pub indent: usize,
    pub text: String,
}

/// Classifies a line into a [`LineClass`] of local facts.
pub fn classify(line: &str) -> LineClass {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    let is_blank = trimmed.trim().is_empty();
    let bullet = Bullet::scan(trimmed).map(|(indent, text)| BulletLine {
        indent,
        text: text.to_string(),
    });

    LineClass {
        is_blank,
        bullet,
        text: trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line() {
        let c = classify("   \n");
        assert!(c.is_blank);
        assert!(c.bullet.is_none());
    }

    #[test]
    fn paragraph_line() {
        let c = classify("just some text\n");
        assert!(!c.is_blank);
        assert!(c.bullet.is_none());
        assert_eq!(c.text, "just some text");
    }

    #[test]
    fn bullet_line_records_indent_and_text() {
        let c = classify("    * deep item\r\n");
        let bullet = c.bullet.expect("expected bullet");
        assert_eq!(bullet.indent, 4);
        assert_eq!(bullet.text, "deep item");
    }
}
