use crate::models::{Annotations, RichTextRun};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, MdLink, Strikethrough, Strong},
};
use crate::parsing::links::LinkResolver;

/// Tokenizes one span of inline Markdown into annotated rich-text runs.
///
/// Constructs are tried in precedence order: code spans, bold, italic,
/// strikethrough, links. Overlapping emphasis resolves left-to-right by
/// first match. Anything that fails to close degrades to literal text.
///
/// Plain text between constructs is emitted as runs with the full
/// all-false annotation set; adjacent plain segments separated by a
/// construct stay separate runs, in source order.
pub fn tokenize(text: &str, resolver: &LinkResolver<'_>) -> Vec<RichTextRun> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];
    let mut plain_start = 0;

    // Helper to flush accumulated text as a plain run
    fn flush_plain(out: &mut Vec<RichTextRun>, text: &str, start: usize, end: usize) {
        if end > start {
            out.push(RichTextRun::plain(&text[start..end]));
        }
    }

    while !cur.eof() {
        let at = cur.i;
        if let Some(run) = try_parse_code_span(&mut cur) {
            flush_plain(&mut out, text, plain_start, at);
            plain_start = cur.i;
            out.push(run);
            continue;
        }
        if let Some(run) = try_parse_strong(&mut cur) {
            flush_plain(&mut out, text, plain_start, at);
            plain_start = cur.i;
            out.push(run);
            continue;
        }
        if let Some(run) = try_parse_emphasis(&mut cur) {
            flush_plain(&mut out, text, plain_start, at);
            plain_start = cur.i;
            out.push(run);
            continue;
        }
        if let Some(run) = try_parse_strikethrough(&mut cur) {
            flush_plain(&mut out, text, plain_start, at);
            plain_start = cur.i;
            out.push(run);
            continue;
        }
        if let Some(run) = try_parse_link(&mut cur, resolver) {
            flush_plain(&mut out, text, plain_start, at);
            plain_start = cur.i;
            out.push(run);
            continue;
        }
        cur.bump();
    }

    flush_plain(&mut out, text, plain_start, cur.i);
    out
}

/// Consumes `open`..`close` and returns the inner text.
///
/// Returns `None` on an unclosed or empty span; the cursor is restored so
/// the delimiter reads as literal text.
fn try_delimited<'a>(cur: &mut Cursor<'a>, open: &[u8], close: &[u8]) -> Option<&'a str> {
    if !cur.starts_with(open) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(open.len());
    let inner_start = cur.i;

    while !cur.eof() && !cur.starts_with(close) {
        cur.bump();
    }

    if !cur.starts_with(close) || cur.i == inner_start {
        // Not closed (or nothing inside), restore cursor
        *cur = saved;
        return None;
    }
    let inner = cur.slice(inner_start, cur.i);
    cur.bump_n(close.len());
    Some(inner)
}

fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<RichTextRun> {
    let inner = try_delimited(cur, &[CodeSpan::TICK], &[CodeSpan::TICK])?;
    Some(RichTextRun::styled(inner, Annotations::code()))
}

fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<RichTextRun> {
    let inner = try_delimited(cur, Strong::DELIM, Strong::DELIM)?;
    Some(RichTextRun::styled(inner, Annotations::bold()))
}

fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<RichTextRun> {
    let inner = try_delimited(cur, &[Emphasis::STAR], &[Emphasis::STAR])?;
    Some(RichTextRun::styled(inner, Annotations::italic()))
}

fn try_parse_strikethrough(cur: &mut Cursor<'_>) -> Option<RichTextRun> {
    let inner = try_delimited(cur, Strikethrough::DELIM, Strikethrough::DELIM)?;
    Some(RichTextRun::styled(inner, Annotations::strikethrough()))
}

/// Attempts to parse a `[label](target)` link at the current position.
///
/// The target is passed through the resolver: link-map hits become absolute
/// URLs, misses and already-absolute targets stay as written.
fn try_parse_link(cur: &mut Cursor<'_>, resolver: &LinkResolver<'_>) -> Option<RichTextRun> {
    if cur.peek() != Some(MdLink::OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // [
    let label_start = cur.i;

    while !cur.eof() && !cur.starts_with(MdLink::SEP) {
        cur.bump();
    }
    if !cur.starts_with(MdLink::SEP) {
        *cur = saved;
        return None;
    }
    let label = cur.slice(label_start, cur.i);
    cur.bump_n(MdLink::SEP.len());
    let target_start = cur.i;

    while !cur.eof() && cur.peek() != Some(MdLink::CLOSE) {
        cur.bump();
    }
    if cur.peek() != Some(MdLink::CLOSE) {
        *cur = saved;
        return None;
    }
    let target = cur.slice(target_start, cur.i);
    cur.bump(); // )

    Some(RichTextRun::link(label, resolver.resolve(target)))
}
