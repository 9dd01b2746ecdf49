//! RFC 5545 content lines: folding, unfolding and TEXT escaping.
//!
//! The writer and the reader both go through here so that a calendar read
//! back and written out again has the same physical lines.

/// Longest physical line in octets, not counting the CRLF.
const LINE_OCTETS: usize = 75;

// ─── Writing ─────────────────────────────────────────────────────────────────

/// Append `line` folded to [`LINE_OCTETS`], continuing with CRLF + SP.
/// Folds never split a UTF-8 sequence.
pub(crate) fn push_line(out: &mut String, line: &str) {
  let mut width = 0;
  for c in line.chars() {
    if width + c.len_utf8() > LINE_OCTETS {
      out.push_str("\r\n ");
      width = 1;
    }
    out.push(c);
    width += c.len_utf8();
  }
  out.push_str("\r\n");
}

/// Append a TEXT property `name:value`, escaping `value`.
pub(crate) fn push_text(out: &mut String, name: &str, value: &str) {
  push_line(out, &format!("{name}:{}", escape(value)));
}

/// Escape a TEXT value: backslash, `;`, `,` and newline.
pub(crate) fn escape(value: &str) -> String {
  let mut out = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '\\' | ';' | ',' => {
        out.push('\\');
        out.push(c);
      }
      '\n' => out.push_str("\\n"),
      _ => out.push(c),
    }
  }
  out
}

// ─── Reading ─────────────────────────────────────────────────────────────────

/// Logical lines of `input`, with continuation lines joined and blank lines
/// dropped. Accepts CRLF or bare LF, and SP or HTAB continuations.
pub(crate) fn unfold(input: &str) -> Vec<String> {
  let mut lines: Vec<String> = Vec::new();
  for line in input.lines() {
    match line.strip_prefix([' ', '\t']) {
      Some(rest) => {
        if let Some(last) = lines.last_mut() {
          last.push_str(rest);
        }
      }
      None if !line.is_empty() => lines.push(line.to_owned()),
      None => {}
    }
  }
  lines
}

/// Property name and raw value of a content line. Parameters are dropped; a
/// `:` inside a quoted parameter value does not end the name.
pub(crate) fn split(line: &str) -> Option<(&str, &str)> {
  let mut quoted = false;
  let colon = line.char_indices().find_map(|(i, c)| match c {
    '"' => {
      quoted = !quoted;
      None
    }
    ':' if !quoted => Some(i),
    _ => None,
  })?;
  let (head, value) = (&line[..colon], &line[colon + 1..]);
  Some((head.split_once(';').map_or(head, |(name, _)| name), value))
}

/// Reverse of [`escape`]. Unknown escapes are kept as written.
pub(crate) fn unescape(value: &str) -> String {
  let mut out = String::with_capacity(value.len());
  let mut escaped = false;
  for c in value.chars() {
    if !escaped {
      match c {
        '\\' => escaped = true,
        _ => out.push(c),
      }
      continue;
    }
    escaped = false;
    match c {
      'n' | 'N' => out.push('\n'),
      '\\' | ';' | ',' => out.push(c),
      _ => {
        out.push('\\');
        out.push(c);
      }
    }
  }
  if escaped {
    out.push('\\');
  }
  out
}
