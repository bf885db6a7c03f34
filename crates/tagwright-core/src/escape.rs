//! HTML escaping written straight to the output sink.

use std::io::{self, Write};

/// Escape `s` for HTML text and attribute-value context and write it to `w`.
///
/// Escapes `&`, `<`, `>`, `"` and `'`. Newlines, carriage returns and tabs
/// pass through; they are valid inside a quoted attribute value.
pub(crate) fn write_escaped(w: &mut dyn Write, s: &str) -> io::Result<()> {
    let bytes = s.as_bytes();
    let mut flushed = 0;
    for (i, b) in bytes.iter().enumerate() {
        let replacement: &[u8] = match b {
            b'&' => b"&amp;",
            b'<' => b"&lt;",
            b'>' => b"&gt;",
            b'"' => b"&#34;",
            b'\'' => b"&#39;",
            _ => continue,
        };
        w.write_all(&bytes[flushed..i])?;
        w.write_all(replacement)?;
        flushed = i + 1;
    }
    w.write_all(&bytes[flushed..])
}

/// Escape `s` for HTML text and attribute-value context.
pub fn escape(s: &str) -> String {
    let mut buf = Vec::with_capacity(s.len());
    // writing to a Vec cannot fail
    let _ = write_escaped(&mut buf, s);
    String::from_utf8(buf).unwrap_or_default()
}
