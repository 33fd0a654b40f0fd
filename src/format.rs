//! Re-indentation of nested `{ }` / `[ ]` text
//!
//! Used by the `mjava` binary to lay out [`crate::parser::ast::Program`]'s
//! display string one field per line, indented with tabs.

/// Re-indent `input`: `{` and a non-empty `[` open a level, the matching
/// close ends it, every `,` starts a new line and `:` is followed by a space.
/// Whitespace outside string literals is dropped; string literals are copied
/// unchanged.
pub fn format_nested(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    let mut depth = 0usize;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                out.push('"');
                while let Some(c) = chars.next() {
                    out.push(c);
                    match c {
                        '\\' => {
                            if let Some(escaped) = chars.next() {
                                out.push(escaped);
                            }
                        }
                        '"' => break,
                        _ => {}
                    }
                }
            }
            '{' | '[' => {
                let close = if ch == '{' { '}' } else { ']' };
                while chars.peek().is_some_and(|c| c.is_whitespace()) {
                    chars.next();
                }
                if chars.peek() == Some(&close) {
                    chars.next();
                    out.push(ch);
                    out.push(close);
                } else {
                    out.push(ch);
                    depth += 1;
                    newline(&mut out, depth);
                }
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                newline(&mut out, depth);
                out.push(ch);
            }
            ',' => {
                out.push(',');
                newline(&mut out, depth);
            }
            ':' => out.push_str(": "),
            c if c.is_whitespace() => {}
            c => out.push(c),
        }
    }

    out
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push('\t');
    }
}
