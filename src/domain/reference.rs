//! Cross-reference scanning for script payloads.
//!
//! A reference is a `RunScript` or `RunOperation` call whose first argument
//! is a string literal holding exactly one canonical identifier, optionally
//! prefixed with `sc.` or `op.`:
//!
//! ```text
//! RunScript("sc.0d4c3a7e-1f2b-4c5d-8e9f-0a1b2c3d4e5f");
//! Jitterbit.RunOperation("op.5e6f7a8b-9c0d-4e1f-a2b3-c4d5e6f7a8b9");
//! ```
//!
//! The scanner skips `//` and `/* */` comments and every other string
//! literal, so identifiers appearing there are never rewritten.

use std::ops::Range;

/// The two call forms that carry cross-references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    RunScript,
    RunOperation,
}

impl CallKind {
    fn from_ident(ident: &str) -> Option<Self> {
        match ident {
            "RunScript" => Some(Self::RunScript),
            "RunOperation" => Some(Self::RunOperation),
            _ => None,
        }
    }

    /// Category the referenced entity belongs to.
    pub fn category(self) -> &'static str {
        match self {
            Self::RunScript => "Script",
            Self::RunOperation => "Operation",
        }
    }

    fn id_prefix(self) -> &'static str {
        match self {
            Self::RunScript => "sc.",
            Self::RunOperation => "op.",
        }
    }
}

/// A resolved call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallReference {
    pub kind: CallKind,
    pub id: String,
    /// Byte range of the literal's content, quotes excluded.
    pub span: Range<usize>,
}

/// Result of a rewrite pass over one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub rewritten: usize,
    pub unresolved: Vec<CallReference>,
}

impl Rewrite {
    pub fn changed(&self) -> bool {
        self.rewritten > 0
    }
}

/// Whether `s` is an 8-4-4-4-12 hexadecimal identifier.
pub fn is_canonical_id(s: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];
    let mut parts = s.split('-');
    GROUPS.iter().all(|len| {
        parts
            .next()
            .is_some_and(|part| part.len() == *len && part.bytes().all(|b| b.is_ascii_hexdigit()))
    }) && parts.next().is_none()
}

/// Structured token replacing a raw identifier.
pub fn reference_token(path: &str) -> String {
    format!("<TAG>{path}</TAG>")
}

#[derive(Clone, Copy)]
enum Pending {
    None,
    Callee(CallKind),
    Argument(CallKind),
}

/// Find every call reference in `text`, in order of appearance.
pub fn scan_references(text: &str) -> Vec<CallReference> {
    let bytes = text.as_bytes();
    let mut references = Vec::new();
    let mut pending = Pending::None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = bytes[i..].iter().position(|c| *c == b'\n').map_or(bytes.len(), |p| i + p);
                pending = Pending::None;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = find_from(bytes, i + 2, b"*/").map_or(bytes.len(), |p| p + 2);
                pending = Pending::None;
            }
            b'"' | b'\'' => {
                let (content, end) = scan_literal(bytes, i);
                if let Pending::Argument(kind) = pending {
                    if let Some(id) = argument_id(kind, &text[content.clone()]) {
                        references.push(CallReference { kind, id: id.to_string(), span: content });
                    }
                }
                pending = Pending::None;
                i = end;
            }
            b'(' => {
                pending = match pending {
                    Pending::Callee(kind) => Pending::Argument(kind),
                    _ => Pending::None,
                };
                i += 1;
            }
            _ if is_ident_byte(b) => {
                let start = i;
                while i < bytes.len() && is_ident_byte(bytes[i]) {
                    i += 1;
                }
                pending = CallKind::from_ident(&text[start..i]).map_or(Pending::None, Pending::Callee);
            }
            _ if b.is_ascii_whitespace() => i += 1,
            _ => {
                pending = Pending::None;
                i += 1;
            }
        }
    }

    references
}

/// Replace every resolvable reference with the token returned by `resolve`.
///
/// References for which `resolve` returns `None` are kept byte for byte.
pub fn rewrite_references<F>(text: &str, mut resolve: F) -> Rewrite
where
    F: FnMut(&CallReference) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut rewritten = 0;
    let mut unresolved = Vec::new();

    for reference in scan_references(text) {
        match resolve(&reference) {
            Some(token) => {
                out.push_str(&text[cursor..reference.span.start]);
                out.push_str(&token);
                cursor = reference.span.end;
                rewritten += 1;
            }
            None => unresolved.push(reference),
        }
    }
    out.push_str(&text[cursor..]);

    Rewrite { text: out, rewritten, unresolved }
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn find_from(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    bytes.get(from..)?.windows(needle.len()).position(|w| w == needle).map(|p| from + p)
}

/// Returns the content range and the index just past the closing quote.
/// An unterminated literal runs to the end of the text.
fn scan_literal(bytes: &[u8], open: usize) -> (Range<usize>, usize) {
    let quote = bytes[open];
    let start = open + 1;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            c if c == quote => return (start..i, i + 1),
            _ => i += 1,
        }
    }
    (start..bytes.len(), bytes.len())
}

fn argument_id(kind: CallKind, content: &str) -> Option<&str> {
    let id = content.strip_prefix(kind.id_prefix()).unwrap_or(content);
    is_canonical_id(id).then_some(id)
}
