//! # Canonical Fingerprint Text
//!
//! This module defines [`CanonicalText`], the sole construction path for the
//! text that fingerprints are computed over.
//!
//! ## Invariant
//!
//! `CanonicalText` has a private inner field. The only constructors are
//! [`CanonicalText::tagged_dict`] and [`CanonicalText::bare_record`], and the
//! digest functions in `hms-crypto` accept nothing else. Any change to how a
//! field is rendered changes every digest, so the rendering rules live in one
//! place.
//!
//! ## Renderings
//!
//! - **Tagged dict** (reservation localizer): `Tag:{'key': value, ...}` —
//!   a dictionary literal with `': '` after keys and `', '` between entries.
//!   Strings are quoted with [`quote_literal`], floats with [`float_literal`],
//!   integers in plain decimal.
//! - **Bare record** (room key): `{key:value,key:value}` — no quoting, no
//!   spaces.
//!
//! Both renderings are wire format: the stored localizers and room keys of
//! existing bookings depend on them byte for byte.

/// A scalar value inside a tagged dict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DictValue<'a> {
    /// Rendered as a quoted string literal.
    Str(&'a str),
    /// Rendered as a decimal integer.
    Int(i64),
    /// Rendered as a float literal (`1719792000.0`).
    Float(f64),
}

impl DictValue<'_> {
    fn render(&self, out: &mut String) {
        match self {
            Self::Str(s) => out.push_str(&quote_literal(s)),
            Self::Int(n) => out.push_str(&n.to_string()),
            Self::Float(f) => out.push_str(&float_literal(*f)),
        }
    }
}

/// Text produced exclusively by the canonical renderings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalText(String);

impl CanonicalText {
    /// Render `tag:{'k1': v1, 'k2': v2}` with entries in the given order.
    pub fn tagged_dict(tag: &str, entries: &[(&str, DictValue<'_>)]) -> Self {
        let mut out = String::with_capacity(64 + entries.len() * 32);
        out.push_str(tag);
        out.push_str(":{");
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&quote_literal(key));
            out.push_str(": ");
            value.render(&mut out);
        }
        out.push('}');
        Self(out)
    }

    /// Render `{k1:v1,k2:v2}` with entries in the given order and no quoting.
    pub fn bare_record(entries: &[(&str, &str)]) -> Self {
        let body = entries
            .iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect::<Vec<_>>()
            .join(",");
        Self(format!("{{{body}}}"))
    }

    /// The canonical text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The UTF-8 bytes to digest.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the text is empty. Never true for text built by the constructors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalText {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Display for CanonicalText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Quote a string as a dictionary-literal string.
///
/// Single quotes unless the text contains `'` and no `"`. Backslash, the
/// chosen quote, `\n`, `\r`, `\t` are escaped; other control characters use
/// `\xNN`, `\uNNNN`, or `\UNNNNNNNN`. Everything else is emitted verbatim.
pub fn quote_literal(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xff {
                    out.push_str(&format!("\\x{code:02x}"));
                } else if code <= 0xffff {
                    out.push_str(&format!("\\u{code:04x}"));
                } else {
                    out.push_str(&format!("\\U{code:08x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Render a float as a dictionary-literal number.
///
/// Integral values keep a trailing `.0`; others use the shortest decimal that
/// round-trips. Exact for magnitudes in `[1e-4, 1e16)`, which covers every
/// epoch timestamp the stack produces.
pub fn float_literal(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if f == f.trunc() && f.abs() < 1e16 {
        format!("{f:.1}")
    } else {
        format!("{f}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_dict_layout() {
        let text = CanonicalText::tagged_dict(
            "Tag",
            &[
                ("a", DictValue::Str("x")),
                ("b", DictValue::Int(3)),
                ("c", DictValue::Float(2.0)),
            ],
        );
        assert_eq!(text.as_str(), "Tag:{'a': 'x', 'b': 3, 'c': 2.0}");
    }

    #[test]
    fn tagged_dict_empty() {
        assert_eq!(CanonicalText::tagged_dict("T", &[]).as_str(), "T:{}");
    }

    #[test]
    fn bare_record_layout() {
        let text = CanonicalText::bare_record(&[("alg", "SHA-256"), ("typ", "single")]);
        assert_eq!(text.as_str(), "{alg:SHA-256,typ:single}");
    }

    #[test]
    fn quote_literal_forms() {
        assert_eq!(quote_literal("John Smith"), "'John Smith'");
        assert_eq!(quote_literal("O'Brien Smith"), "\"O'Brien Smith\"");
        assert_eq!(quote_literal("say \"hi\" it's"), "'say \"hi\" it\\'s'");
        assert_eq!(quote_literal("a\\b"), "'a\\\\b'");
        assert_eq!(quote_literal("tab\there"), "'tab\\there'");
        assert_eq!(quote_literal("bell\u{7}"), "'bell\\x07'");
        assert_eq!(quote_literal("José"), "'José'");
    }

    #[test]
    fn float_literal_forms() {
        assert_eq!(float_literal(1_719_792_000.0), "1719792000.0");
        assert_eq!(float_literal(1_719_792_000.123_456), "1719792000.123456");
        assert_eq!(float_literal(0.1), "0.1");
        assert_eq!(float_literal(-0.0), "-0.0");
        assert_eq!(float_literal(f64::NAN), "nan");
        assert_eq!(float_literal(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn canonical_text_bytes() {
        let text = CanonicalText::bare_record(&[("k", "v")]);
        assert_eq!(text.as_bytes(), b"{k:v}");
        assert_eq!(text.len(), 5);
        assert!(!text.is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Plain text is wrapped in single quotes and otherwise untouched.
        #[test]
        fn plain_strings_quote_verbatim(s in "[a-zA-Z0-9 /.:-]{0,40}") {
            prop_assert_eq!(quote_literal(&s), format!("'{s}'"));
        }

        /// Rendering is deterministic for any entry list.
        #[test]
        fn tagged_dict_deterministic(k in "[a-z_]{1,12}", v in any::<i64>(), f in 0.0f64..2e9) {
            let a = CanonicalText::tagged_dict("T", &[(&k, DictValue::Int(v)), ("f", DictValue::Float(f))]);
            let b = CanonicalText::tagged_dict("T", &[(&k, DictValue::Int(v)), ("f", DictValue::Float(f))]);
            prop_assert_eq!(a, b);
        }

        /// Every rendered float parses back to the same value.
        #[test]
        fn float_literal_round_trips(f in 0.0f64..1e15) {
            let parsed: f64 = float_literal(f).parse().unwrap();
            prop_assert_eq!(parsed, f);
        }
    }
}
