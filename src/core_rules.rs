//! Core rules (RFC 5234 Appendix B.1)
//!
//! Ready-made constructors for the terminal rules every ABNF grammar gets
//! for free, built from the [`matching`](crate::matching) primitives so
//! callers need not hand-assemble them. Each function returns a fresh
//! tree; [`core_rule`] looks one up by its RFC name.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::matching::Matcher;

/// `ALPHA = %x41-5A / %x61-7A`  ; A-Z / a-z.
pub fn alpha() -> Matcher {
    Matcher::alternation(vec![
        Matcher::byte_range(0x41, 0x5A).unwrap(),
        Matcher::byte_range(0x61, 0x7A).unwrap(),
    ])
}

/// `DIGIT = %x30-39`  ; 0-9.
pub fn digit() -> Matcher {
    Matcher::byte_range(0x30, 0x39).unwrap()
}

/// `DQUOTE = %x22`  ; double quote.
pub fn dquote() -> Matcher {
    Matcher::byte(0x22)
}

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`.
pub fn hexdig() -> Matcher {
    Matcher::alternation(vec![digit(), Matcher::byte_range(b'A', b'F').unwrap()])
}

/// `HTAB = %x09`  ; horizontal tab.
pub fn htab() -> Matcher {
    Matcher::byte(0x09)
}

/// `OCTET = %x00-FF`  ; any 8-bit value.
pub fn octet() -> Matcher {
    Matcher::byte_range(0x00, 0xFF).unwrap()
}

/// `SP = %x20`  ; space.
pub fn sp() -> Matcher {
    Matcher::byte(0x20)
}

/// `VCHAR = %x21-7E`  ; visible (printing) characters.
pub fn vchar() -> Matcher {
    Matcher::byte_range(0x21, 0x7E).unwrap()
}

/// `CRLF = %d13.10`  ; Internet-standard newline.
pub fn crlf() -> Matcher {
    Matcher::byte_sequence(b"\r\n")
}

/// Core rules by their RFC 5234 names, built once on first use.
static CORE_RULES: Lazy<HashMap<&'static str, Matcher>> = Lazy::new(|| {
    HashMap::from([
        ("ALPHA", alpha()),
        ("DIGIT", digit()),
        ("DQUOTE", dquote()),
        ("HEXDIG", hexdig()),
        ("HTAB", htab()),
        ("OCTET", octet()),
        ("SP", sp()),
        ("VCHAR", vchar()),
        ("CRLF", crlf()),
    ])
});

/// Look up a core rule by its uppercase RFC 5234 name.
///
/// Returns an independent clone of the rule's tree, or `None` for an
/// unknown name.
pub fn core_rule(name: &str) -> Option<Matcher> {
    CORE_RULES.get(name).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_covers_both_cases() {
        let rule = alpha();
        assert_eq!(rule.evaluate(b"A").as_slice(), &[1]);
        assert_eq!(rule.evaluate(b"z").as_slice(), &[1]);
        assert!(rule.evaluate(b"1").is_empty());
        assert!(rule.evaluate(b"[").is_empty());
        assert!(rule.evaluate(b"`").is_empty());
    }

    #[test]
    fn test_digit() {
        let rule = digit();
        assert_eq!(rule.evaluate(b"0").as_slice(), &[1]);
        assert_eq!(rule.evaluate(b"9").as_slice(), &[1]);
        assert!(rule.evaluate(b"/").is_empty());
        assert!(rule.evaluate(b":").is_empty());
    }

    #[test]
    fn test_dquote() {
        assert_eq!(dquote().evaluate(b"\"quoted\"").as_slice(), &[1]);
        assert!(dquote().evaluate(b"'").is_empty());
    }

    #[test]
    fn test_hexdig_accepts_digits_and_uppercase() {
        let rule = hexdig();
        for b in *b"0123456789ABCDEF" {
            assert_eq!(rule.evaluate(&[b]).as_slice(), &[1], "HEXDIG {}", b as char);
        }
        // Lowercase hex digits are not HEXDIG in RFC 5234.
        assert!(rule.evaluate(b"a").is_empty());
        assert!(rule.evaluate(b"G").is_empty());
    }

    #[test]
    fn test_htab_and_sp() {
        assert_eq!(htab().evaluate(b"\tx").as_slice(), &[1]);
        assert!(htab().evaluate(b" ").is_empty());
        assert_eq!(sp().evaluate(b" x").as_slice(), &[1]);
        assert!(sp().evaluate(b"\t").is_empty());
    }

    #[test]
    fn test_octet_accepts_any_byte() {
        assert_eq!(octet().evaluate(&[0x00]).as_slice(), &[1]);
        assert_eq!(octet().evaluate(&[0xFF]).as_slice(), &[1]);
        assert!(octet().evaluate(b"").is_empty());
    }

    #[test]
    fn test_vchar_bounds() {
        assert_eq!(vchar().evaluate(b"!").as_slice(), &[1]);
        assert_eq!(vchar().evaluate(b"~").as_slice(), &[1]);
        assert!(vchar().evaluate(b" ").is_empty());
        assert!(vchar().evaluate(&[0x7F]).is_empty());
    }

    #[test]
    fn test_crlf_requires_both_bytes() {
        assert_eq!(crlf().evaluate(b"\r\nrest").as_slice(), &[2]);
        assert!(crlf().evaluate(b"\r").is_empty());
        assert!(crlf().evaluate(b"\n").is_empty());
    }

    #[test]
    fn test_core_rule_lookup() {
        let rule = core_rule("ALPHA").unwrap();
        assert_eq!(rule, alpha());
        assert!(core_rule("alpha").is_none());
        assert!(core_rule("LWSP").is_none());
    }
}
