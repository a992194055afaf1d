//! Splitting flake uris into reference and fragment, and percent-encoding
//! fragments the way nix does.
//!
//! Nix is more permissive than RFC 3986 for installable fragments: on top of
//! the unreserved characters it leaves the fragment, pchar and sub-delims
//! sets unescaped. See `url-parts.hh` in the nix source.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Everything that is *not* in this set stays unescaped: ascii alphanumerics,
/// the unreserved `-._~`, plus nix's extended fragment-safe characters.
const FRAGMENT_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    // fragment
    .remove(b'/')
    .remove(b'?')
    .remove(b' ')
    .remove(b'^')
    // pchar
    .remove(b':')
    .remove(b'@')
    // sub-delims
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'"')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Percent-encode a uri fragment with nix's extended safe character set.
pub fn quote_url_fragment(text: &str) -> String {
    utf8_percent_encode(text, FRAGMENT_ESCAPE).to_string()
}

/// Split a flake uri at the first literal `#` into the flake reference and
/// the percent-decoded fragment.
///
/// Without a `#` the whole input is the reference. Decoding is best effort:
/// a `%` not followed by two hex digits passes through literally, and bytes
/// that do not form valid utf-8 decode lossily. This operation never fails.
pub fn split_uri_fragment(uri: &str) -> (&str, Option<String>) {
    match uri.split_once('#') {
        None => (uri, None),
        Some((flake_ref, fragment)) => {
            let decoded = percent_decode_str(fragment).decode_utf8_lossy();
            (flake_ref, Some(decoded.into_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("foo", "foo")]
    #[case("foo@bar", "foo@bar")]
    #[case("foo bar", "foo bar")]
    #[case("foo.bar", "foo.bar")]
    #[case("foo#bar", "foo%23bar")]
    #[case("\"foo.bar\"", "\"foo.bar\"")]
    #[case("foo%bar", "foo%25bar")]
    fn quote_url_fragment_safe_set(#[case] fragment: &str, #[case] expected: &str) {
        assert_eq!(quote_url_fragment(fragment), expected);
    }

    #[rstest]
    #[case("", ("", None))]
    #[case("foo", ("foo", None))]
    #[case("foo#bar", ("foo", Some("bar")))]
    #[case("foo#bar#baz", ("foo", Some("bar#baz")))]
    #[case("foo#bar%23baz", ("foo", Some("bar#baz")))]
    #[case("foo#bar?baz", ("foo", Some("bar?baz")))]
    #[case("#bar", ("", Some("bar")))]
    fn split_uri_fragment_cases(#[case] uri: &str, #[case] expected: (&str, Option<&str>)) {
        let (flake_ref, fragment) = split_uri_fragment(uri);
        assert_eq!(flake_ref, expected.0);
        assert_eq!(fragment.as_deref(), expected.1);
    }

    // Malformed escapes are passed through untouched.
    #[rstest]
    #[case("foo#bar%2", "bar%2")]
    #[case("foo#bar%zz", "bar%zz")]
    #[case("foo#bar%", "bar%")]
    fn split_uri_fragment_malformed_escape(#[case] uri: &str, #[case] expected: &str) {
        let (_, fragment) = split_uri_fragment(uri);
        assert_eq!(fragment.as_deref(), Some(expected));
    }
}
