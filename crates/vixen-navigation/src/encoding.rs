//! Query component encoding
//!
//! Every byte outside the unreserved set is written as `%XX` with uppercase
//! hex digits, so `a b` becomes `a%20b`, `std::vector` becomes
//! `std%3A%3Avector` and `C++` becomes `C%2B%2B`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left as-is: ASCII alphanumerics and `- _ . ! ~ * ' ( )`
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `input` for use as a URL query component.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, QUERY_COMPONENT).to_string()
}
