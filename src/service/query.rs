//! Canonical query string construction.
//!
//! Identical parameter sets always produce byte-identical query strings:
//! pairs are sorted by their encoded key, and only the library identifier is
//! appended after the sorted block.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::domain::{FalseParamPolicy, ParamValue, Params};

/// Bytes left unescaped in query keys and values. Space becomes `%20`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Name of the library identifier parameter.
pub const LIBRARY_PARAM: &str = "ixlib";

/// Library identifier value, `rust-<crate version>`.
pub const LIBRARY_TAG: &str = concat!("rust-", env!("CARGO_PKG_VERSION"));

/// Key suffix that selects base64 value encoding.
const BASE64_SUFFIX: &str = "64";

/// Percent-encode a single key or value.
#[must_use]
pub fn encode_component(component: &str) -> String {
    utf8_percent_encode(component, QUERY_COMPONENT).to_string()
}

/// Encode a value for `key`. Keys ending in `64` get URL-safe unpadded base64.
#[must_use]
pub fn encode_value(key: &str, value: &ParamValue) -> String {
    let raw = value.to_string();
    if key.ends_with(BASE64_SUFFIX) {
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    } else {
        encode_component(&raw)
    }
}

/// Build the query string (without a leading `?`).
///
/// Returns an empty string when nothing is emitted. With `library_param`
/// set, the library tag replaces any caller-supplied `ixlib`.
#[must_use]
pub fn build_query(params: &Params, policy: FalseParamPolicy, library_param: bool) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .filter(|(key, _)| !(library_param && *key == LIBRARY_PARAM))
        .filter(|(_, value)| policy.emits(value))
        .map(|(key, value)| (encode_component(key), encode_value(key, value)))
        .collect();

    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    if library_param {
        pairs.push((LIBRARY_PARAM.to_string(), LIBRARY_TAG.to_string()));
    }

    pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_by_key() {
        let params = Params::from([("w", 400), ("h", 300), ("or", 0)]);
        assert_eq!(
            build_query(&params, FalseParamPolicy::Serialize, false),
            "h=300&or=0&w=400"
        );
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(
            build_query(&Params::new(), FalseParamPolicy::Serialize, false),
            ""
        );
    }

    #[test]
    fn test_library_param_appended_last() {
        let params = Params::from([("w", 100), ("h", 100)]);
        assert_eq!(
            build_query(&params, FalseParamPolicy::Serialize, true),
            format!("h=100&w=100&ixlib={LIBRARY_TAG}")
        );
        assert!(LIBRARY_TAG.starts_with("rust-"));
    }

    #[test]
    fn test_library_tag_replaces_caller_value() {
        let params = Params::from([("ixlib", "custom"), ("w", "100")]);
        assert_eq!(
            build_query(&params, FalseParamPolicy::Serialize, true),
            format!("w=100&ixlib={LIBRARY_TAG}")
        );
        assert_eq!(
            build_query(&params, FalseParamPolicy::Serialize, false),
            "ixlib=custom&w=100"
        );
    }

    #[test]
    fn test_keys_and_values_escaped() {
        let params = Params::new().with("hello world", "interesting");
        assert_eq!(
            build_query(&params, FalseParamPolicy::Serialize, false),
            "hello%20world=interesting"
        );

        let params = Params::new().with(
            "hello_world",
            "/foo\"> <script>alert(\"hacked\")</script><",
        );
        assert_eq!(
            build_query(&params, FalseParamPolicy::Serialize, false),
            "hello_world=%2Ffoo%22%3E%20%3Cscript%3Ealert%28%22hacked%22%29%3C%2Fscript%3E%3C"
        );
    }

    #[test]
    fn test_base64_variant() {
        let params = Params::new().with("txt64", "I cannøt belîév∑ it wor\u{f8ff}s! 😱");
        assert_eq!(
            build_query(&params, FalseParamPolicy::Serialize, false),
            "txt64=SSBjYW5uw7h0IGJlbMOuw6l24oiRIGl0IHdvcu-jv3MhIPCfmLE"
        );
    }

    #[test]
    fn test_false_policy() {
        let params = Params::new().with("w", 400).with("fm", false);
        assert_eq!(
            build_query(&params, FalseParamPolicy::Serialize, false),
            "fm=False&w=400"
        );
        assert_eq!(
            build_query(&params, FalseParamPolicy::Omit, false),
            "w=400"
        );
    }

    #[test]
    fn test_deterministic_regardless_of_insertion_order() {
        let a = Params::new().with("w", 1).with("h", 2).with("fit", "crop");
        let b = Params::new().with("fit", "crop").with("h", 2).with("w", 1);
        assert_eq!(
            build_query(&a, FalseParamPolicy::Serialize, true),
            build_query(&b, FalseParamPolicy::Serialize, true)
        );
    }
}
