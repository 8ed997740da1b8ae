//! Domain name validation.
//!
//! A valid domain is a bare fully-qualified host: no scheme, no path, no
//! trailing dot or slash.

use std::sync::LazyLock;

use regex::Regex;

/// Leading labels may carry underscores (e.g. `_acme.example.imgix.net`).
static LEADING_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{1,62}$").expect("valid leading label pattern"));

/// The label before the TLD cannot start or end with a hyphen.
static SECOND_LEVEL_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?$")
        .expect("valid second level label pattern")
});

static TOP_LEVEL_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{1,63}$").expect("valid top level label pattern"));

/// Maximum number of labels in front of the second-level label.
const MAX_LEADING_LABELS: usize = 125;

/// Check whether `domain` is a fully-qualified host name.
#[must_use]
pub fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();

    let Some((top_level, rest)) = labels.split_last() else {
        return false;
    };
    let Some((second_level, leading)) = rest.split_last() else {
        return false;
    };

    leading.len() <= MAX_LEADING_LABELS
        && leading.iter().all(|label| LEADING_LABEL.is_match(label))
        && SECOND_LEVEL_LABEL.is_match(second_level)
        && TOP_LEVEL_LABEL.is_match(top_level)
}
