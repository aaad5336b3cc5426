//! Process-wide cache of compiled regular expressions.
//!
//! Metadata patterns are data, not source literals, so they cannot live in
//! per-pattern `Lazy` statics. This keyed map compiles each pattern string
//! once and shares it across every scanner and thread.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use regex::Regex;

static CACHE: Lazy<RwLock<HashMap<String, Arc<Regex>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Returns the compiled form of `pattern`, compiling and caching on first
/// use. Metadata patterns are trusted input; a malformed one is an invariant
/// violation and panics.
pub fn regex_for(pattern: &str) -> Arc<Regex> {
    if let Some(regex) = CACHE.read().expect("regex cache poisoned").get(pattern) {
        return Arc::clone(regex);
    }
    let compiled = Arc::new(Regex::new(pattern).expect("valid metadata regex"));
    let mut cache = CACHE.write().expect("regex cache poisoned");
    Arc::clone(cache.entry(pattern.to_string()).or_insert(compiled))
}

/// Compiled `pattern` anchored to match the entire input.
pub fn full_match_regex(pattern: &str) -> Arc<Regex> {
    regex_for(&format!(r"\A(?:{})\z", pattern))
}

/// Compiled `pattern` anchored to match at the start of the input.
pub fn prefix_regex(pattern: &str) -> Arc<Regex> {
    regex_for(&format!(r"\A(?:{})", pattern))
}
