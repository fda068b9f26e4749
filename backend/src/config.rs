//! Analysis settings read from the environment.

use std::path::PathBuf;
use std::sync::OnceLock;

pub const DEFAULT_CORPUS_DIR: &str = "./corpus";
pub const DEFAULT_DOCUMENT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_SENTENCE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_FINGERPRINT_K: usize = 5;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub corpus_dir: PathBuf,
    /// A reference document is reported when its similarity is strictly above this.
    pub document_threshold: f64,
    /// A sentence pair is reported when its similarity is strictly above this.
    pub sentence_threshold: f64,
    pub fingerprint_k: usize,
    pub max_upload_bytes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from(DEFAULT_CORPUS_DIR),
            document_threshold: DEFAULT_DOCUMENT_THRESHOLD,
            sentence_threshold: DEFAULT_SENTENCE_THRESHOLD,
            fingerprint_k: DEFAULT_FINGERPRINT_K,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AnalysisConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            corpus_dir: lookup("COPYCHECK_CORPUS_DIR").map(PathBuf::from).unwrap_or(defaults.corpus_dir),
            document_threshold: parse_or(&lookup, "COPYCHECK_DOCUMENT_THRESHOLD", defaults.document_threshold),
            sentence_threshold: parse_or(&lookup, "COPYCHECK_SENTENCE_THRESHOLD", defaults.sentence_threshold),
            fingerprint_k: parse_or(&lookup, "COPYCHECK_FINGERPRINT_K", defaults.fingerprint_k).max(1),
            max_upload_bytes: parse_or(&lookup, "COPYCHECK_MAX_UPLOAD_BYTES", defaults.max_upload_bytes),
        }
    }
}

fn parse_or<T: std::str::FromStr + std::fmt::Debug>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    let Some(raw) = lookup(key) else { return default };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("{key}: cannot parse {raw:?}, using default {default:?}");
            default
        }
    }
}

static ANALYSIS_CONFIG: OnceLock<AnalysisConfig> = OnceLock::new();

pub fn get_analysis_config() -> &'static AnalysisConfig {
    ANALYSIS_CONFIG.get_or_init(|| {
        let config = AnalysisConfig::from_env();
        tracing::info!("analysis config: {config:?}");
        config
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(AnalysisConfig::from_lookup(|_| None), AnalysisConfig::default());
    }

    #[test]
    fn values_are_read() {
        let config = AnalysisConfig::from_lookup(lookup_from(&[
            ("COPYCHECK_CORPUS_DIR", "/srv/corpus"),
            ("COPYCHECK_DOCUMENT_THRESHOLD", "0.25"),
            ("COPYCHECK_SENTENCE_THRESHOLD", " 0.8 "),
            ("COPYCHECK_FINGERPRINT_K", "3"),
        ]));
        assert_eq!(config.corpus_dir, PathBuf::from("/srv/corpus"));
        assert_eq!(config.document_threshold, 0.25);
        assert_eq!(config.sentence_threshold, 0.8);
        assert_eq!(config.fingerprint_k, 3);
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = AnalysisConfig::from_lookup(lookup_from(&[
            ("COPYCHECK_DOCUMENT_THRESHOLD", "high"),
            ("COPYCHECK_FINGERPRINT_K", "0"),
        ]));
        assert_eq!(config.document_threshold, DEFAULT_DOCUMENT_THRESHOLD);
        assert_eq!(config.fingerprint_k, 1);
    }
}
