//! Hostname decomposition into mtop global-config segments.

use mtopgen_sdk::GenerateError;

/// Global client configuration derived from the request host.
///
/// The mtop client routes calls through `prefix.subDomain.mainDomain`, so
/// the generated snippet reconstructs the three segments from the captured
/// URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlobalConfig {
    pub prefix: String,
    pub sub_domain: String,
    pub main_domain: String,
}

/// Decompose the host of `url_base` into prefix / subdomain / main domain.
///
/// This is a fixed heuristic, not a public-suffix lookup: the main domain
/// takes the last two labels, then keeps absorbing trailing labels while
/// more than two remain outside it. The next label out is the subdomain,
/// the one after that the prefix; anything deeper is discarded.
pub fn extract_global_config(url_base: &str) -> Result<GlobalConfig, GenerateError> {
    let mut chunks = domain_chunks(url_base)?;
    let mut config = GlobalConfig::default();

    let mut main_domain = vec![chunks.pop().unwrap_or_default()];
    if let Some(chunk) = chunks.pop() {
        // Main domain must have at least 2 levels
        main_domain.insert(0, chunk);
    }

    while chunks.len() > 2 {
        if let Some(chunk) = chunks.pop() {
            main_domain.insert(0, chunk);
        }
    }

    config.main_domain = main_domain.join(".");
    config.sub_domain = chunks.pop().unwrap_or_default();
    config.prefix = chunks.pop().unwrap_or_default();

    Ok(config)
}

/// Split the host portion of a URL into non-blank domain labels.
///
/// The host is whatever sits between `//` and the next `/` (or the end of
/// the string for pathless URLs). A URL without `//` is malformed.
fn domain_chunks(url_base: &str) -> Result<Vec<String>, GenerateError> {
    let (_, rest) = url_base
        .split_once("//")
        .ok_or_else(|| GenerateError::MalformedUrl(url_base.to_string()))?;

    let host = rest.split('/').next().unwrap_or_default();

    Ok(host
        .split('.')
        .filter(|chunk| !chunk.trim().is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> GlobalConfig {
        extract_global_config(url).expect("decomposable url")
    }

    #[test]
    fn four_label_host_fills_all_segments() {
        assert_eq!(
            config("https://prefix.sub.example.com/path"),
            GlobalConfig {
                prefix: "prefix".into(),
                sub_domain: "sub".into(),
                main_domain: "example.com".into(),
            }
        );
    }

    #[test]
    fn two_label_host_is_all_main_domain() {
        assert_eq!(
            config("https://example.com/path"),
            GlobalConfig {
                prefix: String::new(),
                sub_domain: String::new(),
                main_domain: "example.com".into(),
            }
        );
    }

    #[test]
    fn three_label_host_has_no_prefix() {
        assert_eq!(
            config("https://sub.example.com/path"),
            GlobalConfig {
                prefix: String::new(),
                sub_domain: "sub".into(),
                main_domain: "example.com".into(),
            }
        );
    }

    #[test]
    fn deep_host_absorbs_trailing_labels_into_main_domain() {
        assert_eq!(
            config("https://a.b.c.d.example.com/x"),
            GlobalConfig {
                prefix: "a".into(),
                sub_domain: "b".into(),
                main_domain: "c.d.example.com".into(),
            }
        );
    }

    #[test]
    fn single_label_host() {
        assert_eq!(
            config("https://onelabel/x"),
            GlobalConfig {
                prefix: String::new(),
                sub_domain: String::new(),
                main_domain: "onelabel".into(),
            }
        );
    }

    #[test]
    fn empty_host_yields_empty_segments() {
        assert_eq!(config("https:///x"), GlobalConfig::default());
    }

    #[test]
    fn blank_labels_are_dropped() {
        assert_eq!(
            config("https://api..example.com./call"),
            GlobalConfig {
                prefix: String::new(),
                sub_domain: "api".into(),
                main_domain: "example.com".into(),
            }
        );
    }

    #[test]
    fn pathless_url_uses_the_full_remainder_as_host() {
        assert_eq!(
            config("https://api.sub.example.com"),
            GlobalConfig {
                prefix: "api".into(),
                sub_domain: "sub".into(),
                main_domain: "example.com".into(),
            }
        );
    }

    #[test]
    fn url_without_double_slash_is_malformed() {
        assert!(matches!(
            extract_global_config("example.com/path"),
            Err(GenerateError::MalformedUrl(_))
        ));
    }
}
