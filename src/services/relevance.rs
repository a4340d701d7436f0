use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::constants::keywords::{DOMAIN_STEMS, DOMAIN_WORDS, EXCLUDED_DOMAINS};

static TERM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-zА-Яа-яёЁ]+").expect("TERM_REGEX is a valid regex pattern")
});

const MIN_TERM_LENGTH: usize = 3;

/// Lower-cased host with any leading `www.` removed.
pub fn normalized_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    let host = host.trim_end_matches('.');
    if host.is_empty() {
        return None;
    }
    Some(host.to_string())
}

/// False when the URL's host is, or is a subdomain of, an excluded domain.
/// URLs without a parseable host are rejected as well.
pub fn is_allowed_domain(url: &str) -> bool {
    let Some(host) = normalized_host(url) else {
        return false;
    };

    !EXCLUDED_DOMAINS.iter().any(|excluded| {
        host == *excluded
            || host
                .strip_suffix(excluded)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

/// Lower-cased alphabetic words of `text`, in order.
fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TERM_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn is_domain_word(word: &str) -> bool {
    DOMAIN_WORDS.contains(&word) || DOMAIN_STEMS.iter().any(|stem| word.starts_with(stem))
}

fn contains_domain_keyword(text: &str) -> bool {
    words(text).iter().any(|word| is_domain_word(word))
}

pub fn snippet_is_relevant(snippet: Option<&str>) -> bool {
    match snippet {
        Some(snippet) => contains_domain_keyword(snippet),
        None => false,
    }
}

pub fn title_is_relevant(title: Option<&str>, topic: &str) -> bool {
    let Some(title) = title else {
        return false;
    };
    let title_words = words(title);
    if title_words.is_empty() {
        return false;
    }

    let terms = topic_terms(topic);
    title_words
        .iter()
        .any(|word| terms.iter().any(|term| word.starts_with(term.as_str())) || is_domain_word(word))
}

/// Alphabetic tokens of the topic longer than two characters, lower-cased.
pub fn topic_terms(topic: &str) -> HashSet<String> {
    words(topic)
        .into_iter()
        .filter(|term| term.chars().count() >= MIN_TERM_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_host_strips_www_and_case() {
        assert_eq!(
            normalized_host("https://WWW.Example.COM/path?q=1"),
            Some("example.com".to_string())
        );
        assert_eq!(normalized_host("not a url"), None);
    }

    #[test]
    fn test_excluded_domains_are_rejected_exactly_and_by_subdomain() {
        for excluded in EXCLUDED_DOMAINS {
            assert!(!is_allowed_domain(&format!("https://{}/page", excluded)));
            assert!(!is_allowed_domain(&format!("https://www.{}/", excluded)));
            assert!(!is_allowed_domain(&format!("https://m.sub.{}/x", excluded)));
        }
    }

    #[test]
    fn test_other_domains_are_allowed() {
        assert!(is_allowed_domain("https://drinks-magazine.ru/whisky"));
        assert!(is_allowed_domain("https://www.liquor.com/recipes/negroni/"));
        // Suffix match must respect label boundaries.
        assert!(is_allowed_domain("https://notgithub.com/"));
        assert!(is_allowed_domain("https://myx.com/"));
    }

    #[test]
    fn test_urls_without_host_are_rejected() {
        assert!(!is_allowed_domain(""));
        assert!(!is_allowed_domain("/relative/path"));
    }

    #[test]
    fn test_snippet_relevance() {
        assert!(!snippet_is_relevant(None));
        assert!(!snippet_is_relevant(Some("Курс программирования на Rust")));
        assert!(snippet_is_relevant(Some("Лучшие КОКТЕЙЛИ на основе рома")));
        assert!(snippet_is_relevant(Some("A short history of the cocktail")));
    }

    #[test]
    fn test_title_relevance_by_topic_term() {
        assert!(title_is_relevant(Some("Шотландский виски: всё о регионах"), "виски"));
        assert!(title_is_relevant(Some("Гид по Islay"), "islay scotch"));
    }

    #[test]
    fn test_title_relevance_by_domain_keyword() {
        assert!(title_is_relevant(Some("Как стать барменом"), "карьера"));
        assert!(!title_is_relevant(Some("Прогноз погоды"), "карьера"));
    }

    #[test]
    fn test_short_drink_names_only_match_whole_words() {
        assert!(!title_is_relevant(Some("Промышленные роботы"), "карьера"));
        assert!(!title_is_relevant(Some("Джинсы со скидкой"), "карьера"));
        assert!(!title_is_relevant(Some("Половина жизни"), "карьера"));
        assert!(!title_is_relevant(Some("Новинка сезона"), "карьера"));
        assert!(!title_is_relevant(Some("Барабанная установка"), "карьера"));
        assert!(!snippet_is_relevant(Some("Все модели, кроме новых")));
        assert!(!snippet_is_relevant(Some("Скидки на джинсы и винтажные куртки")));

        assert!(title_is_relevant(Some("Джин и тоник"), "карьера"));
        assert!(snippet_is_relevant(Some("Пираты пили ром")));
        assert!(snippet_is_relevant(Some("Лучший бар города")));
        assert!(snippet_is_relevant(Some("Бутылка красного вина")));
        assert!(snippet_is_relevant(Some("Барная карта и винные пары")));
    }

    #[test]
    fn test_topic_terms_match_title_words_by_prefix() {
        assert!(title_is_relevant(Some("Ромовая история Карибов"), "ром"));
        assert!(!title_is_relevant(Some("Всё, кроме главного"), "ром"));
    }

    #[test]
    fn test_missing_title_is_never_relevant() {
        assert!(!title_is_relevant(None, "виски"));
        assert!(!title_is_relevant(Some("   "), "виски"));
    }

    #[test]
    fn test_topic_terms_skip_short_and_non_alphabetic_tokens() {
        let terms = topic_terms("Ром и 42 пирата в XX веке");

        assert!(terms.contains("ром"));
        assert!(terms.contains("пирата"));
        assert!(terms.contains("веке"));
        assert!(!terms.contains("и"));
        assert!(!terms.contains("xx"));
        assert!(!terms.iter().any(|t| t.contains("42")));
    }
}
