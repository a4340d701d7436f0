#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::SearchHit;

    /// A page about whisky with one long paragraph and chrome that must be stripped.
    pub fn whisky_page() -> String {
        r#"<html>
            <head><title>Виски: история и производство</title><script>var x = 1;</script></head>
            <body>
                <nav><p>Главная / Напитки / Виски / Все статьи сайта</p></nav>
                <article>
                    <h2>Как делают виски</h2>
                    <p>Шотландский виски выдерживают в дубовых бочках не менее трёх лет.</p>
                    <p>Коротко.</p>
                </article>
                <footer><p>© Все права защищены, перепечатка запрещена навсегда.</p></footer>
            </body>
        </html>"#
            .to_string()
    }

    /// A page whose title has nothing to do with drinks.
    pub fn offtopic_page() -> String {
        r#"<html><head><title>Курсы программирования</title></head>
            <body><p>Научим писать код на любом языке за три месяца обучения.</p></body></html>"#
            .to_string()
    }

    pub fn bar_hits() -> Vec<SearchHit> {
        vec![
            SearchHit::new("https://drinks.example.ru/whisky")
                .with_title("Виски")
                .with_snippet("Виски и бар: история напитка"),
            SearchHit::new("https://github.com/someone/whisky")
                .with_title("whisky repo")
                .with_snippet("бар"),
            SearchHit::new("https://bar.example.ru/cocktails")
                .with_title("Коктейли")
                .with_snippet("Коктейли на основе виски"),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{fixtures::*, test_helpers::*};
    use crate::{
        errors::AppError,
        services::{extraction::extract_readable_text, search_service::accept_hits},
    };
    use actix_web::ResponseError;

    #[test]
    fn test_fixtures_whisky_page_extracts_article_only() {
        let text = extract_readable_text(&whisky_page(), "виски");

        assert!(text.contains("Шотландский виски выдерживают"));
        assert!(text.contains("Как делают виски"));
        assert!(!text.contains("Коротко."));
        assert!(!text.contains("Все права защищены"));
        assert!(!text.contains("var x"));
    }

    #[test]
    fn test_fixtures_offtopic_page_is_discarded() {
        assert!(extract_readable_text(&offtopic_page(), "виски").is_empty());
    }

    #[test]
    fn test_fixtures_bar_hits_drop_excluded_domains() {
        let urls = accept_hits(&bar_hits(), true, 10);

        assert_eq!(
            urls,
            vec![
                "https://drinks.example.ru/whisky".to_string(),
                "https://bar.example.ru/cocktails".to_string(),
            ]
        );
    }

    #[test]
    fn test_helpers_error_status() {
        assert_error_status(AppError::Timeout("search".into()).status_code());
    }
}
