use scraper::{ElementRef, Html, Node, Selector};

use crate::services::relevance::title_is_relevant;

pub const MIN_PARAGRAPH_LENGTH: usize = 30;
pub const MAX_CHUNK_LENGTH: usize = 2000;

const REMOVABLE_TAGS: &[&str] = &[
    "nav", "header", "footer", "script", "style", "form", "button", "iframe", "noscript",
];
const CONTENT_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "p", "li"];
const CONTAINER_SELECTORS: &[&str] = &["main", "[role=\"main\"]", "article", "body"];

/// Readable text of a page, one block per line. Empty when the page title is
/// not relevant to `topic` or nothing survives the cleanup.
pub fn extract_readable_text(html: &str, topic: &str) -> String {
    let document = Html::parse_document(html);

    let title = page_title(&document);
    if !title_is_relevant(title.as_deref(), topic) {
        return String::new();
    }

    let container = pick_main_container(&document);
    let mut blocks = Vec::new();
    collect_blocks(container, &mut blocks);

    blocks.join("\n").trim().to_string()
}

pub fn page_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    let title = document.select(&selector).next().map(compact_text)?;
    (!title.is_empty()).then_some(title)
}

/// Cuts `text` to at most `MAX_CHUNK_LENGTH` characters.
pub fn truncate_chunk(text: &str) -> String {
    text.chars().take(MAX_CHUNK_LENGTH).collect()
}

fn is_removable(element: &ElementRef) -> bool {
    REMOVABLE_TAGS.contains(&element.value().name())
}

fn inside_removable(element: &ElementRef) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| is_removable(&ancestor))
}

fn pick_main_container(document: &Html) -> ElementRef<'_> {
    for selector in CONTAINER_SELECTORS {
        let Ok(selector) = Selector::parse(selector) else {
            continue;
        };
        if let Some(found) = document
            .select(&selector)
            .find(|candidate| !is_removable(candidate) && !inside_removable(candidate))
        {
            return found;
        }
    }
    document.root_element()
}

/// Walks `element` in document order, emitting every content block. Nested
/// content elements are emitted on their own as well.
fn collect_blocks(element: ElementRef, blocks: &mut Vec<String>) {
    for child in element.children().filter_map(ElementRef::wrap) {
        if is_removable(&child) {
            continue;
        }

        let name = child.value().name();
        if CONTENT_TAGS.contains(&name) {
            let text = compact_text(child);
            let long_enough = name != "p" || text.chars().count() >= MIN_PARAGRAPH_LENGTH;
            if !text.is_empty() && long_enough {
                blocks.push(text);
            }
        }

        collect_blocks(child, blocks);
    }
}

/// Whitespace-normalized text of `element`, skipping removable subtrees.
fn compact_text(element: ElementRef) -> String {
    let mut parts = Vec::new();
    push_text(element, &mut parts);
    parts.join(" ")
}

fn push_text(element: ElementRef, parts: &mut Vec<String>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let words = text.split_whitespace().collect::<Vec<_>>();
                if !words.is_empty() {
                    parts.push(words.join(" "));
                }
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    if !is_removable(&child_el) {
                        push_text(child_el, parts);
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_P: &str = "Односолодовый виски производят из ячменного солода на одной винокурне.";

    fn page(title: &str, body: &str) -> String {
        format!("<html><head><title>{title}</title></head><body>{body}</body></html>")
    }

    #[test]
    fn test_off_topic_title_yields_nothing() {
        let html = page("Прогноз погоды", &format!("<p>{LONG_P}</p>"));

        assert_eq!(extract_readable_text(&html, "виски"), "");
    }

    #[test]
    fn test_missing_title_yields_nothing() {
        let html = format!("<html><body><p>{LONG_P}</p></body></html>");

        assert_eq!(extract_readable_text(&html, "виски"), "");
    }

    #[test]
    fn test_short_paragraphs_are_dropped_but_headings_and_items_kept() {
        let html = page(
            "Виски для начинающих",
            &format!("<h2>Регионы</h2><p>Коротко.</p><ul><li>Айла</li></ul><p>{LONG_P}</p>"),
        );

        let text = extract_readable_text(&html, "виски");

        assert_eq!(text, format!("Регионы\nАйла\n{LONG_P}"));
    }

    #[test]
    fn test_boilerplate_regions_are_removed() {
        let html = page(
            "Виски",
            &format!(
                "<nav><li>Меню навигации</li></nav>\
                 <header><h1>Шапка сайта</h1></header>\
                 <script>var tracking = 1;</script>\
                 <form><p>Подпишитесь на нашу рассылку прямо сейчас</p></form>\
                 <p>{LONG_P}<button>Купить</button></p>\
                 <footer><p>Все права защищены, копирование запрещено.</p></footer>"
            ),
        );

        let text = extract_readable_text(&html, "виски");

        assert_eq!(text, LONG_P);
    }

    #[test]
    fn test_main_container_is_preferred_over_body() {
        let html = page(
            "Виски",
            &format!(
                "<div><p>Этот абзац лежит вне основного контейнера страницы.</p></div>\
                 <main><p>{LONG_P}</p></main>"
            ),
        );

        assert_eq!(extract_readable_text(&html, "виски"), LONG_P);
    }

    #[test]
    fn test_role_main_then_article_are_used() {
        let html = page(
            "Виски",
            &format!(
                "<p>Этот абзац лежит вне основного контейнера страницы.</p>\
                 <div role=\"main\"><p>{LONG_P}</p></div>"
            ),
        );
        assert_eq!(extract_readable_text(&html, "виски"), LONG_P);

        let html = page(
            "Виски",
            &format!(
                "<p>Этот абзац лежит вне основного контейнера страницы.</p>\
                 <article><p>{LONG_P}</p></article>"
            ),
        );
        assert_eq!(extract_readable_text(&html, "виски"), LONG_P);
    }

    #[test]
    fn test_container_inside_removed_region_is_ignored() {
        let html = page(
            "Виски",
            &format!("<header><article><p>{LONG_P}</p></article></header><p>{LONG_P} Второй.</p>"),
        );

        assert_eq!(extract_readable_text(&html, "виски"), format!("{LONG_P} Второй."));
    }

    #[test]
    fn test_truncate_chunk_bounds_characters() {
        let text = "ж".repeat(MAX_CHUNK_LENGTH + 10);

        assert_eq!(truncate_chunk(&text).chars().count(), MAX_CHUNK_LENGTH);
        assert_eq!(truncate_chunk("short"), "short");
    }

    #[test]
    fn test_page_title_is_compacted() {
        let document = Html::parse_document("<title>  Ром \n и  пираты </title>");

        assert_eq!(page_title(&document).as_deref(), Some("Ром и пираты"));
    }
}
