/// Hosts (and their subdomains) that never yield quiz material.
pub const EXCLUDED_DOMAINS: &[&str] = &[
    // code hosting
    "github.com",
    "gitlab.com",
    "bitbucket.org",
    "sourceforge.net",
    // q&a
    "stackoverflow.com",
    "stackexchange.com",
    "superuser.com",
    "serverfault.com",
    "quora.com",
    "otvet.mail.ru",
    "answers.com",
    // package registries
    "pypi.org",
    "npmjs.com",
    "crates.io",
    "rubygems.org",
    "packagist.org",
    "nuget.org",
    // social and video
    "youtube.com",
    "youtu.be",
    "rutube.ru",
    "vk.com",
    "ok.ru",
    "facebook.com",
    "instagram.com",
    "twitter.com",
    "x.com",
    "tiktok.com",
    "t.me",
    "reddit.com",
    "pinterest.com",
];

/// Bar, cocktail and drink stems. A word matches when it starts with one of
/// them, so inflected forms are covered.
pub const DOMAIN_STEMS: &[&str] = &[
    "барн",
    "бармен",
    "коктейл",
    "напит",
    "алкогол",
    "вино",
    "винн",
    "пиво",
    "пивн",
    "виски",
    "водк",
    "текил",
    "коньяк",
    "ликер",
    "ликёр",
    "ресторан",
    "cocktail",
    "bartender",
    "drink",
    "whisk",
    "wine",
    "beer",
    "liquor",
];

/// Short drink and venue words that only count as whole words: as stems they
/// would match "кроме", "джинсы" or "барабан".
pub const DOMAIN_WORDS: &[&str] = &[
    "бар", "бара", "бару", "баре", "баром", "бары", "баров", "барах",
    "паб", "паба", "пабе", "пабы", "пабов",
    "ром", "рома", "рому", "ромом",
    "джин", "джина", "джином",
    "вина", "вином",
    "пива", "пивом",
    "эль",
    "bar", "bars", "pub", "pubs", "rum", "gin", "spirits",
];

/// Appended to the topic to steer the search engine towards the bar domain.
pub const POSITIVE_QUERY_TERMS: &[&str] = &["бар", "коктейли", "напитки", "история"];

/// Excluded from search queries with the `-term` operator.
pub const NEGATIVE_QUERY_TERMS: &[&str] = &[
    "программирование",
    "код",
    "скачать",
    "github",
    "python",
    "вакансии",
];
