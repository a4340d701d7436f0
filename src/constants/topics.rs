/// Topics drawn at random when the caller does not supply one.
pub const TOPIC_POOL: &[&str] = &[
    "история коктейлей",
    "виски",
    "ром и пираты",
    "джин",
    "текила и мескаль",
    "вино",
    "пиво и пивоварение",
    "барные факты",
    "знаменитые бармены",
    "сухой закон",
    "коньяк",
    "ликеры",
    "барная посуда",
    "классические коктейли",
];

/// Tone modifiers for the host's voice.
pub const VIBE_POOL: &[&str] = &[
    "с лёгкой иронией",
    "как старый бармен, который видел всё",
    "азартно, как на финале чемпионата",
    "загадочно, с интригой",
    "дружелюбно и с юмором",
    "в стиле пиратской байки",
];
