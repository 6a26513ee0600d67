// (language name, ISO 639-1 code, flag country)
const LANGUAGE_FLAGS: &[(&str, &str, &str)] = &[
    ("english", "en", "gb"),
    ("spanish", "es", "es"),
    ("french", "fr", "fr"),
    ("german", "de", "de"),
    ("mandarin", "zh", "cn"),
    ("japanese", "ja", "jp"),
    ("korean", "ko", "kr"),
    ("hindi", "hi", "in"),
    ("russian", "ru", "ru"),
    ("portuguese", "pt", "pt"),
    ("arabic", "ar", "sa"),
    ("italian", "it", "it"),
    ("turkish", "tr", "tr"),
    ("dutch", "nl", "nl"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flag {
    pub country: &'static str,
}

impl Flag {
    pub fn image_url(&self) -> String {
        format!("https://flagcdn.com/24x18/{}.png", self.country)
    }

    /// Regional indicator pair, e.g. "es" -> 🇪🇸.
    pub fn emoji(&self) -> String {
        self.country
            .chars()
            .filter_map(|c| char::from_u32(0x1F1E6 + (c.to_ascii_lowercase() as u32).checked_sub('a' as u32)?))
            .collect()
    }
}

/// Looks a language up by name or code, ignoring case.
pub fn flag_for(language: &str) -> Option<Flag> {
    let language = language.trim().to_lowercase();
    if language.is_empty() {
        return None;
    }
    LANGUAGE_FLAGS
        .iter()
        .find(|(name, code, _)| *name == language || *code == language)
        .map(|&(_, _, country)| Flag { country })
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_names_and_codes() {
        assert_eq!(flag_for("Spanish"), Some(Flag { country: "es" }));
        assert_eq!(flag_for("es"), Some(Flag { country: "es" }));
        assert_eq!(flag_for("EN"), Some(Flag { country: "gb" }));
        assert_eq!(flag_for("mandarin"), Some(Flag { country: "cn" }));
        assert_eq!(flag_for("klingon"), None);
        assert_eq!(flag_for(""), None);
    }

    #[test]
    fn flag_renders_as_image_and_emoji() {
        let flag = Flag { country: "jp" };
        assert_eq!(flag.image_url(), "https://flagcdn.com/24x18/jp.png");
        assert_eq!(flag.emoji(), "\u{1F1EF}\u{1F1F5}");
    }

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalize("spanish"), "Spanish");
        assert_eq!(capitalize("en"), "En");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize("dUTCH"), "DUTCH");
        assert_eq!(capitalize(""), "");
    }
}
