//! Plural form selection for numerus messages.
//!
//! Covers the language families that Qt's own numerus rules distinguish for
//! the common translation targets.

/// A group of languages sharing one plural rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// One form for every count (Indonesian, Japanese, Chinese, ...).
    Single,
    /// `n == 1` singular, otherwise plural (English, German, ...).
    Germanic,
    /// `n <= 1` singular (French, Brazilian Portuguese).
    French,
    /// Three forms: `1, 21, 31..`, `2-4, 22-24..`, rest (Russian, Ukrainian, ...).
    EastSlavic,
    /// Three forms: `1`, `2-4, 22-24..` (not `12-14`), rest.
    Polish,
    /// Three forms: `1`, `2-4`, rest (Czech, Slovak).
    Czech,
}

impl PluralRule {
    /// Rule for a language tag such as `id`, `pt_BR` or `sr-Latn`.
    pub fn for_language(language: &str) -> Self {
        let normalized = language.replace('-', "_").to_ascii_lowercase();
        if normalized == "pt_br" {
            return PluralRule::French;
        }
        let primary = normalized.split('_').next().unwrap_or("");
        match primary {
            "id" | "ja" | "ko" | "zh" | "th" | "vi" | "ms" => PluralRule::Single,
            "fr" => PluralRule::French,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => PluralRule::EastSlavic,
            "pl" => PluralRule::Polish,
            "cs" | "sk" => PluralRule::Czech,
            _ => PluralRule::Germanic,
        }
    }

    pub fn form_count(&self) -> usize {
        match self {
            PluralRule::Single => 1,
            PluralRule::Germanic | PluralRule::French => 2,
            PluralRule::EastSlavic | PluralRule::Polish | PluralRule::Czech => 3,
        }
    }

    pub fn index(&self, n: i64) -> usize {
        let n = n.unsigned_abs();
        let (mod10, mod100) = (n % 10, n % 100);
        match self {
            PluralRule::Single => 0,
            PluralRule::Germanic => usize::from(n != 1),
            PluralRule::French => usize::from(n > 1),
            PluralRule::EastSlavic => {
                if mod10 == 1 && mod100 != 11 {
                    0
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
        }
    }
}

/// Number of plural forms translators are expected to provide.
pub fn plural_form_count(language: &str) -> usize {
    PluralRule::for_language(language).form_count()
}

/// Index of the plural form for count `n`, clamped to `available` forms.
pub fn plural_index(language: &str, n: i64, available: usize) -> usize {
    let index = PluralRule::for_language(language).index(n);
    index.min(available.saturating_sub(1))
}
