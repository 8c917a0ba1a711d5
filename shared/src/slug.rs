//! URL-safe slugs for product anchors
//!
//! Product names are Cyrillic; slugs are built by mapping every lowercase
//! character through [`TRANSLIT_TABLE`], turning whitespace runs into a
//! single hyphen and dropping anything that is not `[a-z0-9-]`.

/// Cyrillic to Latin transliteration (Russian plus Kazakh letters)
pub const TRANSLIT_TABLE: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "e"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "y"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "h"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
    ('ә', "a"),
    ('ғ', "g"),
    ('қ', "k"),
    ('ң', "n"),
    ('ө', "o"),
    ('ұ', "u"),
    ('ү', "u"),
    ('һ', "h"),
    ('і', "i"),
];

fn transliterate_char(ch: char) -> Option<&'static str> {
    TRANSLIT_TABLE
        .iter()
        .find(|(from, _)| *from == ch)
        .map(|(_, to)| *to)
}

/// Build a slug from a display name
///
/// ```
/// assert_eq!(shared::slug::slugify("Орто Стандарт"), "orto-standart");
/// ```
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_dash = !out.is_empty();
            continue;
        }

        let mapped: String = match transliterate_char(ch) {
            Some(latin) => latin.to_string(),
            None if ch.is_ascii_alphanumeric() => ch.to_string(),
            None => continue,
        };
        if mapped.is_empty() {
            continue;
        }

        if pending_dash {
            out.push('-');
            pending_dash = false;
        }
        out.push_str(&mapped);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyrillic_name() {
        assert_eq!(slugify("Орто Стандарт"), "orto-standart");
        assert_eq!(slugify("Кидс Лайт"), "kids-layt");
        assert_eq!(slugify("Щит Юнона"), "schit-yunona");
    }

    #[test]
    fn test_whitespace_collapsing() {
        assert_eq!(slugify("  Орто   Макс  "), "orto-maks");
        assert_eq!(slugify("Орто\tПлюс\n2"), "orto-plyus-2");
        assert_eq!(slugify("Орто - Люкс"), "orto-lyuks");
    }

    #[test]
    fn test_latin_and_punctuation() {
        assert_eq!(slugify("Dream Line 3D"), "dream-line-3d");
        assert_eq!(slugify("Эко+ (Premium)"), "eko-premium");
    }

    #[test]
    fn test_signs_are_dropped() {
        assert_eq!(slugify("Подъём"), "podem");
        assert_eq!(slugify("Ъ"), "");
    }

    #[test]
    fn test_kazakh_letters() {
        assert_eq!(slugify("Ұйқы"), "uyky");
    }

    #[test]
    fn test_is_url_safe() {
        let slug = slugify("Матрас «Ортопедия» №5 / 160×200");
        assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        assert!(!slug.contains("--"));
    }
}
