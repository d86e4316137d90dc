//! Character-level Cyrillic to Latin transliteration used to normalize
//! user input before command matching. Characters without a mapping pass
//! through unchanged, so pure-Latin input is returned as-is.

/// Latin replacement for a single Cyrillic character, if one exists.
fn latin_for(c: char) -> Option<&'static str> {
    let mapped = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "h",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ы' => "y",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        'А' => "A",
        'Б' => "B",
        'В' => "V",
        'Г' => "H",
        'Д' => "D",
        'Е' => "E",
        'Ё' => "YO",
        'Ж' => "ZH",
        'З' => "Z",
        'И' => "I",
        'Й' => "J",
        'К' => "K",
        'Л' => "L",
        'М' => "M",
        'Н' => "N",
        'О' => "O",
        'П' => "P",
        'Р' => "R",
        'С' => "S",
        'Т' => "T",
        'У' => "U",
        'Ф' => "F",
        'Х' => "KH",
        'Ц' => "TS",
        'Ч' => "CH",
        'Ш' => "SH",
        'Щ' => "SHCH",
        'Ы' => "Y",
        'Э' => "E",
        'Ю' => "YU",
        'Я' => "YA",
        _ => return None,
    };
    Some(mapped)
}

/// Transliterates `text` character by character.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match latin_for(c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_cyrillic_to_latin() {
        assert_eq!(transliterate("привет"), "privet");
    }

    #[test]
    fn preserves_case() {
        assert_eq!(transliterate("Привет"), "Privet");
    }

    #[test]
    fn latin_passes_through_unchanged() {
        assert_eq!(transliterate("hello-world"), "hello-world");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        // Ukrainian 'і' is not in the table.
        assert_eq!(transliterate("біт"), "bіt");
    }

    #[test]
    fn multi_letter_mappings_expand() {
        assert_eq!(transliterate("щука"), "shchuka");
    }
}
