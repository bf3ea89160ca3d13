//! Display titles for subtitle language tags
//!
//! HLS `LANGUAGE` attributes are RFC 5646 tags, but real playlists also carry
//! ISO 639-2 codes and odd casing (`EN`, `eng`, `pt_br`). Every spelling of the
//! same language resolves to one English display title here, which is what the
//! subtitle reconciler compares.

/// English name for an ISO 639-1 or ISO 639-2 language code (lowercase)
fn language_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "en" | "eng" => "English",
        "ru" | "rus" => "Russian",
        "uk" | "ukr" => "Ukrainian",
        "be" | "bel" => "Belarusian",
        "kk" | "kaz" => "Kazakh",
        "uz" | "uzb" => "Uzbek",
        "hy" | "hye" | "arm" => "Armenian",
        "ka" | "kat" | "geo" => "Georgian",
        "az" | "aze" => "Azerbaijani",
        "fr" | "fra" | "fre" => "French",
        "de" | "deu" | "ger" => "German",
        "es" | "spa" => "Spanish",
        "it" | "ita" => "Italian",
        "pt" | "por" => "Portuguese",
        "ja" | "jpn" => "Japanese",
        "ko" | "kor" => "Korean",
        "zh" | "zho" | "chi" => "Chinese",
        "ar" | "ara" => "Arabic",
        "hi" | "hin" => "Hindi",
        "tr" | "tur" => "Turkish",
        "pl" | "pol" => "Polish",
        "nl" | "nld" | "dut" => "Dutch",
        "sv" | "swe" => "Swedish",
        "no" | "nor" => "Norwegian",
        "nb" | "nob" => "Norwegian Bokmål",
        "da" | "dan" => "Danish",
        "fi" | "fin" => "Finnish",
        "cs" | "ces" | "cze" => "Czech",
        "hu" | "hun" => "Hungarian",
        "ro" | "ron" | "rum" => "Romanian",
        "bg" | "bul" => "Bulgarian",
        "el" | "ell" | "gre" => "Greek",
        "he" | "heb" => "Hebrew",
        "th" | "tha" => "Thai",
        "vi" | "vie" => "Vietnamese",
        "id" | "ind" => "Indonesian",
        "ms" | "msa" | "may" => "Malay",
        "hr" | "hrv" => "Croatian",
        "sr" | "srp" => "Serbian",
        "sl" | "slv" => "Slovenian",
        "sk" | "slk" | "slo" => "Slovak",
        "lt" | "lit" => "Lithuanian",
        "lv" | "lav" => "Latvian",
        "et" | "est" => "Estonian",
        "fa" | "fas" | "per" => "Persian",
        "ur" | "urd" => "Urdu",
        "bn" | "ben" => "Bangla",
        "ta" | "tam" => "Tamil",
        "sw" | "swa" => "Swahili",
        "la" | "lat" => "Latin",
        _ => return None,
    };
    Some(name)
}

/// English name for an ISO 3166-1 region code (uppercase)
fn region_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "US" => "United States",
        "GB" => "United Kingdom",
        "CA" => "Canada",
        "AU" => "Australia",
        "RU" => "Russia",
        "UA" => "Ukraine",
        "KZ" => "Kazakhstan",
        "BR" => "Brazil",
        "PT" => "Portugal",
        "ES" => "Spain",
        "MX" => "Mexico",
        "FR" => "France",
        "DE" => "Germany",
        "AT" => "Austria",
        "CH" => "Switzerland",
        "CN" => "China",
        "TW" => "Taiwan",
        "HK" => "Hong Kong",
        "JP" => "Japan",
        "KR" => "South Korea",
        "IN" => "India",
        _ => return None,
    };
    Some(name)
}

/// Localized, capitalized title for a language tag.
///
/// `en` → `English`, `pt-br` → `Portuguese (Brazil)`. Unknown tags fall back
/// to the tag itself, capitalized.
pub fn display_title(tag: &str) -> String {
    let tag = tag.trim();
    let mut parts = tag.split(['-', '_']).filter(|p| !p.is_empty());

    let Some(name) = parts.next().and_then(|p| language_name(&p.to_lowercase())) else {
        return capitalize_words(tag);
    };

    match parts.next().map(str::to_uppercase) {
        Some(region) => {
            let region = region_name(&region).map(str::to_string).unwrap_or(region);
            capitalize_words(&format!("{} ({})", name, region))
        }
        None => name.to_string(),
    }
}

/// Uppercase the first letter of every word, lowercase the rest
fn capitalize_words(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut out = String::with_capacity(word.len());
            let mut seen_letter = false;
            for c in word.chars() {
                if c.is_alphabetic() && !seen_letter {
                    out.extend(c.to_uppercase());
                    seen_letter = true;
                } else {
                    out.extend(c.to_lowercase());
                }
            }
            out
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_codes_collapse() {
        assert_eq!(display_title("en"), "English");
        assert_eq!(display_title("EN"), "English");
        assert_eq!(display_title("eng"), "English");
        assert_eq!(display_title("ru"), "Russian");
    }

    #[test]
    fn test_region_variants() {
        assert_eq!(display_title("pt-BR"), "Portuguese (Brazil)");
        assert_eq!(display_title("pt_br"), "Portuguese (Brazil)");
        assert_eq!(display_title("en-ZZ"), "English (Zz)");
    }

    #[test]
    fn test_unknown_tag_capitalized() {
        assert_eq!(display_title("xx"), "Xx");
        assert_eq!(display_title("klingon"), "Klingon");
    }
}
