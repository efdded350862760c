//! WinAnsiEncoding (Windows-1252) for strings drawn with the standard Type1 fonts.

use crate::render::RenderError;

/// Encodes `text` as WinAnsi bytes for a PDF literal string.
///
/// Latin-1 maps through unchanged; the 0x80–0x9F block carries typographic
/// punctuation. Anything else is an error: the standard fonts have no glyph for it.
pub fn to_win_ansi(text: &str) -> Result<Vec<u8>, RenderError> {
    text.chars()
        .map(|ch| {
            win_ansi_byte(ch).ok_or_else(|| RenderError::Unencodable {
                ch,
                text: text.to_string(),
            })
        })
        .collect()
}

fn win_ansi_byte(ch: char) -> Option<u8> {
    let code = ch as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => match ch {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(to_win_ansi("Hello (world)").unwrap(), b"Hello (world)".to_vec());
    }

    #[test]
    fn test_latin1_and_punctuation() {
        assert_eq!(to_win_ansi("é").unwrap(), vec![0xE9]);
        assert_eq!(to_win_ansi("2020 – Present").unwrap()[5], 0x96);
        assert_eq!(to_win_ansi("•").unwrap(), vec![0x95]);
        assert_eq!(to_win_ansi("“q”").unwrap(), vec![0x93, b'q', 0x94]);
    }

    #[test]
    fn test_unencodable_character_is_an_error() {
        let err = to_win_ansi("Tokyo 東京").unwrap_err();
        assert!(matches!(err, RenderError::Unencodable { ch: '東', .. }));
    }

    #[test]
    fn test_control_characters_are_rejected() {
        assert!(to_win_ansi("tab\there").is_err());
    }
}
