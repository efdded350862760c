//! Static advance-width tables for the three Times variants the résumé is set in.
//!
//! Widths are in 1/1000 em, taken from the Adobe Core 14 AFM files, so they match
//! what a PDF reader uses when it draws the standard Type1 fonts. Tables cover ASCII
//! 0x20..=0x7E (95 printable characters); index = (char as usize) - 32, plus the
//! Latin-1 supplement 0xA0..=0xFF so accented names and places measure exactly.
//! A few WinAnsi punctuation glyphs used by the résumé (en dash, bullet, curly quotes)
//! are listed separately; anything else falls back to `average_char_width`.

// ────────────────────────────────────────────────────────────────────────────
// Font variants
// ────────────────────────────────────────────────────────────────────────────

/// The three embedded serif variants. Closed set: the layout never asks for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontVariant {
    Regular,
    Bold,
    Italic,
}

impl FontVariant {
    pub const ALL: [FontVariant; 3] = [FontVariant::Regular, FontVariant::Bold, FontVariant::Italic];

    /// PostScript name of the standard Type1 font backing this variant.
    pub fn postscript_name(self) -> &'static str {
        match self {
            FontVariant::Regular => "Times-Roman",
            FontVariant::Bold => "Times-Bold",
            FontVariant::Italic => "Times-Italic",
        }
    }

    /// Resource key used in page content streams (`/F1 10.5 Tf`).
    pub fn resource_name(self) -> &'static str {
        match self {
            FontVariant::Regular => "F1",
            FontVariant::Bold => "F2",
            FontVariant::Italic => "F3",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Metrics provider
// ────────────────────────────────────────────────────────────────────────────

/// Answers "how wide is this text at this size". Pure and deterministic per `(font, size)`.
///
/// The layout engine only ever talks to this trait, so tests can swap in a
/// fixed-pitch implementation and assert exact coordinates.
pub trait TextMetrics: Send + Sync {
    fn width_of_text_at_size(&self, text: &str, font: FontVariant, size: f32) -> f32;
}

/// Production metrics backed by the static Times tables below.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMetrics;

impl TextMetrics for StandardMetrics {
    fn width_of_text_at_size(&self, text: &str, font: FontVariant, size: f32) -> f32 {
        get_metrics(font).measure_str(text) * size
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static advance-width table for one font variant.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [u16; 95],
    /// Latin-1 supplement 0xA0..=0xFF (accented letters, ©, °, ½ ...); index = code - 0xA0.
    latin1: [u16; 96],
    /// Width of “ and ” (the only punctuation pair that differs across variants).
    double_quote_width: u16,
    /// Fallback for characters without an entry.
    pub average_char_width: u16,
}

impl FontMetricTable {
    /// Advance width of a single character in 1/1000 em.
    pub fn glyph_width(&self, c: char) -> u16 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            return self.widths[code - 32];
        }
        if (0xA0..=0xFF).contains(&code) {
            return self.latin1[code - 0xA0];
        }
        match c {
            '\u{2013}' => 500,             // en dash
            '\u{2014}' | '\u{2026}' => 1000, // em dash, ellipsis
            '\u{2022}' => 350,             // bullet
            '\u{2018}' | '\u{2019}' => 333,
            '\u{201C}' | '\u{201D}' => self.double_quote_width,
            _ => self.average_char_width,
        }
    }

    /// Measures a string in em units (multiply by the font size for points).
    pub fn measure_str(&self, s: &str) -> f32 {
        let units: u32 = s.chars().map(|c| u32::from(self.glyph_width(c))).sum();
        units as f32 / 1000.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable + 96 Latin-1 characters each)
// ────────────────────────────────────────────────────────────────────────────

static TIMES_ROMAN_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
        // 0    1    2    3    4    5    6    7    8    9
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
        // :    ;    <    =    >    ?    @
        278, 278, 564, 564, 564, 444, 921,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 469, 500, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
        // {    |    }    ~
        480, 200, 480, 541,
    ],
    #[rustfmt::skip]
    latin1: [
        // nbsp ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬    shy  ®    ¯
        250, 333, 500, 500, 500, 500, 200, 500, 333, 760, 276, 500, 564, 333, 760, 333,
        // °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
        400, 564, 300, 300, 333, 500, 453, 250, 333, 300, 310, 500, 750, 750, 750, 444,
        // À    Á    Â    Ã    Ä    Å    Æ    Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
        722, 722, 722, 722, 722, 722, 889, 667, 611, 611, 611, 611, 333, 333, 333, 333,
        // Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
        722, 722, 722, 722, 722, 722, 722, 564, 722, 722, 722, 722, 722, 722, 556, 500,
        // à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
        444, 444, 444, 444, 444, 444, 667, 444, 444, 444, 444, 444, 278, 278, 278, 278,
        // ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
        500, 500, 500, 500, 500, 500, 500, 564, 500, 500, 500, 500, 500, 500, 500, 500,
    ],
    double_quote_width: 444,
    average_char_width: 500,
};

static TIMES_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %     &    '    (    )    *    +    ,    -    .    /
        250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
        // 0    1    2    3    4    5    6    7    8    9
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
        // :    ;    <    =    >    ?    @
        333, 333, 570, 570, 570, 500, 930,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944,
        // N    O    P    Q    R    S    T    U    V    W     X    Y    Z
        722, 778, 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667,
        // [    \    ]    ^    _    `
        333, 278, 333, 581, 500, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444,
        // {    |    }    ~
        394, 220, 394, 520,
    ],
    #[rustfmt::skip]
    latin1: [
        // nbsp ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬    shy  ®    ¯
        250, 333, 500, 500, 500, 500, 220, 500, 333, 747, 300, 500, 570, 333, 747, 333,
        // °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
        400, 570, 300, 300, 333, 556, 540, 250, 333, 300, 330, 500, 750, 750, 750, 500,
        // À    Á    Â    Ã    Ä    Å    Æ    Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
        722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 389, 389, 389, 389,
        // Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
        722, 722, 778, 778, 778, 778, 778, 570, 778, 722, 722, 722, 722, 722, 611, 556,
        // à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
        500, 500, 500, 500, 500, 500, 722, 444, 444, 444, 444, 444, 278, 278, 278, 278,
        // ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
        500, 556, 500, 500, 500, 500, 500, 570, 500, 556, 556, 556, 556, 500, 556, 500,
    ],
    double_quote_width: 500,
    average_char_width: 520,
};

static TIMES_ITALIC_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
        // 0    1    2    3    4    5    6    7    8    9
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
        // :    ;    <    =    >    ?    @
        333, 333, 675, 675, 675, 500, 920,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        667, 722, 611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556,
        // [    \    ]    ^    _    `
        389, 278, 389, 422, 500, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        500, 500, 500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389,
        // {    |    }    ~
        400, 275, 400, 541,
    ],
    #[rustfmt::skip]
    latin1: [
        // nbsp ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬    shy  ®    ¯
        250, 389, 500, 500, 500, 500, 275, 500, 333, 760, 276, 500, 675, 333, 760, 333,
        // °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
        400, 675, 300, 300, 333, 500, 523, 250, 333, 300, 310, 500, 750, 750, 750, 500,
        // À    Á    Â    Ã    Ä    Å    Æ    Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
        611, 611, 611, 611, 611, 611, 889, 667, 611, 611, 611, 611, 333, 333, 333, 333,
        // Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
        722, 667, 722, 722, 722, 722, 722, 675, 722, 722, 722, 722, 722, 556, 611, 500,
        // à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
        500, 500, 500, 500, 500, 500, 667, 444, 444, 444, 444, 444, 278, 278, 278, 278,
        // ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
        500, 500, 500, 500, 500, 500, 500, 675, 500, 500, 500, 500, 500, 444, 500, 444,
    ],
    double_quote_width: 556,
    average_char_width: 500,
};

/// Returns the static metric table for a font variant.
pub fn get_metrics(font: FontVariant) -> &'static FontMetricTable {
    match font {
        FontVariant::Regular => &TIMES_ROMAN_TABLE,
        FontVariant::Bold => &TIMES_BOLD_TABLE,
        FontVariant::Italic => &TIMES_ITALIC_TABLE,
    }
}

/// Fixed-pitch metrics for layout tests: every character is half an em wide.
#[cfg(test)]
pub(crate) struct MonospaceMetrics;

#[cfg(test)]
impl TextMetrics for MonospaceMetrics {
    fn width_of_text_at_size(&self, text: &str, _font: FontVariant, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(get_metrics(FontVariant::Regular).measure_str(""), 0.0);
        assert_eq!(StandardMetrics.width_of_text_at_size("", FontVariant::Bold, 12.0), 0.0);
    }

    #[test]
    fn test_measure_str_single_space() {
        for font in FontVariant::ALL {
            let width = get_metrics(font).measure_str(" ");
            assert!((width - 0.25).abs() < 1e-6, "{font:?} space should be 0.25em, got {width}");
        }
    }

    #[test]
    fn test_width_scales_with_size() {
        // "Rust" = R(667) + u(500) + s(389) + t(278) = 1834
        let width = StandardMetrics.width_of_text_at_size("Rust", FontVariant::Regular, 10.0);
        assert!((width - 18.34).abs() < 1e-3, "Rust at 10pt should be 18.34pt, got {width}");
        let doubled = StandardMetrics.width_of_text_at_size("Rust", FontVariant::Regular, 20.0);
        assert!((doubled - 2.0 * width).abs() < 1e-3);
    }

    #[test]
    fn test_bold_wider_than_regular() {
        let text = "Experience";
        let regular = StandardMetrics.width_of_text_at_size(text, FontVariant::Regular, 10.5);
        let bold = StandardMetrics.width_of_text_at_size(text, FontVariant::Bold, 10.5);
        assert!(bold > regular, "bold {bold} should exceed regular {regular}");
    }

    #[test]
    fn test_winansi_punctuation_has_real_widths() {
        let table = get_metrics(FontVariant::Regular);
        assert_eq!(table.glyph_width('–'), 500);
        assert_eq!(table.glyph_width('•'), 350);
        assert_eq!(get_metrics(FontVariant::Italic).glyph_width('“'), 556);
    }

    #[test]
    fn test_unknown_character_falls_back_to_average() {
        let table = get_metrics(FontVariant::Bold);
        assert_eq!(table.glyph_width('語'), table.average_char_width);
    }

    #[test]
    fn test_accented_letters_use_afm_widths() {
        let roman = get_metrics(FontVariant::Regular);
        assert_eq!(roman.glyph_width('é'), 444);
        assert_eq!(roman.glyph_width('á'), 444);
        assert_eq!(roman.glyph_width('ó'), 500);
        assert_eq!(roman.glyph_width('ñ'), 500);
        assert_eq!(roman.glyph_width('í'), 278);
        assert_eq!(roman.glyph_width('É'), 611);
        assert_eq!(get_metrics(FontVariant::Bold).glyph_width('Æ'), 1000);
        assert_eq!(get_metrics(FontVariant::Italic).glyph_width('Ñ'), 667);
    }

    #[test]
    fn test_accented_letter_matches_its_base_letter() {
        for font in FontVariant::ALL {
            let table = get_metrics(font);
            for (accented, base) in [('é', 'e'), ('á', 'a'), ('ó', 'o'), ('ú', 'u'), ('ñ', 'n'), ('í', 'i')] {
                assert_eq!(table.glyph_width(accented), table.glyph_width(base), "{font:?} {accented}");
            }
        }
    }

    #[test]
    fn test_nbsp_measures_like_space() {
        for font in FontVariant::ALL {
            let table = get_metrics(font);
            assert_eq!(table.glyph_width('\u{00A0}'), table.glyph_width(' '));
        }
    }

    #[test]
    fn test_resource_names_are_distinct() {
        let names: std::collections::HashSet<_> =
            FontVariant::ALL.iter().map(|f| f.resource_name()).collect();
        assert_eq!(names.len(), 3);
        assert_eq!(FontVariant::Italic.postscript_name(), "Times-Italic");
    }
}
