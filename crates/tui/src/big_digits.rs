use std::collections::HashMap;

use once_cell::sync::Lazy;

const DIGIT_HEIGHT: usize = 5;
const DIGIT_GAP: &str = " ";
const FILL_CHAR: char = '█';

type Glyph = [&'static str; DIGIT_HEIGHT];

static DIGITS: Lazy<HashMap<char, Glyph>> = Lazy::new(|| {
    HashMap::from([
        ('0', ["111", "1 1", "1 1", "1 1", "111"]),
        ('1', [" 1 ", "11 ", " 1 ", " 1 ", "111"]),
        ('2', ["111", "  1", "111", "1  ", "111"]),
        ('3', ["111", "  1", " 11", "  1", "111"]),
        ('4', ["1 1", "1 1", "111", "  1", "  1"]),
        ('5', ["111", "1  ", "111", "  1", "111"]),
        ('6', ["111", "1  ", "111", "1 1", "111"]),
        ('7', ["111", "  1", "  1", "  1", "  1"]),
        ('8', ["111", "1 1", "111", "1 1", "111"]),
        ('9', ["111", "1 1", "111", "  1", "111"]),
        ('-', ["   ", "   ", "111", "   ", "   "]),
    ])
});

/// Height in rows of every rendered number.
pub const HEIGHT: u16 = DIGIT_HEIGHT as u16;

/// Render `value` as rows of block glyphs. Unknown characters are skipped.
pub fn render(value: i32) -> Vec<String> {
    let glyphs: Vec<&Glyph> = value
        .to_string()
        .chars()
        .filter_map(|ch| DIGITS.get(&ch))
        .collect();

    (0..DIGIT_HEIGHT)
        .map(|row| {
            let parts: Vec<String> = glyphs
                .iter()
                .map(|glyph| {
                    glyph[row]
                        .chars()
                        .map(|cell| if cell == '1' { FILL_CHAR } else { ' ' })
                        .collect()
                })
                .collect();
            parts.join(DIGIT_GAP)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_height_rows() {
        let rows = render(14);
        assert_eq!(rows.len(), DIGIT_HEIGHT);
        assert!(rows.iter().all(|row| row.chars().count() == 7));
    }

    #[test]
    fn renders_negative_values() {
        let rows = render(-3);
        assert_eq!(rows[2], "███  ██");
        assert_eq!(rows[0], "    ███");
    }
}
