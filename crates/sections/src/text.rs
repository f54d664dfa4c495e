//! Deterministic text measurement used to fit automatic items.
//!
//! Glyph advances are estimated from the font size and the display width of each
//! word, so the result depends only on the text, the style and the width.

use serde::{Deserialize, Serialize};
use tabfeed_types::Size;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub font_size: f32,
    pub line_height: f32,
    /// Average advance of one display column, as a fraction of the font size.
    pub advance_ratio: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::body()
    }
}

impl TextStyle {
    pub fn new(font_size: f32, line_height: f32) -> Self {
        Self {
            font_size,
            line_height,
            advance_ratio: 0.5,
        }
    }

    pub fn body() -> Self {
        Self::new(15.0, 20.0)
    }

    pub fn headline() -> Self {
        Self::new(17.0, 22.0)
    }

    pub fn caption() -> Self {
        Self::new(12.0, 16.0)
    }

    fn column_advance(&self) -> f32 {
        self.font_size * self.advance_ratio
    }

    /// Width of `text` on a single line.
    pub fn line_width(&self, text: &str) -> f32 {
        UnicodeWidthStr::width(text) as f32 * self.column_advance()
    }

    /// Greedily wraps `text` at word boundaries within `max_width`.
    ///
    /// A word wider than `max_width` gets a line of its own. Explicit newlines
    /// always start a new line.
    pub fn wrap<'t>(&self, text: &'t str, max_width: f32) -> Vec<&'t str> {
        let space = self.line_width(" ");
        let mut lines = Vec::new();

        for paragraph in text.lines() {
            let mut line_start: Option<usize> = None;
            let mut line_end = 0;
            let mut line_width = 0.0;

            for (offset, word) in word_spans(paragraph) {
                let word_width = self.line_width(word);
                match line_start {
                    Some(start) if line_width + space + word_width > max_width => {
                        lines.push(&paragraph[start..line_end]);
                        line_start = Some(offset);
                        line_width = word_width;
                    }
                    Some(_) => line_width += space + word_width,
                    None => {
                        line_start = Some(offset);
                        line_width = word_width;
                    }
                }
                line_end = offset + word.len();
            }

            if let Some(start) = line_start {
                lines.push(&paragraph[start..line_end]);
            }
        }
        lines
    }

    /// Size of `text` wrapped within `max_width`; the width never exceeds it.
    pub fn measure(&self, text: &str, max_width: f32) -> Size {
        let lines = self.wrap(text, max_width);
        let widest = lines
            .iter()
            .map(|line| self.line_width(line))
            .fold(0.0f32, f32::max);
        Size::new(widest.min(max_width), lines.len() as f32 * self.line_height)
    }
}

/// Words of `text` with their byte offsets.
fn word_spans(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split(' ')
        .scan(0usize, |offset, word| {
            let start = *offset;
            *offset += word.len() + 1;
            Some((start, word))
        })
        .filter(|(_, word)| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_point() -> TextStyle {
        // 5pt per column keeps the arithmetic readable.
        TextStyle::new(10.0, 12.0)
    }

    #[test]
    fn test_wrap_breaks_at_word_boundaries() {
        let style = ten_point();
        // "hello world" = 11 columns = 55pt.
        assert_eq!(style.wrap("hello world", 60.0), vec!["hello world"]);
        assert_eq!(style.wrap("hello world", 50.0), vec!["hello", "world"]);
    }

    #[test]
    fn test_long_word_gets_its_own_line() {
        let style = ten_point();
        let lines = style.wrap("a extraordinarily b", 40.0);
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);

        let size = style.measure("a extraordinarily b", 40.0);
        assert_eq!(size, Size::new(40.0, 36.0));
    }

    #[test]
    fn test_newlines_and_repeated_spaces() {
        let style = ten_point();
        assert_eq!(style.wrap("one  two\nthree", 500.0), vec!["one  two", "three"]);
        assert_eq!(style.measure("", 100.0), Size::zero());
    }

    #[test]
    fn test_wide_characters_use_display_width() {
        let style = ten_point();
        assert_eq!(style.line_width("ab"), 10.0);
        assert_eq!(style.line_width("日本"), 20.0);
    }
}
