use crate::engine::error::ReaderError;
use crate::reading::source::Source;

pub const PLACEHOLDER: &str = "Press space to begin.";
pub const END_OF_SOURCE: &str = "End of file.";

/// What an advance did to the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next word of the current line.
    Word,
    /// Loaded the next line.
    Line,
    /// Hit the end of a seekable source and started over.
    Rewound,
    /// No more input; the current line is the end-of-source sentinel.
    Exhausted,
}

/// Splits a line on single spaces. Consecutive spaces produce empty words and
/// the result always holds at least one word.
pub fn split_words(line: &str) -> Vec<String> {
    let words: Vec<String> = line.split(' ').map(str::to_string).collect();
    if words.is_empty() {
        vec![String::new()]
    } else {
        words
    }
}

pub struct Tokenizer {
    source: Option<Source>,
    name: String,
    line: Vec<String>,
    cursor: usize,
}

impl Tokenizer {
    pub fn new(source: Source) -> Self {
        Self {
            name: source.name().to_string(),
            source: Some(source),
            line: vec![PLACEHOLDER.to_string()],
            cursor: 0,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.name
    }

    pub fn is_exhausted(&self) -> bool {
        self.source.is_none()
    }

    pub fn current_word(&self) -> &str {
        &self.line[self.cursor]
    }

    pub fn current_line(&self) -> &[String] {
        &self.line
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn advance_word(&mut self) -> Result<Advance, ReaderError> {
        if self.cursor + 1 < self.line.len() {
            self.cursor += 1;
            return Ok(Advance::Word);
        }
        self.advance_line()
    }

    pub fn advance_line(&mut self) -> Result<Advance, ReaderError> {
        let Some(source) = self.source.as_mut() else {
            return Ok(Advance::Exhausted);
        };

        let (line, advance) = match source.next_line()? {
            Some(line) => (Some(line), Advance::Line),
            None if source.rewind()? => (source.next_line()?, Advance::Rewound),
            None => (None, Advance::Exhausted),
        };

        match line {
            Some(line) => self.replace_line(split_words(&line)),
            None => {
                // Dropping the source closes it; it is never reopened.
                self.source = None;
                self.replace_line(vec![END_OF_SOURCE.to_string()]);
                return Ok(Advance::Exhausted);
            }
        }
        Ok(advance)
    }

    fn replace_line(&mut self, words: Vec<String>) {
        self.line = words;
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn forward(text: &str) -> Tokenizer {
        Tokenizer::new(Source::forward("test", Cursor::new(text.as_bytes().to_vec())))
    }

    fn seekable(text: &str) -> Tokenizer {
        Tokenizer::new(Source::seekable("test", Cursor::new(text.as_bytes().to_vec())))
    }

    #[test]
    fn test_split_double_space_yields_empty_word() {
        assert_eq!(split_words("the quick  fox"), vec!["the", "quick", "", "fox"]);
    }

    #[test]
    fn test_split_empty_line_yields_one_empty_word() {
        assert_eq!(split_words(""), vec![""]);
    }

    #[test]
    fn test_split_keeps_tabs_inside_words() {
        assert_eq!(split_words("a\tb c"), vec!["a\tb", "c"]);
    }

    #[test]
    fn test_starts_on_placeholder() {
        let tokenizer = forward("a b\n");
        assert_eq!(tokenizer.current_word(), PLACEHOLDER);
        assert_eq!(tokenizer.cursor(), 0);
        assert_eq!(tokenizer.source_name(), "test");
    }

    #[test]
    fn test_walks_words_then_lines() {
        let mut tokenizer = forward("a b\nc\n");
        assert_eq!(tokenizer.advance_word().unwrap(), Advance::Line);
        assert_eq!(tokenizer.current_word(), "a");
        assert_eq!(tokenizer.advance_word().unwrap(), Advance::Word);
        assert_eq!(tokenizer.current_word(), "b");
        assert_eq!(tokenizer.cursor(), 1);
        assert_eq!(tokenizer.advance_word().unwrap(), Advance::Line);
        assert_eq!(tokenizer.current_word(), "c");
        assert_eq!(tokenizer.cursor(), 0);
    }

    #[test]
    fn test_forward_exhaustion_sets_sentinel() {
        let mut tokenizer = forward("a\n");
        tokenizer.advance_word().unwrap();
        assert_eq!(tokenizer.advance_word().unwrap(), Advance::Exhausted);
        assert_eq!(tokenizer.current_word(), END_OF_SOURCE);
        assert!(tokenizer.is_exhausted());

        // Later advances stay on the sentinel.
        assert_eq!(tokenizer.advance_word().unwrap(), Advance::Exhausted);
        assert_eq!(tokenizer.current_line(), &[END_OF_SOURCE.to_string()]);
    }

    #[test]
    fn test_seekable_loops() {
        let mut tokenizer = seekable("x y\n");
        let mut seen = Vec::new();
        for _ in 0..4 {
            tokenizer.advance_word().unwrap();
            seen.push(tokenizer.current_word().to_string());
        }
        assert_eq!(seen, vec!["x", "y", "x", "y"]);
        assert!(!tokenizer.is_exhausted());
    }

    #[test]
    fn test_seekable_reports_rewind() {
        let mut tokenizer = seekable("x\n");
        assert_eq!(tokenizer.advance_word().unwrap(), Advance::Line);
        assert_eq!(tokenizer.advance_word().unwrap(), Advance::Rewound);
        assert_eq!(tokenizer.current_word(), "x");
    }

    #[test]
    fn test_empty_seekable_source_is_exhausted() {
        let mut tokenizer = seekable("");
        assert_eq!(tokenizer.advance_word().unwrap(), Advance::Exhausted);
        assert_eq!(tokenizer.current_word(), END_OF_SOURCE);
    }

    #[test]
    fn test_blank_line_shows_empty_word() {
        let mut tokenizer = forward("\nword\n");
        tokenizer.advance_word().unwrap();
        assert_eq!(tokenizer.current_word(), "");
        tokenizer.advance_word().unwrap();
        assert_eq!(tokenizer.current_word(), "word");
    }
}
