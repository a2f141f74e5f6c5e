pub mod source;
pub mod tokenizer;

pub use source::Source;
pub use tokenizer::{split_words, Advance, Tokenizer, END_OF_SOURCE, PLACEHOLDER};
