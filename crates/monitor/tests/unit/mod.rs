pub mod parse;
pub mod tokenizer;
