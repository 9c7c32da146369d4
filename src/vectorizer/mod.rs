mod stopwords;
mod tfidf;
mod tokenizer;


pub use stopwords::ENGLISH_STOP_WORDS;
pub use tfidf::{TermId, TermVector, TfIdf, Vocabulary, smoothed_idf, vectorize};
pub use tokenizer::{MIN_TOKEN_CHARS, Tokenizer};
