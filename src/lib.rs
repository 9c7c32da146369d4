// Public API exports
pub mod clusterer;
pub mod config;
pub mod grouper;
pub mod question;
pub mod vectorizer;

// Re-export main types for convenience
pub use question::{Groupable, Question, QuestionId, QuestionStatus};

pub use vectorizer::{ENGLISH_STOP_WORDS, TermVector, TfIdf, Tokenizer, Vocabulary, vectorize};

pub use clusterer::{ClusterResult, DEFAULT_DISTANCE_THRESHOLD, Linkage, cluster};

pub use grouper::{Group, GroupError, QuestionGrouper, group_questions};

pub use config::{ConfigError, ConfigLoader, GrouperConfig};
