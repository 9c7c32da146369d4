mod types;


pub use types::{Question, QuestionId, QuestionStatus};

use std::fmt::Display;

/// Anything the grouper can cluster
///
/// Only `message` feeds the vectorizer. The id is carried through so
/// callers can act on a whole group at once (e.g. bulk answering).
pub trait Groupable {
    type Id: Clone + Display;

    fn id(&self) -> Self::Id;

    fn message(&self) -> &str;
}

impl Groupable for Question {
    type Id = QuestionId;

    fn id(&self) -> QuestionId {
        self.question_id
    }

    fn message(&self) -> &str {
        &self.message
    }
}
