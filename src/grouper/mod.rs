mod assembler;
mod error;

#[cfg(test)]
mod tests;

pub use assembler::{Group, assemble, singletons};
pub use error::GroupError;

use crate::clusterer::{DEFAULT_DISTANCE_THRESHOLD, Linkage, cluster};
use crate::config::GrouperConfig;
use crate::question::Groupable;
use crate::vectorizer::{Tokenizer, vectorize};
use tracing::{info, warn};

/// Groups near-duplicate questions.
///
/// Holds only immutable settings; every call rebuilds the vocabulary from the
/// batch it is given, so one grouper can be shared across threads.
#[derive(Debug, Clone)]
pub struct QuestionGrouper {
    tokenizer: Tokenizer,
    distance_threshold: f64,
    linkage: Linkage,
}

impl QuestionGrouper {
    /// Grouper with the stock settings: cutoff 0.6, average linkage
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            linkage: Linkage::Average,
        }
    }

    pub fn from_config(config: &GrouperConfig) -> Self {
        Self::new()
            .distance_threshold(config.distance_threshold)
            .linkage(config.linkage)
            .extra_stop_words(&config.extra_stop_words)
    }

    /// Set the merge cutoff
    pub fn distance_threshold(mut self, threshold: f64) -> Self {
        self.distance_threshold = threshold;
        self
    }

    pub fn linkage(mut self, linkage: Linkage) -> Self {
        self.linkage = linkage;
        self
    }

    /// Extend the stopword list
    pub fn extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tokenizer = self.tokenizer.with_extra_stop_words(words);
        self
    }

    /// Group questions, falling back to one group per question if
    /// clustering fails. Never fails itself.
    pub fn group<'a, Q: Groupable>(&self, questions: &'a [Q]) -> Vec<Group<'a, Q>> {
        match self.try_group(questions) {
            Ok(groups) => groups,
            Err(e) => {
                warn!(
                    error = %e,
                    questions = questions.len(),
                    "clustering failed, falling back to singleton groups"
                );
                singletons(questions)
            }
        }
    }

    /// Run vectorizer, clusterer and assembler, surfacing any failure
    pub fn try_group<'a, Q: Groupable>(
        &self,
        questions: &'a [Q],
    ) -> Result<Vec<Group<'a, Q>>, GroupError> {
        if questions.len() < 2 {
            return Ok(singletons(questions));
        }

        let messages: Vec<&str> = questions.iter().map(|q| q.message()).collect();
        let tfidf = vectorize(&messages, &self.tokenizer)?;
        let result = cluster(&tfidf.vectors, self.distance_threshold, self.linkage)?;
        let groups = assemble(questions, &result.labels)?;

        info!(
            questions = questions.len(),
            groups = groups.len(),
            vocabulary = tfidf.vocabulary.len(),
            "grouped questions"
        );

        Ok(groups)
    }
}

impl Default for QuestionGrouper {
    fn default() -> Self {
        Self::new()
    }
}

/// Group questions with the stock settings
pub fn group_questions<Q: Groupable>(questions: &[Q]) -> Vec<Group<'_, Q>> {
    QuestionGrouper::new().group(questions)
}
