use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GroupError {
    #[error("No usable terms left after stopword removal")]
    VocabularyEmpty,

    #[error("Clustering failed: {0}")]
    ClusteringFailure(String),
}
