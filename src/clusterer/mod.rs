mod agglomerative;
mod similarity;
mod types;


pub use agglomerative::{agglomerate, cluster};
pub use similarity::{cosine_distance, cosine_similarity, distance_matrix};
pub use types::{ClusterResult, DEFAULT_DISTANCE_THRESHOLD, Linkage};
