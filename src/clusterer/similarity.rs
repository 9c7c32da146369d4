use crate::grouper::GroupError;
use crate::vectorizer::TermVector;
use std::cmp::Ordering;

/// Dot product of two sparse vectors, walking both sorted term lists once
pub fn dot(a: &TermVector, b: &TermVector) -> f64 {
    let (a, b) = (a.entries(), b.entries());
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;

    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }

    sum
}

pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> Result<f64, GroupError> {
    let na = a.norm();
    let nb = b.norm();

    if na == 0.0 || nb == 0.0 {
        return Err(GroupError::ClusteringFailure(
            "cosine similarity of a zero-norm vector".to_string(),
        ));
    }

    let sim = dot(a, b) / (na * nb);
    if !sim.is_finite() {
        return Err(GroupError::ClusteringFailure(format!(
            "non-finite cosine similarity: {}",
            sim
        )));
    }

    Ok(sim)
}

/// Cosine distance clamped to [0, 1]; 1 when no terms are shared
pub fn cosine_distance(a: &TermVector, b: &TermVector) -> Result<f64, GroupError> {
    Ok((1.0 - cosine_similarity(a, b)?).clamp(0.0, 1.0))
}

/// Full symmetric distance matrix, zero on the diagonal
pub fn distance_matrix(vectors: &[TermVector]) -> Result<Vec<Vec<f64>>, GroupError> {
    if let Some(idx) = vectors.iter().position(TermVector::is_zero) {
        return Err(GroupError::ClusteringFailure(format!(
            "document {} has no usable terms",
            idx
        )));
    }

    let n = vectors.len();
    let mut out = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let d = cosine_distance(&vectors[i], &vectors[j])?;
            out[i][j] = d;
            out[j][i] = d;
        }
    }

    Ok(out)
}
