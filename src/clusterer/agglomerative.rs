use crate::clusterer::{
    similarity::distance_matrix,
    types::{ClusterResult, Linkage},
};
use crate::grouper::GroupError;
use crate::vectorizer::TermVector;
use tracing::{debug, trace};

/// Cluster term vectors bottom-up until the closest pair of clusters is
/// farther apart than `threshold`.
pub fn cluster(
    vectors: &[TermVector],
    threshold: f64,
    linkage: Linkage,
) -> Result<ClusterResult, GroupError> {
    if vectors.len() <= 1 {
        return Ok(ClusterResult {
            labels: vec![0; vectors.len()],
            cluster_count: vectors.len(),
            merges: 0,
        });
    }

    let distances = distance_matrix(vectors)?;
    agglomerate(&distances, threshold, linkage)
}

/// Agglomerative clustering over a precomputed distance matrix.
///
/// Active clusters stay ordered by their lowest member index. The pair scan
/// runs in `(i, j)` order and only a strictly smaller distance replaces the
/// current best, so ties go to the pair with the lowest indices. A pair is
/// merged while its linkage distance is `<= threshold`.
pub fn agglomerate(
    distances: &[Vec<f64>],
    threshold: f64,
    linkage: Linkage,
) -> Result<ClusterResult, GroupError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(GroupError::ClusteringFailure(format!(
            "invalid distance threshold: {}",
            threshold
        )));
    }

    let n = distances.len();
    for (i, row) in distances.iter().enumerate() {
        if row.len() != n {
            return Err(GroupError::ClusteringFailure(format!(
                "distance matrix row {} has {} entries, expected {}",
                i,
                row.len(),
                n
            )));
        }
        if let Some(d) = row.iter().find(|d| !d.is_finite()) {
            return Err(GroupError::ClusteringFailure(format!(
                "non-finite distance in row {}: {}",
                i, d
            )));
        }
    }

    let mut members: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
    let mut dist: Vec<Vec<f64>> = distances.to_vec();
    let mut merges = 0;

    while members.len() > 1 {
        let mut best: Option<(usize, usize, f64)> = None;
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                let d = dist[i][j];
                if best.map_or(true, |(_, _, b)| d < b) {
                    best = Some((i, j, d));
                }
            }
        }

        let Some((i, j, d)) = best else {
            break;
        };

        if d > threshold {
            debug!(distance = d, threshold, "closest clusters exceed cutoff");
            break;
        }

        let (size_i, size_j) = (members[i].len(), members[j].len());
        for k in 0..members.len() {
            if k == i || k == j {
                continue;
            }
            let merged = linkage.merged_distance(dist[k][i], dist[k][j], size_i, size_j);
            dist[i][k] = merged;
            dist[k][i] = merged;
        }

        let absorbed = members.remove(j);
        members[i].extend(absorbed);
        dist.remove(j);
        for row in dist.iter_mut() {
            row.remove(j);
        }

        merges += 1;
        trace!(into = i, from = j, distance = d, "merged clusters");
    }

    let mut labels = vec![0; n];
    for (label, cluster) in members.iter().enumerate() {
        for &idx in cluster {
            labels[idx] = label;
        }
    }

    debug!(
        items = n,
        clusters = members.len(),
        merges,
        %linkage,
        "agglomerative clustering finished"
    );

    Ok(ClusterResult {
        labels,
        cluster_count: members.len(),
        merges,
    })
}
