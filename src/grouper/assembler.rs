use crate::grouper::GroupError;
use crate::question::Groupable;
use serde::Serialize;
use std::cmp::Reverse;

/// Questions that share wording, ready for one reviewer action
#[derive(Debug, Serialize)]
pub struct Group<'a, Q> {
    /// Message of the earliest member
    pub title: String,
    /// Always equals `questions.len()`
    pub count: usize,
    /// Members in input order, borrowed from the caller
    pub questions: Vec<&'a Q>,
}

impl<'a, Q: Groupable> Group<'a, Q> {
    fn from_members(members: Vec<&'a Q>) -> Self {
        let title = members
            .first()
            .map(|q| q.message().to_string())
            .unwrap_or_default();
        Self {
            title,
            count: members.len(),
            questions: members,
        }
    }

    /// Ids of every member, e.g. for a bulk answer
    pub fn question_ids(&self) -> Vec<Q::Id> {
        self.questions.iter().map(|q| q.id()).collect()
    }
}

/// Turn per-item cluster labels into groups, largest first.
///
/// Labels must be numbered by first appearance (`0`, then the next unseen
/// label is `1`, and so on), as [`crate::clusterer::cluster`] produces them.
///
/// Members keep input order. Equal-sized groups keep the order in which their
/// first member appeared.
pub fn assemble<'a, Q: Groupable>(
    questions: &'a [Q],
    labels: &[usize],
) -> Result<Vec<Group<'a, Q>>, GroupError> {
    if labels.len() != questions.len() {
        return Err(GroupError::ClusteringFailure(format!(
            "{} labels for {} questions",
            labels.len(),
            questions.len()
        )));
    }

    // buckets[label] holds that label's members; labels arrive numbered by
    // first appearance, so a new label is always the next free slot
    let mut buckets: Vec<Vec<&'a Q>> = Vec::new();

    for (idx, (question, &label)) in questions.iter().zip(labels).enumerate() {
        if label == buckets.len() {
            buckets.push(Vec::new());
        } else if label > buckets.len() {
            return Err(GroupError::ClusteringFailure(format!(
                "label {} at index {} skips ahead of {} known clusters",
                label,
                idx,
                buckets.len()
            )));
        }
        buckets[label].push(question);
    }

    let mut groups: Vec<Group<'a, Q>> = buckets.into_iter().map(Group::from_members).collect();
    groups.sort_by_key(|g| Reverse(g.count));

    Ok(groups)
}

/// One group per question, in input order
pub fn singletons<Q: Groupable>(questions: &[Q]) -> Vec<Group<'_, Q>> {
    questions
        .iter()
        .map(|q| Group::from_members(vec![q]))
        .collect()
}
