use super::*;
use crate::question::Question;
use std::collections::HashSet;

fn questions(messages: &[&str]) -> Vec<Question> {
    messages.iter().map(|m| Question::new(*m)).collect()
}

fn titles<Q>(groups: &[Group<'_, Q>]) -> Vec<String> {
    groups.iter().map(|g| g.title.clone()).collect()
}

fn counts<Q>(groups: &[Group<'_, Q>]) -> Vec<usize> {
    groups.iter().map(|g| g.count).collect()
}

fn assert_partition(input: &[Question], groups: &[Group<'_, Question>]) {
    let total: usize = groups.iter().map(|g| g.count).sum();
    assert_eq!(total, input.len());

    let mut seen = HashSet::new();
    for g in groups {
        assert_eq!(g.count, g.questions.len());
        for q in &g.questions {
            assert!(seen.insert(q.question_id), "question placed twice");
        }
    }
    for q in input {
        assert!(seen.contains(&q.question_id), "question missing");
    }
}

#[test]
fn test_empty_input() {
    let input: Vec<Question> = vec![];
    assert!(group_questions(&input).is_empty());
}

#[test]
fn test_single_question() {
    let input = questions(&["what is this"]);
    let groups = group_questions(&input);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].title, "what is this");
    assert_eq!(groups[0].count, 1);
    assert!(std::ptr::eq(groups[0].questions[0], &input[0]));
}

#[test]
fn test_password_scenario() {
    let input = questions(&[
        "reset my password",
        "how do I reset password",
        "what are your hours",
    ]);
    let groups = group_questions(&input);

    assert_eq!(counts(&groups), vec![2, 1]);
    assert_eq!(titles(&groups), vec!["reset my password", "what are your hours"]);
    assert!(std::ptr::eq(groups[0].questions[0], &input[0]));
    assert!(std::ptr::eq(groups[0].questions[1], &input[1]));
    assert!(std::ptr::eq(groups[1].questions[0], &input[2]));
    assert_partition(&input, &groups);
}

#[test]
fn test_identical_messages_collapse() {
    let input = questions(&["refund status", "refund status", "refund status", "refund status"]);
    let groups = group_questions(&input);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].count, 4);
}

#[test]
fn test_disjoint_vocabularies_stay_separate() {
    let input = questions(&["shipping delay", "invoice copy", "account locked"]);
    let groups = group_questions(&input);

    assert_eq!(counts(&groups), vec![1, 1, 1]);
    assert_eq!(
        titles(&groups),
        vec!["shipping delay", "invoice copy", "account locked"]
    );
}

#[test]
fn test_sort_by_count_then_first_appearance() {
    let input = questions(&[
        "parking lot",
        "wifi password",
        "lunch menu",
        "wifi password",
        "lunch menu",
        "wifi password",
    ]);
    let groups = group_questions(&input);

    assert_eq!(counts(&groups), vec![3, 2, 1]);
    assert_eq!(titles(&groups), vec!["wifi password", "lunch menu", "parking lot"]);
    assert_partition(&input, &groups);
}

#[test]
fn test_equal_counts_keep_input_order() {
    let input = questions(&["lunch menu", "parking lot", "parking lot", "lunch menu"]);
    let groups = group_questions(&input);

    assert_eq!(counts(&groups), vec![2, 2]);
    assert_eq!(titles(&groups), vec!["lunch menu", "parking lot"]);
}

#[test]
fn test_members_keep_input_order() {
    let input = questions(&["Wifi password?", "parking lot", "wifi password please"]);
    let groups = group_questions(&input);

    assert_eq!(groups[0].title, "Wifi password?");
    assert!(std::ptr::eq(groups[0].questions[0], &input[0]));
    assert!(std::ptr::eq(groups[0].questions[1], &input[2]));
}

#[test]
fn test_all_stop_words_fall_back_to_singletons() {
    let input = questions(&["what is this", "how are you", "what is this"]);
    let grouper = QuestionGrouper::new();

    assert_eq!(grouper.try_group(&input).unwrap_err(), GroupError::VocabularyEmpty);

    let groups = grouper.group(&input);
    assert_eq!(counts(&groups), vec![1, 1, 1]);
    assert_eq!(titles(&groups), vec!["what is this", "how are you", "what is this"]);
    assert_partition(&input, &groups);
}

#[test]
fn test_one_stop_word_message_falls_back() {
    let input = questions(&["reset password", "reset password", "what is it"]);
    let grouper = QuestionGrouper::new();

    assert!(matches!(
        grouper.try_group(&input),
        Err(GroupError::ClusteringFailure(_))
    ));

    let groups = grouper.group(&input);
    assert_eq!(counts(&groups), vec![1, 1, 1]);
    assert_eq!(groups[2].title, "what is it");
}

#[test]
fn test_invalid_threshold_falls_back() {
    let input = questions(&["reset password", "reset password"]);
    let grouper = QuestionGrouper::new().distance_threshold(f64::NAN);

    let groups = grouper.group(&input);
    assert_eq!(counts(&groups), vec![1, 1]);
}

#[test]
fn test_tight_threshold_only_merges_exact_matches() {
    let input = questions(&["reset password", "reset password today", "reset password"]);
    let groups = QuestionGrouper::new().distance_threshold(0.01).group(&input);

    assert_eq!(counts(&groups), vec![2, 1]);
    assert_eq!(titles(&groups), vec!["reset password", "reset password today"]);
}

#[test]
fn test_extra_stop_words() {
    let input = questions(&["pizza refund", "pizza delivery"]);

    let stock = QuestionGrouper::new().group(&input);
    assert_eq!(stock.len(), 2);

    // Only the shared term survives, so the two become identical
    let grouper = QuestionGrouper::new().extra_stop_words(["refund", "delivery"]);
    let groups = grouper.group(&input);
    assert_eq!(counts(&groups), vec![2]);
}

#[test]
fn test_from_config() {
    let config = GrouperConfig {
        distance_threshold: 1.0,
        linkage: Linkage::Single,
        extra_stop_words: vec![],
    };
    let input = questions(&["shipping delay", "invoice copy"]);
    let groups = QuestionGrouper::from_config(&config).group(&input);

    // Cutoff 1.0 admits even orthogonal pairs
    assert_eq!(counts(&groups), vec![2]);
}

#[test]
fn test_question_ids() {
    let input = questions(&["wifi password", "wifi password"]);
    let groups = group_questions(&input);

    assert_eq!(
        groups[0].question_ids(),
        vec![input[0].question_id, input[1].question_id]
    );
}

#[test]
fn test_assemble_rejects_label_mismatch() {
    let input = questions(&["a question", "another one"]);
    assert!(assemble(&input, &[0]).is_err());
}

#[test]
fn test_assemble_first_appearance_labels() {
    let input = questions(&["alpha", "beta", "gamma", "delta"]);
    let groups = assemble(&input, &[0, 1, 0, 2]).unwrap();

    assert_eq!(counts(&groups), vec![2, 1, 1]);
    assert_eq!(titles(&groups), vec!["alpha", "beta", "delta"]);
    assert!(std::ptr::eq(groups[0].questions[1], &input[2]));
}

#[test]
fn test_assemble_rejects_labels_out_of_order() {
    let input = questions(&["alpha", "beta", "gamma"]);

    // Label 2 shows up before label 1 was ever seen
    assert!(matches!(
        assemble(&input, &[0, 2, 1]),
        Err(GroupError::ClusteringFailure(_))
    ));
    assert!(assemble(&input, &[1, 0, 0]).is_err());
}

#[test]
fn test_groups_serialize_in_dashboard_shape() {
    let input = questions(&["wifi password"]);
    let groups = group_questions(&input);
    let json = serde_json::to_value(&groups).unwrap();

    assert_eq!(json[0]["title"], "wifi password");
    assert_eq!(json[0]["count"], 1);
    assert_eq!(json[0]["questions"][0]["message"], "wifi password");
    assert_eq!(json[0]["questions"][0]["status"], "Pending");
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_grouper_is_send_sync() {
    assert_send_sync::<QuestionGrouper>();
}

#[test]
fn test_shared_grouper_across_threads() {
    let grouper = QuestionGrouper::new();
    let first = questions(&["wifi password", "parking lot", "wifi password"]);
    let second = questions(&["lunch menu", "lunch menu", "lunch menu", "invoice copy"]);

    let (a, b) = std::thread::scope(|s| {
        let a = s.spawn(|| {
            let groups = grouper.group(&first);
            (counts(&groups), titles(&groups))
        });
        let b = s.spawn(|| {
            let groups = grouper.group(&second);
            (counts(&groups), titles(&groups))
        });
        (a.join().unwrap(), b.join().unwrap())
    });

    assert_eq!(a.0, vec![2, 1]);
    assert_eq!(a.1, vec!["wifi password", "parking lot"]);
    assert_eq!(b.0, vec![3, 1]);
    assert_eq!(b.1, vec!["lunch menu", "invoice copy"]);
}
