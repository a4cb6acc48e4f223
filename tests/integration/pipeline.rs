//! End-to-end pipeline tests: submit a problem, persist matches, read them
//! back joined to researcher records.

use crate::common;
use clinmatch::{MatchError, DEFAULT_TOP_N, NEUTRAL_SCORE};

#[tokio::test]
async fn cardiology_problem_matches_the_heart_failure_specialist() {
    let service = common::seeded_mem_service();
    let result = service
        .submit_problem(
            common::full_problem(
                "Our unit sees high 30-day readmission rates for heart failure patients",
                "Heart failure readmissions",
                "Cardiology",
                &["readmission", "discharge planning"],
            ),
            DEFAULT_TOP_N,
        )
        .await
        .unwrap();

    assert_eq!(result.matches.len(), DEFAULT_TOP_N);
    assert_eq!(result.matches[0].researcher.name, "Dr. Michael Rodriguez");
    assert_eq!(result.matches[0].score, 1.0);
    assert_eq!(result.matches[0].rank, 1);

    // Ranks are the 1-based positions of the returned order.
    let ranks: Vec<u32> = result.matches.iter().map(|m| m.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5]);

    // Scores are descending and bounded.
    for pair in result.matches.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for m in &result.matches {
        assert!((0.0..=1.0).contains(&m.score));
    }
}

#[tokio::test]
async fn stored_matches_survive_for_later_retrieval() {
    let service = common::seeded_mem_service();
    let submitted = service
        .submit_problem(
            common::make_new_problem("telemedicine for rural chronic pain patients"),
            3,
        )
        .await
        .unwrap();

    let fetched = service
        .matches_for_problem(&submitted.problem.id)
        .await
        .unwrap();

    assert_eq!(fetched.problem.id, submitted.problem.id);
    assert_eq!(fetched.matches.len(), submitted.matches.len());
    for (a, b) in fetched.matches.iter().zip(&submitted.matches) {
        assert_eq!(a.researcher.id, b.researcher.id);
        assert_eq!(a.score, b.score);
        assert_eq!(a.rank, b.rank);
    }
    // Telemedicine problem finds the telemedicine researcher first.
    assert_eq!(fetched.matches[0].researcher.name, "Dr. Jennifer Kim");
}

#[tokio::test]
async fn degenerate_description_gets_neutral_scores() {
    let service = common::seeded_mem_service();
    let result = service
        .submit_problem(common::make_new_problem("!!! ???"), 3)
        .await
        .unwrap();

    assert_eq!(result.matches.len(), 3);
    for m in &result.matches {
        assert_eq!(m.score, NEUTRAL_SCORE);
    }
    // Input order preserved: the first three seeded researchers.
    assert_eq!(result.matches[0].researcher.name, "Dr. Sarah Chen");
    assert_eq!(result.matches[1].researcher.name, "Dr. Michael Rodriguez");
    assert_eq!(result.matches[2].researcher.name, "Dr. Jennifer Kim");
}

#[tokio::test]
async fn missing_problem_id_is_an_error() {
    let service = common::seeded_mem_service();
    let err = service
        .matches_for_problem(&"nope".to_string().into())
        .await
        .unwrap_err();
    assert!(matches!(err, MatchError::ProblemNotFound(_)));
}

#[tokio::test]
async fn registering_a_researcher_grows_the_pool() {
    let service = common::seeded_mem_service();
    service
        .register_researcher(common::new_researcher(
            "Dr. New",
            "sleep medicine and insomnia interventions",
            &["sleep", "insomnia"],
        ))
        .await
        .unwrap();

    let pool = service.all_researchers().await.unwrap();
    assert_eq!(pool.len(), 9);
    assert_eq!(pool[8].name, "Dr. New");

    // And the new researcher is immediately matchable.
    let result = service
        .submit_problem(common::make_new_problem("insomnia sleep interventions"), 1)
        .await
        .unwrap();
    assert_eq!(result.matches[0].researcher.name, "Dr. New");
}
