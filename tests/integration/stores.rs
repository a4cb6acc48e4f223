//! Backend interchangeability: the pipeline behaves identically over the
//! in-memory store and SQLite, including an on-disk database file.

use crate::common;
use clinmatch::service::MatchService;
use clinmatch::storage::{SqliteStorage, Storage};
use clinmatch::DEFAULT_TOP_N;
use std::sync::Arc;

#[tokio::test]
async fn sqlite_pipeline_matches_the_memory_pipeline() {
    let mem = common::seeded_mem_service();
    let sql = common::seeded_sqlite_service().await;

    let problem = "reducing surgical site infections after cardiac surgery";
    let mem_result = mem
        .submit_problem(common::make_new_problem(problem), DEFAULT_TOP_N)
        .await
        .unwrap();
    let sql_result = sql
        .submit_problem(common::make_new_problem(problem), DEFAULT_TOP_N)
        .await
        .unwrap();

    // Ids differ per store, but names, scores, and ranks line up exactly.
    assert_eq!(mem_result.matches.len(), sql_result.matches.len());
    for (m, s) in mem_result.matches.iter().zip(&sql_result.matches) {
        assert_eq!(m.researcher.name, s.researcher.name);
        assert_eq!(m.score, s.score);
        assert_eq!(m.rank, s.rank);
    }
}

#[tokio::test]
async fn on_disk_database_persists_across_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clinmatch.db");

    let problem_id = {
        let store = SqliteStorage::open(&path).await.unwrap();
        for new in clinmatch::storage::seed_researchers() {
            store.create_researcher(new).await.unwrap();
        }
        let service = MatchService::new(Arc::new(store));
        let result = service
            .submit_problem(common::make_new_problem("copd pulmonary rehabilitation"), 2)
            .await
            .unwrap();
        assert_eq!(result.matches[0].researcher.name, "Dr. James Wilson");
        result.problem.id
    };

    // Fresh pool against the same file: everything is still there.
    let store = SqliteStorage::open(&path).await.unwrap();
    let service = MatchService::new(Arc::new(store));
    let fetched = service.matches_for_problem(&problem_id).await.unwrap();
    assert_eq!(fetched.matches.len(), 2);
    assert_eq!(fetched.matches[0].researcher.name, "Dr. James Wilson");
    assert_eq!(fetched.matches[0].rank, 1);
}

#[tokio::test]
async fn empty_sqlite_pool_yields_no_matches() {
    let store = SqliteStorage::in_memory().await.unwrap();
    let service = MatchService::new(Arc::new(store));
    let result = service
        .submit_problem(common::make_new_problem("anything"), DEFAULT_TOP_N)
        .await
        .unwrap();
    assert!(result.matches.is_empty());
}
