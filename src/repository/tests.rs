//! Repository Integration Tests
//!
//! Tests for JsonFileRepository against a temporary directory.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, Picole, PicoleDraft};
    use crate::repository::{JsonFileRepository, ListRepository, MemoryRepository};
    use tempfile::TempDir;

    fn sample_items() -> Vec<Picole> {
        vec![
            Picole::from_draft(1, &PicoleDraft::new("Morango", "5", "Morango", "10")),
            Picole::from_draft(2, &PicoleDraft::new("Açaí", "7,50", "Açaí com banana", "3")),
        ]
    }

    fn setup_repo() -> (TempDir, JsonFileRepository) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let repo = JsonFileRepository::new(dir.path().join("picoles.txt"));
        (dir, repo)
    }

    #[tokio::test]
    async fn test_persist_then_load_round_trip() {
        let (_dir, repo) = setup_repo();
        let items = sample_items();

        repo.persist(items.as_slice()).await.expect("Persist failed");
        let loaded: Vec<Picole> = repo.load().await.expect("Load failed");

        assert_eq!(loaded, items);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let (_dir, repo) = setup_repo();

        let result: Result<Vec<Picole>, _> = repo.load().await;
        assert!(matches!(result, Err(DomainError::Load(_))));
    }

    #[tokio::test]
    async fn test_load_corrupt_file() {
        let (_dir, repo) = setup_repo();
        std::fs::write(repo.path(), "{not json").unwrap();

        let result: Result<Vec<Picole>, _> = repo.load().await;
        assert!(matches!(result, Err(DomainError::Load(_))));
    }

    #[tokio::test]
    async fn test_load_wrong_shape() {
        let (_dir, repo) = setup_repo();
        std::fs::write(repo.path(), r#"[{"id": 1, "name": "Uva"}]"#).unwrap();

        let result: Result<Vec<Picole>, _> = repo.load().await;
        assert!(matches!(result, Err(DomainError::Load(_))));
    }

    #[tokio::test]
    async fn test_persist_overwrites_whole_file() {
        let (_dir, repo) = setup_repo();
        let items = sample_items();

        repo.persist(items.as_slice()).await.unwrap();
        repo.persist(&items[..1]).await.unwrap();

        let loaded: Vec<Picole> = repo.load().await.unwrap();
        assert_eq!(loaded, items[..1].to_vec());

        let raw = std::fs::read_to_string(repo.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_persist_replaces_file_without_leftovers() {
        let (dir, repo) = setup_repo();
        std::fs::write(repo.path(), "[{\"id\": 1, \"name\": \"trun").unwrap();

        repo.persist(sample_items().as_slice()).await.unwrap();

        let loaded: Vec<Picole> = repo.load().await.unwrap();
        assert_eq!(loaded, sample_items());
        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["picoles.txt".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_persist_keeps_previous_file() {
        let (dir, repo) = setup_repo();
        repo.persist(sample_items().as_slice()).await.unwrap();

        // A directory squatting on the staging path makes the write fail
        std::fs::create_dir(dir.path().join("picoles.txt.tmp")).unwrap();
        let result = repo.persist(&sample_items()[..1]).await;

        assert!(matches!(result, Err(DomainError::Persist(_))));
        let loaded: Vec<Picole> = repo.load().await.unwrap();
        assert_eq!(loaded, sample_items());
    }

    #[tokio::test]
    async fn test_persist_empty_list() {
        let (_dir, repo) = setup_repo();

        let empty: Vec<Picole> = Vec::new();
        repo.persist(empty.as_slice()).await.unwrap();

        assert_eq!(std::fs::read_to_string(repo.path()).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_persist_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("nested").join("picoles.txt"));

        repo.persist(sample_items().as_slice()).await.expect("Persist failed");
        assert!(repo.path().exists());
    }

    #[tokio::test]
    async fn test_persist_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        // The target path is a directory, so the final rename must fail
        let repo = JsonFileRepository::new(dir.path());

        let result = repo.persist(sample_items().as_slice()).await;
        assert!(matches!(result, Err(DomainError::Persist(_))));
    }

    #[tokio::test]
    async fn test_memory_repository() {
        let repo = MemoryRepository::<Picole>::new();
        assert!(repo.load().await.is_err());

        repo.persist(&sample_items()).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), sample_items());
        assert_eq!(repo.persist_calls(), 1);

        repo.set_fail_persist(true);
        assert!(repo.persist(&[]).await.is_err());
        assert_eq!(repo.snapshot().await, Some(sample_items()));
        assert_eq!(repo.persist_calls(), 2);
    }
}
