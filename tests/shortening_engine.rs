mod common;

use std::collections::HashSet;
use std::sync::Arc;

use snaplink::domain::errors::ShortenerError;
use snaplink::domain::repositories::MappingRepository;
use snaplink::utils::code_generator::{DEFAULT_ALPHABET, DEFAULT_CODE_LENGTH};

#[tokio::test]
async fn test_shorten_is_idempotent() {
    let repo = common::create_test_repository().await;
    let service = common::create_test_service(repo.clone());

    let first = service.shorten("https://example.com/a").await.unwrap();
    let second = service.shorten("https://example.com/a").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_then_resolve_round_trip() {
    let repo = common::create_test_repository().await;
    let service = common::create_test_service(repo);

    let code = service.shorten("https://example.com/a").await.unwrap();

    assert_eq!(code.chars().count(), DEFAULT_CODE_LENGTH);
    assert!(code.chars().all(|c| DEFAULT_ALPHABET.contains(c)));
    assert_eq!(
        service.resolve(&code).await.unwrap().as_deref(),
        Some("https://example.com/a")
    );
}

#[tokio::test]
async fn test_distinct_urls_get_distinct_codes() {
    let repo = common::create_test_repository().await;
    let service = common::create_test_service(repo.clone());

    let a = service.shorten("https://example.com/a").await.unwrap();
    let b = service.shorten("https://example.com/b").await.unwrap();

    assert_ne!(a, b);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_resolve_unknown_code_returns_none() {
    let repo = common::create_test_repository().await;
    let service = common::create_test_service(repo);

    assert!(service.resolve("zzzzzz").await.unwrap().is_none());
    assert!(service.resolve("").await.unwrap().is_none());
}

#[tokio::test]
async fn test_resolve_with_swapped_case_returns_none() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "https://example.com/a", "abcDEF").await;
    let service = common::create_test_service(repo);

    assert!(service.resolve("abcDEF").await.unwrap().is_some());
    assert!(service.resolve("ABCdef").await.unwrap().is_none());
}

#[tokio::test]
async fn test_shorten_empty_url_creates_nothing() {
    let repo = common::create_test_repository().await;
    let service = common::create_test_service(repo.clone());

    let result = service.shorten("").await;

    assert!(matches!(result, Err(ShortenerError::InvalidInput)));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_accepts_non_url_text() {
    let repo = common::create_test_repository().await;
    let service = common::create_test_service(repo);

    let code = service.shorten("not a url at all").await.unwrap();

    assert_eq!(
        service.resolve(&code).await.unwrap().as_deref(),
        Some("not a url at all")
    );
}

#[tokio::test]
async fn test_shorten_reuses_preexisting_mapping() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "https://example.com/a", "abcDEF").await;
    let service = common::create_test_service(repo.clone());

    let code = service.shorten("https://example.com/a").await.unwrap();

    assert_eq!(code, "abcDEF");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_distinct_urls_get_distinct_codes() {
    let repo = common::create_test_repository().await;
    let service = Arc::new(common::create_test_service(repo.clone()));

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .shorten(&format!("https://example.com/{}", i))
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        codes.insert(handle.await.unwrap());
    }

    assert_eq!(codes.len(), 50);
    assert_eq!(repo.count().await.unwrap(), 50);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_same_url_creates_one_mapping() {
    let repo = common::create_test_repository().await;
    let service = Arc::new(common::create_test_service(repo.clone()));

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.shorten("https://example.com/same").await.unwrap() })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        codes.insert(handle.await.unwrap());
    }

    assert_eq!(codes.len(), 1);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let repo = common::create_test_repository().await;
    let service = common::create_test_service(repo.clone());

    let code = service.shorten("https://example.com/a").await.unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphabetic()));

    assert_eq!(
        service.shorten("https://example.com/a").await.unwrap(),
        code
    );
    assert_eq!(
        service.resolve(&code).await.unwrap().as_deref(),
        Some("https://example.com/a")
    );

    let other = service.shorten("https://example.com/b").await.unwrap();
    assert_ne!(other, code);

    // Six letters over a 52-symbol alphabet make a clash with this literal negligible.
    if code != "zzzzzz" && other != "zzzzzz" {
        assert!(service.resolve("zzzzzz").await.unwrap().is_none());
    }

    assert_eq!(service.mapping_count().await.unwrap(), 2);
}
