#![allow(dead_code)]

use std::sync::Arc;

use snaplink::application::services::ShorteningService;
use snaplink::domain::entities::NewMapping;
use snaplink::domain::repositories::MappingRepository;
use snaplink::infrastructure::persistence::SqliteMappingRepository;
use snaplink::state::AppState;
use snaplink::utils::code_generator::CodeGenerator;

pub const TEST_BASE_URL: &str = "http://localhost:8080";

pub async fn create_test_repository() -> Arc<SqliteMappingRepository> {
    Arc::new(SqliteMappingRepository::in_memory().await.unwrap())
}

pub fn create_test_service(
    repository: Arc<SqliteMappingRepository>,
) -> ShorteningService<SqliteMappingRepository> {
    ShorteningService::new(repository, CodeGenerator::default())
}

pub async fn create_test_state() -> (AppState, Arc<SqliteMappingRepository>) {
    let repository = create_test_repository().await;
    let shortener = Arc::new(create_test_service(repository.clone()));

    (AppState::new(shortener, TEST_BASE_URL), repository)
}

pub async fn create_test_mapping(repository: &SqliteMappingRepository, url: &str, code: &str) {
    repository
        .insert(NewMapping::new(url, code))
        .await
        .unwrap();
}
