/// OpenAPI documentation generation.
pub mod documentation;
/// Game creation and read aggregation.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Score submission and listing.
pub mod score_service;
