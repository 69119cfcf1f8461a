// Infrastructure layer - Configuration and the fixture data source
pub mod config;
pub mod fixture_repository;
