// Application layer - Use cases and data-source seams
pub mod creator_repository;
pub mod dashboard_loader;
