pub mod project_request_repository;
