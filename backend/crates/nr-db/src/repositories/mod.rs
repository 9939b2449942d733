pub mod nurse_repository;
