//! REST API endpoint tests

mod cafe_tests;
mod health_tests;
