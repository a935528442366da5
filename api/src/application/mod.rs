pub mod http;
pub mod profile_middleware;
