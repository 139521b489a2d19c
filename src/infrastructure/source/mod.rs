//! User source implementations

mod http;

pub use http::HttpUserSource;
