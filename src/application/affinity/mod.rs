pub mod service;

pub use service::AffinityService;
