//! Affinity aggregate: which user likes which vacation

pub mod model;
pub mod repository;

pub use model::Like;
pub use repository::LikeRepository;
