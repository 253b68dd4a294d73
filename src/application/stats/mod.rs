pub mod service;

pub use service::{
    count_by_period, group_likes_by_destination, DestinationLikes, StatsService, StatsSummary,
    VacationCounts,
};
