mod core;
mod messages;
mod view;
mod worker;

pub use self::core::DashboardEngine;

pub use messages::{CycleFetch, CycleRequest};

pub use view::{
    Banner, BannerKind, ClassifiedRow, DashboardView, Notice, NoticeLevel, PriceChart,
    complete_cycle,
};
