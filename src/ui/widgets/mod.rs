//! 通用界面小部件

pub mod banner;

pub use banner::{BannerKind, StatusBanner};
