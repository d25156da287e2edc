pub mod calendar;
pub mod feed;
pub mod navigation;
pub mod overlay;

pub use calendar::reduce_calendar;
pub use feed::reduce_feed;
pub use navigation::reduce_navigation;
pub use overlay::reduce_overlay;
