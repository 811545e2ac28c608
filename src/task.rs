pub mod limit_watch;

pub use limit_watch::limit_watch;
