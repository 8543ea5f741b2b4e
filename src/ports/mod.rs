pub mod time;

pub use time::TimePort;
