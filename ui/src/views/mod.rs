mod standings;

pub use standings::Standings;
