// HTTP routes
pub mod health;
pub mod jobs;
pub mod scan;

pub use health::*;
pub use jobs::*;
pub use scan::*;
