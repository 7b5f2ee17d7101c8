pub mod buckets;
pub mod errors;
pub mod hint;
pub mod models;
pub mod scheduler;
pub mod session;
pub mod stats;

pub use buckets::*;
pub use errors::*;
pub use hint::*;
pub use models::*;
pub use scheduler::*;
pub use session::*;
pub use stats::*;
