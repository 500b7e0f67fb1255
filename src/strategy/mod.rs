pub mod implementations;
pub mod optimization;
pub mod traits;
pub mod value_iteration;
