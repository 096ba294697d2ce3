mod dispatch;
pub use dispatch::*;
pub mod knapsack;
