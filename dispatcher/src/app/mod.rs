pub mod pool;
pub mod strategy;
