// Domain layer - plain data and pure derivations
pub mod demo;
pub mod insight;
pub mod kpi;
pub mod metrics;
