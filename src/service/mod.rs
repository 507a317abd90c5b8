pub mod pricing;

pub use pricing::PricingEngine;
