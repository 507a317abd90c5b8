pub mod feedback;
pub mod order;
pub mod result;

pub use feedback::FeedbackMessage;
pub use order::{Order, Reduction};
pub use result::{InvalidOrder, OrderTotal, PricingResult};
