pub mod evaluate;

pub use evaluate::evaluate_handler;
