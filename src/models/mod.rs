pub mod model_input;
pub mod property;
