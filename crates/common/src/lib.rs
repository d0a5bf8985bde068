pub mod environment;
mod environment_variables;
pub mod signing;
