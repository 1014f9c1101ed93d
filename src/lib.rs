pub mod ball_pipeline;
pub mod logger;
