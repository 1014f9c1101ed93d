mod tracking_loop;


pub use tracking_loop::{
    BALL_VIEW, BLURRED_VIEW, DILATED_VIEW, ERODED_VIEW, MASK_VIEW, RunSummary, StopReason,
    TrackingLoop,
};
