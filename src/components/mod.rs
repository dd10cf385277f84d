pub mod chrome;
pub mod platforms;
pub mod preview_frame;
