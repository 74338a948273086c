pub mod launch_error;
pub mod launch_target;
pub mod launcher;
pub mod notify;
pub mod spawn;
