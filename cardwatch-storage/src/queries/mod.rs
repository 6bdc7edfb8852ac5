//! Query modules, one per table plus maintenance.

pub mod alert_ops;
pub mod checkpoint_ops;
pub mod maintenance;
pub mod state_ops;
