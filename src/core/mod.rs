//! Core process state.

mod state;

pub use state::{
    is_cleanup_pending, is_shutdown, set_child_running, set_cleanup_pending,
    setup_shutdown_handler,
};
