pub mod charts;
pub mod core;

// Re-export key items for easy importing in this crate
pub use crate::core::types;

// Re-export key items for easy importing in other crates
pub use crate::core::controller::ReactiveController;
pub use crate::core::engine::aggregate;
pub use crate::core::engine::filter;
pub use crate::core::engine::traits::ChartCallback;
pub use crate::core::layout::DashboardLayout;
pub use crate::core::loader;
pub use crate::core::main_shared::run_main;
pub use crate::core::registry::CallbackRegistry;
pub use crate::core::server::{AppState, build_router};
