//! Built-in checks, in report order.

pub mod api_style;
pub mod build_tool;
pub mod lifecycle_cleanup;
pub mod reactivity;
pub mod ssr;
pub mod state_management;
pub mod v_for_keys;
pub mod vue_version;

pub use api_style::ApiStyleCheck;
pub use build_tool::BuildToolCheck;
pub use lifecycle_cleanup::LifecycleCleanupCheck;
pub use reactivity::ReactivityCheck;
pub use ssr::SsrCheck;
pub use state_management::StateManagementCheck;
pub use v_for_keys::VForKeysCheck;
pub use vue_version::VueVersionCheck;
