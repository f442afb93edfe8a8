// Core modules
pub mod identity;
pub mod module;
pub mod preference;

// Re-export commonly used types
pub use identity::{Identity, IdentityClaims};
pub use module::{
    AccountTier, BulkAction, BulkModuleAction, Module, ModuleCategory, ModuleFilter,
    NewModule, UpdateModule,
};
pub use preference::UserModulePreference;
