pub mod catalog;
pub mod compose;
pub mod error;
pub mod preference;
pub mod registry;
pub mod selection;

pub use catalog::CatalogService;
pub use compose::{
    available_modules, compose, ComposedModule, MODULE_DASHBOARD, MODULE_MY_PROFILE,
};
pub use error::{DashboardError, Result};
pub use preference::{starter_modules, PreferenceService};
pub use registry::{normalize_module_id, ComponentBinding, ComponentRegistry};
pub use selection::ModuleSelection;
