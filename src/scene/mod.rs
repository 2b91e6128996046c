//! Interactive scene: the two sketched curves, the generated mesh, and the
//! event plumbing that mutates them.

pub mod bus;
pub mod events;
pub mod handlers;
pub mod input;
pub mod script;
pub mod state;

pub use bus::{EventBus, SubscriptionId};
pub use events::{EventKind, SceneEvent};
pub use handlers::install_default_handlers;
pub use input::Viewport;
pub use script::{EventScript, ScriptEvent};
pub use state::{EditMode, SceneState, ViewMode};
