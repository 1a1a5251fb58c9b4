//! Editor session state and interaction handling

pub mod event;
pub mod store;
pub mod session;
pub mod controller;

pub use event::{InputEvent, Key};
pub use store::{MemoryTokenStore, TokenStore};
pub use session::EditorSession;
pub use controller::InteractionController;
