pub mod api;
pub mod form;
pub mod navigation;
pub mod reveal;

pub use api::{ClientError, ContactApi, ContactClient, DEFAULT_API_URL};
pub use form::{ContactForm, Field, FormError, FormStatus};
pub use navigation::{NavigationState, Section};
pub use reveal::RevealState;
