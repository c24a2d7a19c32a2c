pub mod form;
pub mod sequencer;
pub mod transport;
pub mod view;

pub use form::{ContactDraft, ContactForm, FormStatus};
pub use sequencer::{Cue, Sequencer, TimerSet};
pub use transport::{ContactTransport, HttpContactClient, TransportError};
pub use view::{LandingView, ViewEvent};
