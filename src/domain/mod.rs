pub mod envelope;
pub mod record;
pub mod state;

pub use envelope::*;
pub use record::*;
pub use state::*;
