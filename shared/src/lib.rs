pub mod boundary;
pub mod codec;
pub mod map_type;
pub mod preference;
pub mod regions;
pub mod stats;
pub mod store;

pub use codec::{CodecError, ShareSource, SharedState};
pub use map_type::MapType;
pub use preference::PreferenceLevel;
pub use regions::{Region, Registry, registry};
pub use stats::{Milestone, PreferenceStats};
pub use store::{PreferenceStore, SetOutcome, StatePreference};
