//! Vehicle configurator module.
//!
//! One `Configurator` serves one in-progress configuration session,
//! owned exclusively by the page that created it. All operations are
//! synchronous and run to completion on the calling thread; errors are
//! local and leave the selection valid and usable.

mod engine;
mod selection;

pub use engine::{CartSubmission, Configurator, OptionToggle};
pub use selection::{Selection, SelectionPricing};
