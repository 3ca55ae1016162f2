//! Event management logic behind the team owner's dashboard: the
//! per-event action menu and the audience step of the creation wizard.

pub mod audience;
pub mod error;
pub mod menu;
pub mod wizard;

pub use audience::{AudienceSelection, AudienceStep, can_save_draft};
pub use error::WizardError;
pub use menu::{MenuAction, MenuEntry, menu_for};
pub use wizard::{EventWizard, WizardStep};
