//! Navigation seam for screen transitions.
//!
//! # Responsibility
//! - Define the contract the list screen uses to launch other screens and
//!   end itself.
//!
//! # Invariants
//! - One add-tap produces exactly one `launch_screen` followed by exactly
//!   one `end_current_screen`, regardless of fetch state.

/// Screens the list screen can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTarget {
    /// Entry-creation screen for a new cat record.
    AddCat,
}

/// Platform navigation contract.
///
/// Frontends implement this over whatever transition machinery they have;
/// tests implement it with recording doubles.
pub trait Navigator {
    /// Starts the target screen.
    fn launch_screen(&mut self, target: ScreenTarget);

    /// Ends the current screen so it is not kept on the activation stack.
    fn end_current_screen(&mut self);
}
