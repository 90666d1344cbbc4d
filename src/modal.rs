//! Modal dialog state
//!
//! Create and update forms live in a modal. The dialog is closed, open for
//! editing, submitting a request, or showing the outcome. Acknowledging a
//! successful outcome closes the dialog; acknowledging a failure returns to
//! the form so the user can try again.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::notices::Notice;

/// Modal dialog state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    /// No dialog shown.
    #[default]
    Closed,
    /// Form shown for editing.
    Open,
    /// Request in flight.
    Submitting,
    /// Outcome shown.
    Result(Notice),
}

/// Transition requested on a [`ModalState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Show the form.
    Open,
    /// Send the form.
    Submit,
    /// Record the outcome.
    Finish,
    /// Dismiss the outcome.
    Acknowledge,
    /// Dismiss the dialog.
    Close,
}

impl Display for ModalAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Open => "open",
            Self::Submit => "submit",
            Self::Finish => "finish",
            Self::Acknowledge => "acknowledge",
            Self::Close => "close",
        })
    }
}

/// Errors raised by illegal modal transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModalError {
    /// The action is not allowed from the current state.
    #[error("cannot {action} a modal that is {state}")]
    InvalidTransition {
        /// Current state name.
        state: &'static str,
        /// Rejected action.
        action: ModalAction,
    },
}

impl ModalState {
    /// Short state name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
            Self::Submitting => "submitting",
            Self::Result(_) => "showing a result",
        }
    }

    /// Outcome being shown, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Result(notice) => Some(notice),
            Self::Closed | Self::Open | Self::Submitting => None,
        }
    }

    /// `Closed -> Open`
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::InvalidTransition`] from any other state.
    pub fn open(&mut self) -> Result<(), ModalError> {
        self.transition(ModalAction::Open, |state| match state {
            Self::Closed => Some(Self::Open),
            _ => None,
        })
    }

    /// `Open -> Submitting`
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::InvalidTransition`] from any other state.
    pub fn begin_submit(&mut self) -> Result<(), ModalError> {
        self.transition(ModalAction::Submit, |state| match state {
            Self::Open => Some(Self::Submitting),
            _ => None,
        })
    }

    /// `Submitting -> Result(notice)`
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::InvalidTransition`] from any other state.
    pub fn finish(&mut self, notice: Notice) -> Result<(), ModalError> {
        self.transition(ModalAction::Finish, |state| match state {
            Self::Submitting => Some(Self::Result(notice)),
            _ => None,
        })
    }

    /// `Result(success) -> Closed`, `Result(failure) -> Open`
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::InvalidTransition`] from any other state.
    pub fn acknowledge(&mut self) -> Result<(), ModalError> {
        self.transition(ModalAction::Acknowledge, |state| match state {
            Self::Result(notice) if notice.is_success() => Some(Self::Closed),
            Self::Result(_) => Some(Self::Open),
            _ => None,
        })
    }

    /// Any state but `Submitting` -> `Closed`
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::InvalidTransition`] while a request is in flight.
    pub fn close(&mut self) -> Result<(), ModalError> {
        self.transition(ModalAction::Close, |state| match state {
            Self::Submitting => None,
            _ => Some(Self::Closed),
        })
    }

    fn transition(
        &mut self,
        action: ModalAction,
        next: impl FnOnce(&Self) -> Option<Self>,
    ) -> Result<(), ModalError> {
        let next = next(self).ok_or(ModalError::InvalidTransition {
            state: self.name(),
            action,
        })?;

        *self = next;

        Ok(())
    }
}
