//! Registration wizard state machine.
//!
//! Defines a pure state transition function for the multi-tab registration
//! flow. Side effects (the actual submission) are emitted as actions and
//! executed by the application layer.
//!
//! 注册向导的纯状态机：不包含副作用。

use serde::{Deserialize, Serialize};

use crate::registration::draft::RegistrationDraft;
use crate::registration::role::Role;
use crate::registration::stage::Stage;
use crate::registration::validate::{validate_draft, validate_stage, FieldError};

/// Wizard navigation state.
///
/// The draft itself lives in the controller; the machine only tracks where
/// the user is and which inline errors the active attempt produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    /// Ordered tab sequence for the currently selected role.
    pub sequence: Vec<Stage>,
    /// The active tab.
    pub current: Stage,
    /// Inline errors from the last rejected transition.
    pub stage_errors: Vec<FieldError>,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            sequence: Stage::sequence_for(None),
            current: Stage::Personal,
            stage_errors: Vec::new(),
        }
    }

    fn position(&self) -> usize {
        self.sequence
            .iter()
            .position(|s| *s == self.current)
            .unwrap_or(0)
    }

    /// True when the active tab is the last one (submit becomes available).
    pub fn on_final_stage(&self) -> bool {
        self.current == Stage::Documents
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events that drive the wizard.
///
/// 驱动向导流程的事件。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WizardEvent {
    /// A role was chosen on the personal tab.
    RoleSelected { role: Role },
    /// Advance to the next tab.
    Next,
    /// Go back one tab.
    Previous,
    /// Submit the completed form (documents tab only).
    Submit,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardAction {
    /// Run the submission pipeline against the current draft.
    SubmitRegistration,
}

/// Pure wizard state machine.
pub struct WizardStateMachine;

impl WizardStateMachine {
    /// Compute the next state and any actions for an event.
    ///
    /// The draft is read-only context: validation needs it, the machine
    /// never mutates it.
    pub fn transition(
        state: WizardState,
        event: WizardEvent,
        draft: &RegistrationDraft,
    ) -> (WizardState, Vec<WizardAction>) {
        match event {
            WizardEvent::RoleSelected { role } => {
                let sequence = Stage::sequence_for(Some(role));
                let current = state.current.clamp_into(&sequence);
                (
                    WizardState {
                        sequence,
                        current,
                        stage_errors: Vec::new(),
                    },
                    Vec::new(),
                )
            }
            WizardEvent::Next => {
                if state.on_final_stage() {
                    return (state, Vec::new());
                }
                match validate_stage(draft, state.current) {
                    Ok(()) => {
                        let next = state.sequence[state.position() + 1];
                        (
                            WizardState {
                                current: next,
                                stage_errors: Vec::new(),
                                ..state
                            },
                            Vec::new(),
                        )
                    }
                    Err(errors) => (
                        WizardState {
                            stage_errors: errors,
                            ..state
                        },
                        Vec::new(),
                    ),
                }
            }
            WizardEvent::Previous => {
                let position = state.position();
                if position == 0 {
                    return (state, Vec::new());
                }
                let previous = state.sequence[position - 1];
                (
                    WizardState {
                        current: previous,
                        stage_errors: Vec::new(),
                        ..state
                    },
                    Vec::new(),
                )
            }
            WizardEvent::Submit => {
                if !state.on_final_stage() {
                    return (state, Vec::new());
                }
                match validate_draft(draft) {
                    Ok(()) => (
                        WizardState {
                            stage_errors: Vec::new(),
                            ..state
                        },
                        vec![WizardAction::SubmitRegistration],
                    ),
                    Err(errors) => {
                        // Jump to the tab owning the first failed field so
                        // the inline error is actually visible.
                        let current = errors[0].field.stage().clamp_into(&state.sequence);
                        (
                            WizardState {
                                current,
                                stage_errors: errors,
                                ..state
                            },
                            Vec::new(),
                        )
                    }
                }
            }
        }
    }
}
