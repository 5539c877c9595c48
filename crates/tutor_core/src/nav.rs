//! Navigation commands queued from menu buttons and pages to the window.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use shared::domain::Section;

pub const NAV_QUEUE_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Enter(Section),
    ReturnToMenu,
    Upload,
}

impl NavCommand {
    pub fn name(&self) -> &'static str {
        match self {
            NavCommand::Enter(_) => "enter_section",
            NavCommand::ReturnToMenu => "return_to_menu",
            NavCommand::Upload => "upload",
        }
    }
}

pub fn nav_channel() -> (Sender<NavCommand>, Receiver<NavCommand>) {
    bounded(NAV_QUEUE_CAPACITY)
}

/// A menu button and the command it is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuBinding {
    pub label: &'static str,
    pub command: NavCommand,
}

/// Menu buttons in grid order: the six sections, then Upload.
pub const MENU_BINDINGS: [MenuBinding; 7] = [
    MenuBinding {
        label: "Story",
        command: NavCommand::Enter(Section::Story),
    },
    MenuBinding {
        label: "Time",
        command: NavCommand::Enter(Section::Time),
    },
    MenuBinding {
        label: "Currency",
        command: NavCommand::Enter(Section::Currency),
    },
    MenuBinding {
        label: "Distance",
        command: NavCommand::Enter(Section::Distance),
    },
    MenuBinding {
        label: "Bellring",
        command: NavCommand::Enter(Section::Bellring),
    },
    MenuBinding {
        label: "Operations",
        command: NavCommand::Enter(Section::Operations),
    },
    MenuBinding {
        label: "Upload",
        command: NavCommand::Upload,
    },
];

/// Handed to every page so it can ask for the menu without touching the controller.
#[derive(Debug, Clone)]
pub struct BackHandle {
    tx: Sender<NavCommand>,
}

impl BackHandle {
    pub fn new(tx: Sender<NavCommand>) -> Self {
        Self { tx }
    }

    /// Queues a return to the menu. Returns false when the queue rejected it.
    pub fn go_back(&self) -> bool {
        match self.tx.try_send(NavCommand::ReturnToMenu) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::warn!("navigation queue is full; back request dropped");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!("navigation queue disconnected; back request dropped");
                false
            }
        }
    }
}
