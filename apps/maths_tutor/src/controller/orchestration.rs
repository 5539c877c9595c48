//! Routing of menu/page actions onto the navigation queue.

use std::collections::VecDeque;

use crossbeam_channel::{Sender, TrySendError};
use tutor_core::NavCommand;

use crate::controller::events::Notice;

pub const NAVIGATION_NOTICE_TITLE: &str = "Navigation Error";

pub fn dispatch_nav_command(
    nav_tx: &Sender<NavCommand>,
    cmd: NavCommand,
    notices: &mut VecDeque<Notice>,
) {
    let cmd_name = cmd.name();
    match nav_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued navigation command"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "navigation queue is full");
            notices.push_back(queue_notice("Too many actions at once; please try again."));
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "navigation queue disconnected");
            notices.push_back(queue_notice(
                "Navigation stopped responding; please restart Maths Tutor.",
            ));
        }
    }
}

fn queue_notice(message: &str) -> Notice {
    Notice::error(NAVIGATION_NOTICE_TITLE, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crossbeam_channel::bounded;
    use shared::domain::Section;

    use crate::controller::events::NoticeSeverity;

    #[test]
    fn queues_command_in_order() {
        let (tx, rx) = bounded(4);
        let mut notices = VecDeque::new();
        dispatch_nav_command(&tx, NavCommand::Enter(Section::Story), &mut notices);
        dispatch_nav_command(&tx, NavCommand::Upload, &mut notices);

        assert!(notices.is_empty());
        assert_eq!(rx.try_recv().expect("first"), NavCommand::Enter(Section::Story));
        assert_eq!(rx.try_recv().expect("second"), NavCommand::Upload);
    }

    #[test]
    fn full_queue_becomes_a_notice() {
        let (tx, _rx) = bounded(1);
        let mut notices = VecDeque::new();
        dispatch_nav_command(&tx, NavCommand::Upload, &mut notices);
        dispatch_nav_command(&tx, NavCommand::Upload, &mut notices);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, NAVIGATION_NOTICE_TITLE);
        assert_eq!(notices[0].severity, NoticeSeverity::Error);
    }

    #[test]
    fn disconnected_queue_becomes_a_notice() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut notices = VecDeque::new();
        dispatch_nav_command(&tx, NavCommand::ReturnToMenu, &mut notices);
        assert!(notices[0].message.contains("restart"));
        assert_eq!(notices[0].title, NAVIGATION_NOTICE_TITLE);
    }
}
