use super::*;

use std::{cell::RefCell, rc::Rc};

type Log = Rc<RefCell<Vec<String>>>;

struct TaggedView {
    tag: &'static str,
    log: Log,
}

impl TaggedView {
    fn new(tag: &'static str, log: &Log) -> Self {
        log.borrow_mut().push(format!("create:{tag}"));
        Self {
            tag,
            log: Rc::clone(log),
        }
    }
}

impl Releasable for TaggedView {
    fn release(&mut self) {
        self.log.borrow_mut().push(format!("release:{}", self.tag));
    }
}

impl Drop for TaggedView {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("drop:{}", self.tag));
    }
}

#[test]
fn install_into_empty_slot_occupies_it() {
    let log = Log::default();
    let mut slot = ViewSlot::new();
    assert!(!slot.is_occupied());

    slot.install(TaggedView::new("a", &log));
    assert!(slot.is_occupied());
    assert_eq!(slot.current().map(|v| v.tag), Some("a"));
}

#[test]
fn second_install_releases_and_drops_first_before_storing() {
    let log = Log::default();
    let mut slot = ViewSlot::new();
    slot.install(TaggedView::new("a", &log));

    let b = TaggedView::new("b", &log);
    slot.install(b);

    assert_eq!(
        *log.borrow(),
        vec!["create:a", "create:b", "release:a", "drop:a"]
    );
    assert_eq!(slot.current().map(|v| v.tag), Some("b"));
}

#[test]
fn clear_is_idempotent() {
    let log = Log::default();
    let mut slot = ViewSlot::new();
    slot.install(TaggedView::new("a", &log));

    slot.clear();
    slot.clear();

    assert!(!slot.is_occupied());
    assert_eq!(*log.borrow(), vec!["create:a", "release:a", "drop:a"]);
}

#[test]
fn dropping_the_slot_releases_its_occupant() {
    let log = Log::default();
    {
        let mut slot = ViewSlot::new();
        slot.install(TaggedView::new("a", &log));
    }
    assert_eq!(*log.borrow(), vec!["create:a", "release:a", "drop:a"]);
}
