// This file is part of adaptive-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test-only element type and operations that record every call.

// Imports
use crate::ops::ElementOps;
use core::cell::{Cell, RefCell};

/// Element compared by `value`; `serial` identifies the instance.
#[derive(Debug, Clone)]
pub(crate) struct Elem {
    pub(crate) value: i32,
    pub(crate) serial: u32,
}

impl Elem {
    pub(crate) fn new(value: i32) -> Self {
        Self { value, serial: 0 }
    }
}

impl PartialEq for Elem {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// One call into [`Recorder`], tagged with the serial of the instance involved.
///
/// `Copy` carries the serial of the duplicate it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Copy(u32),
    Delete(u32),
    Print(u32),
}

/// Operations that hand out a new serial per copy and log every call in order.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    next_serial: Cell<u32>,
    fail_copy: Cell<bool>,
    events: RefCell<Vec<Event>>,
    deleted: RefCell<Vec<i32>>,
    printed: RefCell<Vec<i32>>,
}

impl Recorder {
    pub(crate) fn fail_copies(&self, fail: bool) {
        self.fail_copy.set(fail);
    }

    /// Number of successful copies so far.
    pub(crate) fn copy_count(&self) -> u32 {
        self.next_serial.get()
    }

    /// Every successful copy, delete and print, in call order.
    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub(crate) fn deleted_values(&self) -> Vec<i32> {
        self.deleted.borrow().clone()
    }

    pub(crate) fn printed_values(&self) -> Vec<i32> {
        self.printed.borrow().clone()
    }
}

impl ElementOps<Elem> for Recorder {
    fn copy(&self, element: &Elem) -> Option<Elem> {
        if self.fail_copy.get() {
            return None;
        }
        let serial = self.next_serial.get() + 1;
        self.next_serial.set(serial);
        self.events.borrow_mut().push(Event::Copy(serial));
        Some(Elem {
            value: element.value,
            serial,
        })
    }

    fn delete(&self, element: Elem) {
        self.events.borrow_mut().push(Event::Delete(element.serial));
        self.deleted.borrow_mut().push(element.value);
    }

    fn print(&self, element: &Elem) {
        self.events.borrow_mut().push(Event::Print(element.serial));
        self.printed.borrow_mut().push(element.value);
    }
}
