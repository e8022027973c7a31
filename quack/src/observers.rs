use std::cell::RefCell;

use common::subject_observer::Observer;
use log::info;

use crate::{Kind, QuackEvent, QuackSource};

/// Reports every quack it hears.
#[derive(Debug, Default, Clone, Copy)]
pub struct Quackologist;

impl Observer<dyn QuackSource, QuackEvent> for Quackologist {
    fn update(&self, source: &dyn QuackSource, event: QuackEvent) {
        match event {
            QuackEvent::Quacked => {
                info!("Quackologist: {} ({}) just quacked.", source.name(), source.kind())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuackRecord {
    pub name: String,
    pub kind: Kind,
    pub event: QuackEvent,
}

/// Keeps every notification it receives, in reception order.
#[derive(Debug, Default)]
pub struct QuackRecorder {
    records: RefCell<Vec<QuackRecord>>,
}

impl QuackRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<QuackRecord> {
        self.records.borrow().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .map(|record| record.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl Observer<dyn QuackSource, QuackEvent> for QuackRecorder {
    fn update(&self, source: &dyn QuackSource, event: QuackEvent) {
        self.records.borrow_mut().push(QuackRecord {
            name: source.name().to_string(),
            kind: source.kind(),
            event,
        });
    }
}
