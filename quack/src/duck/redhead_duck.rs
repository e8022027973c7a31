use common::subject_observer::{ObserverRegistry, Subject};
use log::info;

use crate::{Kind, QuackEvent, QuackObserver, QuackResult, QuackSource, Quackable};

const DEFAULT_CALL: &str = "Quack";

pub struct RedheadDuck {
    name: String,
    call: String,
    observable: ObserverRegistry<dyn QuackSource, QuackEvent>,
}

impl RedheadDuck {
    pub fn new(name: impl Into<String>) -> Self {
        RedheadDuck {
            name: name.into(),
            call: DEFAULT_CALL.to_string(),
            observable: ObserverRegistry::new(),
        }
    }

    pub fn with_call(mut self, call: impl Into<String>) -> Self {
        self.call = call.into();
        self
    }

    pub fn call(&self) -> &str {
        &self.call
    }
}

impl QuackSource for RedheadDuck {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> Kind {
        Kind::Redhead
    }
}

impl Subject<dyn QuackSource, QuackEvent> for RedheadDuck {
    fn register_observer(&mut self, observer: QuackObserver) {
        self.observable.register(observer);
    }

    fn unregister_observer(&mut self, observer: &QuackObserver) {
        self.observable.unregister(observer);
    }

    fn notify_observers(&self, event: QuackEvent) {
        self.observable.notify_all(self, event);
    }
}

impl Quackable for RedheadDuck {
    fn quack(&self) -> QuackResult {
        info!("{}: {}", self.name, self.call);
        self.notify_observers(QuackEvent::Quacked);
        Ok(())
    }
}
