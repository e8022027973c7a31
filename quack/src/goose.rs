use common::subject_observer::{ObserverRegistry, Subject};
use log::info;

use crate::{
    calls::is_audible, Kind, QuackError, QuackEvent, QuackObserver, QuackResult, QuackSource,
    Quackable,
};

const DEFAULT_CALL: &str = "Honk";

/// Native interface of a goose: it honks and knows nothing about observers.
pub trait Honk {
    /// Tells whether the honker is able to produce any sound at all.
    fn can_honk(&self) -> bool {
        true
    }

    fn honk(&self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Goose {
    call: String,
}

impl Default for Goose {
    fn default() -> Self {
        Goose {
            call: DEFAULT_CALL.to_string(),
        }
    }
}

impl Goose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_call(call: impl Into<String>) -> Self {
        Goose { call: call.into() }
    }
}

impl Honk for Goose {
    fn can_honk(&self) -> bool {
        is_audible(&self.call)
    }

    fn honk(&self) {
        info!("Goose: {}", self.call);
    }
}

/// Makes a honker usable wherever a [`Quackable`] is expected.
///
/// The adapter owns the observer registry the wrapped type lacks, and
/// notifies it once after every honk.
pub struct GooseAdapter<H: Honk = Goose> {
    name: String,
    goose: H,
    observable: ObserverRegistry<dyn QuackSource, QuackEvent>,
}

impl<H: Honk + 'static> GooseAdapter<H> {
    pub fn new(name: impl Into<String>, goose: H) -> QuackResult<Self> {
        let name = name.into();
        if !goose.can_honk() {
            return Err(QuackError::InvalidConfiguration(format!(
                "{name} wraps a goose that cannot honk"
            )));
        }
        Ok(GooseAdapter {
            name,
            goose,
            observable: ObserverRegistry::new(),
        })
    }
}

impl<H: Honk + 'static> QuackSource for GooseAdapter<H> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> Kind {
        Kind::Goose
    }
}

impl<H: Honk + 'static> Subject<dyn QuackSource, QuackEvent> for GooseAdapter<H> {
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

impl<H: Honk + 'static> Quackable for GooseAdapter<H> {
    fn quack(&self) -> QuackResult {
        self.goose.honk();
        self.notify_observers(QuackEvent::Quacked);
        Ok(())
    }
}
