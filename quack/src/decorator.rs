use common::subject_observer::Subject;
use log::debug;

use crate::{Kind, QuackEvent, QuackObserver, QuackResult, QuackSource, QuackTally, Quackable};

/// Counts every quack of the wrapped source in a shared [`QuackTally`].
///
/// Identity and observer handling are delegated untouched; only `quack`
/// is intercepted.
pub struct QuackCounter {
    duck: Box<dyn Quackable>,
    tally: QuackTally,
}

impl QuackCounter {
    pub fn new(duck: Box<dyn Quackable>, tally: QuackTally) -> Self {
        QuackCounter { duck, tally }
    }

    pub fn tally(&self) -> &QuackTally {
        &self.tally
    }
}

impl QuackSource for QuackCounter {
    fn name(&self) -> &str {
        self.duck.name()
    }

    fn kind(&self) -> Kind {
        self.duck.kind()
    }
}

impl Subject<dyn QuackSource, QuackEvent> for QuackCounter {
    fn register_observer(&mut self, observer: QuackObserver) {
        self.duck.register_observer(observer);
    }

    fn unregister_observer(&mut self, observer: &QuackObserver) {
        self.duck.unregister_observer(observer);
    }

    fn notify_observers(&self, event: QuackEvent) {
        self.duck.notify_observers(event);
    }
}

impl Quackable for QuackCounter {
    fn quack(&self) -> QuackResult {
        let total = self.tally.increment();
        debug!("Counted quack #{} from {}", total, self.duck.name());
        self.duck.quack()
    }
}
