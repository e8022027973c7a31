use std::{cell::RefCell, collections::HashMap};

use common::subject_observer::Observer;
use dipstick::{Counter, Input, InputScope, Log, LogScope};
use log::trace;
use quack::{Kind, QuackEvent, QuackSource};

use crate::gateways::QUACKS;

/// Forwards quacks to a metrics scope, one counter per kind of source.
pub struct MetricsGateway {
    scope: LogScope,
    counters: RefCell<HashMap<Kind, (Counter, u64)>>,
}

impl Default for MetricsGateway {
    fn default() -> Self {
        Self::new(Log::to_log().level(log::Level::Info).metrics())
    }
}

impl MetricsGateway {
    pub fn new(scope: LogScope) -> Self {
        MetricsGateway {
            scope,
            counters: RefCell::new(HashMap::new()),
        }
    }

    /// Quacks forwarded so far for `kind`.
    pub fn quacks(&self, kind: Kind) -> u64 {
        self.counters
            .borrow()
            .get(&kind)
            .map_or(0, |(_, count)| *count)
    }
}

impl Observer<dyn QuackSource, QuackEvent> for MetricsGateway {
    fn update(&self, source: &dyn QuackSource, event: QuackEvent) {
        if event == QuackEvent::Quacked {
            let kind = source.kind();
            let mut counters = self.counters.borrow_mut();
            let (counter, count) = counters.entry(kind).or_insert_with(|| {
                let name = format!("{}.{}", QUACKS, kind.to_string().to_lowercase());
                (self.scope.counter(&name), 0)
            });

            trace!("Sending quack metric for {}", source.name());
            counter.count(1);
            *count += 1;
        }
    }
}
