use crate::{DuckCalls, MallardDuck, QuackCounter, QuackResult, QuackTally, Quackable, RedheadDuck};

const MALLARD_NAME: &str = "Mallard Duck";
const REDHEAD_NAME: &str = "Redhead Duck";

pub trait AbstractDuckFactory {
    fn create_mallard_duck(&self) -> Box<dyn Quackable>;

    fn create_redhead_duck(&self) -> Box<dyn Quackable>;

    /// Tally shared by every duck this factory builds.
    fn tally(&self) -> &QuackTally;
}

/// Builds ducks that are always wrapped in a [`QuackCounter`].
#[derive(Debug, Clone)]
pub struct CountingDuckFactory {
    tally: QuackTally,
    calls: DuckCalls,
}

impl Default for CountingDuckFactory {
    fn default() -> Self {
        Self::new(QuackTally::global())
    }
}

impl CountingDuckFactory {
    pub fn new(tally: QuackTally) -> Self {
        CountingDuckFactory {
            tally,
            calls: DuckCalls::default(),
        }
    }

    pub fn with_calls(tally: QuackTally, calls: DuckCalls) -> QuackResult<Self> {
        Ok(CountingDuckFactory {
            tally,
            calls: calls.validated()?,
        })
    }

    fn count(&self, duck: Box<dyn Quackable>) -> Box<dyn Quackable> {
        Box::new(QuackCounter::new(duck, self.tally.clone()))
    }
}

impl AbstractDuckFactory for CountingDuckFactory {
    fn create_mallard_duck(&self) -> Box<dyn Quackable> {
        self.count(Box::new(
            MallardDuck::new(MALLARD_NAME).with_call(&self.calls.mallard),
        ))
    }

    fn create_redhead_duck(&self) -> Box<dyn Quackable> {
        self.count(Box::new(
            RedheadDuck::new(REDHEAD_NAME).with_call(&self.calls.redhead),
        ))
    }

    fn tally(&self) -> &QuackTally {
        &self.tally
    }
}
