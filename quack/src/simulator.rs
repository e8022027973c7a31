use common::subject_observer::Subject;
use log::info;

use crate::{
    AbstractDuckFactory, DuckCalls, Flock, Goose, GooseAdapter, QuackObserver, QuackResult,
    Quackable,
};

const DEFAULT_FLOCK_NAME: &str = "Flock of Ducks";
const GOOSE_NAME: &str = "Goose";

/// Drives one simulation: a mallard, a redhead and an adapted goose quacking
/// together.
#[derive(Debug, Clone)]
pub struct DuckSimulator {
    flock_name: String,
    goose_call: String,
}

impl Default for DuckSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_FLOCK_NAME, DuckCalls::default().goose)
    }
}

impl DuckSimulator {
    pub fn new(flock_name: impl Into<String>, goose_call: impl Into<String>) -> Self {
        DuckSimulator {
            flock_name: flock_name.into(),
            goose_call: goose_call.into(),
        }
    }

    pub fn build_flock(&self, factory: &dyn AbstractDuckFactory) -> QuackResult<Flock> {
        let goose = GooseAdapter::new(GOOSE_NAME, Goose::with_call(&self.goose_call))?;

        let mut flock = Flock::new(&self.flock_name);
        flock.add(factory.create_mallard_duck());
        flock.add(factory.create_redhead_duck());
        flock.add(Box::new(goose));
        Ok(flock)
    }

    /// Quacks the flock once and returns how many quacks the factory tally
    /// counted meanwhile.
    pub fn simulate(
        &self,
        factory: &dyn AbstractDuckFactory,
        observers: &[QuackObserver],
    ) -> QuackResult<u64> {
        let mut flock = self.build_flock(factory)?;
        for observer in observers {
            flock.register_observer(observer.clone());
        }

        info!("Duck simulation: {}", self.flock_name);
        let before = factory.tally().snapshot();
        flock.quack()?;
        let quacks = factory.tally().snapshot() - before;
        info!("The ducks quacked {} times", quacks);
        Ok(quacks)
    }
}
