use common::subject_observer::{SharedObserver, Subject};
use strum::Display;
use thiserror::Error;

mod calls;
mod counter;
mod decorator;
mod duck;
mod factory;
mod flock;
mod goose;
mod observers;
mod simulator;

pub use calls::DuckCalls;
pub use counter::{number_of_quacks, QuackTally};
pub use decorator::QuackCounter;
pub use duck::{MallardDuck, RedheadDuck};
pub use factory::{AbstractDuckFactory, CountingDuckFactory};
pub use flock::Flock;
pub use goose::{Goose, GooseAdapter, Honk};
pub use observers::{QuackRecord, QuackRecorder, Quackologist};
pub use simulator::DuckSimulator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Kind {
    Mallard,
    Redhead,
    Goose,
    Flock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuackEvent {
    Quacked,
}

#[derive(Error, Debug, PartialEq)]
pub enum QuackError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("{child} failed to quack: {source}")]
    ChildFailed {
        child: String,
        source: Box<QuackError>,
    },
    #[error("Sound could not be emitted: {0}")]
    Sound(String),
}

pub type QuackResult<T = ()> = Result<T, QuackError>;

/// Identity of a source, as seen by the observers it notifies.
pub trait QuackSource {
    fn name(&self) -> &str;

    fn kind(&self) -> Kind;
}

pub type QuackObserver = SharedObserver<dyn QuackSource, QuackEvent>;

/// Anything able to quack: ducks, adapted geese, decorators and flocks.
///
/// Notification is part of the capability so that every variant can be
/// handled uniformly through `Box<dyn Quackable>`.
pub trait Quackable: QuackSource + Subject<dyn QuackSource, QuackEvent> {
    fn quack(&self) -> QuackResult;
}
