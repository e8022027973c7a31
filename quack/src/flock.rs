use common::subject_observer::Subject;
use log::trace;

use crate::{Kind, QuackError, QuackEvent, QuackObserver, QuackResult, QuackSource, Quackable};

/// A group of quackers that quacks as one.
///
/// Children are owned by the flock, which makes cycles impossible to build:
///
/// ```compile_fail
/// use quack::Flock;
///
/// let mut flock = Flock::new("flock");
/// flock.add(Box::new(flock));
/// ```
///
/// Observers registered on a flock are registered on every child present at
/// that time. Observers are never notified with the flock itself as source.
#[derive(Default)]
pub struct Flock {
    name: String,
    quackers: Vec<Box<dyn Quackable>>,
}

impl Flock {
    pub fn new(name: impl Into<String>) -> Self {
        Flock {
            name: name.into(),
            quackers: vec![],
        }
    }

    pub fn add(&mut self, quacker: Box<dyn Quackable>) {
        self.quackers.push(quacker);
    }

    pub fn len(&self) -> usize {
        self.quackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quackers.is_empty()
    }
}

impl QuackSource for Flock {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> Kind {
        Kind::Flock
    }
}

impl Subject<dyn QuackSource, QuackEvent> for Flock {
    fn register_observer(&mut self, observer: QuackObserver) {
        for quacker in self.quackers.iter_mut() {
            quacker.register_observer(observer.clone());
        }
    }

    fn unregister_observer(&mut self, observer: &QuackObserver) {
        for quacker in self.quackers.iter_mut() {
            quacker.unregister_observer(observer);
        }
    }

    fn notify_observers(&self, event: QuackEvent) {
        for quacker in &self.quackers {
            quacker.notify_observers(event);
        }
    }
}

impl Quackable for Flock {
    /// Quacks every child in insertion order, stopping at the first failure.
    fn quack(&self) -> QuackResult {
        trace!("{} quacks with {} member(s)", self.name, self.quackers.len());
        for quacker in &self.quackers {
            quacker.quack().map_err(|e| QuackError::ChildFailed {
                child: quacker.name().to_string(),
                source: Box::new(e),
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use common::subject_observer::{ObserverRegistry, Subject};
    use common_test::{get_seeded_rng, TreeShape};

    use crate::{
        Goose, GooseAdapter, Kind, MallardDuck, QuackCounter, QuackError, QuackEvent,
        QuackObserver, QuackRecorder, QuackResult, QuackSource, QuackTally, Quackable,
        RedheadDuck,
    };

    use super::Flock;

    struct HoarseDuck {
        observable: ObserverRegistry<dyn QuackSource, QuackEvent>,
    }

    impl QuackSource for HoarseDuck {
        fn name(&self) -> &str {
            "hoarse"
        }

        fn kind(&self) -> Kind {
            Kind::Mallard
        }
    }

    impl Subject<dyn QuackSource, QuackEvent> for HoarseDuck {
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

    impl Quackable for HoarseDuck {
        fn quack(&self) -> QuackResult {
            Err(QuackError::Sound("lost its voice".to_string()))
        }
    }

    /// Builds a flock following `shape`, naming leaves by visit order.
    fn build_flock(shape: &TreeShape, tally: &QuackTally, next_leaf: &mut usize) -> Flock {
        let mut flock = Flock::new("flock");
        if let TreeShape::Node(children) = shape {
            for child in children {
                match child {
                    TreeShape::Leaf => {
                        let duck = MallardDuck::new(format!("leaf-{}", next_leaf));
                        *next_leaf += 1;
                        flock.add(Box::new(QuackCounter::new(Box::new(duck), tally.clone())));
                    }
                    TreeShape::Node(_) => {
                        flock.add(Box::new(build_flock(child, tally, next_leaf)));
                    }
                }
            }
        }
        flock
    }

    #[test]
    fn test_flock_quack_should_visit_leaves_depth_first() {
        let mut rng = get_seeded_rng().unwrap();

        for _ in 0..16 {
            // Given
            let shape = TreeShape::random(&mut rng, 4, 4);
            let tally = QuackTally::new();
            let recorder = Rc::new(QuackRecorder::new());
            let mut leaf_count = 0;
            let mut flock = build_flock(&shape, &tally, &mut leaf_count);
            flock.register_observer(recorder.clone());

            // When
            let result = flock.quack();

            // Then
            assert_eq!(Ok(()), result);
            assert_eq!(shape.leaf_count(), leaf_count);
            assert_eq!(
                (0..leaf_count)
                    .map(|i| format!("leaf-{}", i))
                    .collect::<Vec<_>>(),
                recorder.names(),
                "Should visit every leaf once, in insertion order: {:?}",
                shape
            );
            assert_eq!(
                leaf_count as u64,
                tally.snapshot(),
                "Should count leaf quacks only"
            );
        }
    }

    #[test]
    fn test_flock_quack_should_stop_at_first_failure() {
        // Given
        let recorder = Rc::new(QuackRecorder::new());
        let mut inner = Flock::new("inner");
        inner.add(Box::new(MallardDuck::new("before")));
        inner.add(Box::new(HoarseDuck {
            observable: ObserverRegistry::new(),
        }));
        let mut flock = Flock::new("outer");
        flock.add(Box::new(inner));
        flock.add(Box::new(RedheadDuck::new("after")));
        flock.register_observer(recorder.clone());

        // When
        let result = flock.quack();

        // Then
        assert_eq!(
            Err(QuackError::ChildFailed {
                child: "inner".to_string(),
                source: Box::new(QuackError::ChildFailed {
                    child: "hoarse".to_string(),
                    source: Box::new(QuackError::Sound("lost its voice".to_string())),
                }),
            }),
            result,
            "Should report the failing path"
        );
        assert_eq!(
            vec!["before".to_string()],
            recorder.names(),
            "Should not quack remaining siblings"
        );
    }

    #[test]
    fn test_empty_flock_should_quack_silently() {
        let flock = Flock::new("empty");

        assert!(flock.is_empty());
        assert_eq!(Ok(()), flock.quack());
    }

    #[test]
    fn test_flock_observers_should_reach_current_children_only() {
        // Given
        let recorder = Rc::new(QuackRecorder::new());
        let observer: QuackObserver = recorder.clone();
        let mut flock = Flock::new("flock");
        flock.add(Box::new(MallardDuck::new("mallard")));
        flock.add(Box::new(GooseAdapter::new("goose", Goose::new()).unwrap()));
        flock.register_observer(observer.clone());
        flock.add(Box::new(RedheadDuck::new("late")));

        // When
        flock.notify_observers(QuackEvent::Quacked);

        // Then
        assert_eq!(3, flock.len());
        assert_eq!(Kind::Flock, flock.kind());
        assert_eq!(vec!["mallard", "goose"], recorder.names());

        // When
        flock.unregister_observer(&observer);
        flock.quack().unwrap();

        // Then
        assert_eq!(2, recorder.len(), "Should unregister from every child");
    }
}
