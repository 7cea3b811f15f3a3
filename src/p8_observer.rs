// Pattern 8: Observer - Broadcasting State Changes to Subscribers
// Demonstrates a subject notifying attached observers in registration order.

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;

// ============================================================================
// Example: Subject Owning the Subscriber List
// ============================================================================

/// Subscribers receive the subject itself and read whatever state they
/// care about.
trait Observer {
    fn update(&mut self, subject: &Subject);
}

type SharedObserver = Rc<RefCell<dyn Observer>>;

struct Subject {
    state: i32,
    observers: Vec<SharedObserver>,
}

impl Subject {
    fn new() -> Self {
        Self {
            state: 0,
            observers: Vec::new(),
        }
    }

    fn state(&self) -> i32 {
        self.state
    }

    #[allow(dead_code)]
    fn set_state(&mut self, state: i32) {
        self.state = state;
    }

    /// Appends unconditionally. Attaching the same observer twice means two
    /// notifications per event; deduplication is left to callers.
    fn attach(&mut self, observer: SharedObserver) {
        println!("Subject: Attached an observer.");
        self.observers.push(observer);
    }

    /// Removes one matching occurrence, if any.
    fn detach(&mut self, observer: &SharedObserver) {
        if let Some(position) = self
            .observers
            .iter()
            .position(|attached| Rc::ptr_eq(attached, observer))
        {
            self.observers.remove(position);
            println!("Subject: Detached an observer.");
        }
    }

    fn notify(&self) {
        println!("Subject: Notifying observers...");
        for observer in &self.observers {
            observer.borrow_mut().update(self);
        }
    }

    /// The subscription machinery is a side channel of whatever the subject
    /// actually does; here the work is a random state roll.
    fn some_business_logic(&mut self) {
        println!("\nSubject: I'm doing something important.");
        self.state = rand::thread_rng().gen_range(0..10);
        println!("Subject: My state has just changed to: {}", self.state);
        self.notify();
    }
}

// ============================================================================
// Example: Observers Reacting to State Ranges
// ============================================================================

struct ConcreteObserverA;

impl ConcreteObserverA {
    fn reacts_to(state: i32) -> bool {
        state < 3
    }
}

impl Observer for ConcreteObserverA {
    fn update(&mut self, subject: &Subject) {
        if Self::reacts_to(subject.state()) {
            println!("ConcreteObserverA: Reacted to the event.");
        }
    }
}

struct ConcreteObserverB;

impl ConcreteObserverB {
    fn reacts_to(state: i32) -> bool {
        state == 0 || state >= 2
    }
}

impl Observer for ConcreteObserverB {
    fn update(&mut self, subject: &Subject) {
        if Self::reacts_to(subject.state()) {
            println!("ConcreteObserverB: Reacted to the event.");
        }
    }
}

fn observer_example() {
    let mut subject = Subject::new();

    let observer_a: SharedObserver = Rc::new(RefCell::new(ConcreteObserverA));
    subject.attach(observer_a);

    let observer_b: SharedObserver = Rc::new(RefCell::new(ConcreteObserverB));
    subject.attach(observer_b.clone());

    subject.some_business_logic();
    subject.some_business_logic();

    subject.detach(&observer_b);

    subject.some_business_logic();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every notification it receives, tagged for order checks.
    struct CountingObserver {
        tag: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Observer for CountingObserver {
        fn update(&mut self, _subject: &Subject) {
            self.log.borrow_mut().push(self.tag);
        }
    }

    fn counting(tag: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> SharedObserver {
        Rc::new(RefCell::new(CountingObserver {
            tag,
            log: log.clone(),
        }))
    }

    #[test]
    fn test_duplicate_attach_notifies_twice() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let observer = counting("x", &log);

        let mut subject = Subject::new();
        subject.attach(observer.clone());
        subject.attach(observer);
        subject.notify();

        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_detach_removes_exactly_one_occurrence() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let observer = counting("x", &log);

        let mut subject = Subject::new();
        subject.attach(observer.clone());
        subject.attach(observer.clone());
        subject.detach(&observer);
        subject.notify();

        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_notification_follows_attachment_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();
        subject.attach(counting("first", &log));
        subject.attach(counting("second", &log));

        subject.set_state(5);
        subject.notify();

        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_detach_of_unattached_observer_is_noop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let attached = counting("in", &log);
        let stranger = counting("out", &log);

        let mut subject = Subject::new();
        subject.attach(attached);
        subject.detach(&stranger);
        subject.notify();

        assert_eq!(*log.borrow(), vec!["in"]);
    }

    #[test]
    fn test_observer_a_reacts_below_three() {
        for state in 0..10 {
            assert_eq!(ConcreteObserverA::reacts_to(state), state < 3);
        }
    }

    #[test]
    fn test_observer_b_reacts_on_zero_or_two_up() {
        for state in 0..10 {
            assert_eq!(
                ConcreteObserverB::reacts_to(state),
                state == 0 || state >= 2
            );
        }
    }

    #[test]
    fn test_business_logic_rolls_state_in_range() {
        let mut subject = Subject::new();
        for _ in 0..50 {
            subject.some_business_logic();
            assert!((0..10).contains(&subject.state()));
        }
    }
}

fn main() {
    println!("Pattern 8: Observer");
    println!("===================\n");

    println!("=== Subscriptions and Random State Events ===");
    observer_example();
}
