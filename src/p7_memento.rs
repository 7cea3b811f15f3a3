// Pattern 7: Memento - Opaque State Snapshots with Undo
// Demonstrates an originator saving snapshots a caretaker stores and replays.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Local};
use rand::Rng;
use thiserror::Error;

const STATE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const STATE_LEN: usize = 30;

// ============================================================================
// Example: Snapshot Capability with a Hidden Payload
// ============================================================================

/// Restoring fails when a snapshot was not produced by this originator's
/// own snapshot kind.
#[derive(Error, Debug)]
enum RestoreError {
    #[error("Unknown memento kind: {0}")]
    UnknownMemento(String),
}

/// Metadata the caretaker may read. The captured state stays behind the
/// concrete snapshot type and never crosses this interface.
trait Memento {
    fn name(&self) -> String;
    #[allow(dead_code)]
    fn date(&self) -> DateTime<Local>;
    fn as_any(&self) -> &dyn Any;
}

/// Immutable snapshot of the originator's state at creation time.
struct ConcreteMemento {
    state: String,
    date: DateTime<Local>,
}

impl ConcreteMemento {
    fn new(state: String) -> Self {
        Self {
            state,
            date: Local::now(),
        }
    }

    // Only the originator reads this back.
    fn state(&self) -> &str {
        &self.state
    }
}

impl Memento for ConcreteMemento {
    fn name(&self) -> String {
        let head: String = self.state.chars().take(9).collect();
        format!("{} / ({})...", self.date.format("%Y-%m-%d %H:%M:%S"), head)
    }

    fn date(&self) -> DateTime<Local> {
        self.date
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Example: Originator Saving and Restoring Its State
// ============================================================================

struct Originator {
    state: String,
}

impl Originator {
    fn new(state: impl Into<String>) -> Self {
        let state = state.into();
        println!("Originator: My initial state is: {}", state);
        Self { state }
    }

    #[allow(dead_code)]
    fn state(&self) -> &str {
        &self.state
    }

    /// Business logic scrambles the state; back it up first.
    fn do_something(&mut self) {
        println!("Originator: I'm doing something important.");
        self.state = random_state(STATE_LEN);
        println!("Originator: and my state has changed to: {}", self.state);
    }

    fn save(&self) -> Box<dyn Memento> {
        Box::new(ConcreteMemento::new(self.state.clone()))
    }

    /// Accepts only snapshots of its own kind; anything else comes back as
    /// a typed error instead of being applied.
    fn restore(&mut self, memento: &dyn Memento) -> Result<(), RestoreError> {
        let concrete = memento
            .as_any()
            .downcast_ref::<ConcreteMemento>()
            .ok_or_else(|| RestoreError::UnknownMemento(memento.name()))?;

        self.state = concrete.state().to_string();
        println!("Originator: My state has changed to: {}", self.state);
        Ok(())
    }
}

fn random_state(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| STATE_ALPHABET[rng.gen_range(0..STATE_ALPHABET.len())] as char)
        .collect()
}

// ============================================================================
// Example: Caretaker Keeping the History
// ============================================================================

/// Stores snapshots in insertion order without ever looking inside them.
struct Caretaker {
    mementos: Vec<Box<dyn Memento>>,
    originator: Rc<RefCell<Originator>>,
}

impl Caretaker {
    fn new(originator: Rc<RefCell<Originator>>) -> Self {
        Self {
            mementos: Vec::new(),
            originator,
        }
    }

    fn backup(&mut self) {
        println!("\nCaretaker: Saving Originator's state...");
        let memento = self.originator.borrow().save();
        self.mementos.push(memento);
    }

    /// Pops the latest snapshot and restores it. A snapshot the originator
    /// rejects is discarded and the next older one is tried, until one
    /// restores cleanly or the history runs out. On an empty history this
    /// is a no-op.
    fn undo(&mut self) {
        while let Some(memento) = self.mementos.pop() {
            println!("Caretaker: Restoring state to: {}", memento.name());
            match self.originator.borrow_mut().restore(memento.as_ref()) {
                Ok(()) => return,
                Err(err) => println!("Caretaker: {}", err),
            }
        }
    }

    fn show_history(&self) {
        println!("Caretaker: Here's the list of mementos:");
        for memento in &self.mementos {
            println!("{}", memento.name());
        }
    }

    #[allow(dead_code)]
    fn history_len(&self) -> usize {
        self.mementos.len()
    }
}

fn memento_example() {
    let originator = Rc::new(RefCell::new(Originator::new(
        "Super-duper-super-puper-super.",
    )));
    let mut caretaker = Caretaker::new(originator.clone());

    caretaker.backup();
    originator.borrow_mut().do_something();

    caretaker.backup();
    originator.borrow_mut().do_something();

    caretaker.backup();
    originator.borrow_mut().do_something();

    println!();
    caretaker.show_history();

    println!("\nClient: Now, let's rollback!\n");
    caretaker.undo();

    println!("\nClient: Once more!\n");
    caretaker.undo();

    println!();
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 7: Memento");
    println!("==================\n");

    println!("=== Backups, History and Rollback ===");
    memento_example();
}
