// Pattern 4: Command - Requests as First-class Objects
// Demonstrates an invoker running queued commands without knowing receivers.

use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// Example: Simple and Receiver-backed Commands
// ============================================================================

/// A request packaged as an object. Side effects only.
trait Command {
    fn execute(&self);
}

/// Some commands handle trivial jobs entirely on their own.
struct SimpleCommand {
    payload: String,
}

impl SimpleCommand {
    fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Command for SimpleCommand {
    fn execute(&self) {
        println!(
            "SimpleCommand: See, I can do simple things like printing ({})",
            self.payload
        );
    }
}

/// The business logic lives here; commands only decide when to call it.
/// Completed jobs are recorded in call order.
#[derive(Default)]
struct Receiver {
    completed: RefCell<Vec<String>>,
}

impl Receiver {
    fn do_something(&self, a: &str) {
        println!("Receiver: Working on ({}.)", a);
        self.completed.borrow_mut().push(a.to_string());
    }

    fn do_something_else(&self, b: &str) {
        println!("Receiver: Also working on ({}.)", b);
        self.completed.borrow_mut().push(b.to_string());
    }

    #[allow(dead_code)]
    fn completed_jobs(&self) -> Vec<String> {
        self.completed.borrow().clone()
    }
}

/// Delegates the heavy lifting to a receiver, carrying the context the
/// receiver's methods need.
struct ComplexCommand {
    receiver: Rc<Receiver>,
    a: String,
    b: String,
}

impl ComplexCommand {
    fn new(receiver: Rc<Receiver>, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            receiver,
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Command for ComplexCommand {
    fn execute(&self) {
        println!("ComplexCommand: Complex stuff should be done by a receiver object.");
        self.receiver.do_something(&self.a);
        self.receiver.do_something_else(&self.b);
    }
}

// ============================================================================
// Example: Invoker with Optional Command Slots
// ============================================================================

/// Holds two optional command slots and runs them around its own work,
/// start slot first. Empty slots are skipped silently.
#[derive(Default)]
struct Invoker {
    on_start: Option<Box<dyn Command>>,
    on_finish: Option<Box<dyn Command>>,
}

impl Invoker {
    fn set_on_start(&mut self, command: Box<dyn Command>) {
        self.on_start = Some(command);
    }

    fn set_on_finish(&mut self, command: Box<dyn Command>) {
        self.on_finish = Some(command);
    }

    fn do_something_important(&self) {
        println!("Invoker: Does anybody want something done before I begin?");
        if let Some(command) = &self.on_start {
            command.execute();
        }

        println!("Invoker: ...doing something really important...");

        println!("Invoker: Does anybody want something done after I finish?");
        if let Some(command) = &self.on_finish {
            command.execute();
        }
    }
}

fn command_example() {
    let mut invoker = Invoker::default();
    invoker.set_on_start(Box::new(SimpleCommand::new("Say Hi!")));

    let receiver = Rc::new(Receiver::default());
    invoker.set_on_finish(Box::new(ComplexCommand::new(
        receiver,
        "Send email",
        "Save report",
    )));

    invoker.do_something_important();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoker_with_no_commands_completes() {
        let invoker = Invoker::default();
        invoker.do_something_important();
    }

    #[test]
    fn test_receiver_side_effects_in_slot_order() {
        let receiver = Rc::new(Receiver::default());
        let mut invoker = Invoker::default();
        invoker.set_on_start(Box::new(ComplexCommand::new(
            receiver.clone(),
            "first",
            "second",
        )));
        invoker.set_on_finish(Box::new(ComplexCommand::new(
            receiver.clone(),
            "third",
            "fourth",
        )));

        invoker.do_something_important();
        assert_eq!(
            receiver.completed_jobs(),
            vec!["first", "second", "third", "fourth"]
        );
    }

    #[test]
    fn test_single_slot_runs_alone() {
        let receiver = Rc::new(Receiver::default());
        let mut invoker = Invoker::default();
        invoker.set_on_finish(Box::new(ComplexCommand::new(receiver.clone(), "a", "b")));

        invoker.do_something_important();
        assert_eq!(receiver.completed_jobs(), vec!["a", "b"]);
    }

    #[test]
    fn test_complex_command_delegates_both_calls() {
        let receiver = Rc::new(Receiver::default());
        let command = ComplexCommand::new(receiver.clone(), "Send email", "Save report");
        command.execute();
        assert_eq!(receiver.completed_jobs(), vec!["Send email", "Save report"]);
    }
}

fn main() {
    println!("Pattern 4: Command");
    println!("==================\n");

    println!("=== Invoker Running Parameterized Commands ===");
    command_example();
}
