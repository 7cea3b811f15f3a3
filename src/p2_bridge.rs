// Pattern 2: Bridge - Separating Control Logic from Platform Code
// Demonstrates two independent hierarchies connected through a shared handle.

use std::rc::Rc;

// ============================================================================
// Example: Implementation Capability
// ============================================================================

/// Primitive operations a platform backend provides. The abstraction side
/// builds its higher-level operation on top of these.
trait Implementation {
    fn operation_implementation(&self) -> String;
}

struct ConcreteImplementationA;

impl Implementation for ConcreteImplementationA {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationA: The result in platform A.\n".to_string()
    }
}

struct ConcreteImplementationB;

impl Implementation for ConcreteImplementationB {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationB: The result in platform B.\n".to_string()
    }
}

// ============================================================================
// Example: Abstraction Variants over Swappable Backends
// ============================================================================

/// The control side of the bridge. Variants differ in how they phrase the
/// high-level operation, never in how the backend does its work.
trait Abstraction {
    fn operation(&self) -> String;
}

struct BaseAbstraction {
    implementation: Rc<dyn Implementation>,
}

impl BaseAbstraction {
    fn new(implementation: Rc<dyn Implementation>) -> Self {
        Self { implementation }
    }
}

impl Abstraction for BaseAbstraction {
    fn operation(&self) -> String {
        format!(
            "Abstract: Base operation with:\n{}",
            self.implementation.operation_implementation()
        )
    }
}

struct ExtendedAbstraction {
    implementation: Rc<dyn Implementation>,
}

impl ExtendedAbstraction {
    fn new(implementation: Rc<dyn Implementation>) -> Self {
        Self { implementation }
    }
}

impl Abstraction for ExtendedAbstraction {
    fn operation(&self) -> String {
        format!(
            "ExtendedAbstraction: Extended operation with:\n{}",
            self.implementation.operation_implementation()
        )
    }
}

// Client code depends only on the abstraction capability, so it supports any
// combination of abstraction variant and backend.
fn client_code(abstraction: &dyn Abstraction) {
    print!("{}", abstraction.operation());
}

fn bridge_example() {
    let abstraction = BaseAbstraction::new(Rc::new(ConcreteImplementationA));
    client_code(&abstraction);

    println!();

    let extended = ExtendedAbstraction::new(Rc::new(ConcreteImplementationB));
    client_code(&extended);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_abstraction_combines_prefix_and_result() {
        let abstraction = BaseAbstraction::new(Rc::new(ConcreteImplementationA));
        let output = abstraction.operation();
        assert!(output.starts_with("Abstract: Base operation with:\n"));
        assert!(output.contains("ConcreteImplementationA: The result in platform A."));
    }

    #[test]
    fn test_swapping_backend_changes_only_suffix() {
        let over_a = BaseAbstraction::new(Rc::new(ConcreteImplementationA));
        let over_b = BaseAbstraction::new(Rc::new(ConcreteImplementationB));

        let prefix = "Abstract: Base operation with:\n";
        assert!(over_a.operation().starts_with(prefix));
        assert!(over_b.operation().starts_with(prefix));
        assert!(over_b.operation().contains("platform B"));
        assert!(!over_b.operation().contains("platform A"));
    }

    #[test]
    fn test_extended_abstraction_changes_only_prefix() {
        let implementation: Rc<dyn Implementation> = Rc::new(ConcreteImplementationA);
        let base = BaseAbstraction::new(implementation.clone());
        let extended = ExtendedAbstraction::new(implementation);

        let base_output = base.operation();
        let extended_output = extended.operation();
        assert!(extended_output.starts_with("ExtendedAbstraction: Extended operation with:\n"));
        assert_eq!(
            implementation_suffix(&base_output),
            implementation_suffix(&extended_output)
        );
    }

    fn implementation_suffix(output: &str) -> &str {
        output.split_once('\n').map(|(_, rest)| rest).unwrap_or("")
    }
}

fn main() {
    println!("Pattern 2: Bridge");
    println!("=================\n");

    println!("=== Abstractions over Swappable Implementations ===");
    bridge_example();
}
