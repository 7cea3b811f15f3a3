// Pattern 1: Adapter - Making an Incompatible Interface Usable
// Demonstrates wrapping an existing service behind the interface clients expect.

// ============================================================================
// Example: Target Capability and Incompatible Service
// ============================================================================

/// The interface client code works with.
trait Target {
    fn request(&self) -> String;
}

/// Has useful behavior, but its interface does not match what clients call.
struct Adaptee;

impl Adaptee {
    fn specific_request(&self) -> String {
        "Specific request.".to_string()
    }
}

/// Owns an adaptee and translates `Target` calls into its native method.
struct Adapter {
    adaptee: Adaptee,
}

impl Adapter {
    fn new(adaptee: Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Target for Adapter {
    fn request(&self) -> String {
        format!("This is '{}'", self.adaptee.specific_request())
    }
}

// Client code stays unaware of the concrete adapter behind the capability.
fn client_code(target: &dyn Target) {
    println!("{}", target.request());
}

fn adapter_example() {
    let adaptee = Adaptee;
    let target = Adapter::new(adaptee);

    println!("Adaptee interface is incompatible with the client.");
    println!("But with adapter client can call it's method.");
    client_code(&target);
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 1: Adapter");
    println!("==================\n");

    println!("=== Adapter over an Incompatible Service ===");
    adapter_example();
}
