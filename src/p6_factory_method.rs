// Pattern 6: Factory Method - Deferring Instantiation to Variants
// Demonstrates shared creator logic parameterized by an overridable factory step.

// ============================================================================
// Example: Product Capability and Concrete Products
// ============================================================================

trait Product {
    fn operation(&self) -> String;
}

struct ConcreteProduct1;

impl Product for ConcreteProduct1 {
    fn operation(&self) -> String {
        "{Result of ConcreteProduct1}".to_string()
    }
}

struct ConcreteProduct2;

impl Product for ConcreteProduct2 {
    fn operation(&self) -> String {
        "{Result of ConcreteProduct2}".to_string()
    }
}

// ============================================================================
// Example: Creator with a Variant-specific Factory Step
// ============================================================================

/// Only the factory step varies per creator. The business logic in
/// `some_operation` is shared by every variant and never specialized.
trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;

    fn some_operation(&self) -> String {
        let product = self.factory_method();
        format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        )
    }
}

struct ConcreteCreator1;

impl Creator for ConcreteCreator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct1)
    }
}

struct ConcreteCreator2;

impl Creator for ConcreteCreator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct2)
    }
}

// Client code works with any creator through the base capability.
fn client_code(creator: &dyn Creator) {
    println!(
        "Client: I'm not aware of the creator's class, but it still works.\n{}",
        creator.some_operation()
    );
}

fn factory_method_example() {
    println!("App: Launched with the ConcreteCreator1.");
    client_code(&ConcreteCreator1);

    println!();

    println!("App: Launched with the ConcreteCreator2.");
    client_code(&ConcreteCreator2);
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 6: Factory Method");
    println!("=========================\n");

    println!("=== Creators Sharing One Business Routine ===");
    factory_method_example();
}
