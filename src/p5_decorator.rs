// Pattern 5: Decorator - Stackable Behavior Wrappers
// Demonstrates layering behavior around a component at any nesting depth.

// ============================================================================
// Example: Component Capability and the Wrapping Slot
// ============================================================================

/// The behavior decorators alter.
trait Component {
    fn operation(&self) -> String;
}

struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn operation(&self) -> String {
        "ConcreteComponent".to_string()
    }
}

/// The wrapping slot every concrete decorator embeds. Delegates to the
/// wrapped component; an unwrapped slot yields the empty string rather
/// than failing.
#[derive(Default)]
struct Decorator {
    component: Option<Box<dyn Component>>,
}

impl Decorator {
    fn wrapping(component: Box<dyn Component>) -> Self {
        Self {
            component: Some(component),
        }
    }

    #[allow(dead_code)]
    fn set_component(&mut self, component: Box<dyn Component>) {
        self.component = Some(component);
    }
}

impl Component for Decorator {
    fn operation(&self) -> String {
        match &self.component {
            Some(component) => component.operation(),
            None => String::new(),
        }
    }
}

// ============================================================================
// Example: Concrete Decorators Chaining Arbitrarily Deep
// ============================================================================

struct ConcreteDecoratorA {
    inner: Decorator,
}

impl ConcreteDecoratorA {
    fn new(component: Box<dyn Component>) -> Self {
        Self {
            inner: Decorator::wrapping(component),
        }
    }
}

impl Component for ConcreteDecoratorA {
    fn operation(&self) -> String {
        format!("ConcreteDecoratorA({})", self.inner.operation())
    }
}

struct ConcreteDecoratorB {
    inner: Decorator,
}

impl ConcreteDecoratorB {
    fn new(component: Box<dyn Component>) -> Self {
        Self {
            inner: Decorator::wrapping(component),
        }
    }
}

impl Component for ConcreteDecoratorB {
    fn operation(&self) -> String {
        format!("ConcreteDecoratorB({})", self.inner.operation())
    }
}

// Client code treats plain and decorated components alike.
fn client_code(component: &dyn Component) {
    println!("RESULT: {}", component.operation());
}

fn decorator_example() {
    let simple = ConcreteComponent;
    println!("Client: I get a simple component:");
    client_code(&simple);
    println!();

    // Decorators wrap other decorators just as readily as plain components.
    let decorator1 = ConcreteDecoratorA::new(Box::new(ConcreteComponent));
    let decorator2 = ConcreteDecoratorB::new(Box::new(decorator1));
    println!("Client: Now I've got a decorated component:");
    client_code(&decorator2);
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 5: Decorator");
    println!("====================\n");

    println!("=== Simple and Decorated Components ===");
    decorator_example();
}
