// Pattern 3: Builder - Assembling a Product Step by Step
// Demonstrates a director sequencing build steps against a swappable builder.

// ============================================================================
// Example: Product and Builder Capability
// ============================================================================

/// The assembled object: an ordered list of part labels.
#[derive(Debug, Default)]
struct Product {
    parts: Vec<String>,
}

impl Product {
    fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    /// Renders `"Product parts: A, B\n"`. Total for an empty product too.
    fn list_parts(&self) -> String {
        format!("Product parts: {}\n", self.parts.join(", "))
    }
}

/// The construction steps. Different builders may assemble entirely
/// unrelated products behind the same steps.
trait Builder {
    fn build_part_a(&mut self);
    fn build_part_b(&mut self);
    fn build_part_c(&mut self);
}

/// All build steps work against the same product instance until it is
/// handed out.
#[derive(Default)]
struct ConcreteBuilder {
    product: Product,
}

impl ConcreteBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Hands the finished product over and starts a fresh empty one in the
    /// same step, so nothing from this build leaks into the next cycle.
    fn get_product(&mut self) -> Product {
        std::mem::take(&mut self.product)
    }
}

impl Builder for ConcreteBuilder {
    fn build_part_a(&mut self) {
        self.product.add("PartA1");
    }

    fn build_part_b(&mut self) {
        self.product.add("PartB1");
    }

    fn build_part_c(&mut self) {
        self.product.add("PartC1");
    }
}

// ============================================================================
// Example: Director Sequencing the Steps
// ============================================================================

/// Knows the recipes, not the builder. Any `Builder` implementation can be
/// handed in per call.
struct Director;

impl Director {
    fn build_minimal_viable_product(&self, builder: &mut dyn Builder) {
        builder.build_part_a();
    }

    fn build_full_featured_product(&self, builder: &mut dyn Builder) {
        builder.build_part_a();
        builder.build_part_b();
        builder.build_part_c();
    }
}

fn builder_example() {
    let director = Director;
    let mut builder = ConcreteBuilder::new();

    println!("Standard basic product:");
    director.build_minimal_viable_product(&mut builder);
    println!("{}", builder.get_product().list_parts());

    println!("Standard full featured product:");
    director.build_full_featured_product(&mut builder);
    println!("{}", builder.get_product().list_parts());

    // The pattern works without a director as well.
    println!("Custom product:");
    builder.build_part_a();
    builder.build_part_c();
    print!("{}", builder.get_product().list_parts());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_product_parts() {
        let mut builder = ConcreteBuilder::new();
        builder.build_part_a();
        builder.build_part_c();
        assert_eq!(
            builder.get_product().list_parts(),
            "Product parts: PartA1, PartC1\n"
        );
    }

    #[test]
    fn test_get_product_resets_builder() {
        let mut builder = ConcreteBuilder::new();
        builder.build_part_a();
        builder.build_part_b();
        let _first = builder.get_product();

        builder.build_part_c();
        assert_eq!(
            builder.get_product().list_parts(),
            "Product parts: PartC1\n"
        );
    }

    #[test]
    fn test_empty_product_renders_safely() {
        let mut builder = ConcreteBuilder::new();
        assert_eq!(builder.get_product().list_parts(), "Product parts: \n");
    }

    #[test]
    fn test_director_minimal_recipe() {
        let director = Director;
        let mut builder = ConcreteBuilder::new();
        director.build_minimal_viable_product(&mut builder);
        assert_eq!(builder.get_product().list_parts(), "Product parts: PartA1\n");
    }

    #[test]
    fn test_director_full_recipe_orders_parts() {
        let director = Director;
        let mut builder = ConcreteBuilder::new();
        director.build_full_featured_product(&mut builder);
        assert_eq!(
            builder.get_product().list_parts(),
            "Product parts: PartA1, PartB1, PartC1\n"
        );
    }
}

fn main() {
    println!("Pattern 3: Builder");
    println!("==================\n");

    println!("=== Director-driven and Custom Builds ===");
    builder_example();
}
