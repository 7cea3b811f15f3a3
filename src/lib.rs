// Conceptual Design Pattern Catalog
// Nine self-contained, runnable console demonstrations of classic patterns.

pub mod catalog {
    //! # Design Patterns: Conceptual Examples
    //!
    //! Each pattern is one independent binary: a handful of traits and
    //! structs wired together, exercised by a short `main` that narrates to
    //! the console, with the pattern's contracts pinned by unit tests in
    //! the same file.
    //!
    //! ## Creational
    //! - Builder (`p3_builder`) - director-sequenced assembly with a
    //!   resetting builder
    //! - Factory Method (`p6_factory_method`) - shared creator logic over a
    //!   variant-specific factory step
    //! - Singleton (`p9_singleton`) - one lazily-created instance behind a
    //!   `OnceLock` accessor
    //!
    //! ## Structural
    //! - Adapter (`p1_adapter`) - signature translation around an
    //!   incompatible service
    //! - Bridge (`p2_bridge`) - abstraction variants over swappable
    //!   implementations
    //! - Decorator (`p5_decorator`) - stackable wrappers at unbounded
    //!   nesting depth
    //!
    //! ## Behavioral
    //! - Command (`p4_command`) - invoker with optional start/finish
    //!   command slots
    //! - Memento (`p7_memento`) - opaque snapshots with stack-discipline
    //!   undo and retry on rejected snapshots
    //! - Observer (`p8_observer`) - registration-order broadcast with
    //!   duplicates allowed
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin p1_adapter
    //! cargo run --bin p7_memento
    //! ```
}
