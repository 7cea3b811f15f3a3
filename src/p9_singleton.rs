// Pattern 9: Singleton - One Lazily-created Global Instance
// Demonstrates process-wide state behind a once-initialized accessor.

// ============================================================================
// Example: Construction Restricted to the Singleton's Own Module
// ============================================================================

mod global {
    use std::sync::OnceLock;

    /// The private field keeps literal construction out of reach of the
    /// enclosing module; `instance` is the only way to get a value.
    pub struct Singleton {
        _private: (),
    }

    impl Singleton {
        /// Lazily creates the instance on first access and returns the same
        /// `'static` reference for the rest of the process. The classic
        /// unsynchronized lazy-init variant leaves a race on first access;
        /// a `static` here must be `Sync`, so initialization goes through
        /// `OnceLock` and first access stays well-defined even under
        /// threads.
        pub fn instance() -> &'static Singleton {
            static INSTANCE: OnceLock<Singleton> = OnceLock::new();
            INSTANCE.get_or_init(|| Singleton { _private: () })
        }

        pub fn some_business_logic(&self) {
            // Any singleton ends up carrying logic that runs on the one
            // instance; nothing interesting happens here.
        }
    }
}

use global::Singleton;

fn singleton_example() {
    let s1 = Singleton::instance();
    let s2 = Singleton::instance();

    if std::ptr::eq(s1, s2) {
        println!("Singleton works, both variables contain the same instance.");
    } else {
        println!("Singleton failed, variables contain different instances.");
    }

    s1.some_business_logic();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_accesses_share_identity() {
        let first = Singleton::instance();
        let second = Singleton::instance();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_concurrent_accesses_share_identity() {
        let here = Singleton::instance() as *const Singleton as usize;

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| Singleton::instance() as *const Singleton as usize))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), here);
        }
    }
}

fn main() {
    println!("Pattern 9: Singleton");
    println!("====================\n");

    println!("=== One Instance per Process ===");
    singleton_example();
}
