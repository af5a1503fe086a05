// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! System execution framework
//!
//! Systems contain the per-tick logic that operates on the world. The
//! executor runs them in registration order, one after the other, so a
//! tick is deterministic for a given input sequence.

use crate::ecs::World;

/// Trait for systems that operate on the world
pub trait System {
    /// Execute the system on the world for a tick of `dt` seconds
    fn run(&mut self, world: &mut World, dt: f32);

    /// Get the name of this system for debugging
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Executor for running systems
pub struct SystemExecutor {
    systems: Vec<Box<dyn System>>,
}

impl SystemExecutor {
    /// Create a new system executor
    pub fn new() -> Self {
        SystemExecutor {
            systems: Vec::new(),
        }
    }

    /// Add a system to the executor
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        log::debug!("Registered system {}", system.name());
        self.systems.push(Box::new(system));
    }

    /// Run all systems in registration order
    pub fn run_sequential(&mut self, world: &mut World, dt: f32) {
        for system in &mut self.systems {
            system.run(world, dt);
        }
    }

    /// Get the number of registered systems
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Names of the registered systems, in run order
    pub fn system_names(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.name()).collect()
    }
}

impl Default for SystemExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct TestSystem {
        label: &'static str,
        log: Rc<RefCell<Vec<(&'static str, f32)>>>,
    }

    impl System for TestSystem {
        fn run(&mut self, _world: &mut World, dt: f32) {
            self.log.borrow_mut().push((self.label, dt));
        }

        fn name(&self) -> &str {
            self.label
        }
    }

    #[test]
    fn test_system_executor() {
        let mut executor = SystemExecutor::new();
        assert_eq!(executor.system_count(), 0);

        let log = Rc::new(RefCell::new(Vec::new()));
        executor.add_system(TestSystem {
            label: "first",
            log: Rc::clone(&log),
        });
        executor.add_system(TestSystem {
            label: "second",
            log: Rc::clone(&log),
        });
        assert_eq!(executor.system_count(), 2);
        assert_eq!(executor.system_names(), vec!["first", "second"]);

        let mut world = World::new();
        executor.run_sequential(&mut world, 0.5);
        assert_eq!(*log.borrow(), vec![("first", 0.5), ("second", 0.5)]);
    }
}
