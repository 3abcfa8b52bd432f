//! Name -> controller mapping.
//!
//! Controllers are created lazily from their factory on first lookup and
//! then reused for every later lookup of the same name, so state kept on a
//! controller survives between opens.

use std::collections::HashMap;
use std::sync::Arc;

use leptos::prelude::*;

use super::controller::ModalController;

type Factory = Arc<dyn Fn() -> Arc<dyn ModalController> + Send + Sync>;

#[derive(Default)]
struct RegistryState {
    factories: HashMap<String, Factory>,
    instances: HashMap<String, Arc<dyn ModalController>>,
}

#[derive(Clone, Copy)]
pub struct ControllerRegistry {
    state: StoredValue<RegistryState>,
    destroying: RwSignal<bool>,
    destroyed: RwSignal<bool>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self {
            state: StoredValue::new(RegistryState::default()),
            destroying: RwSignal::new(false),
            destroyed: RwSignal::new(false),
        }
    }

    /// Registers `factory` under `name`, replacing any previous registration
    /// and dropping an instance already created for it.
    pub fn register<F>(&self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Arc<dyn ModalController> + Send + Sync + 'static,
    {
        let name = name.into();
        self.state.update_value(|s| {
            s.instances.remove(&name);
            s.factories.insert(name, Arc::new(factory));
        });
    }

    pub fn has(&self, name: &str) -> bool {
        self.state.with_value(|s| s.factories.contains_key(name))
    }

    /// Returns the singleton controller for `name`, creating it if needed.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn ModalController>> {
        if self.is_tearing_down() {
            return None;
        }

        let (existing, factory) = self.state.with_value(|s| {
            (
                s.instances.get(name).cloned(),
                s.factories.get(name).cloned(),
            )
        });
        if existing.is_some() {
            return existing;
        }

        let controller = factory?();
        log::debug!("controller '{}' instantiated", name);
        self.state.try_update_value(|s| {
            s.instances
                .entry(name.to_string())
                .or_insert(controller)
                .clone()
        })
    }

    pub fn is_destroying(&self) -> bool {
        self.destroying.get_untracked()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.get_untracked()
    }

    pub fn is_tearing_down(&self) -> bool {
        self.is_destroying() || self.is_destroyed()
    }

    /// Marks the registry as shutting down. Lookups fail from here on.
    pub fn begin_teardown(&self) {
        self.destroying.set(true);
    }

    /// Drops every created controller and marks the registry destroyed.
    pub fn destroy(&self) {
        self.begin_teardown();
        self.state.update_value(|s| s.instances.clear());
        self.destroyed.set(true);
    }
}

impl Default for ControllerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modals::basic_modal_body::BasicModalBody;
    use crate::modals::login::Login;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_lookup_reuses_instance() {
        let registry = ControllerRegistry::new();
        let created = Arc::new(AtomicUsize::new(0));
        let counter = created.clone();
        registry.register("login", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Arc::new(Login::new()) as Arc<dyn ModalController>
        });

        let first = registry.lookup("login").unwrap();
        let second = registry.lookup("login").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(created.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_lookup_unknown_name() {
        let registry = ControllerRegistry::new();
        assert!(registry.lookup("flag-reason").is_none());
        assert!(!registry.has("flag-reason"));
    }

    #[test]
    fn test_register_replaces_instance() {
        let registry = ControllerRegistry::new();
        registry.register("login", || Arc::new(Login::new()) as Arc<dyn ModalController>);
        let before = registry.lookup("login").unwrap();

        registry.register("login", || {
            Arc::new(BasicModalBody::new()) as Arc<dyn ModalController>
        });
        let after = registry.lookup("login").unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_teardown_blocks_lookups() {
        let registry = ControllerRegistry::new();
        registry.register("login", || Arc::new(Login::new()) as Arc<dyn ModalController>);
        assert!(!registry.is_tearing_down());

        registry.begin_teardown();
        assert!(registry.is_destroying());
        assert!(!registry.is_destroyed());
        assert!(registry.lookup("login").is_none());

        registry.destroy();
        assert!(registry.is_destroyed());
        assert!(registry.is_tearing_down());
    }
}
