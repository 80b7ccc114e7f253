use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// Application-wide record of which single-instance effects are running.
/// Provided once at the root through Yew context; a component that mounts
/// twice (or two components wanting the same effect) get one winner.
#[derive(Clone, Default)]
pub struct EffectRegistry {
    running: Rc<RefCell<HashSet<&'static str>>>,
}

impl PartialEq for EffectRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.running, &other.running)
    }
}

impl fmt::Debug for EffectRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.running.borrow().iter()).finish()
    }
}

impl EffectRegistry {
    /// Claims `name`, or `None` when another holder already runs it.
    pub fn claim(&self, name: &'static str) -> Option<EffectClaim> {
        if !self.running.borrow_mut().insert(name) {
            log::debug!("effect `{}` already running, skipping", name);
            return None;
        }
        Some(EffectClaim {
            registry: self.clone(),
            name,
        })
    }

    #[cfg(test)]
    pub fn is_running(&self, name: &str) -> bool {
        self.running.borrow().contains(name)
    }
}

/// Releases its effect slot on drop.
#[derive(Debug)]
pub struct EffectClaim {
    registry: EffectRegistry,
    name: &'static str,
}

impl EffectClaim {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for EffectClaim {
    fn drop(&mut self) {
        self.registry.running.borrow_mut().remove(self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_is_refused_until_release() {
        let registry = EffectRegistry::default();
        let first = registry.claim("glitch-lines").unwrap();
        assert!(registry.claim("glitch-lines").is_none());
        assert!(registry.claim("pixel-glitch").is_some());

        drop(first);
        assert!(!registry.is_running("glitch-lines"));
        assert!(registry.claim("glitch-lines").is_some());
    }

    #[test]
    fn clones_share_state() {
        let registry = EffectRegistry::default();
        let clone = registry.clone();
        let _claim = clone.claim("glitch-lines").unwrap();
        assert!(registry.is_running("glitch-lines"));
        assert_eq!(registry, clone);
        assert_ne!(registry, EffectRegistry::default());
    }
}
