use super::runtime::{self, EffectId};

/// A side effect that re-runs whenever a signal it read changes.
///
/// The closure runs once at creation to establish its dependency set.
/// Dropping the handle disposes the effect.
pub struct Effect {
    id: EffectId,
}

impl Effect {
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {
            id: runtime::allocate_effect(Box::new(f)),
        }
    }
}

impl Drop for Effect {
    fn drop(&mut self) {
        runtime::dispose_effect(self.id);
    }
}

pub fn create_effect<F>(f: F) -> Effect
where
    F: FnMut() + 'static,
{
    Effect::new(f)
}
