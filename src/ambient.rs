//! Global ambient render state (background and fog) and its scope guard.

use std::cell::RefCell;
use std::rc::Rc;

use crate::graph::Fog;
use crate::math::Color;

/// Background color and fog that apply to everything on the stage
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AmbientState {
    pub background: Option<Color>,
    pub fog: Option<Fog>,
}

impl AmbientState {
    pub fn new(background: Option<Color>, fog: Option<Fog>) -> Self {
        Self { background, fog }
    }
}

/// Ambient layers: the host's base state plus one entry per live scope.
#[derive(Debug, Default)]
struct Layers {
    base: AmbientState,
    scopes: Vec<(u64, AmbientState)>,
    next_id: u64,
}

impl Layers {
    /// The most recently acquired live scope wins; with none, the base shows.
    fn visible(&self) -> AmbientState {
        self.scopes.last().map_or(self.base, |&(_, state)| state)
    }
}

/// Host render state shared by whatever scene is mounted.
///
/// Cloning a `Stage` yields another handle to the same ambient slot. Scopes
/// may be released in any order: releasing one only removes its own layer.
#[derive(Debug, Clone, Default)]
pub struct Stage {
    layers: Rc<RefCell<Layers>>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial(state: AmbientState) -> Self {
        Self {
            layers: Rc::new(RefCell::new(Layers {
                base: state,
                ..Layers::default()
            })),
        }
    }

    /// Current ambient state.
    pub fn ambient(&self) -> AmbientState {
        self.layers.borrow().visible()
    }

    /// Number of scopes still holding a layer on this stage.
    pub fn active_scopes(&self) -> usize {
        self.layers.borrow().scopes.len()
    }

    /// Installs `state` until the returned scope is dropped.
    pub fn scope(&self, state: AmbientState) -> AmbientScope {
        let mut layers = self.layers.borrow_mut();
        let previous = layers.visible();
        let id = layers.next_id;
        layers.next_id += 1;
        layers.scopes.push((id, state));
        log::debug!("ambient scope {} acquired: {:?} (was {:?})", id, state, previous);
        AmbientScope {
            layers: Rc::clone(&self.layers),
            id,
            previous,
        }
    }

    /// Runs `f` with `state` installed, restoring the previous state afterwards.
    pub fn with_ambient<R>(&self, state: AmbientState, f: impl FnOnce(&Stage) -> R) -> R {
        let _scope = self.scope(state);
        f(self)
    }
}

/// Removes its ambient layer from the stage when dropped
#[must_use = "ambient state is restored as soon as the scope is dropped"]
#[derive(Debug)]
pub struct AmbientScope {
    layers: Rc<RefCell<Layers>>,
    id: u64,
    previous: AmbientState,
}

impl AmbientScope {
    /// State that was showing when this scope was acquired.
    pub fn previous(&self) -> AmbientState {
        self.previous
    }
}

impl Drop for AmbientScope {
    fn drop(&mut self) {
        let mut layers = self.layers.borrow_mut();
        if let Some(index) = layers.scopes.iter().rposition(|&(id, _)| id == self.id) {
            layers.scopes.remove(index);
        }
        log::debug!("ambient scope {} released, showing {:?}", self.id, layers.visible());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn night() -> AmbientState {
        AmbientState::new(Some(Color::hex(0x05070f)), Some(Fog::exp(0x05070f, 0.04)))
    }

    #[test]
    fn scope_installs_and_restores() {
        let stage = Stage::new();
        {
            let _scope = stage.scope(night());
            assert_eq!(stage.ambient(), night());
        }
        assert_eq!(stage.ambient(), AmbientState::default());
    }

    #[test]
    fn with_ambient_returns_closure_value() {
        let stage = Stage::new();
        let seen = stage.with_ambient(night(), |s| s.ambient().background);
        assert_eq!(seen, night().background);
        assert_eq!(stage.ambient().background, None);
    }

    #[test]
    fn restore_survives_panic() {
        let stage = Stage::with_initial(AmbientState::new(Some(Color::WHITE), None));
        let inner = stage.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _scope = inner.scope(night());
            panic!("scene blew up");
        }));
        assert!(result.is_err());
        assert_eq!(stage.ambient().background, Some(Color::WHITE));
    }

    #[test]
    fn releasing_an_older_scope_keeps_the_newer_one_visible() {
        let stage = Stage::new();
        let first = stage.scope(night());
        let second = stage.scope(AmbientState::new(Some(Color::WHITE), None));

        drop(first);
        assert_eq!(stage.ambient().background, Some(Color::WHITE));
        assert_eq!(stage.active_scopes(), 1);
        drop(second);
        assert_eq!(stage.ambient(), AmbientState::default());
        assert_eq!(stage.active_scopes(), 0);
    }
}
