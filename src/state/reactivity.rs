// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Box<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: RefCell<Vec<Callback>>,
}

impl<T> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Leer el valor sin clonarlo
    pub fn with<R, F>(&self, reader: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        reader(&self.value.borrow())
    }

    /// Actualizar valor usando closure y notificar.
    /// El borrow mutable se libera antes de notificar, así los subscribers pueden leer.
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    /// Notificar a todos los subscribers
    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}
