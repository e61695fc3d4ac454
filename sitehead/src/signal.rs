use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// A shared value that pushes every change to its subscribers.
///
/// The header keeps its menu state in one of these so the DOM only ever
/// reflects the value, never the other way round.
#[derive(Clone)]
pub(crate) struct Signal<T: 'static + Clone> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Subscriber<T>>>>,
}

impl<T: 'static + Clone> Signal<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn get(&self) -> T {
        self.value.borrow().clone()
    }

    pub(crate) fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    pub(crate) fn update<F: FnOnce(&T) -> T>(&self, f: F) {
        let new_value = f(&self.value.borrow());
        self.set(new_value);
    }

    pub(crate) fn subscribe<F: Fn(&T) + 'static>(&self, f: F) {
        self.subscribers.borrow_mut().push(Rc::new(f));
    }

    fn notify(&self) {
        // Subscribers may read or write the signal again
        let value = self.get();
        let subscribers = self.subscribers.borrow().clone();

        for subscriber in subscribers {
            subscriber(&value);
        }
    }
}

impl<T: 'static + Clone + fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &*self.value.borrow())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}
