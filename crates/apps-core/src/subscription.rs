use std::fmt;

/// Handle returned by [`Subscribers::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

/// Single-threaded listener list. Handlers run in registration order.
pub struct Subscribers<T> {
    next_id: u64,
    handlers: Vec<(SubscriptionToken, Box<dyn FnMut(&T)>)>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            handlers: Vec::new(),
        }
    }
}

impl<T> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.handlers.len())
            .finish()
    }
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&T) + 'static) -> SubscriptionToken {
        let token = SubscriptionToken(self.next_id);
        self.next_id += 1;
        self.handlers.push((token, Box::new(handler)));
        token
    }

    /// Returns false if the token was already removed.
    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(t, _)| *t != token);
        self.handlers.len() != before
    }

    pub fn emit(&mut self, value: &T) {
        for (_, handler) in &mut self.handlers {
            handler(value);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
