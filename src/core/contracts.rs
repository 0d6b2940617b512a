use std::any::type_name;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

pub type HandlerError = Box<dyn Error + Send + Sync>;

/// A consumer of notification payloads.
///
/// Implemented for every `Fn(&str) -> Result<(), HandlerError>` closure, so
/// fallible closures can be subscribed directly through [`Handler::new`].
pub trait INotificationHandler: Send + Sync + 'static {
    fn handle(&self, payload: &str) -> Result<(), HandlerError>;

    fn name(&self) -> &'static str {
        type_name::<Self>()
    }
}

impl<F> INotificationHandler for F
where
    F: Fn(&str) -> Result<(), HandlerError> + Send + Sync + 'static,
{
    fn handle(&self, payload: &str) -> Result<(), HandlerError> {
        self(payload)
    }
}

struct InfallibleFn<F>(F);

impl<F> INotificationHandler for InfallibleFn<F>
where
    F: Fn(&str) + Send + Sync + 'static,
{
    fn handle(&self, payload: &str) -> Result<(), HandlerError> {
        (self.0)(payload);
        Ok(())
    }

    fn name(&self) -> &'static str {
        type_name::<F>()
    }
}

/// Shared, identity-comparable handle to a handler.
///
/// Equality is pointer identity: clones of one `Handler` are equal, and two
/// handlers built from clones of the same `Arc<T>` are equal too.
#[derive(Clone)]
pub struct Handler(Arc<dyn INotificationHandler>);

impl Handler {
    pub fn new(handler: impl INotificationHandler) -> Self {
        Self(Arc::new(handler))
    }

    pub fn from_fn(func: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self(Arc::new(InfallibleFn(func)))
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    pub(crate) fn call(&self, payload: &str) -> Result<(), HandlerError> {
        self.0.handle(payload)
    }
}

impl<T: INotificationHandler> From<Arc<T>> for Handler {
    fn from(handler: Arc<T>) -> Self {
        Self(handler)
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Handler {}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler").field(&self.name()).finish()
    }
}
