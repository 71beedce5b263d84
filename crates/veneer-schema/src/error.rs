use std::collections::BTreeMap;
use std::fmt;

///
/// ErrorTree
///
/// Route-keyed validation error aggregation. Routes are dotted paths into
/// the schema ("Order.items"); schema-wide errors sit at the root route.
/// Routes iterate in sorted order so validation output is deterministic.
///

#[derive(Clone, Debug, Default)]
pub struct ErrorTree {
    errors: BTreeMap<String, Vec<String>>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a schema-wide error at the root route.
    pub fn add(&mut self, message: impl Into<String>) {
        self.add_at("", message);
    }

    /// Record an error against a specific schema route.
    pub fn add_at(&mut self, route: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(route.into())
            .or_default()
            .push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of recorded messages across all routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Iterate `(route, message)` pairs in route order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .flat_map(|(route, messages)| messages.iter().map(move |m| (route.as_str(), m.as_str())))
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (route, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            if route.is_empty() {
                write!(f, "{message}")?;
            } else {
                write!(f, "{route}: {message}")?;
            }
            first = false;
        }

        Ok(())
    }
}

/// Record a formatted schema-wide error on an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)+) => {
        $errs.add(format!($($arg)+))
    };
}
