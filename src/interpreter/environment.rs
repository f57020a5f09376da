use std::collections::HashMap;

use num_bigint::BigInt;

/// The variables of a session.
///
/// Names are case-sensitive and made of ASCII letters; callers are expected to
/// validate them before calling [`Environment::assign`]. Entries are inserted
/// or overwritten, never removed.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    variables: HashMap<String, BigInt>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous value.
    ///
    /// # Example
    /// ```
    /// use bigcalc::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.assign("x", 1.into());
    /// env.assign("x", 2.into());
    /// assert_eq!(env.lookup("x"), Some(&2.into()));
    /// assert_eq!(env.lookup("X"), None);
    /// ```
    pub fn assign(&mut self, name: &str, value: BigInt) {
        self.variables.insert(name.to_string(), value);
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&BigInt> {
        self.variables.get(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
