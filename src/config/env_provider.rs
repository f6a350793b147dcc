/// Trait for providing environment variable access.
///
/// Injecting the environment source keeps settings testable without the
/// race conditions of parallel tests mutating global process state.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production provider reading the system environment.
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Test provider with fixed variables.
#[cfg(test)]
pub struct MockEnvironment {
    vars: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn empty() -> Self {
        Self {
            vars: std::collections::HashMap::new(),
        }
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
