/// Collaborator that moves the application to a route path.
pub(crate) trait Navigator {
    /// Navigate to `path`, exactly as declared by the route table.
    fn navigate(&mut self, path: &str);

    /// Location the application currently shows, if any.
    fn current_path(&self) -> Option<&str>;
}

/// In-process navigator that only tracks the current location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LocationNavigator {
    current: String,
}

impl LocationNavigator {
    pub(crate) fn new(start: impl Into<String>) -> Self {
        Self {
            current: start.into(),
        }
    }
}

impl Navigator for LocationNavigator {
    fn navigate(&mut self, path: &str) {
        log::info!("going to \"{path}\"");

        if self.current == path {
            log::debug!("location unchanged: {path}");
            return;
        }

        self.current = path.to_string();
    }

    fn current_path(&self) -> Option<&str> {
        Some(self.current.as_str())
    }
}
