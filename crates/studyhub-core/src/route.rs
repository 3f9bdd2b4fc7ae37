use tracing::debug;

/// Pages that own a widget. Any other path activates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Route {
    Pomodoro,
    Todo,
    Quotes,
    Deadlines,
    Calendar,
    Chat,
}

impl Route {
    pub fn all() -> [Self; 6] {
        [
            Self::Pomodoro,
            Self::Todo,
            Self::Quotes,
            Self::Deadlines,
            Self::Calendar,
            Self::Chat,
        ]
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Pomodoro => "/pomodoro",
            Self::Todo => "/todo",
            Self::Quotes => "/quotes",
            Self::Deadlines => "/deadlines",
            Self::Calendar => "/calendar",
            Self::Chat => "/chat",
        }
    }

    /// Exact match against the literal paths; no prefix or trailing-slash
    /// tolerance.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::all().into_iter().find(|route| route.path() == path)
    }
}

/// Explicit route-to-initializer mapping. Callers register what each page
/// should run and pass the current path in; the table never reads it from
/// the environment.
#[derive(Debug, Clone)]
pub struct RouteTable<T> {
    entries: Vec<(Route, T)>,
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> RouteTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `init` for `route`, replacing any earlier registration.
    pub fn register(mut self, route: Route, init: T) -> Self {
        self.entries.retain(|(existing, _)| *existing != route);
        self.entries.push((route, init));
        self
    }

    pub fn get(&self, route: Route) -> Option<&T> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == route)
            .map(|(_, init)| init)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves `path` to at most one registered initializer.
    pub fn resolve(&self, path: &str) -> Option<(Route, &T)> {
        let Some(route) = Route::from_path(path) else {
            debug!(path, "no widget for path");
            return None;
        };
        let init = self.get(route)?;
        debug!(path, ?route, "resolved widget route");
        Some((route, init))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_paths_round_trip() {
        for route in Route::all() {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(Route::from_path("/"), None);
        assert_eq!(Route::from_path("/about"), None);
        assert_eq!(Route::from_path("/todo/"), None);
        assert_eq!(Route::from_path("/Todo"), None);
        assert_eq!(Route::from_path("/todos"), None);
    }

    #[test]
    fn table_dispatches_at_most_one_initializer() {
        let table = RouteTable::new()
            .register(Route::Todo, "todo")
            .register(Route::Chat, "chat")
            .register(Route::Chat, "chat-v2");

        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("/chat"), Some((Route::Chat, &"chat-v2")));
        assert_eq!(table.resolve("/todo"), Some((Route::Todo, &"todo")));
        assert_eq!(table.resolve("/calendar"), None);
        assert_eq!(table.resolve("/"), None);
    }
}
