//! Console route table
//!
//! Maps operator console URL paths to named views:
//! - `/` - dashboard (production KPIs, compliance, infrastructure)
//! - `/telemetry` - telemetry (live readings and historical charts)
//! - `/reports` - reports (regulatory report lifecycle)
//! - `/alerts` - alerts (active alerts and anomaly triage)
//!
//! The table is a plain value: the host shell builds it once with its own view
//! components and resolves paths against it on navigation. Matching is exact.
//! There are no prefix routes, no path parameters, and no fallback entry; an
//! unknown path resolves to `None` and the shell owns the not-found screen.
//! History mode, transitions, and rendering stay in the host framework.

use std::collections::HashSet;

/// Route registration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),
    #[error("duplicate route name: {0}")]
    DuplicateName(String),
}

/// A single console route: a URL path bound to a named view.
#[derive(Debug, Clone)]
pub struct RouteEntry<V> {
    path: String,
    name: String,
    view: V,
}

impl<V> RouteEntry<V> {
    /// Bind `path` to the view registered under `name`.
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    /// URL path this entry matches, e.g. `/telemetry`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Unique view name, e.g. `telemetry`. Used for programmatic navigation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The view component the shell renders for this route.
    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Route table with unique paths and unique names, fixed after construction.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
}

impl<V> RouteTable<V> {
    /// Build a table from entries, rejecting duplicate paths or names.
    pub fn new(entries: Vec<RouteEntry<V>>) -> Result<Self, RouteError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        for entry in &entries {
            if !paths.insert(entry.path.as_str()) {
                return Err(RouteError::DuplicatePath(entry.path.clone()));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(RouteError::DuplicateName(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Resolve a URL path to its route entry.
    ///
    /// Matching is exact: trailing slashes, case differences, and unknown
    /// paths all resolve to `None`.
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry<V>> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Look up a route by its view name.
    pub fn entry_named(&self, name: &str) -> Option<&RouteEntry<V>> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// All entries in registration order, for nav menus and shell startup.
    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Standard Operator Console Table
// ============================================================================

/// View components for the four standard console screens.
///
/// The host shell supplies these; this crate never constructs views itself.
#[derive(Debug, Clone)]
pub struct OperatorViews<V> {
    pub dashboard: V,
    pub telemetry: V,
    pub reports: V,
    pub alerts: V,
}

/// The standard operator console route table.
pub fn operator_routes<V>(views: OperatorViews<V>) -> RouteTable<V> {
    // Four distinct literal paths and names; the uniqueness invariant holds
    // without going through the fallible constructor.
    RouteTable {
        entries: vec![
            RouteEntry::new("/", "dashboard", views.dashboard),
            RouteEntry::new("/telemetry", "telemetry", views.telemetry),
            RouteEntry::new("/reports", "reports", views.reports),
            RouteEntry::new("/alerts", "alerts", views.alerts),
        ],
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn console() -> RouteTable<&'static str> {
        operator_routes(OperatorViews {
            dashboard: "DashboardView",
            telemetry: "TelemetryView",
            reports: "ReportsView",
            alerts: "AlertsView",
        })
    }

    #[test]
    fn test_standard_table_resolves_all_declared_paths() {
        let table = console();
        assert_eq!(table.len(), 4);
        assert_eq!(table.resolve("/").unwrap().name(), "dashboard");
        assert_eq!(table.resolve("/telemetry").unwrap().name(), "telemetry");
        assert_eq!(table.resolve("/reports").unwrap().name(), "reports");
        assert_eq!(table.resolve("/alerts").unwrap().name(), "alerts");
    }

    #[test]
    fn test_resolution_binds_the_right_view() {
        let table = console();
        assert_eq!(*table.resolve("/telemetry").unwrap().view(), "TelemetryView");
        assert_eq!(*table.resolve("/").unwrap().view(), "DashboardView");
    }

    #[test]
    fn test_unknown_path_resolves_to_none() {
        let table = console();
        assert!(table.resolve("/settings").is_none());
        assert!(table.resolve("/wells").is_none());
        assert!(table.resolve("").is_none());
    }

    #[test]
    fn test_matching_is_exact_not_fuzzy() {
        let table = console();
        // Trailing slash is a different path
        assert!(table.resolve("/telemetry/").is_none());
        // Prefixes and extensions do not match
        assert!(table.resolve("/telemetry/live").is_none());
        assert!(table.resolve("/telemetry2").is_none());
        // Case matters
        assert!(table.resolve("/Telemetry").is_none());
    }

    #[test]
    fn test_entry_named_lookup() {
        let table = console();
        assert_eq!(table.entry_named("reports").unwrap().path(), "/reports");
        assert!(table.entry_named("settings").is_none());
        assert!(table.entry_named("Reports").is_none());
    }

    #[test]
    fn test_entries_preserve_registration_order() {
        let table = console();
        let names: Vec<&str> = table.entries().iter().map(RouteEntry::name).collect();
        assert_eq!(names, ["dashboard", "telemetry", "reports", "alerts"]);
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let result = RouteTable::new(vec![
            RouteEntry::new("/alerts", "alerts", ()),
            RouteEntry::new("/alerts", "alarms", ()),
        ]);
        assert_eq!(result.unwrap_err(), RouteError::DuplicatePath("/alerts".to_string()));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = RouteTable::new(vec![
            RouteEntry::new("/alerts", "alerts", ()),
            RouteEntry::new("/alarms", "alerts", ()),
        ]);
        assert_eq!(result.unwrap_err(), RouteError::DuplicateName("alerts".to_string()));
    }

    #[test]
    fn test_empty_table_is_valid() {
        let table: RouteTable<()> = RouteTable::new(vec![]).unwrap();
        assert!(table.is_empty());
        assert!(table.resolve("/").is_none());
    }
}
