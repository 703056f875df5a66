use crate::pages::PageId;

use super::location::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
struct RouteEntry {
    path: Location,
    page: PageId,
}

/// Static path → page mapping, built once by the shell.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, PageId)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(path, page)| RouteEntry {
                    path: Location::parse(path),
                    page,
                })
                .collect(),
        }
    }

    /// First exact match wins.
    pub fn match_location(&self, location: &Location) -> Option<PageId> {
        self.entries
            .iter()
            .find(|entry| &entry.path == location)
            .map(|entry| entry.page)
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.match_location(location).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_paths_only() {
        let table = RouteTable::new([("/", PageId::Home), ("/about", PageId::About)]);
        assert_eq!(table.match_location(&"/about".into()), Some(PageId::About));
        assert_eq!(table.match_location(&"/about/team".into()), None);
    }

    #[test]
    fn first_entry_wins_on_duplicates() {
        let table = RouteTable::new([("/x", PageId::Home), ("/x", PageId::About)]);
        assert_eq!(table.match_location(&"/x".into()), Some(PageId::Home));
    }
}
