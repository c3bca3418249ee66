use crate::site::{self, ROUTES};

/// One line per route: public URL, name and view.
pub fn route_lines(base_path: &str) -> Vec<String> {
    ROUTES
        .iter()
        .map(|entry| {
            format!(
                "{:<20} {:<12} {}",
                site::href(base_path, entry),
                entry.name,
                entry.view
            )
        })
        .collect()
}

pub fn print_routes(config: &crate::config::Config) {
    for line in route_lines(&config.site.base_path) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_lines() {
        let lines = route_lines("/");

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("/ "));
        assert!(lines[4].starts_with("/thanks"));
        assert!(lines[4].contains("Thank You"));
        assert!(lines[4].ends_with("Thanks"));
    }
}
