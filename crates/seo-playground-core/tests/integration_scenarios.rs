#![allow(missing_docs, clippy::unwrap_used)]

use seo_playground_core::{
    ConfigOverrides, DEFAULT_BASE_URL, DemoCatalog, ParamConfig, RobotsDirective,
    RobotsToggleKind, RobotsTxt, compute_canonical, config_from_json, generate_sitemap_entries,
    render_robots_txt, split_target,
};

fn resolve(url: &str, config: &ParamConfig) -> seo_playground_core::CanonicalResult {
    let (path, params) = split_target(url).unwrap();
    compute_canonical(&path, &params, config, DEFAULT_BASE_URL)
}

#[cfg(test)]
mod canonical_scenarios {
    use super::*;

    #[test]
    fn test_listing_scenarios() {
        let config = ParamConfig::default();
        let cases = [
            (
                "/catalog/t-shirts/?sort=price_desc&color=black",
                RobotsDirective::NoindexFollow,
                "https://example.com/catalog/t-shirts/black/",
                false,
            ),
            (
                "/catalog/t-shirts/?page=2",
                RobotsDirective::NoindexFollow,
                "https://example.com/catalog/t-shirts/?page=2",
                false,
            ),
            (
                "/catalog/t-shirts/?utm_source=fb",
                RobotsDirective::IndexFollow,
                "https://example.com/catalog/t-shirts/",
                true,
            ),
            (
                "/catalog/t-shirts/?page=1",
                RobotsDirective::IndexFollow,
                "https://example.com/catalog/t-shirts/",
                false,
            ),
            (
                "/catalog/t-shirts/?sort=price_asc",
                RobotsDirective::NoindexFollow,
                "https://example.com/catalog/t-shirts/",
                false,
            ),
            (
                "/catalog/t-shirts/?color=blue",
                RobotsDirective::IndexFollow,
                "https://example.com/catalog/t-shirts/blue/",
                false,
            ),
        ];

        for (url, robots, canonical, blocked) in cases {
            let result = resolve(url, &config);
            assert_eq!(result.robots, robots, "robots for {url}");
            assert_eq!(result.canonical, canonical, "canonical for {url}");
            assert_eq!(result.block_in_robots, blocked, "blocking for {url}");
        }
    }

    #[test]
    fn test_absolute_input_resolves_like_path() {
        let config = ParamConfig::default();
        let absolute = resolve("https://shop.test/catalog/t-shirts/?color=blue", &config);
        let relative = resolve("/catalog/t-shirts/?color=blue", &config);
        assert_eq!(absolute, relative);
    }

    #[test]
    fn test_non_ascii_path_has_one_canonical() {
        let config = ParamConfig::default();
        let absolute = resolve("https://example.com/Café/", &config);
        let relative = resolve("/Café/", &config);
        assert_eq!(relative.canonical, "https://example.com/caf%c3%a9/");
        assert_eq!(absolute, relative);

        let again = resolve(&relative.canonical, &config);
        assert_eq!(again.canonical, relative.canonical);
    }
}

#[cfg(test)]
mod configuration_flow {
    use super::*;

    #[test]
    fn test_client_overrides_change_decisions() {
        // Given: A client store turning on sort blocking and off search noindex
        let config = config_from_json(
            r#"{"robotsToggles": {"sortBlocking": {"enabled": true}}, "demos": {"noindexSearch": false}}"#,
        );

        // When: Resolving a sorted listing and the search page
        let sorted = resolve("/catalog/t-shirts/?sort=new", &config);
        let search = resolve("/search", &config);

        // Then: Sorting is now blocked and search is indexable
        assert!(sorted.block_in_robots);
        assert_eq!(sorted.warnings.len(), 1);
        assert_eq!(search.robots, RobotsDirective::IndexFollow);
    }

    #[test]
    fn test_emitted_robots_txt_agrees_with_resolver() {
        let mut overrides = ConfigOverrides::default();
        for kind in RobotsToggleKind::ALL {
            overrides.set_toggle_enabled(kind, true);
        }
        let config = ParamConfig::default().merged(&overrides);
        let robots = RobotsTxt::parse(&render_robots_txt(&config, DEFAULT_BASE_URL));

        for url in [
            "/catalog/t-shirts/?utm_campaign=spring",
            "/catalog/t-shirts/?per_page=96",
            "/catalog/t-shirts/?color=black&sort=new",
        ] {
            let result = resolve(url, &config);
            assert!(result.block_in_robots, "{url} should be flagged");
            assert!(!robots.test(url).allowed, "{url} should be disallowed");
        }
    }

    #[test]
    fn test_api_paths_agree_with_robots_txt() {
        let config = ParamConfig::default();
        let robots = RobotsTxt::parse(&render_robots_txt(&config, DEFAULT_BASE_URL));

        for url in ["/api/sitemap", "/api/sitemap.xml", "/api/robots", "/api/cart"] {
            let result = resolve(url, &config);
            assert_eq!(
                result.block_in_robots,
                !robots.test(url).allowed,
                "{url} disagrees with robots.txt"
            );
        }
        assert!(resolve("/api/cart", &config).block_in_robots);
    }

    #[test]
    fn test_sitemap_only_contains_indexable_urls() {
        let config = ParamConfig::default();
        let entries = generate_sitemap_entries(&config, DEFAULT_BASE_URL, &DemoCatalog);
        assert!(entries.iter().filter(|e| e.included).count() > 10);

        for entry in entries.iter().filter(|e| e.included) {
            let result = resolve(&entry.path, &config);
            assert_eq!(result.robots, RobotsDirective::IndexFollow, "{}", entry.path);
            assert!(!result.block_in_robots, "{}", entry.path);
        }
    }
}
