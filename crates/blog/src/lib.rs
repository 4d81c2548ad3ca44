pub mod article_listing;
pub mod comments;
pub mod config;
pub mod header;
pub mod layout;
pub mod templates;

use std::path::Path;
use std::sync::Arc;

use foxfire::{Site, SiteConfig};

use crate::config::BlogConfig;

/// Returns the blog [`Site`] rooted at `root_path`, with its templates and
/// stylesheet wired up.
pub fn site(root_path: impl AsRef<Path>, site_config: SiteConfig, config: BlogConfig) -> Site {
    let config = Arc::new(config);
    let home_config = config.clone();
    let article_config = config.clone();
    let not_found_config = config;

    Site::builder()
        .root(root_path)
        .templates(
            move |ctx| templates::home(ctx, &home_config),
            move |ctx| templates::article(ctx, &article_config),
            move |ctx| templates::not_found(ctx, &not_found_config),
        )
        .config(site_config)
        .with_sass("sass")
        .build()
}
