use std::cell::Cell;

use foxfire::html::{div, noscript, script, HtmlElement};

use crate::config::CommentsConfig;

pub const NOSCRIPT_MESSAGE: &str = "You need JavaScript to be able to comment.";

/// The utterances comment thread for a single page view.
///
/// The script is added to a container at most once, no matter how many times
/// [`Comments::attach`] is called.
pub struct Comments<'a> {
    config: &'a CommentsConfig,
    attached: Cell<bool>,
}

impl<'a> Comments<'a> {
    pub fn new(config: &'a CommentsConfig) -> Self {
        Self {
            config,
            attached: Cell::new(false),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    /// Appends the comment script to `container` on the first call.
    ///
    /// Later calls return `container` unchanged.
    pub fn attach(&self, container: HtmlElement) -> HtmlElement {
        if self.attached.replace(true) {
            return container;
        }

        let CommentsConfig {
            script_url,
            repo,
            issue_term,
            label,
            theme,
        } = self.config;

        container.child(
            script()
                .src(script_url)
                .attr("repo", repo)
                .attr("issue-term", issue_term)
                .attr("label", label)
                .attr("theme", theme)
                .attr("crossorigin", "anonymous")
                .attr("async", ""),
        )
    }

    /// Returns the comments container with the script attached.
    pub fn render(&self) -> HtmlElement {
        self.attach(
            div()
                .class("comments")
                .child(noscript().child(NOSCRIPT_MESSAGE)),
        )
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render() {
        let config = CommentsConfig::default();
        let comments = Comments::new(&config);

        assert_snapshot!(comments.render().render_to_string().unwrap(), @r###"<div class="comments"><noscript>You need JavaScript to be able to comment.</noscript><script src="https://utteranc.es/client.js" repo="Kampfkarren/blog" issue-term="pathname" label="comments section" theme="github-light" crossorigin="anonymous" async></script></div>"###);
        assert!(comments.is_attached());
    }

    #[test]
    fn test_attaches_once() {
        let config = CommentsConfig::default();
        let comments = Comments::new(&config);

        let container = comments.attach(div());
        let container = comments.attach(container);
        let container = comments.attach(container);

        assert_eq!(container.children.len(), 1);
    }

    #[test]
    fn test_noscript_fallback_after_attaching() {
        let config = CommentsConfig::default();
        let comments = Comments::new(&config);
        comments.attach(div());

        let rendered = comments.render().render_to_string().unwrap();

        assert_eq!(
            rendered,
            format!(r#"<div class="comments"><noscript>{NOSCRIPT_MESSAGE}</noscript></div>"#)
        );
    }
}
