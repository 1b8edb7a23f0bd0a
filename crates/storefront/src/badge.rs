//! Badge Projector.
//!
//! Renders the cart's item count for the persistent header element. The text
//! is a pure function of the count: empty for zero, `"(n)"` otherwise.

use std::fmt;

/// Render the badge text for `count` items.
///
/// ```
/// use stableshop_storefront::render_badge;
///
/// assert_eq!(render_badge(0), "");
/// assert_eq!(render_badge(3), "(3)");
/// ```
#[must_use]
pub fn render_badge(count: u64) -> String {
    if count == 0 {
        String::new()
    } else {
        format!("({count})")
    }
}

/// The page element showing the badge.
pub trait BadgeTarget {
    fn set_text(&mut self, text: &str);
}

/// Pushes rendered badge text into an optional target.
///
/// Holds no state besides the target itself; refreshing without a target
/// just returns the text.
#[derive(Default)]
pub struct BadgeProjector {
    target: Option<Box<dyn BadgeTarget>>,
}

impl BadgeProjector {
    /// A projector with no display target attached.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_target(target: impl BadgeTarget + 'static) -> Self {
        Self {
            target: Some(Box::new(target)),
        }
    }

    /// Render `count` and write it to the target, if any.
    pub fn refresh(&mut self, count: u64) -> String {
        let text = render_badge(count);
        if let Some(target) = self.target.as_mut() {
            target.set_text(&text);
        }
        text
    }

    #[must_use]
    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }
}

impl fmt::Debug for BadgeProjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BadgeProjector")
            .field("has_target", &self.has_target())
            .finish()
    }
}
