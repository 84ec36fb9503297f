//! Rule-table bump strategy plugin.

use emoticz_plugin::{BumpRules, BumpStrategy, BumpType, Plugin};
use tracing::debug;

/// Bump strategy driven by a commit style's rule table.
///
/// Each message is resolved on its own (first matching rule wins) and the
/// strongest result across all messages is returned:
/// - a `Major` result stops the scan
/// - messages without a marker, or whose marker matches no rule, contribute `None`
pub struct PatternBumper<'a> {
    rules: &'a BumpRules,
}

impl<'a> PatternBumper<'a> {
    /// Creates a bumper over the given rule table.
    #[must_use]
    pub fn new(rules: &'a BumpRules) -> Self {
        Self { rules }
    }
}

impl Plugin for PatternBumper<'_> {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Determines version bump from an ordered pattern table"
    }
}

impl BumpStrategy for PatternBumper<'_> {
    fn determine(&self, messages: &[String]) -> BumpType {
        let mut bump = BumpType::None;

        for message in messages {
            let Some(resolved) = self.rules.resolve(message) else {
                debug!(message = %message.lines().next().unwrap_or(""), "no bump rule matched");
                continue;
            };

            bump = bump.max(resolved);
            if bump == BumpType::Major {
                break;
            }
        }

        bump
    }
}
