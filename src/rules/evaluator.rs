use tracing::{debug, trace};

use super::{Context, RuleSet};
use crate::document::{Document, DocumentNode};
use crate::utils::CiteResult;

/// Resolve one rule set against a document into at most one value
///
/// Rule `i` of `N` scores `N - i`. A candidate replaces the running best when
/// it scores strictly higher, or when nothing non-empty has been recorded yet.
/// Scores only decrease along the chain, so the first rule yielding a
/// non-empty candidate wins and every later rule is still examined.
///
/// If nothing matched, the configured default is produced from `ctx`. A
/// surviving value runs through the processors in order and is trimmed.
///
/// # Errors
/// Only document failures are propagated, e.g. a selector that does not parse.
pub fn evaluate<D: Document>(rule_set: &RuleSet<'_>, doc: &D, ctx: &Context) -> CiteResult<Option<String>> {
    let total = rule_set.rules.len();
    let mut best_score = 0;
    let mut best: Option<String> = None;

    for (position, rule) in rule_set.rules.iter().enumerate() {
        let score = total - position;

        let candidate = match rule.selector {
            Some(selector) => match doc.query_first(selector)? {
                Some(node) => rule.extractor.extract(Some(&node as &dyn DocumentNode), ctx),
                None => None,
            },
            None => rule.extractor.extract(None, ctx),
        };

        trace!(field = rule_set.name, position, score, ?candidate, "Rule examined");

        if score > best_score || !is_present(&best) {
            best_score = score;
            best = candidate;
        }
    }

    if !is_present(&best)
        && let Some(default) = rule_set.default
    {
        best = default.produce(ctx);
        debug!(field = rule_set.name, ?best, "No rule matched, using default");
    }

    let Some(mut value) = best.filter(|v| !v.is_empty()) else {
        debug!(field = rule_set.name, "No value resolved");
        return Ok(None);
    };

    for processor in rule_set.processors {
        value = processor.apply(value, ctx);
    }

    Ok(Some(value.trim().to_string()))
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}
