use std::collections::HashMap;

use crate::node::Node;

/// The cumulative output of walking the [radix tree](crate::Tree) looking
/// up a path.
///
/// Produced fresh by every [`crate::Tree::find`] call; `found()` tells the
/// caller whether a payload was matched at all, since `payload()` alone
/// cannot distinguish "no match" from a payload type that is itself
/// optional.
#[derive(Debug, PartialEq, Eq)]
pub struct LookupResult<'a, T> {
    key: Option<String>,
    nodes: Vec<&'a Node<T>>,
    pub(crate) params: HashMap<String, String>,
    payload: &'a Option<T>,
}

impl<'a, T> LookupResult<'a, T> {
    pub(crate) fn new() -> Self {
        Self {
            key: None,
            nodes: Vec::<&'a Node<T>>::new(),
            params: HashMap::new(),
            payload: &None,
        }
    }

    /// Records `node` as part of the matched-node trail. If `use_payload`
    /// and `node` carries a payload, it becomes the result's payload,
    /// overwriting any payload recorded by an earlier node.
    pub(crate) fn record(mut self, node: &'a Node<T>, use_payload: bool) -> Self {
        self.nodes.push(node);
        if use_payload && node.payload.is_some() {
            self.payload = &node.payload;
        }
        self
    }

    /// Whether a payload was matched.
    pub fn found(&self) -> bool {
        self.payload.is_some()
    }

    /// The matched payload, if any.
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// The reconstructed pattern, built by concatenating the keys of every
    /// node recorded during the walk. Empty if no node was ever recorded.
    /// Computed lazily and cached on first call.
    pub fn key(&mut self) -> &str {
        if self.key.is_none() {
            self.key = Some(self.compute_key());
        }
        self.key.as_deref().unwrap()
    }

    fn compute_key(&self) -> String {
        self.nodes
            .iter()
            .fold(String::new(), |acc, &node| acc + &node.key)
    }

    /// Looks up a single captured parameter by name.
    ///
    /// Returns `None` if the name wasn't captured, rather than panicking,
    /// since a caller may probe for optional parameters.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Every parameter captured during the walk.
    ///
    /// `params` is not required to preserve insertion order (§3); it may be
    /// partially populated when `found()` is false, per the open question
    /// in §9 — this implementation never clears it on a failed lookup.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }
}
