//! Member retrieval: hook, provider, or reflection.

use log::warn;

use crate::error::ProviderError;
use crate::member::Member;
use crate::provider::{Children, Deferred, MemberProvider};
use crate::reflect::{Reflect, has_properties};

use super::DomTree;

/// Members for one level, or the raw children still on their way.
pub(crate) enum MemberFetch<V> {
    Ready(Vec<Member<V>>),
    Pending(Deferred<V>),
}

impl<V: Reflect> DomTree<V> {
    /// Members of `value` at `level`.
    ///
    /// Provider faults are logged and read as "no children".
    pub(crate) fn get_members(&self, value: &V, level: u16) -> MemberFetch<V> {
        if let Some(hook) = &self.members_hook
            && let Some(members) = hook(value, level)
        {
            return MemberFetch::Ready(members);
        }

        let Some(provider) = &self.provider else {
            return MemberFetch::Ready(self.reflect_members(value, level));
        };

        match provider.children(value) {
            Ok(Children::Ready(children)) => {
                MemberFetch::Ready(self.synthesize(&**provider, children, level))
            }
            Ok(Children::Pending(deferred)) => MemberFetch::Pending(deferred),
            Err(e) => {
                warn!("{}: fetching children of {:?} failed: {}", self.id, value, e);
                MemberFetch::Ready(Vec::new())
            }
        }
    }

    /// Turn raw children into members using the provider's queries.
    pub(crate) fn synthesize(
        &self,
        provider: &dyn MemberProvider<V>,
        children: Vec<V>,
        level: u16,
    ) -> Vec<Member<V>> {
        children
            .into_iter()
            .enumerate()
            .map(|(i, child)| {
                let has_children = provider.has_children(&child).unwrap_or_else(|e| {
                    warn!("{}: has_children({:?}) failed: {}", self.id, child, e);
                    false
                });
                let name = provider.label(&child).unwrap_or_else(|e| {
                    warn!("{}: label({:?}) failed: {}", self.id, child, e);
                    i.to_string()
                });
                let kind = self.value_kind(&child);
                Member::new(name, level, child)
                    .with_kind(kind)
                    .with_children(has_children)
            })
            .collect()
    }

    /// Whether `value` is currently expandable, by hook, provider or
    /// reflection. `level` is the level its children would be shown at.
    pub(crate) fn value_has_children(&self, value: &V, level: u16) -> Result<bool, ProviderError> {
        if let Some(hook) = &self.members_hook
            && let Some(members) = hook(value, level)
        {
            return Ok(!members.is_empty());
        }

        match &self.provider {
            Some(provider) => provider.has_children(value),
            None => Ok(has_properties(value)),
        }
    }

    /// Kind tag for `value`, by provider or reflection.
    pub(crate) fn value_kind(&self, value: &V) -> String {
        let Some(provider) = &self.provider else {
            return value.kind().to_string();
        };
        match provider.kind(value) {
            Ok(Some(kind)) => kind,
            Ok(None) => self.config.default_kind.clone(),
            Err(e) => {
                warn!("{}: kind({:?}) failed: {}", self.id, value, e);
                self.config.default_kind.clone()
            }
        }
    }

    fn reflect_members(&self, value: &V, level: u16) -> Vec<Member<V>> {
        value
            .properties()
            .into_iter()
            .map(|(name, child)| self.reflect_member(name, child, level))
            .collect()
    }

    fn reflect_member(&self, name: String, value: V, level: u16) -> Member<V> {
        let has_children = has_properties(&value);
        let kind = value.kind();
        Member::new(name, level, value)
            .with_kind(kind)
            .with_children(has_children)
    }
}
