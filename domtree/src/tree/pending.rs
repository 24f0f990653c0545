//! Settling asynchronous child fetches.
//!
//! A fetch is applied only if its owner is still waiting for it: the row
//! must still be mounted and still `Pending`, and a root fetch must belong to
//! the current render generation. Fetches whose owner goes away are dropped
//! when rows are removed, which closes their resolvers.

use log::{debug, warn};

use crate::error::ProviderError;
use crate::member::Member;
use crate::reflect::Reflect;
use crate::row::RowState;

use super::{DomTree, FetchOwner, TreeEvent};

impl<V: Reflect> DomTree<V> {
    /// Apply every fetch that has resolved, without waiting.
    ///
    /// Returns the number of fetches settled (applied or discarded).
    pub fn poll_pending(&mut self) -> usize {
        let owners: Vec<FetchOwner> = self.pending.keys().copied().collect();
        let mut settled = 0;

        for owner in owners {
            let Some(result) = self.pending.get_mut(&owner).and_then(|d| d.try_settle()) else {
                continue;
            };
            self.pending.remove(&owner);
            self.complete_fetch(owner, result);
            settled += 1;
        }

        settled
    }

    /// Wait for every outstanding fetch, including ones started while
    /// applying earlier results, and apply them in owner order.
    ///
    /// Never returns while a resolver is kept alive without resolving.
    pub async fn settle(&mut self) {
        loop {
            self.prune_pending();
            let Some((owner, deferred)) = self.pending.pop_first() else {
                break;
            };
            let result = deferred.await;
            self.complete_fetch(owner, result);
        }
    }

    /// Drop every fetch whose owner no longer waits for it.
    pub(crate) fn prune_pending(&mut self) {
        let stale: Vec<FetchOwner> = self
            .pending
            .keys()
            .copied()
            .filter(|owner| !self.is_waiting(*owner))
            .collect();
        for owner in stale {
            debug!("{}: dropping fetch for {:?}", self.id, owner);
            self.pending.remove(&owner);
        }
    }

    /// Members for children that arrived asynchronously. Only a provider
    /// answers with a pending result.
    fn provided_members(&self, children: Vec<V>, level: u16) -> Vec<Member<V>> {
        self.provider
            .as_deref()
            .map(|provider| self.synthesize(provider, children, level))
            .unwrap_or_default()
    }

    fn is_waiting(&self, owner: FetchOwner) -> bool {
        match owner {
            FetchOwner::Root(generation) => generation == self.generation,
            FetchOwner::Row(row) => self
                .row_index(row)
                .is_some_and(|index| self.rows[index].state == RowState::Pending),
        }
    }

    fn complete_fetch(&mut self, owner: FetchOwner, result: Result<Vec<V>, ProviderError>) {
        match owner {
            FetchOwner::Root(generation) => self.complete_root_fetch(generation, result),
            FetchOwner::Row(row) => {
                let Some(index) = self.row_index(row) else {
                    debug!("{}: discarding children for unmounted {}", self.id, row);
                    return;
                };
                if self.rows[index].state != RowState::Pending {
                    debug!("{}: discarding children for {}, no longer pending", self.id, row);
                    return;
                }

                match result {
                    Ok(children) => {
                        let level = self.rows[index].member.level + 1;
                        let members = self.provided_members(children, level);
                        self.set_state(index, RowState::Expanded);
                        self.mount_members(index + 1, members);
                        self.emit(TreeEvent::Expand(row));
                    }
                    Err(e) => {
                        warn!("{}: child fetch for {} failed: {}", self.id, row, e);
                        self.set_state(index, RowState::Collapsed);
                        self.emit(TreeEvent::Collapse(row));
                    }
                }
            }
        }
    }

    fn complete_root_fetch(&mut self, generation: u64, result: Result<Vec<V>, ProviderError>) {
        if generation != self.generation {
            debug!("{}: discarding stale root members", self.id);
            return;
        }

        match result {
            Ok(children) => {
                let members = self.provided_members(children, 0);
                self.remove_rows(0, self.rows.len());
                self.mount_members(0, members);
                if std::mem::take(&mut self.auto_expand_owed) {
                    self.expand_first_row();
                }
                self.emit(TreeEvent::Render);
            }
            Err(e) => {
                warn!("{}: fetching root members failed: {}", self.id, e);
                self.auto_expand_owed = false;
            }
        }
    }
}
