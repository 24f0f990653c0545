//! A lazily expanding object-inspection tree.
//!
//! Bind a root value to a [`DomTree`], render it into an [`Element`]
//! container, and let label clicks expand rows on demand. Children come from
//! a [`MemberProvider`], which may answer later through a [`Deferred`], or
//! from [`Reflect`] when no provider is bound.

pub mod config;
pub mod element;
pub mod error;
pub mod member;
pub mod provider;
pub mod reflect;
pub mod rep;
pub mod row;
pub mod text;
pub mod tree;

pub use config::TreeConfig;
pub use element::{Content, Element, find_element};
pub use error::{ProviderError, TreeError};
pub use member::Member;
pub use provider::{Children, Deferred, MemberProvider, Resolver, deferred};
pub use reflect::Reflect;
pub use rep::{DebugRenderer, JsonRenderer, Rep, RepRegistry, ValueRenderer};
pub use row::{RowState, render_row};
pub use tree::{DomTree, EventResult, MembersHook, RowId, TreeEvent, TreeId};
