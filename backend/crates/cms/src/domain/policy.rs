//! Authorization Policy
//!
//! One pure decision function for every content action. Services call
//! [`authorize`] before touching the store, and handlers call [`precheck`]
//! before parsing the request; nothing else checks roles.
//!
//! | Action | Article            | Comment            |
//! |--------|--------------------|--------------------|
//! | Read   | anyone             | anyone             |
//! | Create | Writer             | Subscriber         |
//! | Update | Editor or author   | Editor or author   |
//! | Delete | Editor             | Editor             |

use auth::domain::{Actor, Role, UserId};

use crate::error::{CmsError, CmsResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Article,
    Comment,
}

/// What an action targets: its kind and, for existing records, its author
#[derive(Debug, Clone, Copy)]
pub struct Resource<'a> {
    pub kind: ResourceKind,
    pub author: Option<&'a UserId>,
}

impl<'a> Resource<'a> {
    pub const fn new(kind: ResourceKind) -> Self {
        Self { kind, author: None }
    }

    pub const fn owned_by(kind: ResourceKind, author: &'a UserId) -> Self {
        Self {
            kind,
            author: Some(author),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// No caller on an action that needs one
    Unauthenticated,
    /// Caller known but not permitted
    Forbidden,
}

/// Decide whether `actor` may perform `action` on `resource`
pub fn evaluate(action: Action, resource: Resource<'_>, actor: Option<&Actor>) -> Decision {
    if action == Action::Read {
        return Decision::Allow;
    }

    let Some(actor) = actor else {
        return Decision::Unauthenticated;
    };

    let allowed = match action {
        Action::Read => true,
        Action::Create => match resource.kind {
            ResourceKind::Article => actor.has_role(Role::Writer),
            ResourceKind::Comment => actor.has_role(Role::Subscriber),
        },
        Action::Update => {
            actor.has_role(Role::Editor) || resource.author.is_some_and(|author| actor.is(author))
        }
        Action::Delete => actor.has_role(Role::Editor),
    };

    if allowed {
        Decision::Allow
    } else {
        Decision::Forbidden
    }
}

/// [`evaluate`], with denials turned into errors
pub fn authorize(action: Action, resource: Resource<'_>, actor: Option<&Actor>) -> CmsResult<()> {
    match evaluate(action, resource, actor) {
        Decision::Allow => Ok(()),
        Decision::Unauthenticated => Err(CmsError::Unauthenticated),
        Decision::Forbidden => Err(CmsError::Forbidden(denial_reason(action, resource.kind))),
    }
}

/// The part of [`authorize`] that needs no stored record
///
/// Run before the request is parsed. Update defers the ownership check to
/// the service, so only the caller's presence is checked here.
pub fn precheck(action: Action, kind: ResourceKind, actor: Option<&Actor>) -> CmsResult<()> {
    match action {
        Action::Read => Ok(()),
        Action::Update if actor.is_none() => Err(CmsError::Unauthenticated),
        Action::Update => Ok(()),
        Action::Create | Action::Delete => authorize(action, Resource::new(kind), actor),
    }
}

fn denial_reason(action: Action, kind: ResourceKind) -> &'static str {
    match (action, kind) {
        (Action::Create, ResourceKind::Article) => "only writers can create articles",
        (Action::Create, ResourceKind::Comment) => "only subscribers can create comments",
        (Action::Update, ResourceKind::Article) => "only editors or the author can edit this article",
        (Action::Update, ResourceKind::Comment) => "only editors or the author can edit this comment",
        (Action::Delete, ResourceKind::Article) => "only editors can delete articles",
        (Action::Delete, ResourceKind::Comment) => "only editors can delete comments",
        (Action::Read, _) => "read denied",
    }
}
