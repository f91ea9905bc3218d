use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named permission group.
///
/// Roles are flat: an Editor is not implicitly a Writer or a Subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Role {
    Subscriber = 0,
    Writer = 1,
    Editor = 2,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Subscriber, Role::Writer, Role::Editor];

    /// Name as stored in the user directory and carried in token claims
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Role::Subscriber => "Subscriber",
            Role::Writer => "Writer",
            Role::Editor => "Editor",
        }
    }

    #[inline]
    const fn bit(&self) -> u8 {
        1 << (*self as u8)
    }

    /// Case-insensitive lookup; unknown names yield `None`
    pub fn from_code(code: &str) -> Option<Self> {
        Role::ALL
            .into_iter()
            .find(|role| role.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_code(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Any subset of [`Role`], stored as a bitmask.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct RoleSet(u8);

impl RoleSet {
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    pub fn insert(&mut self, role: Role) {
        self.0 |= role.bit();
    }

    #[inline]
    pub fn with(mut self, role: Role) -> Self {
        self.insert(role);
        self
    }

    #[inline]
    pub const fn contains(&self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Roles in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter().filter(|role| self.contains(*role))
    }

    /// Role names for token claims / storage
    pub fn codes(&self) -> Vec<String> {
        self.iter().map(|role| role.code().to_string()).collect()
    }

    /// Build from stored or claimed names, skipping ones this service does not know
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes
            .into_iter()
            .filter_map(|code| {
                let code = code.as_ref();
                let role = Role::from_code(code);
                if role.is_none() {
                    tracing::debug!(role = %code, "Ignoring unknown role");
                }
                role
            })
            .collect()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        iter.into_iter().fold(RoleSet::empty(), RoleSet::with)
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_code() {
        assert_eq!(Role::from_code("Subscriber"), Some(Role::Subscriber));
        assert_eq!(Role::from_code("writer"), Some(Role::Writer));
        assert_eq!(Role::from_code(" EDITOR "), Some(Role::Editor));
        assert_eq!(Role::from_code("admin"), None);
        assert!("Moderator".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Subscriber.to_string(), "Subscriber");
        assert_eq!(Role::Writer.to_string(), "Writer");
        assert_eq!(Role::Editor.to_string(), "Editor");
    }

    #[test]
    fn test_role_set_is_flat() {
        let editors = RoleSet::empty().with(Role::Editor);
        assert!(editors.contains(Role::Editor));
        assert!(!editors.contains(Role::Writer));
        assert!(!editors.contains(Role::Subscriber));
    }

    #[test]
    fn test_role_set_from_codes_skips_unknown() {
        let roles = RoleSet::from_codes(["Writer", "Admin", "subscriber"]);
        assert_eq!(roles.codes(), vec!["Subscriber", "Writer"]);
    }

    #[test]
    fn test_role_set_empty() {
        let roles = RoleSet::default();
        assert!(roles.is_empty());
        assert_eq!(roles.iter().count(), 0);
    }
}
