//! The platform user directory backing the users screen: a seeded list
//! with ranked, case-insensitive search across name, email, and role.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UserRole::Admin => "Admin",
            UserRole::Teacher => "Teacher",
            UserRole::Student => "Student",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
}

static SEED_USERS: Lazy<Vec<User>> = Lazy::new(|| {
    let user = |id, name: &str, email: &str, role, status| User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
    };
    vec![
        user(1, "John Doe", "john@example.com", UserRole::Admin, UserStatus::Active),
        user(2, "Jane Smith", "jane@example.com", UserRole::Teacher, UserStatus::Active),
        user(3, "Robert Johnson", "robert@example.com", UserRole::Student, UserStatus::Inactive),
        user(4, "Emily Davis", "emily@example.com", UserRole::Teacher, UserStatus::Active),
        user(5, "Michael Wilson", "michael@example.com", UserRole::Student, UserStatus::Active),
    ]
});

#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn seed() -> Self {
        Self {
            users: SEED_USERS.clone(),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// Case-insensitive search across name, email, and role. Exact name
    /// matches rank first, then name substrings, then email, then role;
    /// ties break on name length, then id.
    pub fn search(&self, term: &str) -> Vec<User> {
        let term_lower = term.to_lowercase();
        if term_lower.is_empty() {
            return self.users.clone();
        }

        let mut matches: Vec<(User, u8)> = self
            .users
            .iter()
            .filter_map(|user| {
                let name_lower = user.name.to_lowercase();
                let email_lower = user.email.to_lowercase();
                let role_lower = user.role.to_string().to_lowercase();

                let score = if name_lower == term_lower {
                    1
                } else if name_lower.contains(&term_lower) {
                    2
                } else if email_lower.contains(&term_lower) {
                    3
                } else if role_lower.contains(&term_lower) {
                    4
                } else {
                    return None;
                };

                Some((user.clone(), score))
            })
            .collect();

        matches.sort_by(|(a, score_a), (b, score_b)| match score_a.cmp(score_b) {
            std::cmp::Ordering::Equal => match a.name.len().cmp(&b.name.len()) {
                std::cmp::Ordering::Equal => a.id.cmp(&b.id),
                ord => ord,
            },
            ord => ord,
        });

        matches.into_iter().map(|(user, _)| user).collect()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_five_users() {
        assert_eq!(UserDirectory::seed().all().len(), 5);
    }

    #[test]
    fn empty_term_returns_everyone() {
        let directory = UserDirectory::seed();
        assert_eq!(directory.search("").len(), 5);
    }

    #[test]
    fn search_is_case_insensitive() {
        let directory = UserDirectory::seed();
        let results = directory.search("JANE");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Jane Smith");
    }

    #[test]
    fn ranks_exact_name_matches_first() {
        let directory = UserDirectory::with_users(vec![
            User {
                id: 1,
                name: "Jo".to_string(),
                email: "jo.anne@example.com".to_string(),
                role: UserRole::Student,
                status: UserStatus::Active,
            },
            User {
                id: 2,
                name: "Jo Ann".to_string(),
                email: "other@example.com".to_string(),
                role: UserRole::Teacher,
                status: UserStatus::Active,
            },
        ]);

        let results = directory.search("jo");
        assert_eq!(results[0].name, "Jo");
        assert_eq!(results[1].name, "Jo Ann");
    }

    #[test]
    fn matches_email_and_role() {
        let directory = UserDirectory::seed();
        let by_email = directory.search("robert@example");
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "Robert Johnson");

        let by_role = directory.search("teacher");
        assert_eq!(by_role.len(), 2);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(UserDirectory::seed().search("nobody").is_empty());
    }
}
