use chrono::{DateTime, Utc};
use colored::Colorize;
use edudesk::api::{CmdMessage, MessageLevel, TopicOverview};
use edudesk::model::ContentKind;
use edudesk::users::{User, UserStatus};
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn relative(when: DateTime<Utc>) -> String {
    let elapsed = (Utc::now() - when).to_std().unwrap_or_default();
    Formatter::new().convert(elapsed)
}

pub(crate) fn print_topics(overviews: &[TopicOverview]) {
    if overviews.is_empty() {
        println!("No topics found.");
        return;
    }

    for (i, overview) in overviews.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", overview.topic.name.bold());

        for (subtopic_id, records) in &overview.subtopics {
            let name = overview
                .topic
                .subtopics
                .iter()
                .find(|s| s.id == *subtopic_id)
                .map(|s| s.name.as_str())
                .unwrap_or("(unknown)");

            let uploaded = records.iter().filter(|r| r.is_uploaded).count();
            let status = if uploaded > 0 {
                let latest = records
                    .iter()
                    .filter(|r| r.is_uploaded)
                    .map(|r| r.updated_at)
                    .max();
                let ago = latest.map(relative).unwrap_or_default();
                format!(
                    "{} {}",
                    format!("{}/{} uploaded", uploaded, ContentKind::ALL.len()).green(),
                    format!("updated {}", ago).dimmed()
                )
            } else {
                "no content".dimmed().to_string()
            };

            let id = format!("{:>3}", subtopic_id);
            println!("  {}  {:<20} {}", id.yellow(), name, status);
        }
    }
}

pub(crate) fn print_users(users: &[User]) {
    if users.is_empty() {
        println!("No users found");
        return;
    }

    let name_width = users
        .iter()
        .map(|u| u.name.width())
        .chain(std::iter::once("Name".width()))
        .max()
        .unwrap_or(0);
    let email_width = users
        .iter()
        .map(|u| u.email.width())
        .chain(std::iter::once("Email".width()))
        .max()
        .unwrap_or(0);

    // Pad before styling: format widths would count the ANSI codes.
    println!(
        "{}  {}  {}  {}",
        pad("Name", name_width).bold(),
        pad("Email", email_width).bold(),
        pad("Role", 8).bold(),
        "Status".bold()
    );

    for user in users {
        let role_text = pad(&user.role.to_string(), 8);
        let role = match user.role {
            edudesk::users::UserRole::Admin => role_text.blue(),
            edudesk::users::UserRole::Teacher => role_text.magenta(),
            edudesk::users::UserRole::Student => role_text.green(),
        };
        let dot = match user.status {
            UserStatus::Active => "●".green(),
            UserStatus::Inactive => "●".red(),
        };
        println!(
            "{}  {}  {}  {} {}",
            pad(&user.name, name_width),
            pad(&user.email, email_width).dimmed(),
            role,
            dot,
            user.status
        );
    }
}

/// Pads to a display width (format! width counts chars, not columns).
fn pad(text: &str, width: usize) -> String {
    let mut padded = text.to_string();
    let current = text.width();
    if current < width {
        padded.push_str(&" ".repeat(width - current));
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_fills_to_display_width() {
        assert_eq!(pad("ab", 5), "ab   ");
        assert_eq!(pad("abcde", 3), "abcde");
    }
}
