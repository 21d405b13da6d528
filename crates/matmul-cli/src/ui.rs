//! Styled status lines.

use console::style;

/// Kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warn,
    Error,
}

impl Status {
    fn tag(self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Error => "[ERROR]",
        }
    }
}

/// `NO_COLOR` is set in the environment.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Render a status line, colored unless `plain`.
#[must_use]
pub fn status_line(status: Status, text: &str, plain: bool) -> String {
    if plain {
        return format!("{} {text}", status.tag());
    }
    let tag = style(status.tag()).bold();
    let tag = match status {
        Status::Ok => tag.green(),
        Status::Warn => tag.yellow(),
        Status::Error => tag.red(),
    };
    format!("{tag} {text}")
}

/// Render a section header.
#[must_use]
pub fn header(text: &str, plain: bool) -> String {
    let line = format!("== {text} ==");
    if plain {
        line
    } else {
        style(line).bold().cyan().to_string()
    }
}
