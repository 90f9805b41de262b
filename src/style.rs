use console::style;

pub enum Style {
    Command, // Commands, inline code, env variable keys, and profile names
    Link,
    Success,
    WarningPrefix,
    ErrorPrefix, // "error:" and "error[code]:" text
}

impl Style {
    pub fn paint<S: AsRef<str>>(&self, message: S) -> String {
        let message_ref = message.as_ref();

        if is_no_color_set() {
            return message_ref.to_string();
        }

        match &self {
            Style::Command => style(message_ref).yellow(),
            Style::Link => style(message_ref).cyan().underlined(),
            Style::Success => style(message_ref).green(),
            Style::WarningPrefix => style(message_ref).yellow(),
            Style::ErrorPrefix => style(message_ref).red().bold(),
        }
        .to_string()
    }
}

pub fn is_no_color_set() -> bool {
    is_bool_env_var_set("NO_COLOR") || is_bool_env_var_set("MAPPER_NO_COLOR")
}

fn is_bool_env_var_set(key: &str) -> bool {
    !matches!(
        std::env::var(key).as_deref(),
        Err(..) | Ok("") | Ok("0") | Ok("false") | Ok("False") | Ok("FALSE")
    )
}

/// Prints to the standard error, with a newline and a check mark.
macro_rules! successln {
    ($($t:tt)*) => {{
        eprint!("{} ", $crate::style::Style::Success.paint("✓"));
        eprintln!($($t)*);
    }};
}

/// Prints to the standard error, with a newline and a warning prefix.
macro_rules! warnln {
    ($($t:tt)*) => {{
        eprint!("{} ", $crate::style::Style::WarningPrefix.paint("warning:"));
        eprintln!($($t)*);
    }};
}

pub(crate) use successln;
pub(crate) use warnln;
