use thiserror::Error;

use lightning_common::{SettingToggle, SpellSlot};

pub const USAGE: &str = "\
Commands:
  /dash [summoner]         show the dashboard (logged-in summoner by default)
  /refresh                 refetch the dashboard now
  /spells                  show the spell tracker grid
  /cast <row> <d|f>        start the cooldown of a spell
  /swap <a> <b>            swap two tracker rows
  /cooldowns               list running cooldowns
  /settings                show settings
  /toggle <autoStart|notifications>
  /overlay <name>          toggle an overlay
  /creds <clientId> <clientSecret>
  /help
  /quit";

/// One line of input to the interactive client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dashboard(Option<String>),
    Refresh,
    Spells,
    Cast { row: usize, slot: SpellSlot },
    Swap { a: usize, b: usize },
    Cooldowns,
    Settings,
    Toggle(SettingToggle),
    Overlay(String),
    Credentials { client_id: String, client_secret: String },
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("commands start with '/', try /help")]
    NotACommand,
    #[error("unknown command '{0}', try /help")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

impl Command {
    pub fn parse(text: &str) -> Result<Self, CommandError> {
        let trimmed = text.trim();
        let (prefix, rest) = Self::extract_prefix(trimmed).ok_or(CommandError::NotACommand)?;
        let args: Vec<&str> = rest.split_whitespace().collect();

        match prefix.to_lowercase().as_str() {
            "/dash" | "/dashboard" => {
                // Summoner names may contain spaces
                let name = rest.trim();
                Ok(Command::Dashboard((!name.is_empty()).then(|| name.to_string())))
            }
            "/refresh" => Ok(Command::Refresh),
            "/spells" => Ok(Command::Spells),
            "/cast" => match args.as_slice() {
                [row, slot] => Ok(Command::Cast {
                    row: row.parse().map_err(|_| CommandError::Usage("/cast <row> <d|f>"))?,
                    slot: slot.parse().map_err(|_| CommandError::Usage("/cast <row> <d|f>"))?,
                }),
                _ => Err(CommandError::Usage("/cast <row> <d|f>")),
            },
            "/swap" => match args.as_slice() {
                [a, b] => match (a.parse(), b.parse()) {
                    (Ok(a), Ok(b)) => Ok(Command::Swap { a, b }),
                    _ => Err(CommandError::Usage("/swap <a> <b>")),
                },
                _ => Err(CommandError::Usage("/swap <a> <b>")),
            },
            "/cooldowns" | "/cd" => Ok(Command::Cooldowns),
            "/settings" => Ok(Command::Settings),
            "/toggle" => args
                .first()
                .and_then(|name| name.parse().ok())
                .map(Command::Toggle)
                .ok_or(CommandError::Usage("/toggle <autoStart|notifications>")),
            "/overlay" => match args.as_slice() {
                [name] => Ok(Command::Overlay(name.to_string())),
                _ => Err(CommandError::Usage("/overlay <name>")),
            },
            "/creds" => match args.as_slice() {
                [client_id, client_secret] => Ok(Command::Credentials {
                    client_id: client_id.to_string(),
                    client_secret: client_secret.to_string(),
                }),
                _ => Err(CommandError::Usage("/creds <clientId> <clientSecret>")),
            },
            "/help" => Ok(Command::Help),
            "/quit" | "/exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }

    /// Split "/name rest of line" into its two parts
    fn extract_prefix(text: &str) -> Option<(&str, &str)> {
        if !text.starts_with('/') {
            return None;
        }
        match text.find(char::is_whitespace) {
            Some(space_pos) => Some((&text[..space_pos], &text[space_pos..])),
            None => Some((text, "")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_with_and_without_name() {
        assert_eq!(Command::parse("/dash"), Ok(Command::Dashboard(None)));
        assert_eq!(
            Command::parse("  /dash Faker "),
            Ok(Command::Dashboard(Some("Faker".to_string())))
        );
        assert_eq!(
            Command::parse("/dash   Hide on bush  "),
            Ok(Command::Dashboard(Some("Hide on bush".to_string())))
        );
    }

    #[test]
    fn test_cast_and_swap() {
        assert_eq!(
            Command::parse("/cast 2 f"),
            Ok(Command::Cast { row: 2, slot: SpellSlot::Second })
        );
        assert_eq!(Command::parse("/swap 0 4"), Ok(Command::Swap { a: 0, b: 4 }));
        assert_eq!(
            Command::parse("/cast two d"),
            Err(CommandError::Usage("/cast <row> <d|f>"))
        );
        assert_eq!(Command::parse("/swap 1"), Err(CommandError::Usage("/swap <a> <b>")));
    }

    #[test]
    fn test_settings_commands() {
        assert_eq!(
            Command::parse("/toggle autoStart"),
            Ok(Command::Toggle(SettingToggle::AutoStart))
        );
        assert_eq!(
            Command::parse("/overlay minimap"),
            Ok(Command::Overlay("minimap".to_string()))
        );
        assert_eq!(
            Command::parse("/creds id secret"),
            Ok(Command::Credentials {
                client_id: "id".to_string(),
                client_secret: "secret".to_string(),
            })
        );
        assert!(Command::parse("/toggle darkMode").is_err());
    }

    #[test]
    fn test_not_a_command() {
        assert_eq!(Command::parse("hello"), Err(CommandError::NotACommand));
        assert_eq!(
            Command::parse("/dance"),
            Err(CommandError::Unknown("/dance".to_string()))
        );
        assert_eq!(Command::parse("/QUIT"), Ok(Command::Quit));
    }
}
